use std::collections::HashSet;

use tracing::{debug, info};

use crate::model::entity::{Days, Id, Score};
use crate::model::plan::Solution;

/// What a single library contributed during a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryOutcome {
    pub library: Id,
    /// Day on which the library finished signing up.
    pub ready_on: u64,
    /// Books inside the library's shipping window.
    pub shipped: usize,
    pub gained: Score,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationReport {
    pub total: Score,
    pub outcomes: Vec<LibraryOutcome>,
    /// Libraries whose signup would not finish before the deadline.
    pub skipped: usize,
}

/// Realized score of `solution` for a deadline of `days`.
pub fn simulate(solution: &Solution, days: Days) -> Score {
    simulate_report(solution, days).total
}

/// Walks the plan in signup order against the deadline.
///
/// Each library starts signing up once the previous one is done and then
/// ships the head of its book list, `books_shipped_per_day` books for every
/// remaining day. A book only scores the first time it is shipped. Once a
/// signup reaches the deadline, that library and all later ones are skipped.
pub fn simulate_report(solution: &Solution, days: Days) -> SimulationReport {
    let deadline = u64::from(days);
    let mut day = 0u64;
    let mut scanned: HashSet<Id> = HashSet::new();
    let mut report = SimulationReport::default();

    for (position, plan) in solution.plans().iter().enumerate() {
        day += u64::from(plan.library.signup_days);
        if day >= deadline {
            report.skipped = solution.len() - position;
            debug!(
                library = plan.library.id,
                day,
                skipped = report.skipped,
                "signup misses the deadline"
            );
            break;
        }

        let capacity = u64::from(plan.library.books_shipped_per_day) * (deadline - day);
        let shipped = usize::try_from(capacity)
            .unwrap_or(usize::MAX)
            .min(plan.ordered_books.len());
        let window = &plan.ordered_books[..shipped];

        let gained: Score = window
            .iter()
            .filter(|book| !scanned.contains(&book.id))
            .map(|book| Score::from(book.score))
            .sum();
        scanned.extend(window.iter().map(|book| book.id));

        debug!(library = plan.library.id, ready_on = day, shipped, gained, "library shipped");
        report.total += gained;
        report.outcomes.push(LibraryOutcome {
            library: plan.library.id,
            ready_on: day,
            shipped,
            gained,
        });
    }

    info!(total = report.total, scanned = scanned.len(), "simulation complete");
    report
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::{Book, Library};
    use crate::model::plan::OrderedLibraryPlan;

    fn plan(id: Id, signup_days: u32, per_day: u32, books: &[(Id, u32)]) -> OrderedLibraryPlan {
        let books = books.iter().map(|&(id, score)| Book { id, score });
        OrderedLibraryPlan::new(&Library::new(id, signup_days, per_day, books).unwrap())
    }

    #[test]
    fn test_empty_solution_scores_zero() {
        assert_eq!(simulate(&Solution::default(), 10), 0);
    }

    #[test]
    fn test_single_library_within_deadline() {
        let solution = Solution::new(vec![plan(0, 1, 2, &[(0, 10), (1, 5)])]);
        assert_eq!(simulate(&solution, 3), 15);
    }

    #[test]
    fn test_signup_reaching_deadline_scores_nothing() {
        let solution = Solution::new(vec![plan(0, 5, 2, &[(0, 10), (1, 5)])]);
        assert_eq!(simulate(&solution, 3), 0);
        let exact = Solution::new(vec![plan(0, 3, 2, &[(0, 10), (1, 5)])]);
        assert_eq!(simulate(&exact, 3), 0);
    }

    #[test]
    fn test_capacity_truncates_to_best_books() {
        // One day left at one book per day: only the top book ships.
        let solution = Solution::new(vec![plan(0, 2, 1, &[(0, 1), (1, 7), (2, 4)])]);
        let report = simulate_report(&solution, 3);
        assert_eq!(report.total, 7);
        assert_eq!(report.outcomes[0].shipped, 1);
        assert_eq!(report.outcomes[0].ready_on, 2);
    }

    #[test]
    fn test_signup_days_accumulate() {
        let solution = Solution::new(vec![
            plan(0, 2, 1, &[(0, 3)]),
            plan(1, 2, 1, &[(1, 4)]),
            plan(2, 2, 1, &[(2, 5)]),
        ]);
        let report = simulate_report(&solution, 5);
        assert_eq!(report.total, 7);
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[1].ready_on, 4);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_shared_books_count_once() {
        let solution = Solution::new(vec![
            plan(0, 0, 5, &[(0, 1), (1, 1)]),
            plan(1, 0, 5, &[(1, 1), (2, 1)]),
        ]);
        let report = simulate_report(&solution, 10);
        assert_eq!(report.total, 3);
        assert_eq!(report.outcomes[1].gained, 1);
    }

    #[test]
    fn test_books_outside_window_stay_unscanned() {
        // Library 0 only ships book 1 before the deadline, so book 0 still
        // scores when library 1 ships it.
        let solution = Solution::new(vec![
            plan(0, 1, 1, &[(0, 2), (1, 9)]),
            plan(1, 0, 1, &[(0, 2)]),
        ]);
        assert_eq!(simulate(&solution, 2), 11);
    }

    #[test]
    fn test_simulation_leaves_solution_untouched() {
        let solution = Solution::new(vec![plan(0, 1, 1, &[(0, 2), (1, 9)])]);
        let before = solution.clone();
        simulate(&solution, 4);
        assert_eq!(solution, before);
    }
}
