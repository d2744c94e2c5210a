use std::collections::HashSet;

use clap::ValueEnum;
use itertools::Itertools;
use tracing::{debug, info};

use crate::cache::{value_estimate, EstimateCache};
use crate::error::PlanError;
use crate::model::entity::{Days, Id, Library};
use crate::model::plan::{OrderedLibraryPlan, Solution};

pub trait Planner {
    /// Orders every library exactly once.
    fn plan(&self, libraries: &[Library], days: Days) -> Result<Solution, PlanError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    #[default]
    Greedy,
    Naive,
}

impl Strategy {
    pub fn plan(self, libraries: &[Library], days: Days) -> Result<Solution, PlanError> {
        match self {
            Strategy::Greedy => GreedyPlanner.plan(libraries, days),
            Strategy::Naive => NaivePlanner.plan(libraries, days),
        }
    }
}

/// Repeatedly signs up the library with the highest value estimate and
/// rescores the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlanner;

struct State<'a> {
    pool: Vec<&'a Library>,
    committed: HashSet<Id>,
    estimates: EstimateCache,
    plans: Vec<OrderedLibraryPlan>,
}

impl<'a> State<'a> {
    fn init(libraries: &'a [Library]) -> State<'a> {
        let committed = HashSet::new();
        let estimates = EstimateCache::create(libraries, &committed);
        State {
            pool: libraries.iter().collect(),
            committed,
            estimates,
            plans: Vec::with_capacity(libraries.len()),
        }
    }

    /// Highest estimate wins, lower id first among equal estimates.
    fn select_best(&self) -> Result<usize, PlanError> {
        self.pool
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                self.estimates
                    .get(a.id)
                    .total_cmp(&self.estimates.get(b.id))
                    .then(b.id.cmp(&a.id))
            })
            .map(|(index, _)| index)
            .ok_or(PlanError::EmptyPool)
    }

    fn commit(&mut self, index: usize) {
        let library = self.pool.swap_remove(index);
        debug!(
            library = library.id,
            estimate = self.estimates.get(library.id),
            remaining = self.pool.len(),
            "committing library"
        );
        // Releases the library's own books from the committed set.
        for book in library.books() {
            self.committed.remove(&book.id);
        }
        self.estimates.remove(library.id);
        self.plans.push(OrderedLibraryPlan::new(library));
        self.estimates.update(self.pool.iter().copied(), &self.committed);
    }
}

impl Planner for GreedyPlanner {
    fn plan(&self, libraries: &[Library], _days: Days) -> Result<Solution, PlanError> {
        let mut state = State::init(libraries);
        while !state.pool.is_empty() {
            let index = state.select_best()?;
            state.commit(index);
        }
        info!(libraries = state.plans.len(), "greedy plan complete");
        Ok(Solution::new(state.plans))
    }
}

/// Sorts libraries once by ascending value estimate, with no rescoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaivePlanner;

impl Planner for NaivePlanner {
    fn plan(&self, libraries: &[Library], _days: Days) -> Result<Solution, PlanError> {
        let committed = HashSet::new();
        let plans = libraries
            .iter()
            .map(|library| (value_estimate(library, &committed), library))
            .sorted_by(|(ea, a), (eb, b)| ea.total_cmp(eb).then(a.id.cmp(&b.id)))
            .map(|(_, library)| OrderedLibraryPlan::new(library))
            .collect_vec();
        info!(libraries = plans.len(), "naive plan complete");
        Ok(Solution::new(plans))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Book;

    fn library(id: Id, signup_days: u32, per_day: u32, books: &[(Id, u32)]) -> Library {
        let books = books.iter().map(|&(id, score)| Book { id, score });
        Library::new(id, signup_days, per_day, books).unwrap()
    }

    #[test]
    fn test_select_best_on_empty_pool_fails() {
        let state = State::init(&[]);
        assert_eq!(state.select_best(), Err(PlanError::EmptyPool));
    }

    #[test]
    fn test_greedy_on_no_libraries_is_empty() {
        let solution = GreedyPlanner.plan(&[], 10).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_greedy_picks_highest_estimate_first() {
        let libraries = vec![
            library(0, 0, 1, &[(0, 1)]),
            library(1, 0, 1, &[(1, 9)]),
            library(2, 0, 1, &[(2, 5)]),
        ];
        let solution = GreedyPlanner.plan(&libraries, 10).unwrap();
        assert_eq!(solution.library_ids(), vec![1, 2, 0]);
    }

    #[test]
    fn test_greedy_breaks_ties_by_lowest_id() {
        let libraries = vec![
            library(2, 0, 1, &[(0, 4)]),
            library(0, 0, 1, &[(1, 4)]),
            library(1, 0, 1, &[(2, 4)]),
        ];
        let solution = GreedyPlanner.plan(&libraries, 10).unwrap();
        assert_eq!(solution.library_ids(), vec![0, 1, 2]);
    }

    #[test]
    fn test_greedy_keeps_shared_books_in_later_estimates() {
        // Committing library 0 releases its books instead of retiring them,
        // so library 1 keeps the full value of the shared book and still
        // outranks library 2.
        let libraries = vec![
            library(0, 0, 1, &[(0, 100)]),
            library(1, 0, 1, &[(0, 100)]),
            library(2, 0, 1, &[(1, 50)]),
        ];
        let solution = GreedyPlanner.plan(&libraries, 10).unwrap();
        assert_eq!(solution.library_ids(), vec![0, 1, 2]);
    }

    #[test]
    fn test_greedy_ignores_deadline() {
        let libraries = vec![library(0, 50, 1, &[(0, 3)]), library(1, 0, 1, &[(1, 2)])];
        let short = GreedyPlanner.plan(&libraries, 1).unwrap();
        let long = GreedyPlanner.plan(&libraries, 1000).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_naive_sorts_by_ascending_estimate() {
        let libraries = vec![
            library(0, 0, 1, &[(0, 9)]),
            library(1, 0, 1, &[(1, 1)]),
            library(2, 3, 1, &[(2, 5)]),
        ];
        let solution = NaivePlanner.plan(&libraries, 10).unwrap();
        // Estimates: 9, 1, 5 * (1 - 3) = -10.
        assert_eq!(solution.library_ids(), vec![2, 1, 0]);
    }

    #[test]
    fn test_naive_handles_single_book_library() {
        let libraries = vec![library(0, 1, 1, &[(0, 1)])];
        let solution = NaivePlanner.plan(&libraries, 1).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.plans()[0].ordered_books, vec![Book { id: 0, score: 1 }]);
    }

    #[test]
    fn test_strategy_dispatches_to_planner() {
        let libraries = vec![library(0, 0, 1, &[(0, 9)]), library(1, 0, 1, &[(1, 1)])];
        assert_eq!(Strategy::Greedy.plan(&libraries, 5).unwrap().library_ids(), vec![0, 1]);
        assert_eq!(Strategy::Naive.plan(&libraries, 5).unwrap().library_ids(), vec![1, 0]);
    }
}
