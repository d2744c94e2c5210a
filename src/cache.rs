use std::collections::{HashMap, HashSet};

use crate::model::entity::{Id, Library, Score};

pub type Estimate = f64;

/// Summed score of the library's books that are not in `committed`.
pub fn raw_value(library: &Library, committed: &HashSet<Id>) -> Score {
    library
        .books()
        .iter()
        .filter(|book| !committed.contains(&book.id))
        .map(|book| Score::from(book.score))
        .sum()
}

/// Heuristic priority of a library.
///
/// The raw value is scaled by `1 - signup_days * books_shipped_per_day / |books|`.
/// The factor turns negative once `signup_days * books_shipped_per_day`
/// exceeds the number of books.
pub fn value_estimate(library: &Library, committed: &HashSet<Id>) -> Estimate {
    let penalty = f64::from(library.signup_days) * f64::from(library.books_shipped_per_day)
        / library.books().len() as f64;
    raw_value(library, committed) as f64 * (1.0 - penalty)
}

/// Value estimates keyed by library id, owned by a single planner run.
#[derive(Debug, Clone, Default)]
pub struct EstimateCache {
    estimates: HashMap<Id, Estimate>,
}

impl EstimateCache {
    pub fn create<'a>(
        libraries: impl IntoIterator<Item = &'a Library>,
        committed: &HashSet<Id>,
    ) -> EstimateCache {
        let mut cache = EstimateCache::default();
        cache.update(libraries, committed);
        cache
    }

    pub fn update<'a>(
        &mut self,
        libraries: impl IntoIterator<Item = &'a Library>,
        committed: &HashSet<Id>,
    ) {
        for library in libraries {
            self.estimates.insert(library.id, value_estimate(library, committed));
        }
    }

    /// Unknown libraries rank below every cached one.
    pub fn get(&self, id: Id) -> Estimate {
        self.estimates.get(&id).copied().unwrap_or(f64::NEG_INFINITY)
    }

    pub fn remove(&mut self, id: Id) -> Option<Estimate> {
        self.estimates.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}
