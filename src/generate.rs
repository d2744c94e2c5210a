use itertools::Itertools;
use rand::prelude::SliceRandom;
use rand::Rng;

use crate::error::ModelError;
use crate::model::catalog::Catalog;
use crate::model::entity::{Days, Id, Library, Points};
use crate::model::problem::Problem;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    pub books: Id,
    pub libraries: Id,
    pub days: Days,
    pub max_score: Points,
    pub max_signup: Days,
    pub max_ship_per_day: u32,
    pub max_books_per_library: usize,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParams {
            books: 100,
            libraries: 10,
            days: 30,
            max_score: 100,
            max_signup: 10,
            max_ship_per_day: 5,
            max_books_per_library: 20,
        }
    }
}

/// Draws a random instance. Every library gets at least one distinct book,
/// so generation only fails when libraries are requested without books.
pub fn random_problem<R: Rng + ?Sized>(
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Problem, ModelError> {
    let catalog = Catalog::from_scores((0..params.books).map(|_| rng.gen_range(0..=params.max_score)));
    let ids = (0..params.books).collect_vec();
    let max_books = params.max_books_per_library.min(ids.len()).max(1);

    let libraries = (0..params.libraries)
        .map(|id| {
            let count = rng.gen_range(1..=max_books);
            let signup_days = rng.gen_range(0..=params.max_signup);
            let per_day = rng.gen_range(1..=params.max_ship_per_day.max(1));
            let books = ids
                .choose_multiple(rng, count)
                .filter_map(|&book| catalog.get(book))
                .collect_vec();
            Library::new(id, signup_days, per_day, books)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Problem { days: params.days, catalog, libraries })
}
