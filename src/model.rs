pub mod entity {
    use itertools::Itertools;

    use crate::error::ModelError;

    pub type Id = u32;
    pub type Points = u32;
    pub type Score = u64;
    pub type Days = u32;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Book {
        pub id: Id,
        pub score: Points,
    }

    /// A library with its static signup parameters.
    ///
    /// The book set is unique by id and never empty.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Library {
        pub id: Id,
        pub signup_days: Days,
        pub books_shipped_per_day: u32,
        books: Vec<Book>,
    }

    impl Library {
        pub fn new(
            id: Id,
            signup_days: Days,
            books_shipped_per_day: u32,
            books: impl IntoIterator<Item = Book>,
        ) -> Result<Library, ModelError> {
            let books = books.into_iter().unique_by(|book| book.id).collect_vec();
            if books.is_empty() {
                return Err(ModelError::EmptyLibrary { library: id });
            }
            Ok(Library { id, signup_days, books_shipped_per_day, books })
        }

        pub fn books(&self) -> &[Book] {
            &self.books
        }

        /// Books by score descending, lower id first among equal scores.
        pub fn books_by_score(&self) -> Vec<Book> {
            self.books
                .iter()
                .copied()
                .sorted_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)))
                .collect()
        }
    }
}


pub mod catalog {
    use super::entity::{Book, Id, Points};

    /// Books indexed by id.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Catalog {
        books: Vec<Book>,
    }

    impl Catalog {
        pub fn from_scores(scores: impl IntoIterator<Item = Points>) -> Catalog {
            let books = scores
                .into_iter()
                .zip(0..)
                .map(|(score, id)| Book { id, score })
                .collect();
            Catalog { books }
        }

        pub fn get(&self, id: Id) -> Option<Book> {
            self.books.get(id as usize).copied()
        }

        pub fn len(&self) -> usize {
            self.books.len()
        }

        pub fn is_empty(&self) -> bool {
            self.books.is_empty()
        }

        pub fn iter(&self) -> impl Iterator<Item = &Book> {
            self.books.iter()
        }
    }
}


pub mod problem {
    use std::fmt;

    use itertools::Itertools;

    use super::catalog::Catalog;
    use super::entity::{Days, Library};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Problem {
        pub days: Days,
        pub catalog: Catalog,
        pub libraries: Vec<Library>,
    }

    /// Writes the problem back in the input token format.
    impl fmt::Display for Problem {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{} {} {}", self.catalog.len(), self.libraries.len(), self.days)?;
            writeln!(f, "{}", self.catalog.iter().map(|book| book.score).join(" "))?;
            for library in &self.libraries {
                writeln!(
                    f,
                    "{} {} {}",
                    library.books().len(),
                    library.signup_days,
                    library.books_shipped_per_day
                )?;
                writeln!(f, "{}", library.books().iter().map(|book| book.id).join(" "))?;
            }
            Ok(())
        }
    }
}


pub mod plan {
    use std::fmt;

    use itertools::Itertools;

    use super::entity::{Book, Id, Library};

    #[derive(Debug, Clone, PartialEq)]
    pub struct OrderedLibraryPlan {
        pub library: Library,
        pub ordered_books: Vec<Book>,
    }

    impl OrderedLibraryPlan {
        pub fn new(library: &Library) -> OrderedLibraryPlan {
            OrderedLibraryPlan {
                ordered_books: library.books_by_score(),
                library: library.clone(),
            }
        }
    }

    /// Plans in signup order.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Solution {
        plans: Vec<OrderedLibraryPlan>,
    }

    impl Solution {
        pub fn new(plans: Vec<OrderedLibraryPlan>) -> Solution {
            Solution { plans }
        }

        pub fn plans(&self) -> &[OrderedLibraryPlan] {
            &self.plans
        }

        pub fn len(&self) -> usize {
            self.plans.len()
        }

        pub fn is_empty(&self) -> bool {
            self.plans.is_empty()
        }

        pub fn library_ids(&self) -> Vec<Id> {
            self.plans.iter().map(|plan| plan.library.id).collect()
        }

        pub fn human_readable(&self) -> HumanReadable<'_> {
            HumanReadable(self)
        }
    }

    /// Submission format: library count, then per library its id and
    /// book count followed by the book ids in shipping order.
    impl fmt::Display for Solution {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{}", self.plans.len())?;
            for plan in &self.plans {
                writeln!(f, "{} {}", plan.library.id, plan.ordered_books.len())?;
                writeln!(f, "{}", plan.ordered_books.iter().map(|book| book.id).join(" "))?;
            }
            Ok(())
        }
    }

    pub struct HumanReadable<'a>(&'a Solution);

    impl fmt::Display for HumanReadable<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{} libraries", self.0.plans.len())?;
            for plan in &self.0.plans {
                writeln!(f, "Library {} orders the following books:", plan.library.id)?;
                writeln!(f, "{}", plan.ordered_books.iter().map(|book| book.id).join(", "))?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}
