use std::io::Read;
use std::str::{FromStr, SplitAsciiWhitespace};

use crate::error::ParseError;
use crate::model::catalog::Catalog;
use crate::model::entity::{Days, Id, Library, Points};
use crate::model::problem::Problem;

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Tokens<'a> {
        Tokens { inner: input.split_ascii_whitespace() }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self.inner.next().ok_or(ParseError::MissingToken { expected })?;
        token.parse().map_err(|_| ParseError::InvalidToken {
            token: token.to_string(),
            expected,
        })
    }
}

/// Parses a problem from whitespace separated tokens.
///
/// Layout: book count, library count and deadline; one score per book;
/// then per library its book count, signup days, books shipped per day and
/// that many book ids. Books and libraries are numbered by position.
pub fn parse_problem(input: &str) -> Result<Problem, ParseError> {
    let mut tokens = Tokens::new(input);
    let book_count: Id = tokens.next("book count")?;
    let library_count: Id = tokens.next("library count")?;
    let days: Days = tokens.next("deadline")?;

    let scores = (0..book_count)
        .map(|_| tokens.next::<Points>("book score"))
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = Catalog::from_scores(scores);

    let libraries = (0..library_count)
        .map(|id| parse_library(&mut tokens, &catalog, id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Problem { days, catalog, libraries })
}

fn parse_library(tokens: &mut Tokens, catalog: &Catalog, id: Id) -> Result<Library, ParseError> {
    let book_count: usize = tokens.next("library book count")?;
    let signup_days: Days = tokens.next("signup days")?;
    let books_shipped_per_day: u32 = tokens.next("books shipped per day")?;
    let books = (0..book_count)
        .map(|_| {
            let book: Id = tokens.next("book id")?;
            catalog.get(book).ok_or(ParseError::UnknownBook { library: id, book })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Library::new(id, signup_days, books_shipped_per_day, books)?)
}

pub fn read_problem<R: Read>(mut reader: R) -> Result<Problem, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_problem(&input)
}
