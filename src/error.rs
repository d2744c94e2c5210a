use thiserror::Error;

use crate::model::entity::Id;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("library {library} has no books")]
    EmptyLibrary { library: Id },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    MissingToken { expected: &'static str },
    #[error("invalid token {token:?}, expected {expected}")]
    InvalidToken { token: String, expected: &'static str },
    #[error("library {library} references unknown book {book}")]
    UnknownBook { library: Id, book: Id },
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlanError {
    #[error("cannot select a library from an empty pool")]
    EmptyPool,
}
