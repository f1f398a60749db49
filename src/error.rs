use std::result;
use thiserror::Error;

/// Errors surfaced by `BiMap` lookups and checked insertions.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("there is no such key in the bimap")]
    MissingKey,
    #[error("the left key is already mapped")]
    DuplicateLeft,
    #[error("the right key is already mapped")]
    DuplicateRight,
}

pub type Result<T> = result::Result<T, Error>;
