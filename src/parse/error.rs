use crate::prelude::*;

/// Reasons the token stream of a plot3d file could not be decoded
#[derive(Debug, thiserror::Error, From, PartialEq)]
pub enum FormatError {
    #[error("badly formatted plot3d file")]
    #[from(ignore)]
    BadlyFormatted,
    #[error("{0}")]
    InvalidHeaderToken(InvalidHeaderToken),
    #[error("{0}")]
    InvalidCoordinate(InvalidCoordinate),
    #[error("{0}")]
    MissingCoordinate(MissingCoordinate),
}

#[derive(From, Display, Debug, Constructor, PartialEq)]
#[display(fmt = "header token {index} (`{token}`) is not a non-negative integer")]
pub struct InvalidHeaderToken {
    pub index: usize,
    pub token: String,
}

#[derive(From, Display, Debug, Constructor, PartialEq)]
#[display(fmt = "coordinate token {index} (`{token}`) is not a floating point number")]
pub struct InvalidCoordinate {
    pub index: usize,
    pub token: String,
}

#[derive(From, Display, Debug, Constructor, PartialEq)]
#[display(
    fmt = "coordinate token {index} is missing: the file only has {available} tokens"
)]
pub struct MissingCoordinate {
    pub index: usize,
    pub available: usize,
}
