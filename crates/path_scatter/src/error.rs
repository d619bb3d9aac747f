//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid scene or layout configuration, out-of-range seeds, expression failures, and
//! generic errors.
use thiserror::Error;

use crate::expr::ExprError;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("seed {0} is outside [0, {max}]", max = crate::rng::MAX_SEED)]
    InvalidSeed(u32),

    #[error(transparent)]
    Expression(#[from] ExprError),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
