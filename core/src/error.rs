//! Errors reported by the schema and comparison operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::array::ArrayError;
use crate::config::ConfigError;

/// Which input of a two-array operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CompareError {
    #[error("improper {side} array: {source}")]
    Array {
        side: Side,
        #[source]
        source: ArrayError,
    },
    #[error("improper array: {0}")]
    Improper(#[from] ArrayError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CompareError {
    pub fn code(&self) -> &'static str {
        match self {
            CompareError::Array { source, .. } => source.code(),
            CompareError::Improper(err) => err.code(),
            CompareError::Config(err) => err.code(),
        }
    }

    pub(crate) fn array(side: Side) -> impl FnOnce(ArrayError) -> CompareError {
        move |source| CompareError::Array { side, source }
    }
}
