//! Configuration for comparisons and formatting.
//!
//! `CompareOptions` carries the matching semantics and the column filters
//! that decide which columns participate in row identity. `FormatOptions`
//! drives the pretty printer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compare::Method;
use crate::error_codes;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    pub method: Method,
    pub use_columns: Option<Vec<String>>,
    pub ignore_columns: Option<Vec<String>>,
    pub sort_indices: bool,
}

impl CompareOptions {
    pub fn builder() -> CompareOptionsBuilder {
        CompareOptionsBuilder {
            inner: CompareOptions::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.use_columns.is_some() && self.ignore_columns.is_some() {
            return Err(ConfigError::ConflictingColumnFilters);
        }

        if matches!(&self.use_columns, Some(columns) if columns.is_empty()) {
            return Err(ConfigError::NoColumnsToCompare);
        }

        Ok(())
    }
}

/// Configuration errors: bad options or column lists that do not fit the
/// arrays they are applied to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "[{}] unsupported method: {value} (expected direct, set or match)",
        error_codes::CONFIG_UNKNOWN_METHOD
    )]
    UnknownMethod { value: String },
    #[error(
        "[{}] cannot use both use_columns and ignore_columns together",
        error_codes::CONFIG_CONFLICTING_FILTERS
    )]
    ConflictingColumnFilters,
    #[error("[{}] no columns to compare", error_codes::CONFIG_NO_COLUMNS)]
    NoColumnsToCompare,
    #[error("[{}] column {name} not found", error_codes::CONFIG_COLUMN_NOT_FOUND)]
    ColumnNotFound { name: String },
    #[error(
        "[{}] compared columns differ between the arrays; check the columns being compared",
        error_codes::CONFIG_COLUMNS_MISMATCH
    )]
    ColumnsMismatch,
    #[error(
        "[{}] column {name} appears more than once in the target order",
        error_codes::CONFIG_DUPLICATE_TARGET
    )]
    DuplicateTargetColumn { name: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::UnknownMethod { .. } => error_codes::CONFIG_UNKNOWN_METHOD,
            ConfigError::ConflictingColumnFilters => error_codes::CONFIG_CONFLICTING_FILTERS,
            ConfigError::NoColumnsToCompare => error_codes::CONFIG_NO_COLUMNS,
            ConfigError::ColumnNotFound { .. } => error_codes::CONFIG_COLUMN_NOT_FOUND,
            ConfigError::ColumnsMismatch => error_codes::CONFIG_COLUMNS_MISMATCH,
            ConfigError::DuplicateTargetColumn { .. } => error_codes::CONFIG_DUPLICATE_TARGET,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompareOptionsBuilder {
    inner: CompareOptions,
}

impl Default for CompareOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareOptionsBuilder {
    pub fn new() -> Self {
        CompareOptions::builder()
    }

    pub fn method(mut self, value: Method) -> Self {
        self.inner.method = value;
        self
    }

    pub fn use_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.use_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn ignore_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.ignore_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort_indices(mut self, value: bool) -> Self {
        self.inner.sort_indices = value;
        self
    }

    pub fn build(self) -> Result<CompareOptions, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Minimum gap between columns in pretty output.
    pub spaces: usize,
    /// Cells longer than this are cut and suffixed with the truncation mark.
    pub max_col_length: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            spaces: 2,
            max_col_length: None,
        }
    }
}
