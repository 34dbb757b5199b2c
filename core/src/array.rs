//! Well-formedness checks and row selection for tabular arrays.
//!
//! An array is a `[Vec<C>]` whose first row is the header. It is well formed
//! when it is non-empty, its header names are pairwise distinct and every row
//! is exactly as long as the header.

use rustc_hash::{FxHashSet, FxHashMap};
use thiserror::Error;

use crate::cell::Cell;
use crate::error_codes;
use crate::hashing::cell_key;

/// Structural problems that make an array unusable ("improper array").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("[{}] empty array", error_codes::ARRAY_EMPTY)]
    Empty,
    #[error("[{}] duplicate column: {name}", error_codes::ARRAY_DUPLICATE_COLUMN)]
    DuplicateColumn { name: String },
    #[error(
        "[{}] row {row} has {len} columns, expected {expected}",
        error_codes::ARRAY_ROW_LENGTH
    )]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl ArrayError {
    pub fn code(&self) -> &'static str {
        match self {
            ArrayError::Empty => error_codes::ARRAY_EMPTY,
            ArrayError::DuplicateColumn { .. } => error_codes::ARRAY_DUPLICATE_COLUMN,
            ArrayError::RowLength { .. } => error_codes::ARRAY_ROW_LENGTH,
        }
    }
}

/// Returns `Ok(())` iff the array is non-empty, has no duplicate header names
/// and every row has as many cells as the header.
pub fn check_array<C: Cell>(array: &[Vec<C>]) -> Result<(), ArrayError> {
    let header = array.first().ok_or(ArrayError::Empty)?;

    let mut seen: FxHashSet<u64> = FxHashSet::default();
    for column in header {
        if !seen.insert(cell_key(column)) {
            return Err(ArrayError::DuplicateColumn {
                name: column.canonical_str().into_owned(),
            });
        }
    }

    let expected = header.len();
    for (row, cells) in array.iter().enumerate() {
        if cells.len() != expected {
            return Err(ArrayError::RowLength {
                row,
                len: cells.len(),
                expected,
            });
        }
    }

    Ok(())
}

/// Returns the rows whose index appears in `indices`, in array order.
///
/// Repeated indices select a row once; indices past the end are ignored.
pub fn keep_rows<C: Cell + Clone>(
    array: &[Vec<C>],
    indices: &[usize],
) -> Result<Vec<Vec<C>>, ArrayError> {
    check_array(array)?;
    Ok(select_rows(array, indices))
}

/// Returns every row whose index does not appear in `indices`, in array order.
pub fn ignore_rows<C: Cell + Clone>(
    array: &[Vec<C>],
    indices: &[usize],
) -> Result<Vec<Vec<C>>, ArrayError> {
    check_array(array)?;

    let ignored: FxHashSet<usize> = indices.iter().copied().collect();
    Ok(array
        .iter()
        .enumerate()
        .filter(|(idx, _)| !ignored.contains(idx))
        .map(|(_, row)| row.clone())
        .collect())
}

pub(crate) fn select_rows<C: Clone>(array: &[Vec<C>], indices: &[usize]) -> Vec<Vec<C>> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .into_iter()
        .filter_map(|idx| array.get(idx).cloned())
        .collect()
}

/// Maps each header name's cell key to its column position.
pub(crate) fn header_positions<C: Cell>(header: &[C]) -> FxHashMap<u64, usize> {
    header
        .iter()
        .enumerate()
        .map(|(idx, column)| (cell_key(column), idx))
        .collect()
}
