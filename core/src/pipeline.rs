//! End-to-end row comparison of two arrays.
//!
//! Row identity is decided on a projection of the columns (all of them, the
//! `use_columns` subset, or everything but `ignore_columns`), while the rows
//! handed back carry every original column. The header row takes no part in
//! the comparison and is always reported at index 0 on both sides.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::array::{check_array, select_rows};
use crate::cell::Cell;
use crate::compare::{query_indices, IndexPair, Query};
use crate::config::{CompareOptions, ConfigError};
use crate::error::{CompareError, Side};
use crate::hashing::{row_key, rows_are_permutations, RowKey};
use crate::schema::{rearrangement, remaining_positions, used_positions};

/// Rows selected from both arrays together with their original positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult<C> {
    pub left: Vec<Vec<C>>,
    pub right: Vec<Vec<C>>,
    pub left_indices: Vec<usize>,
    pub right_indices: Vec<usize>,
}

impl<C> ComparisonResult<C> {
    /// Number of data rows (header excluded) selected on each side.
    pub fn data_row_counts(&self) -> (usize, usize) {
        (
            self.left_indices.len().saturating_sub(1),
            self.right_indices.len().saturating_sub(1),
        )
    }

    pub fn has_data_rows(&self) -> bool {
        self.left_indices.len() > 1 || self.right_indices.len() > 1
    }
}

/// Rows the two arrays have in common under `options`.
pub fn common_rows<C: Cell + Clone>(
    left: &[Vec<C>],
    right: &[Vec<C>],
    options: &CompareOptions,
) -> Result<ComparisonResult<C>, CompareError> {
    compare_rows(Query::Common, left, right, options)
}

/// Rows that differ between the two arrays under `options`.
pub fn different_rows<C: Cell + Clone>(
    left: &[Vec<C>],
    right: &[Vec<C>],
    options: &CompareOptions,
) -> Result<ComparisonResult<C>, CompareError> {
    compare_rows(Query::Different, left, right, options)
}

pub fn compare_rows<C: Cell + Clone>(
    query: Query,
    left: &[Vec<C>],
    right: &[Vec<C>],
    options: &CompareOptions,
) -> Result<ComparisonResult<C>, CompareError> {
    check_array(left).map_err(CompareError::array(Side::Left))?;
    check_array(right).map_err(CompareError::array(Side::Right))?;
    options.validate()?;

    let (left_columns, right_columns) = comparison_columns(&left[0], &right[0], options)?;
    debug!(
        ?query,
        method = %options.method,
        left_rows = left.len(),
        right_rows = right.len(),
        columns = left_columns.len(),
        "comparing arrays"
    );

    let left_keys = data_row_keys(left, &left_columns);
    let right_keys = data_row_keys(right, &right_columns);

    let IndexPair {
        left: left_below,
        right: right_below,
    } = query_indices(
        query,
        options.method,
        &left_keys,
        &right_keys,
        options.sort_indices,
    );
    let left_indices = with_header(left_below);
    let right_indices = with_header(right_below);

    let result = ComparisonResult {
        left: select_rows(left, &left_indices),
        right: select_rows(right, &right_indices),
        left_indices,
        right_indices,
    };

    debug!(
        left_selected = result.left_indices.len(),
        right_selected = result.right_indices.len(),
        "comparison finished"
    );
    Ok(result)
}

/// Column positions used for row identity on each side, with the right
/// positions ordered to line up with the left ones.
fn comparison_columns<C: Cell>(
    left_header: &[C],
    right_header: &[C],
    options: &CompareOptions,
) -> Result<(Vec<usize>, Vec<usize>), ConfigError> {
    let (left_columns, right_columns) = match (&options.use_columns, &options.ignore_columns) {
        (Some(names), _) => (
            used_positions(left_header, names)?,
            used_positions(right_header, names)?,
        ),
        (None, Some(names)) => (
            remaining_positions(left_header, names),
            remaining_positions(right_header, names),
        ),
        (None, None) => ((0..left_header.len()).collect(), (0..right_header.len()).collect()),
    };

    if left_columns.is_empty() || right_columns.is_empty() {
        return Err(ConfigError::NoColumnsToCompare);
    }

    let left_names: Vec<&C> = left_columns.iter().map(|&idx| &left_header[idx]).collect();
    let right_names: Vec<&C> = right_columns.iter().map(|&idx| &right_header[idx]).collect();
    if !rows_are_permutations(&left_names, &right_names) {
        return Err(ConfigError::ColumnsMismatch);
    }

    let order = rearrangement(&right_names, &left_names)?;
    let right_columns = order.into_iter().map(|pos| right_columns[pos]).collect();

    Ok((left_columns, right_columns))
}

fn data_row_keys<C: Cell>(array: &[Vec<C>], columns: &[usize]) -> Vec<RowKey> {
    array[1..]
        .iter()
        .map(|row| row_key(columns.iter().map(|&idx| &row[idx])))
        .collect()
}

/// Shifts data-row positions past the header and prepends the header itself.
fn with_header(below: Vec<usize>) -> Vec<usize> {
    std::iter::once(0)
        .chain(below.into_iter().map(|idx| idx + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{text_array, TextCell};
    use crate::compare::Method;

    fn left() -> Vec<Vec<TextCell>> {
        text_array(&[
            vec!["id", "name", "score"],
            vec!["1", "ann", "10"],
            vec!["2", "bob", "20"],
            vec!["3", "cid", "30"],
        ])
    }

    fn right() -> Vec<Vec<TextCell>> {
        text_array(&[
            vec!["score", "id", "name"],
            vec!["20", "2", "bob"],
            vec!["99", "1", "ann"],
            vec!["40", "4", "dan"],
        ])
    }

    #[test]
    fn columns_are_aligned_by_name_before_hashing() {
        let options = CompareOptions {
            sort_indices: true,
            ..Default::default()
        };
        let result = common_rows(&left(), &right(), &options).expect("comparable arrays");
        assert_eq!(result.left_indices, vec![0, 2]);
        assert_eq!(result.right_indices, vec![0, 1]);
        assert_eq!(result.right[1], text_array(&[vec!["20", "2", "bob"]])[0]);
    }

    #[test]
    fn ignored_columns_do_not_decide_identity() {
        let options = CompareOptions::builder()
            .ignore_columns(["score"])
            .sort_indices(true)
            .build()
            .expect("valid options");
        let result = common_rows(&left(), &right(), &options).expect("comparable arrays");
        assert_eq!(result.left_indices, vec![0, 1, 2]);
        assert_eq!(result.right_indices, vec![0, 1, 2]);
        assert_eq!(result.left[1].len(), 3, "rows keep every column");
    }

    #[test]
    fn header_is_reported_even_without_matches() {
        let options = CompareOptions::builder()
            .method(Method::Direct)
            .build()
            .expect("valid options");
        let result = common_rows(&left(), &right(), &options).expect("comparable arrays");
        assert_eq!(result.left_indices, vec![0]);
        assert_eq!(result.right_indices, vec![0]);
        assert!(!result.has_data_rows());
        assert_eq!(result.data_row_counts(), (0, 0));
    }

    #[test]
    fn mismatched_headers_fail() {
        let other = text_array(&[vec!["id", "name"], vec!["1", "ann"]]);
        let err = different_rows(&left(), &other, &CompareOptions::default()).unwrap_err();
        assert_eq!(err, CompareError::Config(ConfigError::ColumnsMismatch));
    }

    #[test]
    fn ignoring_everything_leaves_nothing_to_compare() {
        let options = CompareOptions::builder()
            .ignore_columns(["id", "name", "score"])
            .build()
            .expect("valid options");
        let err = common_rows(&left(), &right(), &options).unwrap_err();
        assert_eq!(err, CompareError::Config(ConfigError::NoColumnsToCompare));
    }

    #[test]
    fn with_header_shifts_and_prepends() {
        assert_eq!(with_header(vec![2, 0, 5]), vec![0, 3, 1, 6]);
        assert_eq!(with_header(Vec::new()), vec![0]);
    }
}
