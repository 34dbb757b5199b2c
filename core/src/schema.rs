//! Column-level operations: projection, rearrangement and alignment.
//!
//! Column names are matched by the hash of their canonical string, so a
//! header cell of any [`Cell`] type can be matched against plain strings.

use rustc_hash::FxHashSet;

use crate::array::{check_array, header_positions};
use crate::cell::Cell;
use crate::config::ConfigError;
use crate::error::{CompareError, Side};
use crate::hashing::cell_key;

/// Returns the array with its columns reordered to `target`.
///
/// `target` must name every header column exactly once.
pub fn rearrange_columns<C, T>(
    array: &[Vec<C>],
    target: &[T],
) -> Result<Vec<Vec<C>>, CompareError>
where
    C: Cell + Clone,
    T: Cell,
{
    check_array(array)?;
    let order = rearrangement(&array[0], target)?;
    Ok(project(array, &order))
}

/// Computes, for each `target` name, the position of that column in `header`.
pub fn rearrangement<H: Cell, T: Cell>(
    header: &[H],
    target: &[T],
) -> Result<Vec<usize>, ConfigError> {
    let mut target_keys: FxHashSet<u64> = FxHashSet::default();
    for name in target {
        if !target_keys.insert(cell_key(name)) {
            return Err(ConfigError::DuplicateTargetColumn {
                name: name.canonical_str().into_owned(),
            });
        }
    }

    if let Some(missing) = header
        .iter()
        .find(|column| !target_keys.contains(&cell_key(*column)))
    {
        return Err(ConfigError::ColumnNotFound {
            name: missing.canonical_str().into_owned(),
        });
    }

    let positions = header_positions(header);
    target
        .iter()
        .map(|name| {
            positions
                .get(&cell_key(name))
                .copied()
                .ok_or_else(|| ConfigError::ColumnNotFound {
                    name: name.canonical_str().into_owned(),
                })
        })
        .collect()
}

/// Moves the columns both arrays share to the front of each.
///
/// In the left result the shared columns keep their left order; in the right
/// result they follow the left order too. Columns exclusive to either side
/// follow in their original order. No column is dropped.
pub fn auto_align<C: Cell + Clone>(
    left: &[Vec<C>],
    right: &[Vec<C>],
) -> Result<(Vec<Vec<C>>, Vec<Vec<C>>), CompareError> {
    check_array(left).map_err(CompareError::array(Side::Left))?;
    check_array(right).map_err(CompareError::array(Side::Right))?;

    let right_positions = header_positions(&right[0]);

    let mut left_order = Vec::with_capacity(left[0].len());
    let mut right_order = Vec::with_capacity(right[0].len());
    let mut left_tail = Vec::new();
    let mut shared: FxHashSet<u64> = FxHashSet::default();

    for (idx, column) in left[0].iter().enumerate() {
        let key = cell_key(column);
        match right_positions.get(&key) {
            Some(&right_idx) => {
                left_order.push(idx);
                right_order.push(right_idx);
                shared.insert(key);
            }
            None => left_tail.push(idx),
        }
    }
    left_order.extend(left_tail);

    right_order.extend(
        right[0]
            .iter()
            .enumerate()
            .filter(|(_, column)| !shared.contains(&cell_key(*column)))
            .map(|(idx, _)| idx),
    );

    Ok((project(left, &left_order), project(right, &right_order)))
}

/// Header names present in both arrays, in left order.
pub fn common_columns<C: Cell + Clone>(
    left: &[Vec<C>],
    right: &[Vec<C>],
) -> Result<Vec<C>, CompareError> {
    check_array(left).map_err(CompareError::array(Side::Left))?;
    check_array(right).map_err(CompareError::array(Side::Right))?;

    let right_keys: FxHashSet<u64> = right[0].iter().map(|column| cell_key(column)).collect();
    Ok(left[0]
        .iter()
        .filter(|column| right_keys.contains(&cell_key(*column)))
        .cloned()
        .collect())
}

/// Keeps only the named columns, in the array's own column order.
pub fn keep_columns<C, S>(array: &[Vec<C>], names: &[S]) -> Result<Vec<Vec<C>>, CompareError>
where
    C: Cell + Clone,
    S: Cell,
{
    check_array(array)?;
    let positions = used_positions(&array[0], names)?;
    Ok(project(array, &positions))
}

/// Drops the named columns. Names that are not in the header are skipped.
pub fn ignore_columns<C, S>(array: &[Vec<C>], names: &[S]) -> Result<Vec<Vec<C>>, CompareError>
where
    C: Cell + Clone,
    S: Cell,
{
    check_array(array)?;
    let positions = remaining_positions(&array[0], names);
    Ok(project(array, &positions))
}

/// Ascending header positions of the named columns; every name must exist.
pub(crate) fn used_positions<C: Cell, S: Cell>(
    header: &[C],
    names: &[S],
) -> Result<Vec<usize>, ConfigError> {
    let positions = header_positions(header);
    let mut used = names
        .iter()
        .map(|name| {
            positions
                .get(&cell_key(name))
                .copied()
                .ok_or_else(|| ConfigError::ColumnNotFound {
                    name: name.canonical_str().into_owned(),
                })
        })
        .collect::<Result<Vec<usize>, ConfigError>>()?;
    used.sort_unstable();
    used.dedup();
    Ok(used)
}

/// Ascending header positions of the columns not named in `names`.
pub(crate) fn remaining_positions<C: Cell, S: Cell>(header: &[C], names: &[S]) -> Vec<usize> {
    let ignored: FxHashSet<u64> = names.iter().map(|name| cell_key(name)).collect();
    header
        .iter()
        .enumerate()
        .filter(|(_, column)| !ignored.contains(&cell_key(*column)))
        .map(|(idx, _)| idx)
        .collect()
}

pub(crate) fn project<C: Clone>(array: &[Vec<C>], positions: &[usize]) -> Vec<Vec<C>> {
    array
        .iter()
        .map(|row| positions.iter().map(|&idx| row[idx].clone()).collect())
        .collect()
}
