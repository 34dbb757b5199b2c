//! Row comparison engine.
//!
//! Three matching semantics decide which rows two arrays share:
//!
//! - [`Method::Direct`] compares rows at equal positions.
//! - [`Method::Set`] treats a row as shared when its content occurs anywhere
//!   in the other array, without reconciling duplicate counts.
//! - [`Method::Match`] pairs equal rows one-to-one, first occurrence with
//!   first occurrence, and leaves the surplus unmatched.
//!
//! The algorithms work on precomputed [`RowKey`]s and return positions into
//! the key slices they were given.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cell::Cell;
use crate::config::ConfigError;
use crate::hashing::{row_key, RowKey};
use crate::multiset::RowMultisetIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    Match,
    Direct,
    Set,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Match, Method::Direct, Method::Set];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Match => "match",
            Method::Direct => "direct",
            Method::Set => "set",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "match" => Ok(Method::Match),
            "direct" => Ok(Method::Direct),
            "set" => Ok(Method::Set),
            _ => Err(ConfigError::UnknownMethod {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Common,
    Different,
}

/// Positions selected from each side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexPair {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl IndexPair {
    fn sort(&mut self) {
        self.left.sort_unstable();
        self.right.sort_unstable();
    }
}

/// Runs `query` under `method` over two slices of row keys.
///
/// Without `sort` the order of the returned positions follows key groups and
/// is not array order.
pub fn query_indices(
    query: Query,
    method: Method,
    left: &[RowKey],
    right: &[RowKey],
    sort: bool,
) -> IndexPair {
    let mut pair = match (query, method) {
        (Query::Common, Method::Direct) => common_direct(left, right),
        (Query::Common, Method::Set) => common_set(left, right),
        (Query::Common, Method::Match) => common_match(left, right),
        (Query::Different, Method::Direct) => different_direct(left, right),
        (Query::Different, Method::Set) => different_set(left, right),
        (Query::Different, Method::Match) => different_match(left, right),
    };

    if sort {
        pair.sort();
    }

    trace!(
        ?query,
        %method,
        left = pair.left.len(),
        right = pair.right.len(),
        "engine finished"
    );
    pair
}

/// Indices of rows common to both arrays, hashing every row in full.
pub fn common_indices<C: Cell>(
    left: &[Vec<C>],
    right: &[Vec<C>],
    method: Method,
    sort: bool,
) -> IndexPair {
    query_indices(Query::Common, method, &keys_of(left), &keys_of(right), sort)
}

/// Indices of rows that differ between the arrays, hashing every row in full.
pub fn different_indices<C: Cell>(
    left: &[Vec<C>],
    right: &[Vec<C>],
    method: Method,
    sort: bool,
) -> IndexPair {
    query_indices(
        Query::Different,
        method,
        &keys_of(left),
        &keys_of(right),
        sort,
    )
}

fn keys_of<C: Cell>(rows: &[Vec<C>]) -> Vec<RowKey> {
    rows.iter().map(|row| row_key(row)).collect()
}

pub(crate) fn common_direct(left: &[RowKey], right: &[RowKey]) -> IndexPair {
    let common: Vec<usize> = left
        .iter()
        .zip(right)
        .enumerate()
        .filter(|(_, (a, b))| a == b)
        .map(|(idx, _)| idx)
        .collect();

    IndexPair {
        right: common.clone(),
        left: common,
    }
}

pub(crate) fn different_direct(left: &[RowKey], right: &[RowKey]) -> IndexPair {
    let overlap = left.len().min(right.len());
    let mismatched: Vec<usize> = left
        .iter()
        .zip(right)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(idx, _)| idx)
        .collect();

    let mut left_rows = mismatched.clone();
    left_rows.extend(overlap..left.len());
    let mut right_rows = mismatched;
    right_rows.extend(overlap..right.len());

    IndexPair {
        left: left_rows,
        right: right_rows,
    }
}

pub(crate) fn common_set(left: &[RowKey], right: &[RowKey]) -> IndexPair {
    let left_index = RowMultisetIndex::from_keys(left);
    let right_index = RowMultisetIndex::from_keys(right);

    let mut pair = IndexPair::default();
    for (key, left_rows) in left_index.groups() {
        if let Some(right_rows) = right_index.get(key) {
            pair.left.extend_from_slice(left_rows);
            pair.right.extend_from_slice(right_rows);
        }
    }
    pair
}

pub(crate) fn different_set(left: &[RowKey], right: &[RowKey]) -> IndexPair {
    let left_index = RowMultisetIndex::from_keys(left);
    let right_index = RowMultisetIndex::from_keys(right);

    IndexPair {
        left: exclusive_rows(&left_index, &right_index),
        right: exclusive_rows(&right_index, &left_index),
    }
}

pub(crate) fn common_match(left: &[RowKey], right: &[RowKey]) -> IndexPair {
    let left_index = RowMultisetIndex::from_keys(left);
    let right_index = RowMultisetIndex::from_keys(right);

    let mut pair = IndexPair::default();
    for (key, left_rows) in left_index.groups() {
        if let Some(right_rows) = right_index.get(key) {
            let paired = left_rows.len().min(right_rows.len());
            pair.left.extend_from_slice(&left_rows[..paired]);
            pair.right.extend_from_slice(&right_rows[..paired]);
        }
    }
    pair
}

pub(crate) fn different_match(left: &[RowKey], right: &[RowKey]) -> IndexPair {
    let left_index = RowMultisetIndex::from_keys(left);
    let right_index = RowMultisetIndex::from_keys(right);

    let mut pair = IndexPair::default();
    for (key, left_rows) in left_index.groups() {
        match right_index.get(key) {
            None => pair.left.extend_from_slice(left_rows),
            Some(right_rows) if left_rows.len() > right_rows.len() => {
                pair.left.extend_from_slice(&left_rows[right_rows.len()..]);
            }
            Some(right_rows) if right_rows.len() > left_rows.len() => {
                pair.right.extend_from_slice(&right_rows[left_rows.len()..]);
            }
            Some(_) => {}
        }
    }
    pair.right.extend(exclusive_rows(&right_index, &left_index));
    pair
}

/// Rows of `own` whose key never occurs in `other`.
fn exclusive_rows(own: &RowMultisetIndex, other: &RowMultisetIndex) -> Vec<usize> {
    own.groups()
        .filter(|(key, _)| !other.contains_key(*key))
        .flat_map(|(_, rows)| rows.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::text_array;

    fn keys(rows: &[&[&str]]) -> Vec<RowKey> {
        rows.iter().map(|row| row_key(row.iter().copied())).collect()
    }

    fn scenario() -> (Vec<RowKey>, Vec<RowKey>) {
        let left = keys(&[&["1", "2"], &["3", "4"], &["1", "2"], &["1", "2"], &["9", "9"]]);
        let right = keys(&[&["1", "2"], &["5", "6"], &["3", "4"], &["3", "4"]]);
        (left, right)
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("Direct".parse::<Method>(), Ok(Method::Direct));
        assert_eq!(" set ".parse::<Method>(), Ok(Method::Set));
        assert_eq!("MATCH".parse::<Method>(), Ok(Method::Match));
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
    }

    #[test]
    fn unknown_method_is_a_configuration_error() {
        let err = "fuzzy".parse::<Method>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownMethod {
                value: "fuzzy".to_string()
            }
        );
    }

    #[test]
    fn direct_common_compares_positions() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Common, Method::Direct, &left, &right, true);
        assert_eq!(pair.left, vec![0]);
        assert_eq!(pair.right, vec![0]);
    }

    #[test]
    fn direct_different_assigns_tail_to_longer_side() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Different, Method::Direct, &left, &right, true);
        assert_eq!(pair.left, vec![1, 2, 3, 4]);
        assert_eq!(pair.right, vec![1, 2, 3]);

        let swapped = query_indices(Query::Different, Method::Direct, &right, &left, true);
        assert_eq!(swapped.left, vec![1, 2, 3]);
        assert_eq!(swapped.right, vec![1, 2, 3, 4]);
    }

    #[test]
    fn set_common_takes_every_occurrence() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Common, Method::Set, &left, &right, true);
        assert_eq!(pair.left, vec![0, 1, 2, 3]);
        assert_eq!(pair.right, vec![0, 2, 3]);
    }

    #[test]
    fn set_different_ignores_count_imbalance() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Different, Method::Set, &left, &right, true);
        assert_eq!(pair.left, vec![4]);
        assert_eq!(pair.right, vec![1]);
    }

    #[test]
    fn match_common_pairs_first_occurrences() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Common, Method::Match, &left, &right, true);
        assert_eq!(pair.left, vec![0, 1]);
        assert_eq!(pair.right, vec![0, 2]);
    }

    #[test]
    fn match_different_reports_surplus_occurrences() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Different, Method::Match, &left, &right, true);
        assert_eq!(pair.left, vec![2, 3, 4]);
        assert_eq!(pair.right, vec![1, 3]);
    }

    #[test]
    fn unsorted_output_follows_first_appearance_of_left_keys() {
        let (left, right) = scenario();
        let pair = query_indices(Query::Common, Method::Set, &left, &right, false);
        assert_eq!(pair.left, vec![0, 2, 3, 1]);
        assert_eq!(pair.right, vec![0, 2, 3]);
    }

    #[test]
    fn empty_sides_are_handled() {
        let (left, _) = scenario();
        for method in Method::ALL {
            let common = query_indices(Query::Common, method, &left, &[], true);
            assert!(common.left.is_empty() && common.right.is_empty());

            let different = query_indices(Query::Different, method, &[], &left, true);
            assert!(different.left.is_empty());
            assert_eq!(different.right, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn array_helpers_hash_whole_rows() {
        let left = text_array(&[vec!["a", "b"], vec!["1", "2"], vec!["3", "4"]]);
        let right = text_array(&[vec!["a", "b"], vec!["3", "4"]]);

        let common = common_indices(&left, &right, Method::Match, true);
        assert_eq!(common.left, vec![0, 2]);
        assert_eq!(common.right, vec![0, 1]);

        let different = different_indices(&left, &right, Method::Match, true);
        assert_eq!(different.left, vec![1]);
        assert!(different.right.is_empty());
    }
}
