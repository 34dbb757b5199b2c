//! Hash utilities for cell keys and row identity.
//!
//! All hashing goes through xxh64 with a fixed seed so keys are stable
//! across runs and platforms.

use rustc_hash::FxHashMap;
use xxhash_rust::xxh64::{xxh64, Xxh64};

use crate::cell::Cell;

pub(crate) const XXH64_SEED: u64 = 0;

/// Identity of a row: a hash over the concatenated cell contents plus a hash
/// over the cell lengths.
///
/// The content hash alone cannot tell `["ab", "c"]` from `["a", "bc"]`; the
/// lengths component separates them. Two distinct rows sharing both
/// components are treated as equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub content: u64,
    pub lengths: u64,
}

/// Hash of a single cell's canonical string.
pub fn cell_key<C: Cell + ?Sized>(cell: &C) -> u64 {
    xxh64(cell.canonical_str().as_bytes(), XXH64_SEED)
}

/// Computes the [`RowKey`] for a row given as any sequence of cell references.
pub fn row_key<'a, C, I>(cells: I) -> RowKey
where
    C: Cell + ?Sized + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut content = Xxh64::new(XXH64_SEED);
    let mut lengths = Xxh64::new(XXH64_SEED);
    for cell in cells {
        let text = cell.canonical_str();
        content.update(text.as_bytes());
        lengths.update(&(text.len() as u64).to_le_bytes());
    }
    RowKey {
        content: content.digest(),
        lengths: lengths.digest(),
    }
}

/// Returns true iff both rows hold the same cells as multisets, ignoring order.
pub fn rows_are_permutations<A: Cell, B: Cell>(row1: &[A], row2: &[B]) -> bool {
    if row1.len() != row2.len() {
        return false;
    }

    let mut counts: FxHashMap<u64, isize> = FxHashMap::default();
    for cell in row1 {
        *counts.entry(cell_key(cell)).or_insert(0) += 1;
    }

    for cell in row2 {
        match counts.get_mut(&cell_key(cell)) {
            Some(count) => *count -= 1,
            None => return false,
        }
    }

    counts.values().all(|&count| count == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::text_row;

    #[test]
    fn equal_rows_share_a_key() {
        let a = text_row(&["1", "2", "3"]);
        let b = text_row(&["1", "2", "3"]);
        assert_eq!(row_key(&a), row_key(&b));
    }

    #[test]
    fn cell_boundaries_change_the_key() {
        let a = text_row(&["ab", "c"]);
        let b = text_row(&["a", "bc"]);
        let ka = row_key(&a);
        let kb = row_key(&b);
        assert_eq!(ka.content, kb.content, "concatenated text is identical");
        assert_ne!(ka, kb, "length component must separate the rows");
    }

    #[test]
    fn empty_cells_are_not_invisible() {
        let a = text_row(&["a", ""]);
        let b = text_row(&["a"]);
        assert_ne!(row_key(&a), row_key(&b));
    }

    #[test]
    fn row_key_accepts_projected_references() {
        let row = text_row(&["x", "y", "z"]);
        let projected = [&row[0], &row[2]];
        assert_eq!(
            row_key(projected.iter().copied()),
            row_key(&text_row(&["x", "z"]))
        );
    }

    #[test]
    fn cell_key_matches_across_cell_types() {
        assert_eq!(cell_key("name"), cell_key(&String::from("name")));
        assert_ne!(cell_key("name"), cell_key("Name"));
    }

    #[test]
    fn permutations_ignore_order_but_not_counts() {
        let a = text_row(&["a", "b", "c"]);
        assert!(rows_are_permutations(&a, &text_row(&["c", "a", "b"])));
        assert!(!rows_are_permutations(&a, &text_row(&["a", "b"])));
        assert!(!rows_are_permutations(&a, &text_row(&["a", "b", "d"])));
        assert!(!rows_are_permutations(
            &text_row(&["a", "a", "b"]),
            &text_row(&["a", "b", "b"])
        ));
        assert!(rows_are_permutations::<String, String>(&[], &[]));
    }
}
