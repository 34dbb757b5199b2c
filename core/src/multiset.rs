//! Grouping of row indices by row identity.

use rustc_hash::FxHashMap;

use crate::cell::Cell;
use crate::hashing::{row_key, RowKey};

/// Row indices of one array grouped by [`RowKey`].
///
/// Indices inside a group are ascending. Groups are visited in the order in
/// which their key first appears in the array.
#[derive(Debug, Clone, Default)]
pub struct RowMultisetIndex {
    groups: FxHashMap<RowKey, Vec<usize>>,
    order: Vec<RowKey>,
}

impl RowMultisetIndex {
    pub fn from_keys(keys: &[RowKey]) -> RowMultisetIndex {
        let mut groups: FxHashMap<RowKey, Vec<usize>> = FxHashMap::default();
        let mut order = Vec::new();

        for (idx, key) in keys.iter().enumerate() {
            groups
                .entry(*key)
                .or_insert_with(|| {
                    order.push(*key);
                    Vec::new()
                })
                .push(idx);
        }

        RowMultisetIndex { groups, order }
    }

    /// Builds the index over whole rows, header included if present.
    pub fn from_rows<C: Cell>(rows: &[Vec<C>]) -> RowMultisetIndex {
        let keys: Vec<RowKey> = rows.iter().map(|row| row_key(row)).collect();
        RowMultisetIndex::from_keys(&keys)
    }

    pub fn get(&self, key: &RowKey) -> Option<&[usize]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &RowKey) -> bool {
        self.groups.contains_key(key)
    }

    /// Iterates `(key, indices)` in first-appearance order.
    pub fn groups(&self) -> impl Iterator<Item = (&RowKey, &[usize])> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.groups.get(key).map(|rows| (key, rows.as_slice())))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::text_array;

    #[test]
    fn duplicate_rows_share_a_group_in_appearance_order() {
        let rows = text_array(&[
            vec!["1", "2"],
            vec!["3", "4"],
            vec!["1", "2"],
            vec!["5", "6"],
            vec!["1", "2"],
        ]);
        let index = RowMultisetIndex::from_rows(&rows);

        assert_eq!(index.len(), 3);
        let groups: Vec<Vec<usize>> = index.groups().map(|(_, rows)| rows.to_vec()).collect();
        assert_eq!(groups, vec![vec![0, 2, 4], vec![1], vec![3]]);
    }

    #[test]
    fn lookup_by_key() {
        let rows = text_array(&[vec!["x"], vec!["y"], vec!["x"]]);
        let index = RowMultisetIndex::from_rows(&rows);
        let key = row_key(&rows[0]);

        assert!(index.contains_key(&key));
        assert_eq!(index.get(&key), Some(&[0usize, 2][..]));
        assert_eq!(index.get(&row_key(&text_array(&[vec!["z"]])[0])), None);
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let index = RowMultisetIndex::from_keys(&[]);
        assert!(index.is_empty());
        assert_eq!(index.groups().count(), 0);
    }
}
