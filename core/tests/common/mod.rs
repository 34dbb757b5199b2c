//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use table_compare::{text_array, TextCell};

pub type Table = Vec<Vec<TextCell>>;

pub fn table(rows: &[&[&str]]) -> Table {
    text_array(rows)
}

pub fn scenario_a_left() -> Table {
    table(&[
        &["a", "b", "c"],
        &["1", "2", "3"],
        &["4", "5", "6"],
        &["7", "8", "9"],
        &["1", "2", "3"],
        &["7", "8", "9"],
    ])
}

pub fn scenario_a_right() -> Table {
    table(&[
        &["a", "b", "c"],
        &["x", "y", "z"],
        &["1", "2", "3"],
        &["4", "5", "6"],
        &["7", "8", "9"],
        &["10", "11", "12"],
    ])
}

/// Deterministic pseudo-random table whose cells are drawn from a small
/// alphabet so that duplicate rows are common.
pub fn generated_table(header: &[&str], nrows: usize, alphabet: u64, seed: u64) -> Table {
    let mut rows = vec![header.iter().map(|name| TextCell::new(*name)).collect::<Vec<_>>()];
    for row in 0..nrows {
        let cells = (0..header.len())
            .map(|col| {
                let mut hasher = DefaultHasher::new();
                (seed, row, col).hash(&mut hasher);
                TextCell::new((hasher.finish() % alphabet).to_string())
            })
            .collect();
        rows.push(cells);
    }
    rows
}

pub fn sorted(mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_unstable();
    indices
}
