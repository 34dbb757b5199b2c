//! Table Compare: a library for comparing two in-memory tables row by row.
//!
//! This crate provides functionality for:
//! - Deciding row identity from cell contents (collision-resistant xxh64 keys)
//! - Finding common and differing rows under positional, set and match semantics
//! - Restricting identity to a subset of columns while returning full rows
//! - Rearranging and auto-aligning columns by header name
//! - Rendering tables as aligned text or plain comma-separated lines
//!
//! # Quick Start
//!
//! ```
//! use table_compare::{common_rows, text_array, CompareOptions, Method};
//!
//! let old = text_array(&[vec!["id", "name"], vec!["1", "ann"], vec!["2", "bob"]]);
//! let new = text_array(&[vec!["name", "id"], vec!["bob", "2"], vec!["cid", "3"]]);
//!
//! let options = CompareOptions::builder()
//!     .method(Method::Match)
//!     .sort_indices(true)
//!     .build()?;
//! let result = common_rows(&old, &new, &options)?;
//!
//! assert_eq!(result.left_indices, vec![0, 2]);
//! assert_eq!(result.right_indices, vec![0, 1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod array;
mod cell;
mod compare;
mod config;
mod error;
pub mod error_codes;
mod format;
pub(crate) mod hashing;
mod multiset;
mod pipeline;
mod schema;

pub use array::{check_array, ignore_rows, keep_rows, ArrayError};
pub use cell::{text_array, text_row, Cell, TextCell};
pub use compare::{common_indices, different_indices, query_indices, IndexPair, Method, Query};
pub use config::{CompareOptions, CompareOptionsBuilder, ConfigError, FormatOptions};
pub use error::{CompareError, Side};
pub use format::{plain_format, pretty_format, TRUNCATED_MARK};
pub use hashing::{cell_key, row_key, rows_are_permutations, RowKey};
pub use multiset::RowMultisetIndex;
pub use pipeline::{common_rows, compare_rows, different_rows, ComparisonResult};
pub use schema::{
    auto_align, common_columns, ignore_columns, keep_columns, rearrange_columns, rearrangement,
};
