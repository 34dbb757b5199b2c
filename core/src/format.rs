//! Text renderings of an array.

use std::fmt::Write;

use crate::array::{check_array, ArrayError};
use crate::cell::Cell;
use crate::config::FormatOptions;

/// Appended to cells cut short by `max_col_length`.
pub const TRUNCATED_MARK: &str = "..";

/// Renders the array as left-aligned columns.
///
/// Every column but the last is padded to its widest cell plus
/// `options.spaces`. Widths are measured in chars.
pub fn pretty_format<C: Cell>(
    array: &[Vec<C>],
    options: &FormatOptions,
) -> Result<String, ArrayError> {
    check_array(array)?;

    let ncols = array[0].len();
    let mark_len = TRUNCATED_MARK.chars().count();

    let mut widths = vec![0usize; ncols];
    for row in array {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.canonical_str().chars().count());
        }
    }
    if let Some(max_len) = options.max_col_length {
        for width in widths.iter_mut().filter(|width| **width > max_len) {
            *width = max_len + mark_len;
        }
    }

    let mut out = String::new();
    for row in array {
        for (col, cell) in row.iter().enumerate() {
            let text = display_text(&cell.canonical_str(), options.max_col_length);
            if col + 1 < ncols {
                let _ = write!(out, "{:<width$}", text, width = widths[col] + options.spaces);
            } else {
                out.push_str(&text);
            }
        }
        out.push('\n');
    }

    Ok(out)
}

/// Renders the array as comma-separated lines, without quoting.
pub fn plain_format<C: Cell>(array: &[Vec<C>]) -> Result<String, ArrayError> {
    check_array(array)?;

    let mut out = String::new();
    for row in array {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push(',');
            }
            out.push_str(&cell.canonical_str());
        }
        out.push('\n');
    }

    Ok(out)
}

fn display_text(text: &str, max_len: Option<usize>) -> String {
    match max_len {
        Some(max_len) if text.chars().count() > max_len => {
            let mut cut: String = text.chars().take(max_len).collect();
            cut.push_str(TRUNCATED_MARK);
            cut
        }
        _ => text.to_string(),
    }
}
