use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use table_compare::{CompareOptions, ComparisonResult, Query, TextCell};

#[derive(Serialize)]
struct TableReport<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    indices: Option<&'a [usize]>,
    rows: &'a [Vec<TextCell>],
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    query: Query,
    options: &'a CompareOptions,
    left: TableReport<'a>,
    right: TableReport<'a>,
}

#[derive(Serialize)]
struct AlignedReport<'a> {
    left: TableReport<'a>,
    right: TableReport<'a>,
}

pub fn write_comparison<W: Write>(
    w: &mut W,
    query: Query,
    options: &CompareOptions,
    result: &ComparisonResult<TextCell>,
    left_label: &str,
    right_label: &str,
) -> Result<()> {
    let report = ComparisonReport {
        query,
        options,
        left: TableReport {
            path: left_label,
            indices: Some(result.left_indices.as_slice()),
            rows: &result.left,
        },
        right: TableReport {
            path: right_label,
            indices: Some(result.right_indices.as_slice()),
            rows: &result.right,
        },
    };
    write_pretty(w, &report)
}

pub fn write_aligned<W: Write>(
    w: &mut W,
    left_label: &str,
    left: &[Vec<TextCell>],
    right_label: &str,
    right: &[Vec<TextCell>],
) -> Result<()> {
    let report = AlignedReport {
        left: TableReport {
            path: left_label,
            indices: None,
            rows: left,
        },
        right: TableReport {
            path: right_label,
            indices: None,
            rows: right,
        },
    };
    write_pretty(w, &report)
}

pub fn write_columns<W: Write>(w: &mut W, columns: &[TextCell]) -> Result<()> {
    write_pretty(w, &columns)
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}
