use crate::{OutputArgs, OutputFormat};
use anyhow::{Result, bail};
use std::io::Write;
use table_compare::{ComparisonResult, FormatOptions, TextCell, plain_format, pretty_format};

pub fn format_options(args: &OutputArgs) -> FormatOptions {
    let mut options = FormatOptions::default();
    if let Some(spaces) = args.spaces {
        options.spaces = spaces;
    }
    options.max_col_length = args.max_col_length;
    options
}

pub fn write_comparison<W: Write>(
    w: &mut W,
    result: &ComparisonResult<TextCell>,
    left_label: &str,
    right_label: &str,
    format: OutputFormat,
    options: &FormatOptions,
    show_indices: bool,
) -> Result<()> {
    let (left_rows, right_rows) = result.data_row_counts();

    write_section(w, left_label, left_rows, &result.left, format, options)?;
    if show_indices {
        write_indices(w, &result.left_indices)?;
    }
    writeln!(w)?;

    write_section(w, right_label, right_rows, &result.right, format, options)?;
    if show_indices {
        write_indices(w, &result.right_indices)?;
    }

    Ok(())
}

pub fn write_aligned<W: Write>(
    w: &mut W,
    left_label: &str,
    left: &[Vec<TextCell>],
    right_label: &str,
    right: &[Vec<TextCell>],
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<()> {
    let data_rows = |table: &[Vec<TextCell>]| table.len().saturating_sub(1);
    write_section(w, left_label, data_rows(left), left, format, options)?;
    writeln!(w)?;
    write_section(w, right_label, data_rows(right), right, format, options)?;
    Ok(())
}

pub fn write_columns<W: Write>(w: &mut W, columns: &[TextCell]) -> Result<()> {
    if columns.is_empty() {
        writeln!(w, "No common columns.")?;
    }
    for column in columns {
        writeln!(w, "{}", column)?;
    }
    Ok(())
}

fn write_section<W: Write>(
    w: &mut W,
    label: &str,
    data_rows: usize,
    table: &[Vec<TextCell>],
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<()> {
    let noun = if data_rows == 1 { "row" } else { "rows" };
    writeln!(w, "{} ({} {}):", label, data_rows, noun)?;
    write_table(w, table, format, options)
}

pub fn write_table<W: Write>(
    w: &mut W,
    table: &[Vec<TextCell>],
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<()> {
    match format {
        OutputFormat::Pretty => w.write_all(pretty_format(table, options)?.as_bytes())?,
        OutputFormat::Plain => w.write_all(plain_format(table)?.as_bytes())?,
        OutputFormat::Csv => write_csv(w, table)?,
        OutputFormat::Json => bail!("JSON tables are written by the json module"),
    }
    Ok(())
}

fn write_csv<W: Write>(w: &mut W, table: &[Vec<TextCell>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(&mut *w);
    for row in table {
        writer.write_record(row.iter().map(TextCell::as_str))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_indices<W: Write>(w: &mut W, indices: &[usize]) -> Result<()> {
    let joined: Vec<String> = indices.iter().map(|idx| idx.to_string()).collect();
    writeln!(w, "indices: {}", joined.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_compare::text_array;

    fn render(format: OutputFormat) -> String {
        let table = text_array(&[vec!["id", "note"], vec!["1", "a, b"]]);
        let mut out = Vec::new();
        write_table(&mut out, &table, format, &FormatOptions::default()).expect("writable");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn csv_output_quotes_fields() {
        assert_eq!(render(OutputFormat::Csv), "id,note\n1,\"a, b\"\n");
    }

    #[test]
    fn plain_output_does_not_quote() {
        assert_eq!(render(OutputFormat::Plain), "id,note\n1,a, b\n");
    }

    #[test]
    fn comparison_sections_carry_counts_and_indices() {
        let result = ComparisonResult {
            left: text_array(&[vec!["a"], vec!["1"]]),
            right: text_array(&[vec!["a"]]),
            left_indices: vec![0, 2],
            right_indices: vec![0],
        };
        let mut out = Vec::new();
        write_comparison(
            &mut out,
            &result,
            "old.csv",
            "new.csv",
            OutputFormat::Plain,
            &FormatOptions::default(),
            true,
        )
        .expect("writable");

        assert_eq!(
            String::from_utf8(out).expect("utf8 output"),
            "old.csv (1 row):\na\n1\nindices: 0 2\n\nnew.csv (0 rows):\na\nindices: 0\n"
        );
    }
}
