use anyhow::{Context, Result, bail};
use std::path::Path;
use table_compare::TextCell;
use tracing::info;

pub type Table = Vec<Vec<TextCell>>;

/// Reads every record of a CSV file, header line included, as a table.
///
/// Records are not required to have equal lengths; structural checks are left
/// to the comparison itself so that its error names the offending row.
pub fn read_table(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("failed to read record {} of {}", line + 1, path.display()))?;
        rows.push(record.iter().map(TextCell::new).collect());
    }

    info!(path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}

pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {:?}", delimiter);
    }
    Ok(delimiter as u8)
}

pub fn read_pair(left: &Path, right: &Path, delimiter: char) -> Result<(Table, Table)> {
    let delimiter = delimiter_byte(delimiter)?;
    Ok((read_table(left, delimiter)?, read_table(right, delimiter)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn ragged_records_are_kept_as_read() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "a,b\n1,2\n3\n\"x,y\",4\n").expect("write csv");

        let table = read_table(file.path(), b',').expect("readable csv");
        assert_eq!(table.len(), 4);
        assert_eq!(table[2].len(), 1);
        assert_eq!(table[3][0].as_str(), "x,y");
    }

    #[test]
    fn non_ascii_delimiters_are_rejected() {
        assert_eq!(delimiter_byte(';').expect("ascii"), b';');
        assert!(delimiter_byte('§').is_err());
    }
}
