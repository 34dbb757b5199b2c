use crate::input::read_pair;
use crate::output::{json, text};
use crate::{InputArgs, OutputArgs, OutputFormat};
use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use table_compare::{auto_align, common_columns};
use tracing::info;

pub fn run(inputs: &InputArgs, output: &OutputArgs) -> Result<ExitCode> {
    let (left, right) = read_pair(&inputs.left, &inputs.right, inputs.delimiter)?;
    let (left, right) = auto_align(&left, &right).context("Failed to align columns")?;
    info!(
        left_columns = left[0].len(),
        right_columns = right[0].len(),
        "aligned tables"
    );

    let left_label = inputs.left.display().to_string();
    let right_label = inputs.right.display().to_string();
    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());

    match output.format {
        OutputFormat::Json => {
            json::write_aligned(&mut handle, &left_label, &left, &right_label, &right)?;
        }
        format => {
            let options = text::format_options(output);
            text::write_aligned(
                &mut handle,
                &left_label,
                &left,
                &right_label,
                &right,
                format,
                &options,
            )?;
        }
    }
    handle.flush()?;

    Ok(ExitCode::SUCCESS)
}

pub fn run_columns(inputs: &InputArgs, format: OutputFormat) -> Result<ExitCode> {
    let (left, right) = read_pair(&inputs.left, &inputs.right, inputs.delimiter)?;
    let columns = common_columns(&left, &right).context("Failed to read headers")?;

    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());
    match format {
        OutputFormat::Json => json::write_columns(&mut handle, &columns)?,
        _ => text::write_columns(&mut handle, &columns)?,
    }
    handle.flush()?;

    Ok(ExitCode::SUCCESS)
}
