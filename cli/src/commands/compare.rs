use crate::input::read_pair;
use crate::output::{json, text};
use crate::{CompareArgs, OutputFormat};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use table_compare::{CompareOptions, Query, compare_rows};
use tracing::info;

pub fn run(query: Query, args: &CompareArgs) -> Result<ExitCode> {
    let options = build_options(args)?;
    let format_options = text::format_options(&args.output);

    let (left, right) = read_pair(&args.inputs.left, &args.inputs.right, args.inputs.delimiter)?;
    let result = compare_rows(query, &left, &right, &options).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            args.inputs.left.display(),
            args.inputs.right.display()
        )
    })?;

    let (left_rows, right_rows) = result.data_row_counts();
    info!(left_rows, right_rows, "selected rows");

    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());
    let left_label = args.inputs.left.display().to_string();
    let right_label = args.inputs.right.display().to_string();

    match args.output.format {
        OutputFormat::Json => {
            json::write_comparison(&mut handle, query, &options, &result, &left_label, &right_label)?;
        }
        format => {
            text::write_comparison(
                &mut handle,
                &result,
                &left_label,
                &right_label,
                format,
                &format_options,
                args.indices,
            )?;
        }
    }
    handle.flush()?;

    if query == Query::Different && result.has_data_rows() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Starts from `--config` when given and lets explicit flags override it.
fn build_options(args: &CompareArgs) -> Result<CompareOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => CompareOptions::default(),
    };

    if let Some(method) = args.method {
        options.method = method;
    }
    if let Some(columns) = &args.use_columns {
        options.use_columns = Some(columns.clone());
        options.ignore_columns = None;
    }
    if let Some(columns) = &args.ignore_columns {
        options.ignore_columns = Some(columns.clone());
        options.use_columns = None;
    }
    if args.sort {
        options.sort_indices = true;
    }

    options.validate().context("Invalid comparison options")?;
    Ok(options)
}

fn load_options(path: &Path) -> Result<CompareOptions> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse config: {}", path.display()))
}
