mod commands;
mod input;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use table_compare::{Method, Query};

#[derive(Parser)]
#[command(name = "table-compare")]
#[command(about = "Compare two CSV tables row by row")]
#[command(version)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Log progress to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the rows both tables have in common")]
    Common(CompareArgs),
    #[command(about = "Show the rows that differ between the tables")]
    Diff(CompareArgs),
    #[command(about = "Move the columns both tables share to the front")]
    Align {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    #[command(about = "List the columns both tables share")]
    Columns {
        #[command(flatten)]
        inputs: InputArgs,
        #[arg(long, short, value_enum, default_value = "pretty", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Args)]
pub struct InputArgs {
    #[arg(help = "Path to the left CSV table")]
    pub left: PathBuf,
    #[arg(help = "Path to the right CSV table")]
    pub right: PathBuf,
    #[arg(long, short, default_value_t = ',', help = "Field delimiter of both inputs")]
    pub delimiter: char,
}

#[derive(Args)]
pub struct OutputArgs {
    #[arg(long, short, value_enum, default_value = "pretty", help = "Output format")]
    pub format: OutputFormat,
    #[arg(long, help = "Spaces between columns in pretty output")]
    pub spaces: Option<usize>,
    #[arg(long, value_name = "CHARS", help = "Truncate longer cells in pretty output")]
    pub max_col_length: Option<usize>,
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    #[arg(long, short, help = "Matching method: direct, set or match")]
    pub method: Option<Method>,
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with = "ignore_columns",
        help = "Only these columns decide row identity (comma-separated names)"
    )]
    pub use_columns: Option<Vec<String>>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "These columns take no part in row identity (comma-separated names)"
    )]
    pub ignore_columns: Option<Vec<String>>,
    #[arg(long, help = "Report rows in ascending index order")]
    pub sort: bool,
    #[arg(long, value_name = "PATH", help = "JSON file with comparison options; flags override it")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Also print the selected row indices")]
    pub indices: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Plain,
    Csv,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Common(args) => commands::compare::run(Query::Common, &args),
        Commands::Diff(args) => commands::compare::run(Query::Different, &args),
        Commands::Align { inputs, output } => commands::align::run(&inputs, &output),
        Commands::Columns { inputs, format } => commands::align::run_columns(&inputs, format),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
