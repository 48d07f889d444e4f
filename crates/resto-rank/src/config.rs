use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::AppError;

/// Command-line arguments, validated into a [`Config`] before any work starts.
#[derive(Debug, Parser)]
#[command(name = "resto-rank")]
#[command(about = "Rank restaurants by fuzzy desirability of service quality and price", long_about = None)]
pub struct Cli {
    /// Candidate table (.xlsx workbook or CSV): ID, service quality, price
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the ranked rows (.xlsx or CSV)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Rule bank file (`<service> & <price> => <weight>` per line); the
    /// standard nine-rule grid is used when omitted
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Number of ranked rows to write and list
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Number of top candidates to print with a full inference trace
    #[arg(long, default_value_t = 5)]
    pub trace: usize,

    /// Scoring workers (defaults to available parallelism)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Also write the traced top rows as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Xlsx,
    Csv,
}

impl TableFormat {
    /// `.xlsx`/`.xlsm` select the workbook format; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("xlsx") | Some("xlsm") => TableFormat::Xlsx,
            _ => TableFormat::Csv,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub input_format: TableFormat,
    pub output_path: PathBuf,
    pub output_format: TableFormat,
    pub rules_path: Option<PathBuf>,
    pub top_n: usize,
    pub trace_n: usize,
    pub workers: usize,
    pub json_path: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        if !cli.input.exists() {
            return Err(AppError::Config(format!(
                "input file not found: {}",
                cli.input.display()
            )));
        }

        if let Some(rules) = &cli.rules {
            if !rules.exists() {
                return Err(AppError::Config(format!(
                    "rule bank file not found: {}",
                    rules.display()
                )));
            }
        }

        if cli.top == 0 {
            return Err(AppError::Config("--top must be at least 1".to_string()));
        }

        if cli.trace == 0 {
            return Err(AppError::Config("--trace must be at least 1".to_string()));
        }

        let workers = match cli.workers {
            Some(0) => {
                return Err(AppError::Config("--workers must be at least 1".to_string()));
            }
            Some(n) => n,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };

        Ok(Self {
            input_format: TableFormat::from_path(&cli.input),
            output_format: TableFormat::from_path(&cli.output),
            input_path: cli.input,
            output_path: cli.output,
            rules_path: cli.rules,
            top_n: cli.top,
            trace_n: cli.trace.min(cli.top),
            workers,
            json_path: cli.json,
        })
    }
}
