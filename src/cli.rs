use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "decaymap")]
#[command(about = "Dependency deprecation risk analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate deprecation risk for every dependency in a facts snapshot
    Analyze {
        /// Facts snapshot file (JSON array of dependency snapshots)
        snapshot: PathBuf,

        /// Configuration file (.toml or .json); defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: FormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include the full weighted evidence tree per dependency
        #[arg(long)]
        explain: bool,

        /// Number of parallel evaluation threads (0 = rayon default)
        #[arg(short, long, default_value = "0")]
        jobs: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Terminal,
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Terminal => OutputFormat::Terminal,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}
