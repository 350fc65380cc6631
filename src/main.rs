use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use decaymap::cli::{Cli, Commands};
use decaymap::config::Config;
use decaymap::io::{create_writer, load_snapshots};
use decaymap::pipeline::{configure_jobs, evaluate_all};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            snapshot,
            config,
            format,
            output,
            explain,
            jobs,
        } => {
            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };

            configure_jobs(jobs);

            let snapshots = load_snapshots(&snapshot)
                .with_context(|| format!("failed to load snapshot {}", snapshot.display()))?;

            log::info!("evaluating {} dependencies", snapshots.len());
            let results = evaluate_all(&snapshots, &config, Utc::now());

            let mut writer = create_writer(output.as_deref(), format.into(), explain)?;
            writer.write_results(&results)?;
        }
    }

    Ok(())
}
