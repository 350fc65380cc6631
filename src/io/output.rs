use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::engine::Evaluation;
use crate::risk::Recommendation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &[Evaluation]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &[Evaluation]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &[Evaluation]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Decaymap Risk Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Dependency | Version | Recommendation | NC | NIA | W | DM |"
        )?;
        writeln!(
            self.writer,
            "|------------|---------|----------------|----|-----|---|----|"
        )?;

        for result in results {
            let d = &result.distribution;
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.3} | {:.3} | {:.3} | {:.3} |",
                result.dependency.name,
                result.dependency.version,
                result.recommendation,
                d.no_concerns,
                d.no_immediate_action,
                d.watchlist,
                d.decision_making,
            )?;
        }

        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, explain: bool) -> Self {
        Self { writer, explain }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &[Evaluation]) -> anyhow::Result<()> {
        for result in results {
            let verdict = colorize(result.recommendation);
            let d = &result.distribution;

            writeln!(
                self.writer,
                "{} {} -> {}",
                result.dependency.name.bold(),
                result.dependency.version,
                verdict
            )?;
            writeln!(
                self.writer,
                "    NC {:.3} | NIA {:.3} | W {:.3} | DM {:.3}",
                d.no_concerns, d.no_immediate_action, d.watchlist, d.decision_making
            )?;

            if self.explain {
                for line in result.node.render_deep().lines() {
                    writeln!(self.writer, "    {line}")?;
                }
            }
        }

        let flagged = results
            .iter()
            .filter(|result| {
                matches!(
                    result.recommendation,
                    Recommendation::Watchlist | Recommendation::DecisionMaking
                )
            })
            .count();
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} dependencies evaluated, {} flagged for review",
            results.len(),
            flagged
        )?;

        Ok(())
    }
}

fn colorize(recommendation: Recommendation) -> ColoredString {
    let text = recommendation.to_string();
    match recommendation {
        Recommendation::NoConcerns => text.green(),
        Recommendation::NoImmediateAction => text.cyan(),
        Recommendation::Watchlist => text.yellow(),
        Recommendation::DecisionMaking => text.red().bold(),
        Recommendation::Inconclusive => text.dimmed(),
    }
}

/// Build a writer for the chosen format, targeting a file or stdout.
pub fn create_writer(
    output: Option<&Path>,
    format: OutputFormat,
    explain: bool,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, explain)),
    })
}
