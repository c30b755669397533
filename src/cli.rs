// Command-line interface definition

use crate::errors::validate_sequence_length;
use anyhow::{Context, Result};
use clap::Parser;
use console::Term;

#[derive(Parser)]
#[command(
    name = "fastagen",
    version,
    about = "Generate a random DNA sequence and save it as a FASTA file",
    long_about = None
)]
pub struct Cli {
    /// Length of the random sequence; prompted for when omitted
    #[arg(short = 'l', long, value_name = "BASES", value_parser = validate_sequence_length)]
    pub length: Option<usize>,

    /// Sequence identifier, used verbatim as the output filename stem
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: Option<String>,

    /// Free-text description for the FASTA header
    #[arg(short = 'd', long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Name to embed in the sequence at a random position
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Random seed for reproducibility
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Prints `label` on stdout and reads back one line of input, trimmed.
pub fn prompt(label: &str) -> Result<String> {
    let term = Term::stdout();
    term.write_str(&format!("{label}: "))
        .context("Failed to write prompt")?;
    let line = term.read_line().context("Failed to read input")?;
    Ok(line.trim().to_string())
}

pub mod fmt {
    //! Styled terminal output helpers.

    use console::style;

    /// Section header.
    pub fn header(text: &str) -> String {
        style(text).bold().underlined().to_string()
    }

    /// Parameter name left-padded to `width`, dimmed.
    pub fn param_aligned(name: &str, width: usize) -> String {
        style(format!("{name:<width$}")).dim().to_string()
    }

    /// Progress message.
    pub fn progress(text: impl AsRef<str>) -> String {
        format!("{} {}", style("→").cyan(), text.as_ref())
    }

    /// Completion message.
    pub fn success(text: impl AsRef<str>) -> String {
        format!("{} {}", style("✓").green().bold(), text.as_ref())
    }
}
