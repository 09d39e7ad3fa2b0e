//! Command implementations.

pub mod config;
pub mod device;
pub mod lessons;
pub mod password;
pub mod quiz;
pub mod website;

use anyhow::{Context as _, Result};
use colored::Colorize;
use cyberscore_recon::{DegradedSignal, ReconError, ReconResult};

use crate::cli::args::expand_path;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Explanations only accompany pretty output; structured formats stay parseable.
    pub fn show_explanation(&self) -> bool {
        self.explain && self.output_format == OutputFormat::Pretty
    }

    /// Print a dimmed tip when tips are enabled and output is pretty.
    pub fn tip(&self, text: &str) {
        if self.config.show_tips && self.output_format == OutputFormat::Pretty {
            println!("{}", text.dimmed());
        }
    }
}

/// Read a collaborator output file for a signal; failures stay recoverable.
fn read_signal_file(raw: &str) -> ReconResult<String> {
    let path = expand_path(raw);
    std::fs::read_to_string(&path).map_err(ReconError::from)
}

/// Read a file the command cannot do without.
fn read_required_file(raw: &str) -> Result<String> {
    let path = expand_path(raw);
    std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// List signals that were skipped because their lookup failed.
fn print_degraded(degraded: &[DegradedSignal]) {
    if degraded.is_empty() {
        return;
    }
    println!("  {}", "Skipped (lookup failed, not penalised):".yellow().bold());
    for d in degraded {
        println!("    {} {}: {}", "?".yellow(), d.signal, d.reason.dimmed());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(output_format: OutputFormat, explain: bool) -> Context {
        Context {
            output_format,
            explain,
            verbose: false,
            config: Config::default(),
        }
    }

    #[test]
    fn explanation_only_with_pretty_output() {
        assert!(context(OutputFormat::Pretty, true).show_explanation());
        assert!(!context(OutputFormat::Pretty, false).show_explanation());
        for format in [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Csv] {
            assert!(!context(format, true).show_explanation());
        }
    }
}
