//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use cyberscore_core::{ScoreLabel, ScoreResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Print a value as JSON or YAML. Returns false for the other formats.
pub fn print_structured<T: Serialize>(format: OutputFormat, value: &T) -> Result<bool> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Pretty | OutputFormat::Csv => return Ok(false),
    }
    Ok(true)
}

/// One row per finding; a clean result still gets a single row.
pub fn score_csv(kind: &str, result: &ScoreResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["kind", "score", "label", "finding"])?;

    let score = result.score.to_string();
    if result.findings.is_empty() {
        writer.write_record([kind, score.as_str(), result.label.as_str(), ""])?;
    }
    for finding in &result.findings {
        writer.write_record([kind, score.as_str(), result.label.as_str(), finding.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Serialize flat rows as CSV, with a header taken from the field names.
pub fn rows_csv<R: Serialize>(rows: &[R]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Score label colored by band.
pub fn colored_label(label: ScoreLabel) -> ColoredString {
    match label {
        ScoreLabel::Excellent => label.as_str().green().bold(),
        ScoreLabel::Good => label.as_str().cyan().bold(),
        ScoreLabel::Average => label.as_str().yellow().bold(),
        ScoreLabel::Poor => label.as_str().red().bold(),
    }
}

/// Print a score headline and its findings.
pub fn print_score_pretty(title: &str, result: &ScoreResult) {
    println!("{}", title.bold().underline());
    println!();
    println!(
        "  {} {}/100  {}",
        "Score:".bold(),
        result.score.to_string().bold(),
        colored_label(result.label)
    );
    println!();

    if result.findings.is_empty() {
        println!("  {}", "No issues found.".green());
    } else {
        println!("  {}", "Findings:".bold());
        for finding in &result.findings {
            println!("    {} {}", "-".red(), finding);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn csv_has_row_per_finding() {
        let result = ScoreResult::from_total(40, vec!["a".into(), "b, with comma".into()]);
        let csv = score_csv("device", &result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "kind,score,label,finding");
        assert_eq!(lines[1], "device,40,Average,a");
        assert_eq!(lines[2], "device,40,Average,\"b, with comma\"");
    }

    #[test]
    fn csv_clean_result_has_one_row() {
        let result = ScoreResult::from_total(100, Vec::new());
        let csv = score_csv("website", &result).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("website,100,Excellent,"));
    }

    #[derive(Serialize)]
    struct Row {
        key: &'static str,
        title: &'static str,
    }

    #[test]
    fn rows_csv_quotes_fields() {
        let rows = [
            Row { key: "phishing", title: "Phishing" },
            Row { key: "authandaccess", title: "Authentication, Access" },
        ];
        let csv = rows_csv(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, ["key,title", "phishing,Phishing", "authandaccess,\"Authentication, Access\""]);
    }
}
