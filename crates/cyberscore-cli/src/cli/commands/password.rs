//! `cyberscore password` - Password strength checker and generator.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use cyberscore_core::password::{generate_password, PasswordStrength, StrengthReport};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::{PasswordArgs, PasswordCommands};
use crate::education::Explain;
use crate::output::{print_structured, rows_csv, OutputFormat};

#[derive(Serialize)]
struct CheckOutput {
    strength: PasswordStrength,
    criteria: StrengthReport,
}

/// Flat form of [`CheckOutput`] for CSV.
#[derive(Serialize)]
struct CheckRow {
    strength: PasswordStrength,
    long_enough: bool,
    has_uppercase: bool,
    has_digit: bool,
    has_special: bool,
}

#[derive(Serialize)]
struct GenerateOutput {
    password: String,
    strength: PasswordStrength,
}

#[derive(Tabled)]
struct CriterionRow {
    #[tabled(rename = "Criterion")]
    name: &'static str,
    #[tabled(rename = "Met")]
    met: String,
}

pub fn execute(ctx: &Context, args: PasswordArgs) -> Result<()> {
    match args.command {
        PasswordCommands::Check { password } => check(ctx, &password),
        PasswordCommands::Generate { length } => {
            generate(ctx, length.unwrap_or(ctx.config.password_length))
        }
    }
}

fn strength_colored(strength: PasswordStrength) -> ColoredString {
    let text = strength.to_string();
    match strength {
        PasswordStrength::Weak => text.red().bold(),
        PasswordStrength::Medium => text.yellow().bold(),
        PasswordStrength::Strong => text.green().bold(),
    }
}

fn check(ctx: &Context, password: &str) -> Result<()> {
    if ctx.show_explanation() {
        Explain::password_check().print();
    }

    let criteria = StrengthReport::evaluate(password);
    let output = CheckOutput {
        strength: criteria.strength(),
        criteria,
    };
    if print_structured(ctx.output_format, &output)? {
        return Ok(());
    }

    if ctx.output_format == OutputFormat::Csv {
        let row = CheckRow {
            strength: output.strength,
            long_enough: criteria.long_enough,
            has_uppercase: criteria.has_uppercase,
            has_digit: criteria.has_digit,
            has_special: criteria.has_special,
        };
        print!("{}", rows_csv(&[row])?);
        return Ok(());
    }

    println!("{} {}", "Strength:".bold(), strength_colored(output.strength));
    println!();

    let mark = |met: bool| if met { "yes".green().to_string() } else { "no".red().to_string() };
    let rows = vec![
        CriterionRow { name: "At least 8 characters", met: mark(criteria.long_enough) },
        CriterionRow { name: "Uppercase letter", met: mark(criteria.has_uppercase) },
        CriterionRow { name: "Digit", met: mark(criteria.has_digit) },
        CriterionRow { name: "Symbol (@$!%*?&#)", met: mark(criteria.has_special) },
    ];
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");

    if output.strength != PasswordStrength::Strong {
        println!();
        ctx.tip("Try: cyberscore password generate");
    }

    Ok(())
}

fn generate(ctx: &Context, length: usize) -> Result<()> {
    if ctx.show_explanation() {
        Explain::password_generate(length).print();
    }

    let password = generate_password(length)?;
    let strength = cyberscore_core::password::check_strength(&password);

    let output = GenerateOutput { password, strength };
    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            print_structured(ctx.output_format, &output)?;
        }
        OutputFormat::Csv => print!("{}", rows_csv(&[output])?),
        OutputFormat::Pretty => {
            let GenerateOutput { password, strength } = output;
            println!("{}", password.bold());
            println!();
            println!("{} {}", "Strength:".bold(), strength_colored(strength));
        }
    }

    Ok(())
}
