//! `cyberscore lessons` - Lesson modules and further reading.

use anyhow::Result;
use colored::Colorize;
use cyberscore_core::lessons::{Article, LessonModule};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::LessonsArgs;
use crate::output::{print_structured, rows_csv, OutputFormat};

#[derive(Tabled, Serialize)]
struct ModuleRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Module")]
    title: &'static str,
    #[tabled(rename = "Articles")]
    articles: usize,
}

#[derive(Serialize)]
struct ModuleOutput {
    key: &'static str,
    title: &'static str,
    summary: &'static str,
    articles: &'static [Article],
}

impl From<LessonModule> for ModuleOutput {
    fn from(module: LessonModule) -> Self {
        Self {
            key: module.key(),
            title: module.title(),
            summary: module.summary(),
            articles: module.articles(),
        }
    }
}

pub fn execute(ctx: &Context, args: LessonsArgs) -> Result<()> {
    match args.module {
        None => list(ctx),
        Some(key) => {
            let module: LessonModule = key.parse().map_err(|_| {
                anyhow::anyhow!(
                    "No articles available for module '{}'.\n\
                     Run 'cyberscore lessons' to see the available modules.",
                    key
                )
            })?;
            show(ctx, module)
        }
    }
}

fn list(ctx: &Context) -> Result<()> {
    let modules: Vec<ModuleOutput> = LessonModule::ALL.into_iter().map(ModuleOutput::from).collect();
    if print_structured(ctx.output_format, &modules)? {
        return Ok(());
    }

    let rows: Vec<ModuleRow> = modules
        .iter()
        .map(|m| ModuleRow {
            key: m.key,
            title: m.title,
            articles: m.articles.len(),
        })
        .collect();
    if ctx.output_format == OutputFormat::Csv {
        print!("{}", rows_csv(&rows)?);
        return Ok(());
    }

    println!("{}", Table::new(&rows).with(Style::rounded()));
    println!();
    ctx.tip("Open a module with: cyberscore lessons <key>");
    Ok(())
}

fn show(ctx: &Context, module: LessonModule) -> Result<()> {
    let output = ModuleOutput::from(module);
    if print_structured(ctx.output_format, &output)? {
        return Ok(());
    }

    if ctx.output_format == OutputFormat::Csv {
        print!("{}", rows_csv(output.articles)?);
        return Ok(());
    }

    println!("{}", output.title.bold().underline());
    println!();
    println!("{}", output.summary);
    println!();
    println!("{}", "Further reading:".bold());
    for (i, article) in output.articles.iter().enumerate() {
        println!("  {}. {}", i + 1, article.title);
        println!("     {}", article.link.cyan().underline());
    }
    Ok(())
}
