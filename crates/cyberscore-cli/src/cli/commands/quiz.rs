//! `cyberscore quiz` - Cyber awareness questionnaire.

use anyhow::{Context as _, Result};
use colored::Colorize;
use cyberscore_core::lessons::LessonModule;
use cyberscore_core::quiz::{awareness_questions, grade, Question, QuizReport};
use dialoguer::{theme::ColorfulTheme, Select};
use serde::Serialize;
use tracing::info;

use super::{read_required_file, Context};
use crate::cli::args::QuizArgs;
use crate::education::Explain;
use crate::output::{print_structured, rows_csv, OutputFormat};

#[derive(Serialize)]
struct ReportRow {
    correct: usize,
    total: usize,
    suggested_topics: String,
}

pub fn execute(ctx: &Context, args: QuizArgs) -> Result<()> {
    if ctx.show_explanation() {
        Explain::quiz().print();
    }

    let questions = awareness_questions();
    let answers = match &args.answers {
        Some(path) => load_answers(path)?,
        None => ask(questions)?,
    };

    let report = grade(questions, &answers)?;
    info!(correct = report.correct, total = report.total, "questionnaire graded");

    if print_structured(ctx.output_format, &report)? {
        return Ok(());
    }
    match ctx.output_format {
        OutputFormat::Csv => {
            let row = ReportRow {
                correct: report.correct,
                total: report.total,
                suggested_topics: report.suggested_topics.join(";"),
            };
            print!("{}", rows_csv(&[row])?);
        }
        _ => print_report(ctx, &report),
    }

    Ok(())
}

/// Answers file: a JSON array with one string (or null) per question.
fn load_answers(path: &str) -> Result<Vec<Option<String>>> {
    let content = read_required_file(path)?;
    serde_json::from_str(&content).with_context(|| format!("parsing answers from {path}"))
}

fn ask(questions: &[Question]) -> Result<Vec<Option<String>>> {
    let theme = ColorfulTheme::default();
    let mut answers = Vec::with_capacity(questions.len());

    for (i, question) in questions.iter().enumerate() {
        let choice = Select::with_theme(&theme)
            .with_prompt(format!(
                "[{}/{}] {}",
                i + 1,
                questions.len(),
                question.prompt
            ))
            .items(question.options)
            .default(0)
            .interact_opt()?;
        // Esc skips the question
        answers.push(choice.map(|idx| question.options[idx].to_string()));
    }

    Ok(answers)
}

fn print_report(ctx: &Context, report: &QuizReport) {
    println!("{}", "Quiz Result".bold().underline());
    println!();
    println!(
        "  {} {}/{}",
        "Your Cyber Awareness Score:".bold(),
        report.correct.to_string().bold(),
        report.total
    );
    println!();

    if report.is_perfect() {
        println!("  {}", "Perfect score!".green().bold());
        return;
    }

    println!("  {}", "Suggested Topics to Review:".bold());
    for topic in &report.suggested_topics {
        match LessonModule::for_topic(topic) {
            Some(module) => println!(
                "    {} {}  {}",
                "-".yellow(),
                topic,
                format!("(cyberscore lessons {})", module.key()).dimmed()
            ),
            None => println!("    {} {}", "-".yellow(), topic),
        }
    }
    println!();
    ctx.tip("Retake the quiz after reviewing to track your progress.");
}
