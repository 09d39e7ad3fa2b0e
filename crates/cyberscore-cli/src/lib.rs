//! # cyberscore-cli
//!
//! Educational command-line interface for security scoring.
//!
//! ## Features
//!
//! - **Device score**: network, root status, biometric lock, permissions
//! - **Website score**: HTTPS, reputation verdict, domain age, risky content
//! - **Password tools**: strength checker and generator
//! - **Questionnaire**: awareness quiz with topic suggestions
//! - **Educational mode**: `--explain` flag explains what commands do
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod logging;
pub mod output;

pub use cli::run;
