//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use cyberscore_core::{BiometricStatus, NetworkKind};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Security scoring and awareness training from the terminal
///
/// Score a device or a website, check passwords, and take the
/// awareness questionnaire. Use --explain on any command to learn
/// what it looks at.
#[derive(Parser, Debug)]
#[command(name = "cyberscore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a device and its network connection
    Device(DeviceArgs),

    /// Score a website from its URL, reputation, WHOIS and content
    Website(WebsiteArgs),

    /// Check password strength or generate a password
    Password(PasswordArgs),

    /// Take the cyber awareness questionnaire
    Quiz(QuizArgs),

    /// Browse lesson modules and further reading
    Lessons(LessonsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Device command
// ============================================================================

#[derive(Args, Debug)]
pub struct DeviceArgs {
    /// Device report file (JSON, or TOML with a .toml extension)
    #[arg(short, long)]
    pub from: Option<String>,

    /// Current network type (wifi, cellular, ethernet, none, other)
    #[arg(short, long)]
    pub network: Option<NetworkKind>,

    /// Whether the device is rooted or jailbroken
    #[arg(long)]
    pub rooted: Option<bool>,

    /// Biometric state (enrolled, not-enrolled, unavailable)
    #[arg(short, long)]
    pub biometric: Option<BiometricStatus>,

    /// Whether camera permission is granted
    #[arg(long)]
    pub camera: Option<bool>,

    /// Whether location permission is granted
    #[arg(long)]
    pub location: Option<bool>,
}

// ============================================================================
// Website command
// ============================================================================

#[derive(Args, Debug)]
pub struct WebsiteArgs {
    /// URL being analysed (https:// is assumed without a scheme)
    #[arg(short, long)]
    pub url: String,

    /// Reputation verdict, if already known
    #[arg(long, conflicts_with = "reputation")]
    pub malicious: Option<bool>,

    /// File holding a reputation service JSON response
    #[arg(long)]
    pub reputation: Option<String>,

    /// Domain age in years, if already known
    #[arg(long, conflicts_with = "whois", allow_negative_numbers = true)]
    pub domain_age: Option<f64>,

    /// File holding raw WHOIS output for the domain
    #[arg(long)]
    pub whois: Option<String>,

    /// Page text to scan for risk keywords
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// File holding the fetched page text
    #[arg(long)]
    pub content_file: Option<String>,
}

// ============================================================================
// Password command
// ============================================================================

#[derive(Args, Debug)]
pub struct PasswordArgs {
    #[command(subcommand)]
    pub command: PasswordCommands,
}

#[derive(Subcommand, Debug)]
pub enum PasswordCommands {
    /// Rate a password's strength
    Check {
        /// Password to rate
        password: String,
    },

    /// Generate a strong random password
    Generate {
        /// Password length (4 to 128)
        #[arg(short, long)]
        length: Option<usize>,
    },
}

// ============================================================================
// Quiz command
// ============================================================================

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// JSON file with one answer per question (string or null)
    #[arg(short, long)]
    pub answers: Option<String>,
}

// ============================================================================
// Lessons command
// ============================================================================

#[derive(Args, Debug)]
pub struct LessonsArgs {
    /// Module key (introtocyber, authandaccess, phishing, securebrowsing, publicwifi)
    pub module: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., output_format, password_length)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    shellexpand::full(raw).map_or_else(|_| PathBuf::from(raw), |p| PathBuf::from(p.into_owned()))
}
