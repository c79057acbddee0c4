//! CLI argument definitions for the contact refinery.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-refinery",
    version,
    about = "Contact Refinery - Clean and deduplicate contact CSV files",
    long_about = "Clean a CSV of contacts through a per-row language-model pass.\n\n\
                  Each row is normalized, validated, and deduplicated; the output\n\
                  is a cleaned contact CSV, a row-level audit report, and a JSON\n\
                  summary of what changed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a contact CSV and write the cleaned outputs.
    Process(Box<ProcessArgs>),

    /// Print the default processing settings as JSON.
    Defaults,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the contact CSV file.
    #[arg(value_name = "CONTACTS_CSV")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <CONTACTS_CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Source column holding the full name.
    #[arg(long = "full-name-column", value_name = "COLUMN")]
    pub full_name_column: Option<String>,

    /// Source column holding the first name (pair with --last-name-column).
    #[arg(long = "first-name-column", value_name = "COLUMN")]
    pub first_name_column: Option<String>,

    /// Source column holding the last name (pair with --first-name-column).
    #[arg(long = "last-name-column", value_name = "COLUMN")]
    pub last_name_column: Option<String>,

    /// Source column holding the phone number (required for processing).
    #[arg(long = "phone-column", value_name = "COLUMN")]
    pub phone_column: Option<String>,

    /// Source column holding the email address.
    #[arg(long = "email-column", value_name = "COLUMN")]
    pub email_column: Option<String>,

    /// Source column holding the address.
    #[arg(long = "address-column", value_name = "COLUMN")]
    pub address_column: Option<String>,

    /// Processing settings JSON file (falls back to documented defaults).
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Inference provider to call.
    #[arg(long = "provider", value_enum, default_value = "groq")]
    pub provider: ProviderArg,

    /// API key for the chosen provider.
    #[arg(long = "api-key", env = "REFINE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model override; each provider has a sensible default.
    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Pacing between inference calls, in milliseconds.
    #[arg(long = "delay-ms", value_name = "MILLIS", default_value_t = 650)]
    pub delay_ms: u64,

    /// Disable the interactive progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// CLI provider choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ProviderArg {
    Groq,
    Openai,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn process_parses_mapping_flags() {
        let cli = Cli::parse_from([
            "contact-refinery",
            "process",
            "contacts.csv",
            "--full-name-column",
            "שם",
            "--phone-column",
            "נייד",
            "--api-key",
            "k",
        ]);
        match cli.command {
            Command::Process(args) => {
                assert_eq!(args.full_name_column.as_deref(), Some("שם"));
                assert_eq!(args.phone_column.as_deref(), Some("נייד"));
                assert_eq!(args.delay_ms, 650);
            }
            Command::Defaults => panic!("expected process command"),
        }
    }
}
