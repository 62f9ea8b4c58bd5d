//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result card with timestamp, disclaimer and sources
    Full,
    /// Rendered answer only
    Content,
    /// JSON output
    Json,
}

impl From<OutputFormat> for medinfo_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Content => Self::Content,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for medinfo
#[derive(Parser, Debug)]
#[command(name = "medinfo")]
#[command(author, version, about = "MedInfo AI - Thai medical information and first-aid search")]
#[command(long_about = r#"
MedInfo AI answers questions about diseases and first aid in Thai, using
Gemini with Google Search grounding, and lists the sources it used.

The answer is general information only and never replaces a doctor.
In an emergency call 1669.

The API key is read from $API_KEY (or $GEMINI_API_KEY).

Configuration files are loaded from (in priority order):
1. MEDINFO_* environment variables
2. --config <path>     Explicit config file
3. ./medinfo.toml      Project-level config
4. ~/.config/medinfo/config.toml   Global config

Example:
  medinfo "ไข้เลือดออก"
  medinfo -m gemini-2.5-pro -o content "การทำ CPR"
  medinfo -i
"#)]
pub struct Cli {
    /// What to look up (starts interactive mode when omitted)
    pub query: Option<String>,

    /// Start interactive search mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of search events to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Write logs to daily-rotated files in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
