//! Presentation layer for medinfo
//!
//! This crate contains CLI definitions, output formatters,
//! the loading spinner, and the interactive search interface.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod search;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerReporter;
pub use search::{ReplCommand, SearchRepl, repl::render_state};
