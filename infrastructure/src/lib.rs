//! Infrastructure layer for medinfo
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use gemini::{GeminiConfig, GeminiGateway};
pub use logging::JsonlTranscriptLogger;
