//! Configuration value objects shared by every layer.

mod output_format;

pub use output_format::OutputFormat;
