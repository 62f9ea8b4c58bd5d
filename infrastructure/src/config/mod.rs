//! Configuration file loading for medinfo
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MEDINFO_*` environment variables (`MEDINFO_PROVIDER__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./medinfo.toml` or `./.medinfo.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/medinfo/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS,
    FALLBACK_API_KEY_ENV, FileBehaviorConfig, FileConfig, FileLogConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
