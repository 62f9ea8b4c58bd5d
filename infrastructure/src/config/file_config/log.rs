//! Transcript configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL transcript path; no transcript when unset
    pub transcript: Option<String>,
}
