//! Presentation-level configuration
//!
//! REPL behavior settings.

use std::path::{Path, PathBuf};

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Path to history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// The history file to use, `~/` expanded
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|p| p.join("medinfo").join("history.txt")),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_expands_home() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("~/.medinfo_history")),
        };
        let path = config.history_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join(".medinfo_history"));
        }
    }

    #[test]
    fn test_history_path_keeps_absolute() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/history.txt")),
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/history.txt")));
    }

    #[test]
    fn test_default_history_path_under_data_dir() {
        if let Some(path) = ReplConfig::default().history_path() {
            assert!(path.ends_with("medinfo/history.txt"));
        }
    }
}
