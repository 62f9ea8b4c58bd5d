//! Application state machine value

use super::value_objects::SearchResult;
use serde::Serialize;

/// What the result area currently shows
///
/// ```text
/// Idle ──submit──▶ Loading ──ok──▶ Success
///                     │  ▲            │
///                     │  └──submit────┤
///                     └──err──▶ Error ┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum AppState {
    #[default]
    Idle,
    Loading,
    Success(SearchResult),
    Error(String),
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Idle => "idle",
            AppState::Loading => "loading",
            AppState::Success(_) => "success",
            AppState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AppState::Loading)
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            AppState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AppState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(AppState::default(), AppState::Idle);
    }

    #[test]
    fn test_accessors() {
        let result = SearchResult::new("x", vec![], "09:00:00");
        let success = AppState::Success(result.clone());
        assert_eq!(success.result(), Some(&result));
        assert!(success.error().is_none());

        let error = AppState::Error("boom".to_string());
        assert_eq!(error.error(), Some("boom"));
        assert!(!error.is_loading());
        assert!(AppState::Loading.is_loading());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(AppState::Error("x".to_string())).unwrap();
        assert_eq!(json["state"], "error");
        assert_eq!(json["data"], "x");
    }
}
