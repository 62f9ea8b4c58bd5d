//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Blank input. Handled locally and never shown to the user.
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Unknown quick link: {0}")]
    UnknownQuickLink(String),
}

impl DomainError {
    /// Check if this error should stay silent in the UI
    pub fn is_silent(&self) -> bool {
        matches!(self, DomainError::EmptyQuery)
    }
}
