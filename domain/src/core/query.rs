//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A search query (Value Object)
///
/// Always trimmed and never empty. Built from free-text input or from a
/// quick-link title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
}

impl Query {
    /// Trim the input and reject it when nothing is left
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyQuery)
        } else {
            Ok(Self {
                text: trimmed.to_string(),
            })
        }
    }

    /// Get the query text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
