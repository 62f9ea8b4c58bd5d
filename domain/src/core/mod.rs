//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models the search can be sent to
//! - [`query::Query`]: a validated, trimmed search query
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
pub mod string;
