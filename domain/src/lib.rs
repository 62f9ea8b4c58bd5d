//! Domain layer for medinfo
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Query**: trimmed, non-empty search text
//! - **SearchResult**: answer text, deduplicated cited sources, local timestamp
//! - **AppState**: `Idle → Loading → Success | Error`
//! - **Rendering**: one-pass line classifier turning answer text into
//!   [`DisplayBlock`]s

pub mod catalog;
pub mod config;
pub mod core;
pub mod prompt;
pub mod render;
pub mod search;

// Re-export commonly used types
pub use catalog::{
    DISEASE_LINKS, EMERGENCY_NUMBER, FIRST_AID_LINKS, LinkCategory, QuickLink, all_links,
    find_link,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, query::Query, string::truncate};
pub use prompt::PromptTemplate;
pub use render::{DisplayBlock, Span, render};
pub use search::{
    state::AppState,
    value_objects::{GroundingSource, NO_INFORMATION_FOUND, SearchResult, dedup_sources},
};
