//! Prompt domain
//!
//! The fixed system instruction and the per-query prompt sent to the provider.

mod template;

pub use template::PromptTemplate;
