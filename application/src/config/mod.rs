//! Application-level configuration.
//!
//! - [`SearchParams`]: what every outbound search request carries

pub mod search_params;

pub use search_params::SearchParams;
