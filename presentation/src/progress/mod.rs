//! Progress display driven by state transitions

pub mod reporter;
