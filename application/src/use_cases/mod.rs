//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod search_controller;
pub mod search_medical_info;
