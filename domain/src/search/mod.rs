//! Search subdomain: the normalized result of one query and the
//! application state that owns it.

pub mod state;
pub mod value_objects;
