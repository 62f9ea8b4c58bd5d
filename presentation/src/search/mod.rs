//! Interactive search mode

pub mod repl;

pub use repl::{ReplCommand, SearchRepl};
