//! Terminal output: result formatting and static screens

pub mod console;
pub mod screens;
