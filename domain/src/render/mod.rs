//! Result rendering: free-text answer → display blocks.
//!
//! The provider answers with a small subset of markdown. This module turns
//! that text into [`DisplayBlock`]s with a one-pass, line-at-a-time
//! classifier. It is deliberately **not** a markdown parser:
//!
//! | Line starts with | Block |
//! |------------------|-------|
//! | `# ` / `## ` / `### ` | [`DisplayBlock::Heading`] level 1 / 2 / 3 |
//! | `- ` / `* ` | [`DisplayBlock::ListItem`] |
//! | nothing but whitespace | [`DisplayBlock::LineBreak`] |
//! | anything else | [`DisplayBlock::Paragraph`] with `**bold**` spans |
//!
//! There is no escaping, no nesting and no construct spanning more than one
//! line. Consecutive list items stay independent blocks. Malformed bold
//! markers are kept as plain text; rendering never fails.

mod blocks;
mod markup;

pub use blocks::{DisplayBlock, Span};
pub use markup::{render, split_bold};
