//! Display block types produced by the renderer

use serde::{Deserialize, Serialize};

/// A run of text inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One rendered line of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayBlock {
    Heading { level: u8, text: String },
    ListItem { text: String },
    LineBreak,
    Paragraph { spans: Vec<Span> },
}

impl DisplayBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Self::ListItem { text: text.into() }
    }

    pub fn paragraph(spans: Vec<Span>) -> Self {
        Self::Paragraph { spans }
    }
}
