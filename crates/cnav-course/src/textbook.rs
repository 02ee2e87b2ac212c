//! Textbook shelf entries attached to a course.
//!
//! A course carries three independent ordered shelves. Entries on the
//! standard shelf carry a `title`; PDF and HTML entries carry a `tab_title`
//! because authoring tools store the display label under that key.

use serde::{Deserialize, Serialize};

/// Entry on the standard textbook shelf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textbook {
    /// Display title shown on the expanded textbook tab.
    pub title: String,
}

impl Textbook {
    /// Create a textbook entry with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Entry on the PDF textbook shelf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfTextbook {
    /// Display label shown on the expanded textbook tab.
    pub tab_title: String,
}

impl PdfTextbook {
    /// Create a PDF textbook entry with the given tab title.
    #[must_use]
    pub fn new(tab_title: impl Into<String>) -> Self {
        Self {
            tab_title: tab_title.into(),
        }
    }
}

/// Entry on the HTML textbook shelf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlTextbook {
    /// Display label shown on the expanded textbook tab.
    pub tab_title: String,
}

impl HtmlTextbook {
    /// Create an HTML textbook entry with the given tab title.
    #[must_use]
    pub fn new(tab_title: impl Into<String>) -> Self {
        Self {
            tab_title: tab_title.into(),
        }
    }
}
