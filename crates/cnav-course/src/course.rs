//! Course identity and the configuration flags read by tab resolution.
//!
//! [`Course`] is a read model: the navigation engine never mutates it and
//! never persists it. Embedders load it from their own course store and
//! hand a reference to the resolver for the duration of one request.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::textbook::{HtmlTextbook, PdfTextbook, Textbook};

/// Opaque printable course identifier.
///
/// The engine treats the key as an atom: it is compared, hashed, and
/// substituted into route patterns, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseKey(String);

impl CourseKey {
    /// Create a course key from its string form.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The string form of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Course configuration as seen by tab resolution.
///
/// Only the fields that influence tab visibility or collection expansion
/// are modeled. All flags default to `false` so fixtures and stored
/// documents only spell out what they enable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier, used to build tab links.
    pub key: CourseKey,
    /// Human-readable course name.
    pub display_name: String,
    /// Hide the progress tab for this course regardless of viewer role.
    #[serde(default)]
    pub hide_progress_tab: bool,
    /// Open the course wiki to viewers without an enrollment.
    #[serde(default)]
    pub allow_public_wiki_access: bool,
    /// True when the course has a syllabus to show.
    #[serde(default)]
    pub syllabus_present: bool,
    /// True when this course is a custom child instance derived from a
    /// parent course. Child instances run with restricted features.
    #[serde(default)]
    pub is_ccx_child: bool,
    /// Standard textbook shelf, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub textbooks: Vec<Textbook>,
    /// PDF textbook shelf, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pdf_textbooks: Vec<PdfTextbook>,
    /// HTML textbook shelf, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub html_textbooks: Vec<HtmlTextbook>,
}

impl Course {
    /// Create a course with all flags off and empty textbook shelves.
    #[must_use]
    pub fn new(key: CourseKey, display_name: impl Into<String>) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            hide_progress_tab: false,
            allow_public_wiki_access: false,
            syllabus_present: false,
            is_ccx_child: false,
            textbooks: Vec::new(),
            pdf_textbooks: Vec::new(),
            html_textbooks: Vec::new(),
        }
    }

    /// Append an entry to the standard textbook shelf.
    #[must_use]
    pub fn with_textbook(mut self, title: impl Into<String>) -> Self {
        self.textbooks.push(Textbook::new(title));
        self
    }

    /// Append an entry to the PDF textbook shelf.
    #[must_use]
    pub fn with_pdf_textbook(mut self, tab_title: impl Into<String>) -> Self {
        self.pdf_textbooks.push(PdfTextbook::new(tab_title));
        self
    }

    /// Append an entry to the HTML textbook shelf.
    #[must_use]
    pub fn with_html_textbook(mut self, tab_title: impl Into<String>) -> Self {
        self.html_textbooks.push(HtmlTextbook::new(tab_title));
        self
    }
}
