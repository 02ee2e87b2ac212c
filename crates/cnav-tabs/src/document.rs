//! Persisted tab documents.
//!
//! Course tab configuration is stored as an ordered list of small
//! mappings. Each mapping names a tab type plus the handful of optional
//! keys some types require. Serialization keeps absent keys out of the
//! output so stored documents carry only what their type uses.

use serde::{Deserialize, Serialize};

/// Persisted form of one course tab.
///
/// Which optional keys are required depends on the tab type; the
/// registry's validation enforces that. A document is inert data: it has
/// no identity or behavior until the registry constructs a tab from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDocument {
    /// Tab type key (e.g., "wiki", "static_tab").
    #[serde(rename = "type")]
    pub tab_type: String,

    /// Display name, for types that let authors name the tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Hidden flag, for hideable types. Stored only when true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,

    /// Literal link target, for link tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// URL slug, for static tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_slug: Option<String>,
}

impl TabDocument {
    /// Create a document of the given type with no optional keys set.
    #[must_use]
    pub fn new(tab_type: impl Into<String>) -> Self {
        Self {
            tab_type: tab_type.into(),
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the hidden flag.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.is_hidden = Some(hidden);
        self
    }

    /// Set the literal link target.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the URL slug.
    #[must_use]
    pub fn with_url_slug(mut self, url_slug: impl Into<String>) -> Self {
        self.url_slug = Some(url_slug.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_sets_type_only() {
        let doc = TabDocument::new("wiki");

        assert_eq!(doc.tab_type, "wiki");
        assert!(doc.name.is_none());
        assert!(doc.is_hidden.is_none());
        assert!(doc.link.is_none());
        assert!(doc.url_slug.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let doc = TabDocument::new("static_tab")
            .with_name("Syllabus Archive")
            .with_url_slug("syllabus-archive");

        assert_eq!(doc.name.as_deref(), Some("Syllabus Archive"));
        assert_eq!(doc.url_slug.as_deref(), Some("syllabus-archive"));
    }

    #[test]
    fn test_serialization_skips_absent_keys() {
        let doc = TabDocument::new("courseware");

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json, serde_json::json!({"type": "courseware"}));
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let doc = TabDocument::new("wiki").with_name("Wiki").with_hidden(true);

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"type": "wiki", "name": "Wiki", "is_hidden": true})
        );
    }

    #[test]
    fn test_deserialization_fills_absent_keys_with_none() {
        let doc: TabDocument =
            serde_json::from_str(r#"{"type": "external_link", "link": "https://example.com"}"#)
                .unwrap();

        assert_eq!(doc.tab_type, "external_link");
        assert_eq!(doc.link.as_deref(), Some("https://example.com"));
        assert!(doc.name.is_none());
        assert!(doc.is_hidden.is_none());
    }

    #[test]
    fn test_document_list_round_trip() {
        let docs = vec![
            TabDocument::new("courseware"),
            TabDocument::new("course_info").with_name("Course Info"),
            TabDocument::new("wiki").with_name("Wiki"),
        ];

        let json = serde_json::to_string(&docs).unwrap();
        let restored: Vec<TabDocument> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, docs);
    }
}
