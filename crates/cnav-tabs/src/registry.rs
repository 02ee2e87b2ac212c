//! Tab type registry.
//!
//! The registry is the single place documents become [`CourseTab`]
//! values. Builtin types are matched directly; anything else is looked
//! up among registered [`CourseViewType`] plugins. Validation applies
//! the per-type required-field table without materializing a tab.

use std::collections::HashMap;

use crate::course_view::CourseViewType;
use crate::document::TabDocument;
use crate::error::TabError;
use crate::tab::{CourseTab, TextbookKind, tab_types};

/// Type keys the registry resolves without consulting plugins.
///
/// `single_textbook` is reserved even though it cannot be constructed
/// from a document, so no plugin can claim the name.
const BUILTIN_TYPES: [&str; 17] = [
    tab_types::COURSEWARE,
    tab_types::COURSE_INFO,
    tab_types::WIKI,
    tab_types::DISCUSSION,
    tab_types::EXTERNAL_DISCUSSION,
    tab_types::EXTERNAL_LINK,
    tab_types::TEXTBOOKS,
    tab_types::PDF_TEXTBOOKS,
    tab_types::HTML_TEXTBOOKS,
    tab_types::SINGLE_TEXTBOOK,
    tab_types::PROGRESS,
    tab_types::STATIC_TAB,
    tab_types::SYLLABUS,
    tab_types::NOTES,
    tab_types::PEER_GRADING,
    tab_types::STAFF_GRADING,
    tab_types::OPEN_ENDED,
];

/// Whether `tab_type` is handled by the registry itself rather than a
/// plugin.
#[must_use]
pub fn is_builtin_type(tab_type: &str) -> bool {
    BUILTIN_TYPES.contains(&tab_type)
}

/// Materializes tabs from persisted documents and hosts course view
/// plugins.
#[derive(Default)]
pub struct TabRegistry {
    course_views: HashMap<String, Box<dyn CourseViewType>>,
}

impl TabRegistry {
    /// Registry with no course view plugins. All builtin types are
    /// still constructible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a course view plugin under its own name.
    ///
    /// A plugin whose name matches a builtin type is ignored so that
    /// builtin semantics cannot be shadowed. Registering a second
    /// plugin under an already registered name replaces the first.
    pub fn register(&mut self, view: Box<dyn CourseViewType>) {
        let name = view.name().to_owned();
        if is_builtin_type(&name) {
            tracing::warn!(
                view_type = %name,
                "ignoring course view that shadows a builtin tab type"
            );
            return;
        }
        if self.course_views.insert(name.clone(), view).is_some() {
            tracing::warn!(view_type = %name, "replacing registered course view");
        }
    }

    /// Registers a course view plugin, builder style.
    #[must_use]
    pub fn with_course_view(mut self, view: Box<dyn CourseViewType>) -> Self {
        self.register(view);
        self
    }

    /// Looks up a registered course view plugin by name.
    #[must_use]
    pub fn course_view(&self, name: &str) -> Option<&dyn CourseViewType> {
        self.course_views.get(name).map(Box::as_ref)
    }

    /// Names of all registered course view plugins, sorted.
    #[must_use]
    pub fn course_view_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.course_views.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Materializes a tab from a persisted document.
    ///
    /// Course view documents may omit `name`, in which case the
    /// plugin's title is used.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::UnknownTabType`] when the document's type is
    /// neither builtin nor a registered plugin (this includes
    /// `single_textbook`, which only exists transiently), and
    /// [`TabError::MissingTabField`] when required configuration is
    /// absent.
    pub fn construct(&self, doc: &TabDocument) -> Result<CourseTab, TabError> {
        let tab = match doc.tab_type.as_str() {
            tab_types::COURSEWARE => CourseTab::Courseware,
            tab_types::COURSE_INFO => CourseTab::CourseInfo {
                name: required_field(doc, "name", &doc.name)?,
            },
            tab_types::WIKI => CourseTab::Wiki {
                name: required_field(doc, "name", &doc.name)?,
                is_hidden: doc.is_hidden.unwrap_or(false),
            },
            tab_types::DISCUSSION => CourseTab::Discussion {
                name: required_field(doc, "name", &doc.name)?,
            },
            tab_types::EXTERNAL_DISCUSSION => CourseTab::ExternalDiscussion {
                link: required_field(doc, "link", &doc.link)?,
            },
            tab_types::EXTERNAL_LINK => match (doc.name.clone(), doc.link.clone()) {
                (Some(name), Some(link)) => CourseTab::ExternalLink { name, link },
                (name, link) => {
                    let mut fields = Vec::new();
                    if name.is_none() {
                        fields.push("name");
                    }
                    if link.is_none() {
                        fields.push("link");
                    }
                    return Err(TabError::MissingTabField {
                        tab_type: doc.tab_type.clone(),
                        fields,
                    });
                }
            },
            tab_types::TEXTBOOKS => CourseTab::TextbookCollection {
                kind: TextbookKind::Standard,
            },
            tab_types::PDF_TEXTBOOKS => CourseTab::TextbookCollection {
                kind: TextbookKind::Pdf,
            },
            tab_types::HTML_TEXTBOOKS => CourseTab::TextbookCollection {
                kind: TextbookKind::Html,
            },
            tab_types::PROGRESS => CourseTab::Progress {
                name: required_field(doc, "name", &doc.name)?,
            },
            tab_types::STATIC_TAB => match (doc.name.clone(), doc.url_slug.clone()) {
                (Some(name), Some(url_slug)) => CourseTab::StaticTab { name, url_slug },
                (name, url_slug) => {
                    let mut fields = Vec::new();
                    if name.is_none() {
                        fields.push("name");
                    }
                    if url_slug.is_none() {
                        fields.push("url_slug");
                    }
                    return Err(TabError::MissingTabField {
                        tab_type: doc.tab_type.clone(),
                        fields,
                    });
                }
            },
            tab_types::SYLLABUS => CourseTab::Syllabus,
            tab_types::NOTES => CourseTab::Notes {
                name: required_field(doc, "name", &doc.name)?,
            },
            tab_types::PEER_GRADING => CourseTab::PeerGrading,
            tab_types::STAFF_GRADING => CourseTab::StaffGrading,
            tab_types::OPEN_ENDED => CourseTab::OpenEnded,
            other => {
                let Some(view) = self.course_view(other) else {
                    return Err(TabError::UnknownTabType(other.to_owned()));
                };
                CourseTab::CourseView {
                    view_type: other.to_owned(),
                    name: doc
                        .name
                        .clone()
                        .unwrap_or_else(|| view.title().to_owned()),
                    view_name: view.view_name().to_owned(),
                }
            }
        };
        Ok(tab)
    }

    /// Checks a document against the per-type required-field table.
    ///
    /// This is the authoring-time check and is deliberately looser than
    /// [`construct`](Self::construct) for external links, whose name
    /// requirement is enforced only at materialization.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::UnknownTabType`] for unregistered types and
    /// [`TabError::MissingTabField`] listing every absent required
    /// field.
    pub fn validate_document(&self, doc: &TabDocument) -> Result<(), TabError> {
        let required: &[&'static str] = match doc.tab_type.as_str() {
            tab_types::COURSE_INFO
            | tab_types::PROGRESS
            | tab_types::WIKI
            | tab_types::DISCUSSION
            | tab_types::NOTES => &["name"],
            tab_types::EXTERNAL_DISCUSSION | tab_types::EXTERNAL_LINK => &["link"],
            tab_types::STATIC_TAB => &["name", "url_slug"],
            tab_types::COURSEWARE
            | tab_types::TEXTBOOKS
            | tab_types::PDF_TEXTBOOKS
            | tab_types::HTML_TEXTBOOKS
            | tab_types::SYLLABUS
            | tab_types::PEER_GRADING
            | tab_types::STAFF_GRADING
            | tab_types::OPEN_ENDED => &[],
            other => {
                if self.course_views.contains_key(other) {
                    &[]
                } else {
                    return Err(TabError::UnknownTabType(other.to_owned()));
                }
            }
        };

        let missing: Vec<&'static str> = required
            .iter()
            .copied()
            .filter(|field| {
                let value = match *field {
                    "name" => &doc.name,
                    "link" => &doc.link,
                    _ => &doc.url_slug,
                };
                value.is_none()
            })
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TabError::MissingTabField {
                tab_type: doc.tab_type.clone(),
                fields: missing,
            })
        }
    }

    /// Whether a document passes [`validate_document`](Self::validate_document).
    #[must_use]
    pub fn is_valid_document(&self, doc: &TabDocument) -> bool {
        self.validate_document(doc).is_ok()
    }
}

impl std::fmt::Debug for TabRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabRegistry")
            .field("course_views", &self.course_view_names())
            .finish()
    }
}

fn required_field(
    doc: &TabDocument,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, TabError> {
    value.clone().ok_or_else(|| TabError::MissingTabField {
        tab_type: doc.tab_type.clone(),
        fields: vec![field],
    })
}
