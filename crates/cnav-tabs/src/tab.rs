//! Course tab value objects.
//!
//! Every tab a course can carry is one variant of [`CourseTab`]. A
//! variant holds only the configuration its type uses; everything else
//! about a type (display name defaults, identifier, movability) is
//! derived by the accessors here, and visibility lives with the
//! resolver. Tabs are plain values: cheap to clone, compared field by
//! field, and never mutated in place during resolution.
//!
//! Serialization goes through [`CourseTab::to_document`] rather than a
//! serde derive so that ephemeral collection items cannot leak into
//! stored configuration.

use crate::document::TabDocument;
use crate::error::TabError;

/// Tab type keys as stored in persisted documents.
pub mod tab_types {
    /// Course content.
    pub const COURSEWARE: &str = "courseware";
    /// Course information and updates page.
    pub const COURSE_INFO: &str = "course_info";
    /// Course wiki.
    pub const WIKI: &str = "wiki";
    /// Internal discussion forums.
    pub const DISCUSSION: &str = "discussion";
    /// Link to an external discussion service.
    pub const EXTERNAL_DISCUSSION: &str = "external_discussion";
    /// Arbitrary external link.
    pub const EXTERNAL_LINK: &str = "external_link";
    /// Standard textbook shelf.
    pub const TEXTBOOKS: &str = "textbooks";
    /// PDF textbook shelf.
    pub const PDF_TEXTBOOKS: &str = "pdf_textbooks";
    /// HTML textbook shelf.
    pub const HTML_TEXTBOOKS: &str = "html_textbooks";
    /// One book from a shelf; ephemeral.
    pub const SINGLE_TEXTBOOK: &str = "single_textbook";
    /// Viewer progress page.
    pub const PROGRESS: &str = "progress";
    /// Authored static content page.
    pub const STATIC_TAB: &str = "static_tab";
    /// Course syllabus.
    pub const SYLLABUS: &str = "syllabus";
    /// Student notes.
    pub const NOTES: &str = "notes";
    /// Peer grading queue.
    pub const PEER_GRADING: &str = "peer_grading";
    /// Staff grading queue.
    pub const STAFF_GRADING: &str = "staff_grading";
    /// Open-ended problem panel.
    pub const OPEN_ENDED: &str = "open_ended";
}

/// Which textbook shelf a collection tab draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextbookKind {
    /// The standard shelf (`course.textbooks`).
    Standard,
    /// The PDF shelf (`course.pdf_textbooks`).
    Pdf,
    /// The HTML shelf (`course.html_textbooks`).
    Html,
}

impl TextbookKind {
    /// Persisted type key of the collection tab for this shelf.
    #[must_use]
    pub fn collection_type(self) -> &'static str {
        match self {
            Self::Standard => tab_types::TEXTBOOKS,
            Self::Pdf => tab_types::PDF_TEXTBOOKS,
            Self::Html => tab_types::HTML_TEXTBOOKS,
        }
    }

    /// Identifier prefix for leaf tabs expanded from this shelf.
    ///
    /// A leaf's full identifier is `{prefix}/{shelf index}`, so ids stay
    /// stable across renders as long as the shelf order is unchanged.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Standard => "textbook",
            Self::Pdf => "pdftextbook",
            Self::Html => "htmltextbook",
        }
    }
}

/// One tab in a course's top-level navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CourseTab {
    /// Course content. Fixed name, pinned in place.
    Courseware,
    /// Course information and updates page. Pinned in place.
    CourseInfo {
        /// Author-supplied display name.
        name: String,
    },
    /// Course wiki. The only hideable type.
    Wiki {
        /// Author-supplied display name.
        name: String,
        /// Hidden by the course author without being removed.
        is_hidden: bool,
    },
    /// Internal discussion forums.
    Discussion {
        /// Author-supplied display name.
        name: String,
    },
    /// Link to an external discussion service. Shown as "Discussion" and
    /// highlighted like the internal forum tab.
    ExternalDiscussion {
        /// Literal link target.
        link: String,
    },
    /// Arbitrary external link. Carries no identifier, so it is never
    /// the active tab.
    ExternalLink {
        /// Author-supplied display name.
        name: String,
        /// Literal link target.
        link: String,
    },
    /// A textbook shelf. Expands into per-book leaf tabs at render time
    /// and has no link of its own.
    TextbookCollection {
        /// Which shelf this collection draws from.
        kind: TextbookKind,
    },
    /// One book from a shelf. Created only while expanding a collection;
    /// never persisted.
    SingleTextbook {
        /// Shelf the book came from.
        kind: TextbookKind,
        /// Position on the shelf, also the link argument.
        index: usize,
        /// Book title shown on the tab.
        name: String,
    },
    /// Viewer progress page.
    Progress {
        /// Author-supplied display name.
        name: String,
    },
    /// Authored static content page.
    StaticTab {
        /// Author-supplied display name.
        name: String,
        /// Slug that keys the page content and the link.
        url_slug: String,
    },
    /// Course syllabus. Fixed name.
    Syllabus,
    /// Student notes.
    Notes {
        /// Author-supplied display name.
        name: String,
    },
    /// Peer grading queue. Fixed name.
    PeerGrading,
    /// Staff grading queue. Fixed name.
    StaffGrading,
    /// Open-ended problem panel. Fixed name.
    OpenEnded,
    /// Tab backed by a registered course view plugin.
    CourseView {
        /// Plugin name; doubles as type key and identifier.
        view_type: String,
        /// Display name: document-supplied or the plugin's title.
        name: String,
        /// Named route the plugin renders under.
        view_name: String,
    },
}

impl CourseTab {
    /// Course information tab with its default display name.
    #[must_use]
    pub fn course_info() -> Self {
        Self::CourseInfo {
            name: "Course Info".to_owned(),
        }
    }

    /// Wiki tab with its default display name, not hidden.
    #[must_use]
    pub fn wiki() -> Self {
        Self::Wiki {
            name: "Wiki".to_owned(),
            is_hidden: false,
        }
    }

    /// Discussion tab with its default display name.
    #[must_use]
    pub fn discussion() -> Self {
        Self::Discussion {
            name: "Discussion".to_owned(),
        }
    }

    /// Progress tab with its default display name.
    #[must_use]
    pub fn progress() -> Self {
        Self::Progress {
            name: "Progress".to_owned(),
        }
    }

    /// The persisted type key for this tab.
    #[must_use]
    pub fn tab_type(&self) -> &str {
        match self {
            Self::Courseware => tab_types::COURSEWARE,
            Self::CourseInfo { .. } => tab_types::COURSE_INFO,
            Self::Wiki { .. } => tab_types::WIKI,
            Self::Discussion { .. } => tab_types::DISCUSSION,
            Self::ExternalDiscussion { .. } => tab_types::EXTERNAL_DISCUSSION,
            Self::ExternalLink { .. } => tab_types::EXTERNAL_LINK,
            Self::TextbookCollection { kind } => kind.collection_type(),
            Self::SingleTextbook { .. } => tab_types::SINGLE_TEXTBOOK,
            Self::Progress { .. } => tab_types::PROGRESS,
            Self::StaticTab { .. } => tab_types::STATIC_TAB,
            Self::Syllabus => tab_types::SYLLABUS,
            Self::Notes { .. } => tab_types::NOTES,
            Self::PeerGrading => tab_types::PEER_GRADING,
            Self::StaffGrading => tab_types::STAFF_GRADING,
            Self::OpenEnded => tab_types::OPEN_ENDED,
            Self::CourseView { view_type, .. } => view_type,
        }
    }

    /// Display name shown on the tab.
    ///
    /// Fixed-name types ignore configuration; the rest return what the
    /// author supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Courseware => "Courseware",
            Self::ExternalDiscussion { .. } => "Discussion",
            Self::TextbookCollection { .. } => "Textbooks",
            Self::Syllabus => "Syllabus",
            Self::PeerGrading => "Peer grading",
            Self::StaffGrading => "Staff grading",
            Self::OpenEnded => "Open Ended Panel",
            Self::CourseInfo { name }
            | Self::Wiki { name, .. }
            | Self::Discussion { name }
            | Self::ExternalLink { name, .. }
            | Self::SingleTextbook { name, .. }
            | Self::Progress { name }
            | Self::StaticTab { name, .. }
            | Self::Notes { name }
            | Self::CourseView { name, .. } => name,
        }
    }

    /// Stable identifier used for uniqueness, ordering, and active-tab
    /// highlighting. `None` for external links, which are never active.
    ///
    /// An external discussion tab shares the identifier of the internal
    /// discussion tab so either highlights the same way; a course
    /// carries at most one of the two.
    #[must_use]
    pub fn tab_id(&self) -> Option<String> {
        match self {
            Self::Courseware => Some(tab_types::COURSEWARE.to_owned()),
            Self::CourseInfo { .. } => Some("info".to_owned()),
            Self::Wiki { .. } => Some(tab_types::WIKI.to_owned()),
            Self::Discussion { .. } | Self::ExternalDiscussion { .. } => {
                Some(tab_types::DISCUSSION.to_owned())
            }
            Self::ExternalLink { .. } => None,
            Self::TextbookCollection { kind } => Some(kind.collection_type().to_owned()),
            Self::SingleTextbook { kind, index, .. } => {
                Some(format!("{}/{index}", kind.id_prefix()))
            }
            Self::Progress { .. } => Some(tab_types::PROGRESS.to_owned()),
            Self::StaticTab { url_slug, .. } => Some(format!("static_tab_{url_slug}")),
            Self::Syllabus => Some(tab_types::SYLLABUS.to_owned()),
            Self::Notes { .. } => Some(tab_types::NOTES.to_owned()),
            Self::PeerGrading => Some(tab_types::PEER_GRADING.to_owned()),
            Self::StaffGrading => Some(tab_types::STAFF_GRADING.to_owned()),
            Self::OpenEnded => Some(tab_types::OPEN_ENDED.to_owned()),
            Self::CourseView { view_type, .. } => Some(view_type.clone()),
        }
    }

    /// Whether course authors may reorder this tab.
    #[must_use]
    pub fn is_movable(&self) -> bool {
        !matches!(
            self,
            Self::Courseware | Self::CourseInfo { .. } | Self::SingleTextbook { .. }
        )
    }

    /// Whether this type supports the hidden flag.
    #[must_use]
    pub fn is_hideable(&self) -> bool {
        matches!(self, Self::Wiki { .. })
    }

    /// Whether the author hid this tab. Always false for types that are
    /// not hideable.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Wiki { is_hidden: true, .. })
    }

    /// Whether this tab expands into leaf tabs at render time.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::TextbookCollection { .. })
    }

    /// Whether this tab is an ephemeral leaf produced by expanding a
    /// collection.
    #[must_use]
    pub fn is_collection_item(&self) -> bool {
        matches!(self, Self::SingleTextbook { .. })
    }

    /// The persisted document for this tab.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::SerializationNotSupported`] for collection
    /// items, which must never reach stored configuration.
    pub fn to_document(&self) -> Result<TabDocument, TabError> {
        if self.is_collection_item() {
            return Err(TabError::SerializationNotSupported(
                tab_types::SINGLE_TEXTBOOK,
            ));
        }

        let mut doc = TabDocument::new(self.tab_type()).with_name(self.name());
        match self {
            Self::Wiki {
                is_hidden: true, ..
            } => doc.is_hidden = Some(true),
            Self::ExternalDiscussion { link } | Self::ExternalLink { link, .. } => {
                doc.link = Some(link.clone());
            }
            Self::StaticTab { url_slug, .. } => doc.url_slug = Some(url_slug.clone()),
            _ => {}
        }
        Ok(doc)
    }
}
