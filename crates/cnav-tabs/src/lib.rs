//! Course tab model for CNav.
//!
//! This crate provides:
//! - [`CourseTab`]: One tagged variant per tab type, with derived
//!   identity and serialization behavior
//! - [`TabList`]: Ordered per-course configuration with unique
//!   identifiers
//! - [`TabRegistry`]: Document-to-tab materialization, validation, and
//!   course view plugin registration
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), cnav_tabs::TabError> {
//! use cnav_tabs::{TabDocument, TabList, TabRegistry};
//!
//! let docs = vec![
//!     TabDocument::new("courseware"),
//!     TabDocument::new("discussion").with_name("Discussion"),
//!     TabDocument::new("textbooks"),
//! ];
//!
//! let registry = TabRegistry::new();
//! let tabs = TabList::from_documents(&docs, &registry)?;
//!
//! assert_eq!(tabs.len(), 3);
//! assert!(tabs.get("discussion").is_some());
//! # Ok(())
//! # }
//! ```

pub(crate) mod course_view;
pub(crate) mod document;
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod tab;
mod tab_list;

pub use course_view::CourseViewType;
pub use document::TabDocument;
pub use error::TabError;
pub use registry::{TabRegistry, is_builtin_type};
pub use tab::{CourseTab, TextbookKind, tab_types};
pub use tab_list::TabList;

// Re-export the collaborator types appearing in the plugin contract.
pub use cnav_access::Viewer;
pub use cnav_course::Course;
pub use cnav_settings::Settings;
