//! Tab visibility resolution and link reversal for CNav.
//!
//! This crate provides:
//! - [`TabResolver`]: turns a course's configured tabs into the
//!   navigation one viewer actually sees
//! - [`is_tab_visible`]: the per-type visibility predicate
//! - [`RouteTable`]: pattern-based named-route reversal behind the
//!   [`RouteReversal`] trait
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), cnav_views::ResolveError> {
//! use std::sync::Arc;
//!
//! use cnav_access::{MockAccessControl, MockEnrollmentStore, Viewer};
//! use cnav_course::{Course, CourseKey};
//! use cnav_settings::Settings;
//! use cnav_tabs::{TabDocument, TabList, TabRegistry};
//! use cnav_views::{RouteTable, TabResolver};
//!
//! let registry = Arc::new(TabRegistry::new());
//! let tabs = TabList::from_documents(
//!     &[
//!         TabDocument::new("courseware"),
//!         TabDocument::new("course_info").with_name("Course Info"),
//!     ],
//!     &registry,
//! )?;
//!
//! let course = Course::new(CourseKey::new("course-v1:RW+NAV101+2026"), "Navigation 101");
//! let resolver = TabResolver::new(
//!     registry,
//!     Arc::new(MockAccessControl::new()),
//!     Arc::new(MockEnrollmentStore::new().with_enrollment("learner", &course.key)),
//!     Arc::new(RouteTable::course_defaults()),
//! );
//!
//! let viewer = Viewer::authenticated("learner");
//! let nav =
//!     resolver.resolve_visible_tabs(&tabs, &course, &Settings::default(), Some(&viewer))?;
//!
//! assert_eq!(nav.len(), 2);
//! # Ok(())
//! # }
//! ```

pub(crate) mod policy;
pub(crate) mod resolver;
pub(crate) mod routes;

pub use policy::is_tab_visible;
pub use resolver::{NavEntry, ResolveError, ResolvedTab, TabResolver};
pub use routes::{RouteError, RouteReversal, RouteTable, RouteTarget};

// Re-export the tab model types callers hand to the resolver.
pub use cnav_tabs::{CourseTab, TabList, TabRegistry};
