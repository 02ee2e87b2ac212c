//! Viewer identity and access collaborators for the cnav navigation
//! engine.
//!
//! Tab visibility asks two questions about the viewer: staff role and
//! enrollment. This crate provides:
//!
//! - [`Viewer`], the identity a tab list is resolved for
//! - [`AccessControl`] and [`EnrollmentStore`] traits for the role and
//!   enrollment stores the embedder fronts
//! - [`MockAccessControl`] and [`MockEnrollmentStore`] for testing
//!   (behind the `mock` feature flag)

mod access;
#[cfg(feature = "mock")]
mod mock;
mod viewer;

pub use access::{AccessControl, AccessError, AccessErrorKind, EnrollmentStore};
#[cfg(feature = "mock")]
pub use mock::{MockAccessControl, MockEnrollmentStore};
pub use viewer::Viewer;
