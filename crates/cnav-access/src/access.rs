//! Access collaborator traits and error type.
//!
//! Tab visibility depends on two questions the engine cannot answer by
//! itself: does this viewer hold a staff role, and does this viewer hold
//! an active enrollment. [`AccessControl`] and [`EnrollmentStore`] put
//! those questions behind traits so embedders can front their own role
//! and enrollment stores, and tests can use in-memory fakes.
//!
//! A collaborator failure is an error, not a "no". Resolution propagates
//! [`AccessError`] instead of silently dropping tabs.

use cnav_course::CourseKey;

use crate::viewer::Viewer;

/// Semantic error categories for access lookups.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessErrorKind {
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Lookup timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Access lookup error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct AccessError {
    /// Semantic error category.
    pub kind: AccessErrorKind,
    /// Backend identifier (e.g., "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AccessError {
    /// Create a new access error.
    #[must_use]
    pub fn new(kind: AccessErrorKind) -> Self {
        Self {
            kind,
            backend: None,
            source: None,
        }
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            AccessErrorKind::Unavailable => "Access backend unavailable",
            AccessErrorKind::Timeout => "Access lookup timed out",
            AccessErrorKind::Other => "Access lookup failed",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Role lookup for course staff.
pub trait AccessControl: Send + Sync {
    /// Whether the viewer holds a staff role for the given course, either
    /// on the course itself or globally.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] if the role store cannot be queried.
    fn has_staff_access(&self, viewer: &Viewer, course: &CourseKey) -> Result<bool, AccessError>;
}

/// Enrollment lookup.
pub trait EnrollmentStore: Send + Sync {
    /// Whether the viewer holds an active enrollment in the given course.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] if the enrollment store cannot be queried.
    fn is_enrolled(&self, viewer: &Viewer, course: &CourseKey) -> Result<bool, AccessError>;
}
