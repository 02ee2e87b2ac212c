//! Mock access collaborators for testing.
//!
//! Provides [`MockAccessControl`] and [`MockEnrollmentStore`] for unit
//! testing without a role or enrollment backend.

use std::collections::HashSet;

use cnav_course::CourseKey;

use crate::access::{AccessControl, AccessError, AccessErrorKind, EnrollmentStore};
use crate::viewer::Viewer;

/// Mock role store for testing.
///
/// Holds staff grants in memory. Use the builder methods to configure
/// the mock with test data.
///
/// # Example
///
/// ```ignore
/// use cnav_access::{AccessControl, MockAccessControl, Viewer};
/// use cnav_course::CourseKey;
///
/// let key = CourseKey::new("org/course/run");
/// let access = MockAccessControl::new().with_staff("edna", &key);
///
/// let edna = Viewer::authenticated("edna");
/// assert!(access.has_staff_access(&edna, &key).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MockAccessControl {
    course_staff: HashSet<(String, String)>,
    global_staff: HashSet<String>,
    fail: bool,
}

impl MockAccessControl {
    /// Create a mock with no staff grants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a viewer staff access to one course.
    #[must_use]
    pub fn with_staff(mut self, username: impl Into<String>, course: &CourseKey) -> Self {
        self.course_staff
            .insert((username.into(), course.as_str().to_owned()));
        self
    }

    /// Grant a viewer staff access to every course.
    #[must_use]
    pub fn with_global_staff(mut self, username: impl Into<String>) -> Self {
        self.global_staff.insert(username.into());
        self
    }

    /// Make every lookup fail with an unavailable-backend error.
    #[must_use]
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl AccessControl for MockAccessControl {
    fn has_staff_access(&self, viewer: &Viewer, course: &CourseKey) -> Result<bool, AccessError> {
        if self.fail {
            return Err(AccessError::new(AccessErrorKind::Unavailable).with_backend("Mock"));
        }
        Ok(self.global_staff.contains(&viewer.username)
            || self
                .course_staff
                .contains(&(viewer.username.clone(), course.as_str().to_owned())))
    }
}

/// Mock enrollment store for testing.
#[derive(Debug, Default)]
pub struct MockEnrollmentStore {
    enrollments: HashSet<(String, String)>,
    fail: bool,
}

impl MockEnrollmentStore {
    /// Create a mock with no enrollments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an active enrollment for a viewer in one course.
    #[must_use]
    pub fn with_enrollment(mut self, username: impl Into<String>, course: &CourseKey) -> Self {
        self.enrollments
            .insert((username.into(), course.as_str().to_owned()));
        self
    }

    /// Make every lookup fail with an unavailable-backend error.
    #[must_use]
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl EnrollmentStore for MockEnrollmentStore {
    fn is_enrolled(&self, viewer: &Viewer, course: &CourseKey) -> Result<bool, AccessError> {
        if self.fail {
            return Err(AccessError::new(AccessErrorKind::Unavailable).with_backend("Mock"));
        }
        Ok(self
            .enrollments
            .contains(&(viewer.username.clone(), course.as_str().to_owned())))
    }
}
