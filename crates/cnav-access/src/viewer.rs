//! Viewer identity.

/// The person a tab list is being resolved for.
///
/// Resolution takes an `Option<&Viewer>`. Passing `None` makes every
/// role check pass, which is how authoring tools preview a course.
/// Passing an unauthenticated viewer models an anonymous visitor, which
/// is stricter than passing no viewer at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewer {
    /// Stable account name, used to key enrollment and role lookups.
    pub username: String,
    /// False for anonymous visitors.
    pub is_authenticated: bool,
}

impl Viewer {
    /// Create a signed-in viewer.
    #[must_use]
    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_authenticated: true,
        }
    }

    /// Create an anonymous visitor.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            username: String::new(),
            is_authenticated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_authenticated_viewer() {
        let viewer = Viewer::authenticated("edna");

        assert_eq!(viewer.username, "edna");
        assert!(viewer.is_authenticated);
    }

    #[test]
    fn test_anonymous_viewer() {
        let viewer = Viewer::anonymous();

        assert_eq!(viewer.username, "");
        assert!(!viewer.is_authenticated);
    }
}
