//! Named-route reversal for tab links.
//!
//! Tabs do not carry URLs; they carry route names. The hosting
//! application supplies a [`RouteReversal`] that turns a route name
//! plus a target into a path. [`RouteTable`] is the pattern-based
//! implementation used by the bundled defaults and by tests.

use std::collections::HashMap;

use cnav_course::CourseKey;

/// What a named route is reversed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget<'a> {
    /// Route parameterized by the course alone.
    Course(&'a CourseKey),
    /// Route addressing one shelf item of a course by position.
    Item {
        /// Owning course.
        course: &'a CourseKey,
        /// Shelf position.
        index: usize,
    },
    /// Route addressing authored content of a course by slug.
    Slug {
        /// Owning course.
        course: &'a CourseKey,
        /// Content slug.
        slug: &'a str,
    },
}

/// Error type for route reversal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The route name is not registered with the reverser.
    #[error("No route named '{0}'")]
    NotFound(String),
}

/// Reverses a named route into a navigable URL.
pub trait RouteReversal: Send + Sync {
    /// Builds the URL for `route` against `target`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when no route is registered
    /// under `route`.
    fn reverse(&self, route: &str, target: RouteTarget<'_>) -> Result<String, RouteError>;
}

/// Pattern-based route reverser.
///
/// Patterns are plain strings with `{course_key}`, `{index}`, and
/// `{slug}` placeholders, substituted from the target.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    patterns: HashMap<String, String>,
}

impl RouteTable {
    /// Empty table; every reversal fails until routes are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table preloaded with the route names the builtin tab types link
    /// through, under `/courses/{course_key}/` paths.
    #[must_use]
    pub fn course_defaults() -> Self {
        let routes = [
            ("courseware", "/courses/{course_key}/courseware"),
            ("info", "/courses/{course_key}/info"),
            ("course_wiki", "/courses/{course_key}/wiki"),
            ("discussion", "/courses/{course_key}/discussion"),
            ("progress", "/courses/{course_key}/progress"),
            ("static_tab", "/courses/{course_key}/static_tab/{slug}"),
            ("syllabus", "/courses/{course_key}/syllabus"),
            ("notes", "/courses/{course_key}/notes"),
            ("peer_grading", "/courses/{course_key}/peer_grading"),
            ("staff_grading", "/courses/{course_key}/staff_grading"),
            (
                "open_ended_notifications",
                "/courses/{course_key}/open_ended_notifications",
            ),
            ("book", "/courses/{course_key}/book/{index}"),
            ("pdf_book", "/courses/{course_key}/pdfbook/{index}"),
            ("html_book", "/courses/{course_key}/htmlbook/{index}"),
        ];
        let mut table = Self::new();
        for (name, pattern) in routes {
            table.add_route(name, pattern);
        }
        table
    }

    /// Registers or replaces a route pattern.
    pub fn add_route(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.patterns.insert(name.into(), pattern.into());
    }

    /// Registers a route pattern, builder style.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.add_route(name, pattern);
        self
    }
}

impl RouteReversal for RouteTable {
    fn reverse(&self, route: &str, target: RouteTarget<'_>) -> Result<String, RouteError> {
        let pattern = self
            .patterns
            .get(route)
            .ok_or_else(|| RouteError::NotFound(route.to_owned()))?;
        let url = match target {
            RouteTarget::Course(course) => pattern.replace("{course_key}", course.as_str()),
            RouteTarget::Item { course, index } => pattern
                .replace("{course_key}", course.as_str())
                .replace("{index}", &index.to_string()),
            RouteTarget::Slug { course, slug } => pattern
                .replace("{course_key}", course.as_str())
                .replace("{slug}", slug),
        };
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reverse_course_route() {
        let table = RouteTable::course_defaults();
        let course = CourseKey::new("course-v1:RW+NAV101+2026");

        let url = table
            .reverse("progress", RouteTarget::Course(&course))
            .unwrap();

        assert_eq!(url, "/courses/course-v1:RW+NAV101+2026/progress");
    }

    #[test]
    fn test_reverse_item_route() {
        let table = RouteTable::course_defaults();
        let course = CourseKey::new("course-v1:RW+NAV101+2026");

        let url = table
            .reverse(
                "pdf_book",
                RouteTarget::Item {
                    course: &course,
                    index: 2,
                },
            )
            .unwrap();

        assert_eq!(url, "/courses/course-v1:RW+NAV101+2026/pdfbook/2");
    }

    #[test]
    fn test_reverse_slug_route() {
        let table = RouteTable::course_defaults();
        let course = CourseKey::new("course-v1:RW+NAV101+2026");

        let url = table
            .reverse(
                "static_tab",
                RouteTarget::Slug {
                    course: &course,
                    slug: "handouts",
                },
            )
            .unwrap();

        assert_eq!(url, "/courses/course-v1:RW+NAV101+2026/static_tab/handouts");
    }

    #[test]
    fn test_reverse_unknown_route_fails() {
        let table = RouteTable::new();
        let course = CourseKey::new("course-v1:RW+NAV101+2026");

        let err = table
            .reverse("no_such_route", RouteTarget::Course(&course))
            .unwrap_err();

        assert_eq!(err, RouteError::NotFound("no_such_route".to_owned()));
    }

    #[test]
    fn test_with_route_overrides_default() {
        let table =
            RouteTable::course_defaults().with_route("progress", "/c/{course_key}/p");
        let course = CourseKey::new("demo");

        let url = table
            .reverse("progress", RouteTarget::Course(&course))
            .unwrap();

        assert_eq!(url, "/c/demo/p");
    }

    #[test]
    fn test_route_table_is_send_and_sync() {
        static_assertions::assert_impl_all!(RouteTable: Send, Sync);
    }
}
