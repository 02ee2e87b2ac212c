//! Visible-tab resolution for one render request.

use std::sync::Arc;

use cnav_access::{AccessControl, AccessError, EnrollmentStore, Viewer};
use cnav_course::Course;
use cnav_settings::Settings;
use cnav_tabs::{CourseTab, TabError, TabList, TabRegistry, TextbookKind};
use serde::Serialize;

use crate::policy::is_tab_visible;
use crate::routes::{RouteError, RouteReversal, RouteTarget};

/// Error type for tab resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Tab materialization or plugin lookup failed.
    #[error(transparent)]
    Tab(#[from] TabError),
    /// A route needed by a visible tab is not registered.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// The access or enrollment backend failed.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// One visible tab together with its navigable URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTab {
    /// The tab, after collection expansion.
    pub tab: CourseTab,
    /// Link target. `None` when the tab has nothing to navigate to.
    pub url: Option<String>,
}

impl ResolvedTab {
    /// Whether this tab should be highlighted for the current page.
    ///
    /// Tabs without an identifier (external links) are never active.
    #[must_use]
    pub fn is_active(&self, current_tab_id: &str) -> bool {
        self.tab.tab_id().as_deref() == Some(current_tab_id)
    }

    /// Serializable form for UI presentation.
    #[must_use]
    pub fn to_nav_entry(&self) -> NavEntry {
        NavEntry {
            name: self.tab.name().to_owned(),
            tab_id: self.tab.tab_id(),
            tab_type: self.tab.tab_type().to_owned(),
            url: self.url.clone(),
        }
    }
}

/// Navigation entry handed to UI layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display label.
    pub name: String,
    /// Identifier for active-tab highlighting; absent for external
    /// links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
    /// Tab type key.
    pub tab_type: String,
    /// Link target; absent when the tab has no navigable target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Turns configured tabs into the navigation shown to one viewer.
///
/// The resolver owns no per-request state. It is built once with its
/// collaborators and shared across requests; each
/// [`resolve_visible_tabs`](Self::resolve_visible_tabs) call evaluates
/// one course for one viewer and returns a fresh list.
pub struct TabResolver {
    registry: Arc<TabRegistry>,
    access: Arc<dyn AccessControl>,
    enrollment: Arc<dyn EnrollmentStore>,
    routes: Arc<dyn RouteReversal>,
}

impl TabResolver {
    /// Creates a resolver over the given collaborators.
    #[must_use]
    pub fn new(
        registry: Arc<TabRegistry>,
        access: Arc<dyn AccessControl>,
        enrollment: Arc<dyn EnrollmentStore>,
        routes: Arc<dyn RouteReversal>,
    ) -> Self {
        Self {
            registry,
            access,
            enrollment,
            routes,
        }
    }

    /// The registry this resolver materializes and checks tabs with.
    #[must_use]
    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Resolves the tabs `viewer` can see on `course`, in configured
    /// order, with collection tabs expanded in place into their leaf
    /// tabs.
    ///
    /// Author-hidden tabs are skipped for every viewer. `viewer` is
    /// `None` for preview renders, which see every role-gated tab.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Access`] when a role check cannot be
    /// answered, [`ResolveError::Tab`] when a course view tab
    /// references an unregistered plugin, and [`ResolveError::Route`]
    /// when a visible tab needs an unregistered route.
    pub fn resolve_visible_tabs(
        &self,
        tabs: &TabList,
        course: &Course,
        settings: &Settings,
        viewer: Option<&Viewer>,
    ) -> Result<Vec<ResolvedTab>, ResolveError> {
        let mut resolved = Vec::with_capacity(tabs.len());
        for tab in tabs {
            if tab.is_hidden()
                || !is_tab_visible(
                    tab,
                    course,
                    settings,
                    viewer,
                    &self.registry,
                    self.access.as_ref(),
                    self.enrollment.as_ref(),
                )?
            {
                tracing::debug!(tab_type = tab.tab_type(), "tab hidden from viewer");
                continue;
            }
            if let CourseTab::TextbookCollection { kind } = tab {
                self.expand_collection(*kind, course, &mut resolved)?;
            } else {
                let url = self.tab_url(tab, course)?;
                resolved.push(ResolvedTab {
                    tab: tab.clone(),
                    url,
                });
            }
        }
        Ok(resolved)
    }

    /// Emits one leaf tab per book on the shelf, in shelf order.
    fn expand_collection(
        &self,
        kind: TextbookKind,
        course: &Course,
        resolved: &mut Vec<ResolvedTab>,
    ) -> Result<(), ResolveError> {
        let titles: Vec<&str> = match kind {
            TextbookKind::Standard => {
                course.textbooks.iter().map(|book| book.title.as_str()).collect()
            }
            TextbookKind::Pdf => course
                .pdf_textbooks
                .iter()
                .map(|book| book.tab_title.as_str())
                .collect(),
            TextbookKind::Html => course
                .html_textbooks
                .iter()
                .map(|book| book.tab_title.as_str())
                .collect(),
        };
        for (index, title) in titles.into_iter().enumerate() {
            let url = self.routes.reverse(
                book_route(kind),
                RouteTarget::Item {
                    course: &course.key,
                    index,
                },
            )?;
            resolved.push(ResolvedTab {
                tab: CourseTab::SingleTextbook {
                    kind,
                    index,
                    name: title.to_owned(),
                },
                url: Some(url),
            });
        }
        Ok(())
    }

    fn tab_url(&self, tab: &CourseTab, course: &Course) -> Result<Option<String>, ResolveError> {
        let key = &course.key;
        let course_route = |route: &str| self.routes.reverse(route, RouteTarget::Course(key));
        let url = match tab {
            CourseTab::ExternalDiscussion { link } | CourseTab::ExternalLink { link, .. } => {
                Some(link.clone())
            }
            // Collection parents are replaced by their leaves and have
            // no target of their own.
            CourseTab::TextbookCollection { .. } => None,
            CourseTab::SingleTextbook { kind, index, .. } => Some(self.routes.reverse(
                book_route(*kind),
                RouteTarget::Item {
                    course: key,
                    index: *index,
                },
            )?),
            CourseTab::StaticTab { url_slug, .. } => Some(self.routes.reverse(
                "static_tab",
                RouteTarget::Slug {
                    course: key,
                    slug: url_slug,
                },
            )?),
            CourseTab::Courseware => Some(course_route("courseware")?),
            CourseTab::CourseInfo { .. } => Some(course_route("info")?),
            CourseTab::Wiki { .. } => Some(course_route("course_wiki")?),
            CourseTab::Discussion { .. } => Some(course_route("discussion")?),
            CourseTab::Progress { .. } => Some(course_route("progress")?),
            CourseTab::Syllabus => Some(course_route("syllabus")?),
            CourseTab::Notes { .. } => Some(course_route("notes")?),
            CourseTab::PeerGrading => Some(course_route("peer_grading")?),
            CourseTab::StaffGrading => Some(course_route("staff_grading")?),
            CourseTab::OpenEnded => Some(course_route("open_ended_notifications")?),
            CourseTab::CourseView { view_name, .. } => Some(course_route(view_name)?),
        };
        Ok(url)
    }
}

fn book_route(kind: TextbookKind) -> &'static str {
    match kind {
        TextbookKind::Standard => "book",
        TextbookKind::Pdf => "pdf_book",
        TextbookKind::Html => "html_book",
    }
}
