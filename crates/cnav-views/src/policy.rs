//! Per-type tab visibility rules.
//!
//! One predicate decides whether one tab is shown to one viewer.
//! An absent viewer means a preview render: role checks pass, while
//! feature flags and course-state gates still apply. Gates are checked
//! before roles, so a disabled feature hides a tab even from staff.

use cnav_access::{AccessControl, AccessError, EnrollmentStore, Viewer};
use cnav_course::Course;
use cnav_settings::Settings;
use cnav_tabs::{CourseTab, TabError, TabRegistry};

use crate::resolver::ResolveError;

/// Whether `tab` is shown to `viewer` on `course`.
///
/// Course view tabs consult their plugin through `registry` after the
/// audience check passes.
///
/// # Errors
///
/// Returns [`ResolveError::Access`] when a role check cannot be
/// answered by the access or enrollment backend, and
/// [`ResolveError::Tab`] when a course view tab references an
/// unregistered plugin.
pub fn is_tab_visible(
    tab: &CourseTab,
    course: &Course,
    settings: &Settings,
    viewer: Option<&Viewer>,
    registry: &TabRegistry,
    access: &dyn AccessControl,
    enrollment: &dyn EnrollmentStore,
) -> Result<bool, ResolveError> {
    let visible = match tab {
        CourseTab::Courseware => is_enrolled_or_staff(viewer, course, access, enrollment)?,
        CourseTab::CourseInfo { .. }
        | CourseTab::ExternalDiscussion { .. }
        | CourseTab::ExternalLink { .. }
        | CourseTab::StaticTab { .. } => true,
        CourseTab::Wiki { .. } => {
            if !settings.wiki_enabled {
                false
            } else if viewer.is_none() || course.allow_public_wiki_access {
                true
            } else {
                is_enrolled_or_staff(viewer, course, access, enrollment)?
            }
        }
        CourseTab::Discussion { .. } => {
            // A CCX child course never shows the forum, staff included.
            if settings.features.custom_courses() && course.is_ccx_child {
                false
            } else {
                settings.features.discussion_service()
                    && is_enrolled_or_staff(viewer, course, access, enrollment)?
            }
        }
        CourseTab::TextbookCollection { .. } | CourseTab::SingleTextbook { .. } => {
            settings.features.textbooks() && is_authenticated_or_preview(viewer)
        }
        CourseTab::Progress { .. } => {
            !course.hide_progress_tab
                && is_enrolled_or_staff(viewer, course, access, enrollment)?
        }
        CourseTab::Syllabus => course.syllabus_present,
        CourseTab::Notes { .. } => {
            settings.features.student_notes() && is_authenticated_or_preview(viewer)
        }
        CourseTab::PeerGrading | CourseTab::OpenEnded => is_authenticated_or_preview(viewer),
        CourseTab::StaffGrading => is_staff_or_preview(viewer, course, access)?,
        CourseTab::CourseView { view_type, .. } => {
            if is_authenticated_or_preview(viewer) {
                let view = registry
                    .course_view(view_type)
                    .ok_or_else(|| TabError::UnknownTabType(view_type.clone()))?;
                view.is_enabled(course, settings, viewer)
            } else {
                false
            }
        }
    };
    Ok(visible)
}

fn is_authenticated_or_preview(viewer: Option<&Viewer>) -> bool {
    viewer.is_none_or(|viewer| viewer.is_authenticated)
}

fn is_enrolled_or_staff(
    viewer: Option<&Viewer>,
    course: &Course,
    access: &dyn AccessControl,
    enrollment: &dyn EnrollmentStore,
) -> Result<bool, AccessError> {
    let Some(viewer) = viewer else {
        return Ok(true);
    };
    if access.has_staff_access(viewer, &course.key)? {
        return Ok(true);
    }
    enrollment.is_enrolled(viewer, &course.key)
}

fn is_staff_or_preview(
    viewer: Option<&Viewer>,
    course: &Course,
    access: &dyn AccessControl,
) -> Result<bool, AccessError> {
    match viewer {
        None => Ok(true),
        Some(viewer) => access.has_staff_access(viewer, &course.key),
    }
}
