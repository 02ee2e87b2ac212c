//! Course view plugin contract.

use cnav_access::Viewer;
use cnav_course::Course;
use cnav_settings::Settings;

/// A pluggable course view that surfaces as a tab.
///
/// Implementations describe themselves through `name`, `title`, and
/// `view_name`, and decide per course whether they apply at all.
/// Registering an implementation with a
/// [`TabRegistry`](crate::TabRegistry) makes its name constructible as
/// a tab type from persisted documents.
///
/// The enablement check here is the plugin's own gate (feature flags,
/// course configuration). Audience checks such as authentication are
/// applied by the visibility policy on top of it, so implementations
/// should not repeat them.
pub trait CourseViewType: Send + Sync {
    /// Registry name; doubles as the persisted tab type key and the
    /// tab identifier.
    fn name(&self) -> &str;

    /// Display title used when a document does not carry a name.
    fn title(&self) -> &str;

    /// Named route the view renders under.
    fn view_name(&self) -> &str;

    /// Whether the view applies to this course for this viewer.
    ///
    /// `viewer` is absent when rendering a preview.
    fn is_enabled(&self, course: &Course, settings: &Settings, viewer: Option<&Viewer>) -> bool;
}
