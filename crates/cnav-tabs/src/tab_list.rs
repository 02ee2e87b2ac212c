//! Ordered tab configuration for one course.

use crate::document::TabDocument;
use crate::error::TabError;
use crate::registry::TabRegistry;
use crate::tab::CourseTab;

/// The ordered tabs configured on a course.
///
/// Order is authoring order and is preserved through serialization.
/// Identifiers are unique across the list; tabs without an identifier
/// (external links) are exempt and may repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabList {
    tabs: Vec<CourseTab>,
}

impl TabList {
    /// Empty tab list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes a list from persisted documents, in document order.
    ///
    /// # Errors
    ///
    /// Returns the first construction error from `registry`, or
    /// [`TabError::DuplicateTabId`] when two documents produce the same
    /// identifier.
    pub fn from_documents(
        docs: &[TabDocument],
        registry: &TabRegistry,
    ) -> Result<Self, TabError> {
        let mut list = Self::new();
        for doc in docs {
            list.push(registry.construct(doc)?)?;
        }
        Ok(list)
    }

    /// Appends a tab, enforcing identifier uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::DuplicateTabId`] when a tab with the same
    /// identifier is already present. Note that internal and external
    /// discussion tabs share one identifier, so a course cannot carry
    /// both.
    pub fn push(&mut self, tab: CourseTab) -> Result<(), TabError> {
        if let Some(id) = tab.tab_id() {
            if self
                .tabs
                .iter()
                .any(|existing| existing.tab_id().as_deref() == Some(id.as_str()))
            {
                return Err(TabError::DuplicateTabId(id));
            }
        }
        self.tabs.push(tab);
        Ok(())
    }

    /// Serializes every tab back to its persisted document, in order.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::SerializationNotSupported`] if the list
    /// holds a collection item, which should never happen for a list
    /// built from configuration.
    pub fn to_documents(&self) -> Result<Vec<TabDocument>, TabError> {
        self.tabs.iter().map(CourseTab::to_document).collect()
    }

    /// Finds the tab with the given identifier.
    #[must_use]
    pub fn get(&self, tab_id: &str) -> Option<&CourseTab> {
        self.tabs
            .iter()
            .find(|tab| tab.tab_id().as_deref() == Some(tab_id))
    }

    /// Iterates the tabs in configured order.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseTab> {
        self.tabs.iter()
    }

    /// Number of configured tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether no tabs are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl<'a> IntoIterator for &'a TabList {
    type Item = &'a CourseTab;
    type IntoIter = std::slice::Iter<'a, CourseTab>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
