//! Error type for tab construction and serialization.

/// Error type for tab operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// Document references a tab type with no builtin or registered
    /// course view under that name.
    #[error("Unknown tab type '{0}'")]
    UnknownTabType(String),
    /// Document is missing one or more fields its type requires.
    #[error("Tab type '{tab_type}' is missing required field(s) {fields:?}")]
    MissingTabField {
        /// Type key of the offending document.
        tab_type: String,
        /// The required keys that were absent.
        fields: Vec<&'static str>,
    },
    /// Ephemeral collection-item tabs exist only inside a resolved list
    /// and cannot be written back out.
    #[error("Tabs of type '{0}' cannot be serialized")]
    SerializationNotSupported(&'static str),
    /// Two tabs in one course resolved to the same identifier.
    #[error("Duplicate tab id '{0}'")]
    DuplicateTabId(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unknown_tab_type_message() {
        let err = TabError::UnknownTabType("mystery".to_owned());

        assert_eq!(err.to_string(), "Unknown tab type 'mystery'");
    }

    #[test]
    fn test_missing_field_message_lists_fields() {
        let err = TabError::MissingTabField {
            tab_type: "static_tab".to_owned(),
            fields: vec!["name", "url_slug"],
        };

        assert_eq!(
            err.to_string(),
            "Tab type 'static_tab' is missing required field(s) [\"name\", \"url_slug\"]"
        );
    }

    #[test]
    fn test_duplicate_tab_id_message() {
        let err = TabError::DuplicateTabId("discussion".to_owned());

        assert_eq!(err.to_string(), "Duplicate tab id 'discussion'");
    }
}
