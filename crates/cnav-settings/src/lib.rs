//! Deployment settings for the cnav navigation engine.
//!
//! Parses `cnav.toml` settings files with serde and provides
//! auto-discovery of settings files in parent directories.
//!
//! The engine reads two kinds of switches:
//!
//! - `wiki_enabled`, a standalone master switch for the course wiki
//! - `[features]`, a table of named boolean gates consulted by tabs and
//!   by course view plugins
//!
//! A gate that is absent from the table counts as disabled, so a
//! deployment only spells out what it turns on:
//!
//! ```toml
//! wiki_enabled = true
//!
//! [features]
//! ENABLE_DISCUSSION_SERVICE = true
//! ENABLE_TEXTBOOK = true
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Settings filename to search for.
const SETTINGS_FILENAME: &str = "cnav.toml";

/// Gate for the course discussion forum tab.
pub const ENABLE_DISCUSSION_SERVICE: &str = "ENABLE_DISCUSSION_SERVICE";
/// Gate for the textbook collection tabs.
pub const ENABLE_TEXTBOOK: &str = "ENABLE_TEXTBOOK";
/// Gate for the student notes tab.
pub const ENABLE_STUDENT_NOTES: &str = "ENABLE_STUDENT_NOTES";
/// Gate for custom child course instances. When on, child courses
/// suppress the discussion tab entirely.
pub const CUSTOM_COURSES: &str = "CUSTOM_COURSES";

/// Named boolean feature gates.
///
/// Backed by a plain map so deployments and course view plugins can carry
/// gates this crate does not know about. Absent gates read as `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags {
    flags: HashMap<String, bool>,
}

impl FeatureFlags {
    /// Create an empty flag table (every gate reads as disabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named gate.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.flags.insert(name.into(), enabled);
        self
    }

    /// Look up a named gate. Absent gates read as `false`.
    #[must_use]
    pub fn enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Whether the discussion forum service is enabled.
    #[must_use]
    pub fn discussion_service(&self) -> bool {
        self.enabled(ENABLE_DISCUSSION_SERVICE)
    }

    /// Whether textbook collection tabs are enabled.
    #[must_use]
    pub fn textbooks(&self) -> bool {
        self.enabled(ENABLE_TEXTBOOK)
    }

    /// Whether the student notes tab is enabled.
    #[must_use]
    pub fn student_notes(&self) -> bool {
        self.enabled(ENABLE_STUDENT_NOTES)
    }

    /// Whether custom child course instances are enabled.
    #[must_use]
    pub fn custom_courses(&self) -> bool {
        self.enabled(CUSTOM_COURSES)
    }
}

/// Deployment settings read by tab resolution.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch for the course wiki.
    pub wiki_enabled: bool,
    /// Named feature gates.
    pub features: FeatureFlags,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wiki_enabled: true,
            features: FeatureFlags::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML content.
    ///
    /// Empty content yields the defaults (wiki on, every gate off).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotFound`] if the file does not exist,
    /// [`SettingsError::Io`] if it cannot be read, or
    /// [`SettingsError::Parse`] if the TOML is malformed.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Set a named feature gate.
    #[must_use]
    pub fn with_feature(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.features = self.features.with_flag(name, enabled);
        self
    }
}

/// Settings error.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File not found.
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Search for a `cnav.toml` file starting from the given directory and
/// walking up through parent directories.
///
/// Returns the path to the first settings file found, or `None`.
#[must_use]
pub fn discover_settings(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(SETTINGS_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert!(settings.wiki_enabled);
        assert!(!settings.features.discussion_service());
        assert!(!settings.features.textbooks());
        assert!(!settings.features.student_notes());
        assert!(!settings.features.custom_courses());
    }

    #[test]
    fn test_from_toml_empty_yields_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_toml_full() {
        let toml = r"
wiki_enabled = false

[features]
ENABLE_DISCUSSION_SERVICE = true
ENABLE_TEXTBOOK = true
ENABLE_STUDENT_NOTES = false
";
        let settings = Settings::from_toml(toml).unwrap();

        assert!(!settings.wiki_enabled);
        assert!(settings.features.discussion_service());
        assert!(settings.features.textbooks());
        assert!(!settings.features.student_notes());
    }

    #[test]
    fn test_from_toml_absent_gate_reads_false() {
        let toml = r"
[features]
ENABLE_TEXTBOOK = true
";
        let settings = Settings::from_toml(toml).unwrap();

        assert!(settings.features.textbooks());
        assert!(!settings.features.discussion_service());
        assert!(!settings.features.enabled("SOME_PLUGIN_GATE"));
    }

    #[test]
    fn test_from_toml_unknown_gate_preserved() {
        let toml = r"
[features]
ENABLE_TEAMS = true
";
        let settings = Settings::from_toml(toml).unwrap();

        assert!(settings.features.enabled("ENABLE_TEAMS"));
    }

    #[test]
    fn test_from_toml_malformed_is_parse_error() {
        let result = Settings::from_toml("wiki_enabled = [not closed");

        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_from_toml_wrong_gate_type_is_parse_error() {
        let toml = r#"
[features]
ENABLE_TEXTBOOK = "yes"
"#;
        let result = Settings::from_toml(toml);

        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_with_feature_overrides() {
        let settings = Settings::default()
            .with_feature(ENABLE_TEXTBOOK, true)
            .with_feature(ENABLE_TEXTBOOK, false);

        assert!(!settings.features.textbooks());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        std::fs::write(&path, "wiki_enabled = false\n").unwrap();

        let settings = Settings::load_from_file(&path).unwrap();

        assert!(!settings.wiki_enabled);
    }

    #[test]
    fn test_load_from_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);

        let result = Settings::load_from_file(&path);

        assert!(matches!(result, Err(SettingsError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_discover_settings_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        std::fs::write(&path, "").unwrap();

        let found = discover_settings(dir.path());

        assert_eq!(found, Some(path));
    }

    #[test]
    fn test_discover_settings_in_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(SETTINGS_FILENAME);
        std::fs::write(&path, "").unwrap();

        let found = discover_settings(&nested);

        assert_eq!(found, Some(path));
    }

    #[test]
    fn test_discover_settings_none_when_absent() {
        let dir = tempfile::tempdir().unwrap();

        let found = discover_settings(dir.path());

        assert_eq!(found, None);
    }
}
