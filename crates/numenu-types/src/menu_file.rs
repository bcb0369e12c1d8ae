//! On-disk schema for menu configuration files.
//!
//! A menu file is a flat JSON object that carries the configuration of a
//! numbered-choice menu. Runtime selection state (the current and previous
//! choice, per-option completion flags) is never part of this schema.

use serde::{Deserialize, Serialize};

/// Persisted configuration of a numbered-choice menu.
///
/// Keys are camelCase on disk. Missing keys fall back to documented defaults;
/// the text labels distinguish an explicit `null` (kept as `None`) from an
/// absent key (defaults to an empty string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuFile {
    /// Heading shown above the options
    #[serde(default = "empty_text")]
    pub title: Option<String>,
    /// Number of selectable options; derived from `options` when absent
    #[serde(default)]
    pub num_options: Option<i64>,
    /// Option labels, displayed as 1..=numOptions
    #[serde(default)]
    pub options: Vec<String>,
    /// Whether the exit selection is accepted
    #[serde(default)]
    pub exit_allowed: bool,
    /// Number that selects "exit"
    #[serde(default)]
    pub exit_on: i64,
    /// Label of the exit line
    #[serde(default = "empty_text")]
    pub exit_text: Option<String>,
    /// Label appended to options that have been chosen
    #[serde(default = "empty_text")]
    pub chosen_text: Option<String>,
    /// Label appended to options that have not been chosen
    #[serde(default = "empty_text")]
    pub unchosen_text: Option<String>,
}

fn empty_text() -> Option<String> {
    Some(String::new())
}

impl Default for MenuFile {
    fn default() -> Self {
        Self {
            title: empty_text(),
            num_options: None,
            options: Vec::new(),
            exit_allowed: false,
            exit_on: 0,
            exit_text: empty_text(),
            chosen_text: empty_text(),
            unchosen_text: empty_text(),
        }
    }
}

impl MenuFile {
    /// Effective option count: `numOptions` if present, otherwise the length
    /// of the `options` array.
    pub fn effective_num_options(&self) -> i64 {
        self.num_options
            .unwrap_or_else(|| i64::try_from(self.options.len()).unwrap_or(i64::MAX))
    }

    /// Option labels limited to the effective option count.
    ///
    /// Extra labels beyond `numOptions` are ignored. A shorter array is
    /// returned as-is so that validation can report the mismatch.
    pub fn effective_options(&self) -> Vec<String> {
        let limit = usize::try_from(self.effective_num_options().max(0)).unwrap_or(usize::MAX);
        self.options.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "title": "Main",
            "numOptions": 2,
            "options": ["Play", "Settings"],
            "exitAllowed": true,
            "exitOn": 0,
            "exitText": "Quit",
            "chosenText": "done",
            "unchosenText": "todo"
        }"#;

        let file: MenuFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.title.as_deref(), Some("Main"));
        assert_eq!(file.num_options, Some(2));
        assert_eq!(file.options, vec!["Play", "Settings"]);
        assert!(file.exit_allowed);
        assert_eq!(file.exit_on, 0);
        assert_eq!(file.exit_text.as_deref(), Some("Quit"));
        assert_eq!(file.chosen_text.as_deref(), Some("done"));
        assert_eq!(file.unchosen_text.as_deref(), Some("todo"));
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let file: MenuFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file, MenuFile::default());
        assert_eq!(file.effective_num_options(), 0);
        assert!(!file.exit_allowed);
        assert_eq!(file.exit_text.as_deref(), Some(""));
    }

    #[test]
    fn test_explicit_null_is_kept_distinct_from_absent() {
        let file: MenuFile =
            serde_json::from_str(r#"{"exitText": null, "options": ["A"]}"#).unwrap();
        assert!(file.exit_text.is_none());
        assert_eq!(file.chosen_text.as_deref(), Some(""));
    }

    #[test]
    fn test_num_options_derived_from_array() {
        let file: MenuFile = serde_json::from_str(r#"{"options": ["A", "B", "C"]}"#).unwrap();
        assert_eq!(file.num_options, None);
        assert_eq!(file.effective_num_options(), 3);
        assert_eq!(file.effective_options().len(), 3);
    }

    #[test]
    fn test_effective_options_truncates_to_num_options() {
        let file: MenuFile =
            serde_json::from_str(r#"{"numOptions": 1, "options": ["A", "B"]}"#).unwrap();
        assert_eq!(file.effective_options(), vec!["A"]);
    }

    #[test]
    fn test_serialize_writes_null_and_camel_case() {
        let file = MenuFile {
            title: Some("T".to_string()),
            num_options: Some(1),
            options: vec!["Only".to_string()],
            exit_allowed: true,
            exit_on: -1,
            exit_text: None,
            chosen_text: Some("x".to_string()),
            unchosen_text: None,
        };

        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains(r#""numOptions":1"#));
        assert!(json.contains(r#""exitAllowed":true"#));
        assert!(json.contains(r#""exitOn":-1"#));
        assert!(json.contains(r#""exitText":null"#));
        assert!(json.contains(r#""unchosenText":null"#));
    }
}
