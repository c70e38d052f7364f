//! # Lint Configuration Document
//!
//! This module defines [`LintConfig`], the in-memory form of the `.eslintrc`
//! document the tool produces, together with the bundled base template and
//! the mutation primitives overlays build on.
//!
//! ## Merge rules
//!
//! Every mutation is additive unless documented as an override:
//!
//! - `extends` and `plugins` are ordered lists with append-if-absent
//!   semantics; an identifier never appears twice.
//! - `rules` is keyed by rule name with last-write-wins per key.
//! - `parser` is a single override slot; the last writer wins.
//! - `settings` namespaces are deep-merged, never replaced wholesale.
//! - `globals` entries are inserted per symbol; `false` marks a read-only
//!   global.
//!
//! The document is a plain value. Overlays in [`crate::overlays`] take it by
//! value and hand back the transformed document, so application order is an
//! explicit parameter rather than an accident of shared state.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};

use crate::error::Result;
use crate::merge;

/// Conventional hidden file name for the produced configuration.
pub const CONFIG_FILE_NAME: &str = ".eslintrc";

/// Ignore-pattern file written next to the configuration.
pub const IGNORE_FILE_NAME: &str = ".eslintignore";

/// Ignore-pattern template, written verbatim.
pub const IGNORE_TEMPLATE: &str = include_str!("../templates/eslintignore");

/// Rule severity atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

/// A rule specification: either a bare severity, or a severity with an
/// options object, serialized as `"error"` or `["error", {...}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Severity(Severity),
    WithOptions(Severity, JsonValue),
}

impl From<RuleEntry> for JsonValue {
    fn from(entry: RuleEntry) -> Self {
        serde_json::to_value(entry).expect("rule entries are plain JSON")
    }
}

/// The composed lint configuration document.
///
/// Field order here is the serialization order of the written file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Named rule-set references, ordered, no duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Parser identifier; unset means the linter's default parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Plugin identifiers, ordered, no duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Rule name to rule specification.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub rules: Map<String, JsonValue>,

    /// Setting namespace to nested key/value map.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, JsonValue>,

    /// Global symbol to writability flag (`false` = read-only).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub globals: Map<String, JsonValue>,
}

impl LintConfig {
    /// The bundled base template every composition starts from.
    pub fn base() -> Self {
        let mut config = Self {
            extends: vec!["airbnb".to_string()],
            ..Self::default()
        };
        config.set_rule("no-console", RuleEntry::Severity(Severity::Warn));
        config.set_rule(
            "max-lines",
            RuleEntry::WithOptions(
                Severity::Warn,
                json!({ "max": 300, "skipBlankLines": true, "skipComments": true }),
            ),
        );
        config
    }

    /// Append a rule-set reference unless it is already present.
    ///
    /// Returns whether the list changed.
    pub fn add_extend(&mut self, name: &str) -> bool {
        if self.extends.iter().any(|existing| existing == name) {
            return false;
        }
        self.extends.push(name.to_string());
        true
    }

    /// Append a plugin identifier unless it is already present.
    ///
    /// Returns whether the list changed.
    pub fn add_plugin(&mut self, name: &str) -> bool {
        if self.plugins.iter().any(|existing| existing == name) {
            return false;
        }
        self.plugins.push(name.to_string());
        true
    }

    /// Set the parser identifier. An override slot: the last writer wins.
    pub fn set_parser(&mut self, parser: &str) {
        self.parser = Some(parser.to_string());
    }

    /// Set a rule specification, replacing any earlier one for the same key.
    pub fn set_rule(&mut self, name: &str, entry: RuleEntry) {
        self.rules.insert(name.to_string(), entry.into());
    }

    /// Remove a rule entirely. A no-op when the rule is not set.
    ///
    /// Returns whether a rule was removed.
    pub fn remove_rule(&mut self, name: &str) -> bool {
        self.rules.remove(name).is_some()
    }

    /// Look up a rule specification.
    pub fn rule(&self, name: &str) -> Option<&JsonValue> {
        self.rules.get(name)
    }

    /// Deep-merge `value` into a setting namespace, preserving entries other
    /// contributors already placed there.
    pub fn merge_setting(&mut self, namespace: &str, value: JsonValue) {
        let slot = self
            .settings
            .entry(namespace.to_string())
            .or_insert_with(|| JsonValue::Object(Map::new()));
        merge::deep_merge(slot, &value);
    }

    /// Mark a global symbol, `writable = false` meaning read-only.
    ///
    /// Other globals are left untouched.
    pub fn add_global(&mut self, name: &str, writable: bool) {
        self.globals
            .insert(name.to_string(), JsonValue::Bool(writable));
    }

    /// Render the document as 2-space indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rule_entry_tests {
        use super::*;

        #[test]
        fn test_bare_severity_serializes_as_atom() {
            let value: JsonValue = RuleEntry::Severity(Severity::Off).into();
            assert_eq!(value, json!("off"));
        }

        #[test]
        fn test_severity_with_options_serializes_as_tuple() {
            let value: JsonValue =
                RuleEntry::WithOptions(Severity::Error, json!({"allowAfterThis": true})).into();
            assert_eq!(value, json!(["error", {"allowAfterThis": true}]));
        }

        #[test]
        fn test_rule_entry_deserializes_both_shapes() {
            let atom: RuleEntry = serde_json::from_value(json!("warn")).unwrap();
            assert_eq!(atom, RuleEntry::Severity(Severity::Warn));

            let tuple: RuleEntry = serde_json::from_value(json!(["error", {"max": 1}])).unwrap();
            assert_eq!(
                tuple,
                RuleEntry::WithOptions(Severity::Error, json!({"max": 1}))
            );
        }
    }

    mod list_mutation_tests {
        use super::*;

        #[test]
        fn test_add_extend_appends_once() {
            let mut config = LintConfig::default();
            assert!(config.add_extend("airbnb"));
            assert!(!config.add_extend("airbnb"));
            assert_eq!(config.extends, vec!["airbnb"]);
        }

        #[test]
        fn test_add_plugin_appends_once() {
            let mut config = LintConfig::default();
            assert!(config.add_plugin("flowtype"));
            assert!(!config.add_plugin("flowtype"));
            assert_eq!(config.plugins, vec!["flowtype"]);
        }

        #[test]
        fn test_list_order_is_append_order() {
            let mut config = LintConfig::default();
            config.add_extend("airbnb");
            config.add_extend("plugin:flowtype/recommended");
            assert_eq!(config.extends, vec!["airbnb", "plugin:flowtype/recommended"]);
        }
    }

    mod rule_mutation_tests {
        use super::*;

        #[test]
        fn test_set_rule_last_write_wins() {
            let mut config = LintConfig::default();
            config.set_rule("indent", RuleEntry::Severity(Severity::Error));
            config.set_rule("indent", RuleEntry::Severity(Severity::Off));
            assert_eq!(config.rule("indent"), Some(&json!("off")));
        }

        #[test]
        fn test_remove_rule_reports_presence() {
            let mut config = LintConfig::base();
            assert!(config.remove_rule("max-lines"));
            assert!(!config.remove_rule("max-lines"));
            assert!(config.rule("max-lines").is_none());
        }
    }

    mod settings_and_globals_tests {
        use super::*;

        #[test]
        fn test_merge_setting_creates_namespace() {
            let mut config = LintConfig::default();
            config.merge_setting("flowtype", json!({"onlyFilesWithFlowAnnotation": true}));
            assert_eq!(
                config.settings["flowtype"]["onlyFilesWithFlowAnnotation"],
                json!(true)
            );
        }

        #[test]
        fn test_merge_setting_keeps_sibling_entries() {
            let mut config = LintConfig::default();
            config.merge_setting("import/resolver", json!({"node": {"extensions": [".js"]}}));
            config.merge_setting(
                "import/resolver",
                json!({"webpack": {"config": "webpack.config.js"}}),
            );

            let resolver = &config.settings["import/resolver"];
            assert!(resolver.get("node").is_some());
            assert!(resolver.get("webpack").is_some());
        }

        #[test]
        fn test_add_global_read_only() {
            let mut config = LintConfig::default();
            config.add_global("document", false);
            config.add_global("window", false);
            assert_eq!(config.globals["document"], json!(false));
            assert_eq!(config.globals["window"], json!(false));
        }
    }

    mod serialization_tests {
        use super::*;

        #[test]
        fn test_empty_collections_are_omitted() {
            let rendered = LintConfig::default().to_pretty_string().unwrap();
            assert_eq!(rendered, "{}\n");
        }

        #[test]
        fn test_base_template_shape() {
            let config = LintConfig::base();
            assert_eq!(config.extends, vec!["airbnb"]);
            assert!(config.parser.is_none());
            assert!(config.plugins.is_empty());
            assert!(config.rule("max-lines").is_some());
        }

        #[test]
        fn test_pretty_output_ends_with_newline() {
            let rendered = LintConfig::base().to_pretty_string().unwrap();
            assert!(rendered.ends_with('\n'));
            assert!(rendered.contains("  \"extends\""));
        }

        #[test]
        fn test_round_trip_through_json() {
            let config = LintConfig::base();
            let rendered = config.to_pretty_string().unwrap();
            let parsed: LintConfig = serde_json::from_str(&rendered).unwrap();
            assert_eq!(parsed, config);
        }
    }
}
