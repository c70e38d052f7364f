//! # Feature Overlays
//!
//! An overlay is a named, composable transformation of the lint
//! configuration encoding one optional project feature. Overlays are pure:
//! each takes the accumulated document by value and returns it with that
//! feature's additions applied, following the additive and override rules
//! documented on [`LintConfig`].
//!
//! [`compose`] applies overlays strictly in the caller's order. Features are
//! independent, but their overlays touch shared sub-structures (rule map,
//! plugin list, settings namespaces), so application order is part of the
//! observable contract.

use serde_json::json;

use crate::config::{LintConfig, RuleEntry, Severity};
use crate::features::Feature;

/// Plugin identifier added for Flow-typed projects.
pub const FLOW_PLUGIN: &str = "flowtype";

/// Parser capable of reading type annotations.
pub const FLOW_PARSER: &str = "babel-eslint";

/// Recommended rule-set shipped with the Flow plugin.
pub const FLOW_PRESET: &str = "plugin:flowtype/recommended";

/// Conventional bundler configuration file the import resolver reads.
pub const WEBPACK_CONFIG_FILE: &str = "webpack.config.js";

/// Compose a configuration from `base` by applying the overlay for each
/// selected feature, in the order given.
pub fn compose(base: LintConfig, features: &[Feature]) -> LintConfig {
    features
        .iter()
        .fold(base, |config, feature| apply(config, *feature))
}

/// Apply a single feature's overlay.
pub fn apply(config: LintConfig, feature: Feature) -> LintConfig {
    match feature {
        Feature::React => react(config),
        Feature::Flow => flow(config),
        Feature::Webpack => webpack(config),
        Feature::Browser => browser(config),
    }
}

/// React components lean on conventions the stricter base rules reject:
/// JSX indentation, underscore-prefixed instance fields, and lifecycle
/// methods that ignore `this`. Generated component boilerplate also runs
/// long, so the line-count limit is dropped outright.
fn react(mut config: LintConfig) -> LintConfig {
    config.set_rule("indent", RuleEntry::Severity(Severity::Off));
    config.set_rule(
        "no-underscore-dangle",
        RuleEntry::WithOptions(Severity::Error, json!({ "allowAfterThis": true })),
    );
    config.set_rule(
        "class-methods-use-this",
        RuleEntry::WithOptions(Severity::Error, json!({ "exceptMethods": ["render"] })),
    );
    config.remove_rule("max-lines");
    config
}

/// Flow annotations need a parser that understands them, the plugin's
/// recommended rules, and a setting restricting checks to annotated files.
fn flow(mut config: LintConfig) -> LintConfig {
    config.add_plugin(FLOW_PLUGIN);
    config.set_parser(FLOW_PARSER);
    config.add_extend(FLOW_PRESET);
    config.merge_setting(FLOW_PLUGIN, json!({ "onlyFilesWithFlowAnnotation": true }));
    config
}

/// Point the import resolver at the bundler configuration, alongside any
/// resolvers already configured in that namespace.
fn webpack(mut config: LintConfig) -> LintConfig {
    config.merge_setting(
        "import/resolver",
        json!({ "webpack": { "config": WEBPACK_CONFIG_FILE } }),
    );
    config
}

/// Declare the two browser globals as read-only.
fn browser(mut config: LintConfig) -> LintConfig {
    config.add_global("document", false);
    config.add_global("window", false);
    config
}
