//! # Project Features
//!
//! A feature is a boolean project characteristic (for example, "uses React")
//! that gates which overlays apply to the composed lint configuration. The
//! recognized set is closed: four features, each appearing at most once per
//! invocation.
//!
//! Feature names are validated here, at the call boundary. Composition in
//! [`crate::overlays`] is total over `Feature` values and never fails.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::suggestions;

/// Development dependencies every generated setup needs, regardless of
/// selected features.
pub const BASE_DEV_DEPENDENCIES: [&str; 5] = [
    "eslint",
    "eslint-plugin-import",
    "eslint-plugin-jsx-a11y",
    "eslint-plugin-react",
    "eslint-config-airbnb",
];

/// A recognized project feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// The project uses React components.
    React,
    /// The project uses Flow type annotations.
    Flow,
    /// The project bundles modules with webpack.
    Webpack,
    /// The project runs in a browser and uses `document` / `window`.
    Browser,
}

impl Feature {
    /// All recognized features, in the order the interactive wizard asks
    /// about them.
    pub const ALL: [Feature; 4] = [
        Feature::React,
        Feature::Flow,
        Feature::Webpack,
        Feature::Browser,
    ];

    /// The canonical name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Feature::React => "react",
            Feature::Flow => "flow",
            Feature::Webpack => "webpack",
            Feature::Browser => "browser",
        }
    }

    /// Question text for the interactive wizard.
    pub fn prompt(self) -> &'static str {
        match self {
            Feature::React => "Does this project use React?",
            Feature::Flow => "Does this project use Flow type annotations?",
            Feature::Webpack => "Does this project bundle with webpack?",
            Feature::Browser => "Does this project run in a browser?",
        }
    }

    /// Additional development dependencies this feature needs beyond
    /// [`BASE_DEV_DEPENDENCIES`].
    pub fn dev_dependencies(self) -> &'static [&'static str] {
        match self {
            Feature::Flow => &["babel-eslint", "eslint-plugin-flowtype"],
            Feature::Webpack => &["eslint-import-resolver-webpack"],
            Feature::React | Feature::Browser => &[],
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
                Error::InvalidFeature {
                    name: s.to_string(),
                    hint: suggestions::similar(s, &names)
                        .map(|candidate| format!("did you mean '{}'?", candidate)),
                }
            })
    }
}

/// Parse feature names into an ordered selection.
///
/// Order of appearance is preserved: it determines overlay application order.
/// Repeated mentions of the same feature are collapsed to the first
/// occurrence, with a warning.
///
/// # Errors
///
/// Returns [`Error::InvalidFeature`] for any name outside the recognized set.
pub fn parse_features<S: AsRef<str>>(names: &[S]) -> Result<Vec<Feature>> {
    let mut selected = Vec::new();
    for name in names {
        let feature: Feature = name.as_ref().parse()?;
        if selected.contains(&feature) {
            log::warn!("feature '{}' given more than once, keeping the first mention", feature);
        } else {
            selected.push(feature);
        }
    }
    Ok(selected)
}

/// The full development dependency list for a feature selection: the base
/// set plus each selected feature's additions, without duplicates.
pub fn dev_dependencies(features: &[Feature]) -> Vec<&'static str> {
    let mut packages: Vec<&'static str> = BASE_DEV_DEPENDENCIES.to_vec();
    for feature in features {
        for package in feature.dev_dependencies() {
            if !packages.contains(package) {
                packages.push(package);
            }
        }
    }
    packages
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing_tests {
        use super::*;

        #[test]
        fn test_every_canonical_name_round_trips() {
            for feature in Feature::ALL {
                let parsed: Feature = feature.name().parse().unwrap();
                assert_eq!(parsed, feature);
            }
        }

        #[test]
        fn test_unknown_name_is_rejected_at_the_boundary() {
            let result = "typescript".parse::<Feature>();
            let error = result.unwrap_err();
            let message = error.to_string();
            assert!(message.contains("Unknown feature: typescript"));
        }

        #[test]
        fn test_misspelling_gets_a_suggestion() {
            let error = "raect".parse::<Feature>().unwrap_err();
            let message = error.to_string();
            assert!(message.contains("did you mean 'react'?"));
        }

        #[test]
        fn test_names_are_case_sensitive() {
            assert!("React".parse::<Feature>().is_err());
        }
    }

    mod selection_tests {
        use super::*;

        #[test]
        fn test_parse_features_preserves_order() {
            let selected = parse_features(&["webpack", "react"]).unwrap();
            assert_eq!(selected, vec![Feature::Webpack, Feature::React]);
        }

        #[test]
        fn test_parse_features_collapses_duplicates_to_first_mention() {
            let selected = parse_features(&["flow", "react", "flow"]).unwrap();
            assert_eq!(selected, vec![Feature::Flow, Feature::React]);
        }

        #[test]
        fn test_parse_features_rejects_unknown_names() {
            assert!(parse_features(&["react", "angular"]).is_err());
        }

        #[test]
        fn test_parse_features_empty_selection() {
            let selected = parse_features::<&str>(&[]).unwrap();
            assert!(selected.is_empty());
        }
    }

    mod dev_dependency_tests {
        use super::*;

        #[test]
        fn test_base_set_without_features() {
            let packages = dev_dependencies(&[]);
            assert_eq!(packages, BASE_DEV_DEPENDENCIES.to_vec());
        }

        #[test]
        fn test_flow_adds_parser_and_plugin() {
            let packages = dev_dependencies(&[Feature::Flow]);
            assert!(packages.contains(&"babel-eslint"));
            assert!(packages.contains(&"eslint-plugin-flowtype"));
        }

        #[test]
        fn test_webpack_adds_resolver() {
            let packages = dev_dependencies(&[Feature::Webpack]);
            assert!(packages.contains(&"eslint-import-resolver-webpack"));
        }

        #[test]
        fn test_no_duplicates_across_features() {
            let packages = dev_dependencies(&Feature::ALL);
            let mut deduped = packages.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), packages.len());
        }
    }
}
