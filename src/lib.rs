//! # Lintstrap Library
//!
//! This library provides the core functionality for setting up ESLint in a
//! JavaScript project. It is designed to be used by the `lintstrap`
//! command-line tool but can also be integrated into other applications.
//!
//! ## Quick Example
//!
//! ```
//! use lintstrap::config::LintConfig;
//! use lintstrap::features::Feature;
//! use lintstrap::manifest::Manifest;
//! use lintstrap::overlays;
//!
//! // Compose a configuration for a Flow-typed project
//! let config = overlays::compose(LintConfig::base(), &[Feature::Flow]);
//! assert_eq!(config.parser.as_deref(), Some("babel-eslint"));
//! assert_eq!(config.plugins, vec!["flowtype"]);
//!
//! // Wire the lint script into a manifest, idempotently
//! let mut manifest = Manifest::parse("{}").unwrap();
//! assert!(manifest.ensure_script("lint", "eslint **/*.js"));
//! assert!(!manifest.ensure_script("lint", "eslint **/*.js"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Features (`features`)**: boolean project characteristics (React,
//!   Flow, webpack, browser globals) that gate which overlays apply.
//!   Unrecognized names are rejected here, at the call boundary.
//! - **Configuration (`config`)**: the lint configuration document, its
//!   bundled base template, and the additive mutation primitives.
//! - **Overlays (`overlays`)**: pure transformations, one per feature,
//!   applied in caller order over the base template.
//! - **Manifest (`manifest`)**: the project manifest and the idempotent
//!   script merge that never clobbers existing entries.
//!
//! The composer runs first and is pure; the manifest merge runs
//! independently against the project's `package.json`. The two share no
//! state, and both hand finished values back to the caller for persistence.

pub mod config;
pub mod error;
pub mod features;
pub mod manifest;
pub mod merge;
pub mod output;
pub mod overlays;
pub mod suggestions;

#[cfg(test)]
mod compose_proptest;
