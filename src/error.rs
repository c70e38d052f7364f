//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for
//! `lintstrap`. It uses the `thiserror` library to create an `Error` enum
//! covering the anticipated failure modes, providing clear and descriptive
//! error messages.
//!
//! Two variants carry domain meaning:
//!
//! - **`InvalidFeature`**: the caller asked for a feature name outside the
//!   recognized set. Composition itself is total; this is raised at the
//!   parse boundary before any overlay runs.
//! - **`ManifestUnavailable`**: no usable `package.json` could be obtained,
//!   even after attempting to synthesize one. Fatal to the script-merge
//!   step; the lint configuration output is unaffected.
//!
//! The remaining variants wrap I/O and serialization failures from the
//! standard library and `serde_json`.

use thiserror::Error;

/// Main error type for lintstrap operations
#[derive(Error, Debug)]
pub enum Error {
    /// The caller requested a feature name outside the recognized set.
    ///
    /// Includes an optional did-you-mean hint for close misspellings.
    #[error("Unknown feature: {name}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    InvalidFeature {
        name: String,
        /// Optional suggestion for a recognized feature name
        hint: Option<String>,
    },

    /// No usable manifest document could be obtained.
    #[error("No usable manifest at {path}: {message}")]
    ManifestUnavailable { path: String, message: String },

    /// The manifest parsed as JSON but is not structurally a manifest.
    #[error("Manifest error: {message}")]
    Manifest { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
