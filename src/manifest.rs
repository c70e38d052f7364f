//! # Project Manifest
//!
//! The project manifest (`package.json`) is opaque to this tool except for
//! its `scripts` table. [`Manifest::ensure_script`] inserts a script entry
//! only when the name is absent; an existing entry is never altered or
//! removed, whatever its value. All other manifest content passes through
//! untouched, and key order is preserved so rewrites stay diff-minimal.
//!
//! Acquisition is modeled as a sum type: [`acquire`] reads the file and
//! reports [`ManifestSource::Found`], synthesizes a minimal document for a
//! missing file and reports [`ManifestSource::Created`], or gives up with
//! [`ManifestSource::Unavailable`]. Only the last case becomes an error, via
//! [`ManifestSource::into_manifest`].

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Wildcard lint invocation wired into the manifest.
pub const LINT_SCRIPT_NAME: &str = "lint";
pub const LINT_SCRIPT_COMMAND: &str = "eslint **/*.js";

/// Bare tool invocation, for ad-hoc runs through the package runner.
pub const TOOL_SCRIPT_NAME: &str = "eslint";
pub const TOOL_SCRIPT_COMMAND: &str = "eslint";

/// A parsed project manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Map<String, JsonValue>,
}

impl Manifest {
    /// Synthesize a minimal manifest, shaped like a fresh `npm init` result.
    pub fn new(name: &str) -> Self {
        let mut root = Map::new();
        root.insert("name".to_string(), JsonValue::String(name.to_string()));
        root.insert("version".to_string(), JsonValue::String("1.0.0".to_string()));
        Self { root }
    }

    /// Parse manifest content. The document must be a JSON object.
    pub fn parse(content: &str) -> Result<Self> {
        let root: JsonValue = serde_json::from_str(content)?;
        match root {
            JsonValue::Object(map) => Ok(Self { root: map }),
            other => Err(Error::Manifest {
                message: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Insert `name -> command` into the `scripts` table unless the name is
    /// already taken, creating the table when absent.
    ///
    /// Returns whether an entry was inserted. Calling again with the same
    /// arguments leaves the manifest identical and returns `false`.
    pub fn ensure_script(&mut self, name: &str, command: &str) -> bool {
        let scripts = self
            .root
            .entry("scripts".to_string())
            .or_insert_with(|| JsonValue::Object(Map::new()));
        if !scripts.is_object() {
            log::warn!("manifest `scripts` entry is not a table, replacing it");
            *scripts = JsonValue::Object(Map::new());
        }

        let scripts = scripts.as_object_mut().expect("scripts is an object");
        if scripts.contains_key(name) {
            log::debug!("script `{}` already present, leaving it untouched", name);
            return false;
        }

        scripts.insert(name.to_string(), JsonValue::String(command.to_string()));
        log::debug!("added script `{}`: {}", name, command);
        true
    }

    /// Look up a script command by name.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.root
            .get("scripts")
            .and_then(|scripts| scripts.get(name))
            .and_then(JsonValue::as_str)
    }

    /// Render the manifest as 2-space indented JSON with a trailing newline,
    /// keys in their original order.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(&self.root)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Outcome of trying to obtain the project manifest.
#[derive(Debug)]
pub enum ManifestSource {
    /// The manifest file existed and parsed.
    Found(Manifest),
    /// The file was missing; a minimal manifest was synthesized.
    Created(Manifest),
    /// No manifest could be obtained.
    Unavailable { reason: String },
}

impl ManifestSource {
    /// Unwrap into a manifest plus a created flag, surfacing
    /// [`Error::ManifestUnavailable`] for the unavailable case.
    pub fn into_manifest(self, path: &Path) -> Result<(Manifest, bool)> {
        match self {
            ManifestSource::Found(manifest) => Ok((manifest, false)),
            ManifestSource::Created(manifest) => Ok((manifest, true)),
            ManifestSource::Unavailable { reason } => Err(Error::ManifestUnavailable {
                path: path.display().to_string(),
                message: reason,
            }),
        }
    }
}

/// Obtain the manifest at `path`.
///
/// A missing file yields [`ManifestSource::Created`] with a synthesized
/// manifest named after the containing directory. A file that exists but
/// cannot be read or parsed yields [`ManifestSource::Unavailable`]:
/// overwriting it with a fresh document would clobber whatever the user has
/// there.
pub fn acquire(path: &Path) -> ManifestSource {
    match fs::read_to_string(path) {
        Ok(content) => match Manifest::parse(&content) {
            Ok(manifest) => {
                log::debug!("found manifest at {}", path.display());
                ManifestSource::Found(manifest)
            }
            Err(err) => ManifestSource::Unavailable {
                reason: err.to_string(),
            },
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let name = package_name_for(path);
            log::info!("no manifest at {}, starting a fresh one", path.display());
            ManifestSource::Created(Manifest::new(&name))
        }
        Err(err) => ManifestSource::Unavailable {
            reason: err.to_string(),
        },
    }
}

/// Default package name for a synthesized manifest: the containing
/// directory's name.
fn package_name_for(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("package")
        .to_string()
}
