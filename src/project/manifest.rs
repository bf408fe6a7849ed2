//! Manifest reading and deserialization.
//!
//! The manifest is the extension's `package.json`. Only the fields the
//! validator reports on are modeled; everything else is ignored by serde.
//! A manifest is read once per check and discarded, there is no cache.

use crate::PreflightError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Extension manifest, as much of it as validation needs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub main: Option<String>,
    pub contributes: Option<Contributes>,
    #[serde(rename = "activationEvents")]
    pub activation_events: Option<Vec<String>>,
}

/// The `contributes` section of the manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contributes {
    pub commands: Option<Vec<CommandContribution>>,
}

/// One entry under `contributes.commands`
#[derive(Debug, Clone, Deserialize)]
pub struct CommandContribution {
    pub command: String,
    pub title: Option<String>,
}

impl Manifest {
    /// Contributed command identifiers, in declaration order
    pub fn command_ids(&self) -> Option<Vec<&str>> {
        self.contributes
            .as_ref()
            .and_then(|c| c.commands.as_ref())
            .map(|cmds| cmds.iter().map(|c| c.command.as_str()).collect())
    }
}

/// Read and parse a manifest file.
///
/// I/O and JSON errors are reported separately so a missing file is
/// distinguishable from a malformed one.
pub fn load_manifest(path: &Path) -> Result<Manifest, PreflightError> {
    let contents = fs::read_to_string(path).map_err(|e| PreflightError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| PreflightError::ManifestParse {
        path: path.to_path_buf(),
        source: e,
    })
}
