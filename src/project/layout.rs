//! Fixed file layout of an extension project.
//!
//! The validated file set is configuration, not discovery: one manifest,
//! one entry script, and three library scripts at well-known relative
//! paths under the project root.

use std::path::{Path, PathBuf};

/// Relative path of the manifest file
pub const MANIFEST_FILE: &str = "package.json";

/// Relative path of the extension entry script
pub const ENTRY_FILE: &str = "extension.js";

/// Relative paths of the library scripts, in check order
pub const LIBRARY_FILES: [&str; 3] = [
    "lib/cdp-manager.js",
    "lib/relauncher.js",
    "lib/ralph-loop.js",
];

/// Resolved paths of the files a preflight run inspects
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the given project directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        ProjectLayout {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to `package.json`
    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path to `extension.js`
    pub fn entry_script(&self) -> PathBuf {
        self.root.join(ENTRY_FILE)
    }

    /// Paths to the library scripts, in check order
    pub fn library_scripts(&self) -> Vec<PathBuf> {
        LIBRARY_FILES.iter().map(|f| self.root.join(f)).collect()
    }

    /// Path to the library script at the given catalog index
    pub fn library_script(&self, index: usize) -> Option<PathBuf> {
        LIBRARY_FILES.get(index).map(|f| self.root.join(f))
    }
}
