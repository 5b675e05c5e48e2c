//! package.json parsing
//!
//! Only the dependency tables matter here; everything else in the manifest is
//! ignored. Loads are deliberately uncached: the tool may live inside a
//! long-running watcher process, and a manifest rewritten by a previous
//! install must be observed by the next check.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The subset of package.json this tool reads.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Manifest {
    /// Production dependencies: name -> version constraint
    pub dependencies: BTreeMap<String, String>,
    /// Development dependencies: name -> version constraint
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Manifest {
    /// Whether `key` is declared in either dependency table.
    pub fn declares(&self, key: &str) -> bool {
        self.dependencies.contains_key(key) || self.dev_dependencies.contains_key(key)
    }
}

/// Load `<dir>/package.json`, reading the file fresh from disk.
///
/// Any failure (missing file, unreadable, malformed JSON) yields the empty
/// manifest; a broken package.json must not stop dependency checks.
pub fn load_manifest(dir: &Path) -> Manifest {
    let path = dir.join("package.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Manifest::default(),
    };

    serde_json::from_str(&content).unwrap_or_default()
}
