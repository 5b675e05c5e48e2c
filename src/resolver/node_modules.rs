//! node_modules filesystem probes
//!
//! Every probe in this module returns a default instead of an error: a check
//! must never fail because the filesystem is in an odd state. The `Option`
//! returns make the "default on failure" path an explicit branch rather than
//! a caught exception.

use crate::resolver::manifest::Manifest;
use std::collections::BTreeMap;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Directory name npm installs packages into.
pub const NODE_MODULES: &str = "node_modules";

/// `<dir>/node_modules`.
pub fn node_modules_dir(dir: &Path) -> PathBuf {
    dir.join(NODE_MODULES)
}

/// lstat that folds errors into `None`.
///
/// `symlink_metadata` rather than `metadata`: linked packages must be
/// observed as links, not followed to their targets.
pub fn try_lstat(path: &Path) -> Option<Metadata> {
    std::fs::symlink_metadata(path).ok()
}

/// Whether `<dir>/node_modules` exists as a directory.
///
/// A plain file at that path counts as non-existent.
pub fn node_modules_exists(dir: &Path) -> bool {
    try_lstat(&node_modules_dir(dir))
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// List entry names under `<dir>/node_modules`.
///
/// Unreadable directories and unreadable entries yield an empty or partial
/// listing rather than an error.
pub fn list_installed(dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(node_modules_dir(dir)) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect()
}

/// Build the widened manifest: every installed directory entry is treated as
/// a declared dependency at the wildcard version. A literal `.` entry is
/// excluded; other dot-entries (npm's `.bin`) are kept, matching how the
/// directory listing has always been interpreted.
pub fn widened_manifest(dir: &Path) -> Manifest {
    let dependencies: BTreeMap<String, String> = list_installed(dir)
        .into_iter()
        .filter(|name| name != ".")
        .map(|name| (name, "*".to_string()))
        .collect();

    Manifest {
        dependencies,
        dev_dependencies: BTreeMap::new(),
    }
}

/// Whether `<dir>/node_modules/<key>` is a symbolic link.
///
/// Linked packages are workspace- or `npm link`-managed and are never
/// auto-installed.
pub fn is_linked(dir: &Path, key: &str) -> bool {
    try_lstat(&node_modules_dir(dir).join(key))
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}
