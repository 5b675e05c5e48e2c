//! Node-style module resolution
//!
//! A minimal stand-in for the Node resolver, covering the two outcomes the
//! checker distinguishes: core modules resolve to their bare name, installed
//! packages resolve to a file path, and everything else fails to resolve.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Node core modules. These resolve to their own name rather than a path.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];

/// Outcome of resolving a bare dependency key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A core module; the resolved identifier is the bare name itself.
    Builtin(&'static str),
    /// An installed package; resolved to its entry-point path.
    File(PathBuf),
}

impl Resolved {
    /// Whether the resolved identifier is a bare builtin name (as opposed to
    /// a filesystem path).
    pub fn is_builtin(&self) -> bool {
        matches!(self, Resolved::Builtin(_))
    }
}

/// Entry-point field of a package's own package.json.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PackageEntry {
    main: Option<String>,
}

/// Resolve a bare dependency key the way Node would from `from`.
///
/// Checks the core-module table first, then walks `node_modules` directories
/// from `from` upward. Returns `None` when the key cannot be resolved.
pub fn resolve(key: &str, from: &Path) -> Option<Resolved> {
    if let Some(name) = CORE_MODULES.iter().copied().find(|name| *name == key) {
        return Some(Resolved::Builtin(name));
    }

    for dir in from.ancestors() {
        let package_dir = dir.join(super::node_modules::NODE_MODULES).join(key);
        if let Some(entry) = package_entry_point(&package_dir) {
            return Some(Resolved::File(entry));
        }
    }

    None
}

/// Locate the entry point of an installed package directory: the `main`
/// field of its package.json when present and existing, `index.js`
/// otherwise. `None` when the directory holds neither.
fn package_entry_point(package_dir: &Path) -> Option<PathBuf> {
    if !package_dir.is_dir() {
        return None;
    }

    if let Ok(content) = std::fs::read_to_string(package_dir.join("package.json")) {
        if let Ok(entry) = serde_json::from_str::<PackageEntry>(&content) {
            if let Some(main) = entry.main {
                let main_path = package_dir.join(main);
                if main_path.is_file() {
                    return Some(main_path);
                }
            }
        }
    }

    let index = package_dir.join("index.js");
    if index.is_file() {
        return Some(index);
    }

    None
}
