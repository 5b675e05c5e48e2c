//! The dependency-resolution decision procedure
//!
//! Given a module specifier, decide whether there is a registry package that
//! needs installing. This function is deliberately infallible: every
//! filesystem or resolution probe defaults to "absent" on failure, and the
//! answer is either the dependency key to install or nothing.

use crate::resolver::manifest::{load_manifest, Manifest};
use crate::resolver::node_modules;
use crate::resolver::resolve;
use crate::resolver::specifier;
use std::path::Path;

/// Caller intent consumed by the checker.
///
/// `save`/`save_dev` signal that the caller wants the install recorded in a
/// specific dependency table. When neither is set the caller is not being
/// selective, and anything already sitting in `node_modules` counts as
/// satisfied.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Caller intends a production dependency.
    pub save: bool,
    /// Caller intends a development dependency.
    pub save_dev: bool,
}

/// Decide whether the manifest lookup should widen into the `node_modules`
/// directory listing.
///
/// Never when the directory is missing. Otherwise, whenever the caller is
/// not being selective about where the dependency lands. There is
/// intentionally no fallback for a manifest without dependency tables; see
/// DESIGN.md on the widening rule.
fn should_widen(options: &CheckOptions, node_modules_exists: bool) -> bool {
    if !node_modules_exists {
        return false;
    }
    !options.save && !options.save_dev
}

/// Check a module specifier against the project at `cwd`.
///
/// Returns the dependency key to install, or `None` when installation should
/// be skipped: relative imports, already-declared dependencies, linked
/// packages, and Node core modules are never installed.
pub fn check_in(specifier_str: &str, options: &CheckOptions, cwd: &Path) -> Option<String> {
    let scoped = specifier::is_scoped(specifier_str);
    let dep = specifier::dependency_key(specifier_str);

    // Relative modules aren't installed by npm
    if !specifier::is_external_name(&dep) && !scoped {
        return None;
    }

    let nm_exists = node_modules::node_modules_exists(cwd);

    let mut manifest: Manifest = load_manifest(cwd);

    if should_widen(options, nm_exists) {
        manifest = node_modules::widened_manifest(cwd);
    }

    // Bail early if the dependency is already declared
    if manifest.declares(&dep) {
        return None;
    }

    // Linked modules are managed outside npm
    if node_modules::is_linked(cwd, &dep) {
        return None;
    }

    // Core modules resolve to their bare name, not a path
    if let Some(resolved) = resolve::resolve(&dep, cwd) {
        if resolved.is_builtin() {
            return None;
        }
    }

    Some(dep)
}

/// [`check_in`] against the process working directory.
pub fn check(specifier_str: &str, options: &CheckOptions) -> Option<String> {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return None,
    };
    check_in(specifier_str, options, &cwd)
}
