//! Module specifier parsing
//!
//! Derives the dependency key (the name a registry would know the package by)
//! from a raw import specifier, and classifies names as external registry
//! packages vs. relative/internal imports.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches "react", "fs", "left-pad", etc.
    static ref EXTERNAL: Regex = Regex::new(r"^[a-z\-0-9]+$").unwrap();
    /// Matches "./client", "../something", etc.
    static ref INTERNAL: Regex = Regex::new(r"^\.").unwrap();
}

/// Derive the dependency key from a module specifier.
///
/// Scoped specifiers (`@babel/core/lib/index.js`) keep the first two
/// `/`-separated segments; unscoped ones (`lodash/fp`) keep the first.
///
/// # Example
///
/// ```
/// use autonpm_cli::resolver::specifier::dependency_key;
///
/// assert_eq!(dependency_key("@babel/core/lib"), "@babel/core");
/// assert_eq!(dependency_key("lodash/fp"), "lodash");
/// ```
pub fn dependency_key(specifier: &str) -> String {
    let segments = if is_scoped(specifier) { 2 } else { 1 };
    specifier
        .split('/')
        .take(segments)
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether the specifier names a scoped package (`@scope/name`).
pub fn is_scoped(specifier: &str) -> bool {
    specifier.starts_with('@')
}

/// Whether a derived key matches the registry package-name character class.
pub fn is_external_name(key: &str) -> bool {
    EXTERNAL.is_match(key)
}

/// Whether a specifier is a relative import (`./x`, `../x`).
pub fn is_relative(specifier: &str) -> bool {
    INTERNAL.is_match(specifier)
}
