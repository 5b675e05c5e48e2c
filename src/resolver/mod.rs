//! Resolution Checker: decides whether a module specifier names a registry
//! package that is missing from the project and should be installed.

pub mod check;
pub mod manifest;
pub mod node_modules;
pub mod resolve;
pub mod specifier;

// Re-export the checker surface
pub use check::{check, check_in, CheckOptions};
pub use manifest::Manifest;
