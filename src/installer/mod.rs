//! Installer Invoker: turns a decided dependency key into a synchronous
//! `npm install` subprocess call.

pub mod args;
pub mod binary;
pub mod invoke;

pub use args::{build_args, FlagValue, InstallOptions};
pub use binary::detect_npm_binary;
pub use invoke::{install, InstallOutcome};
