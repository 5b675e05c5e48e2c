//! npm binary detection with precedence chain
//!
//! 1. CLI flag `--npm` (highest priority)
//! 2. Environment variable `$NPM_BINARY` (machine-specific)
//! 3. User config `~/.config/autonpm/config.toml` (npm_binary field)
//! 4. Literal `npm` resolved through PATH (lowest priority)
//!
//! Explicitly configured paths are validated to exist; the PATH fallback is
//! handed to the OS as-is.

use crate::config::load_user_config;
use crate::error::{Error, Result};
use std::env;
use std::path::Path;

/// Default binary name resolved through PATH.
const DEFAULT_BINARY: &str = "npm";

/// Environment variable overriding the npm binary location.
pub const NPM_BINARY_ENV: &str = "NPM_BINARY";

/// Detect the npm binary using the precedence chain.
///
/// # Errors
///
/// Returns `Error::Config` when an explicitly configured binary (flag, env
/// var, or config file) points at a path that does not exist.
pub fn detect_npm_binary(cli_npm: Option<&str>) -> Result<String> {
    // 1. CLI flag
    if let Some(binary) = cli_npm {
        return validated(binary, "--npm flag");
    }

    // 2. Environment variable
    if let Ok(binary) = env::var(NPM_BINARY_ENV) {
        if !binary.is_empty() {
            return validated(&binary, "NPM_BINARY environment variable");
        }
    }

    // 3. User config
    if let Some(config) = load_user_config()? {
        if let Some(binary) = config.npm_binary {
            return validated(&binary, "user config");
        }
    }

    // 4. PATH fallback
    Ok(DEFAULT_BINARY.to_string())
}

/// Accept a configured binary: bare names are left to PATH lookup, explicit
/// paths must exist.
fn validated(binary: &str, source: &str) -> Result<String> {
    let path = Path::new(binary);
    if path.components().count() > 1 && !path.exists() {
        return Err(Error::Config(format!(
            "npm binary from {} not found: {}\n\
             Hint: update the path or unset it to use PATH lookup",
            source, binary
        )));
    }
    Ok(binary.to_string())
}
