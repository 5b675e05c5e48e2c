// Library interface for the autonpm binary and its integration tests

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod resolver;
pub mod utils;

pub use error::{Error, Result};
pub use installer::{install, InstallOptions, InstallOutcome};
pub use resolver::{check, check_in, CheckOptions};
