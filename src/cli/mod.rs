//! CLI command implementations, one module per subcommand.

pub mod check;
pub mod env;
pub mod install;
pub mod output_format;
