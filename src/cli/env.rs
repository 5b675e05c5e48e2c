//! `autonpm env` command implementation
//!
//! Shows the effective environment a check or install would run against:
//! working directory, resolved npm binary, and manifest/node_modules state.

use crate::cli::output_format::OutputFormat;
use crate::error::Result;
use crate::installer::detect_npm_binary;
use crate::resolver::node_modules::node_modules_exists;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

#[derive(Args)]
pub struct EnvArgs {
    /// npm binary to resolve (overrides $NPM_BINARY and user config)
    #[arg(long)]
    pub npm: Option<String>,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct EnvOutput {
    cwd: String,
    npm_binary: String,
    package_json: bool,
    node_modules: bool,
    user_config: Option<String>,
}

pub fn execute(args: &EnvArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let npm_binary = detect_npm_binary(args.npm.as_deref())?;

    let output = EnvOutput {
        cwd: cwd.display().to_string(),
        npm_binary,
        package_json: cwd.join("package.json").is_file(),
        node_modules: node_modules_exists(&cwd),
        user_config: crate::config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string()),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Human => {
            println!("{}        {}", "cwd".bold(), output.cwd);
            println!("{} {}", "npm binary".bold(), output.npm_binary);
            println!(
                "{}  {}",
                "manifest".bold(),
                if output.package_json {
                    "package.json present"
                } else {
                    "no package.json"
                }
            );
            println!(
                "{}  {}",
                "installed".bold(),
                if output.node_modules {
                    "node_modules present"
                } else {
                    "no node_modules"
                }
            );
            match &output.user_config {
                Some(path) => println!("{}    {}", "config".bold(), path),
                None => println!("{}    none", "config".bold()),
            }
        }
    }

    Ok(())
}
