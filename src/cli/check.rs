//! `autonpm check` command implementation
//!
//! Runs the resolution checker against the current directory and reports
//! whether the specifier needs installing. The checker itself cannot fail,
//! so this command always exits 0; the answer is in the output.

use crate::cli::output_format::OutputFormat;
use crate::error::Result;
use crate::resolver::{check_in, CheckOptions};
use crate::utils::output::print_info;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

#[derive(Args)]
#[command(after_help = "\
Examples:
  autonpm check react                     Would `react` be installed?
  autonpm check @babel/core/lib           Scoped specifiers keep scope + name
  autonpm check ./client                  Relative imports are never installed
  autonpm check lodash --save             Selective intent skips node_modules fallback")]
pub struct CheckArgs {
    /// Module specifier to check
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,

    /// Treat as a production dependency intent
    #[arg(long)]
    pub save: bool,

    /// Treat as a development dependency intent
    #[arg(long = "save-dev")]
    pub save_dev: bool,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    specifier: &'a str,
    dependency: Option<&'a str>,
    action: &'a str,
}

pub fn execute(args: &CheckArgs) -> Result<()> {
    let options = CheckOptions {
        save: args.save,
        save_dev: args.save_dev,
    };

    let cwd = std::env::current_dir()?;
    let decision = check_in(&args.specifier, &options, &cwd);

    match args.format {
        OutputFormat::Json => {
            let output = CheckOutput {
                specifier: &args.specifier,
                dependency: decision.as_deref(),
                action: if decision.is_some() { "install" } else { "skip" },
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &decision {
            Some(dep) => println!("{} needs install: {}", "missing".yellow(), dep),
            None => print_info(&format!("nothing to install for `{}`", args.specifier)),
        },
    }

    Ok(())
}
