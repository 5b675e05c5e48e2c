//! `autonpm install` command implementation
//!
//! Checks the specifier and, when a dependency is missing, invokes npm to
//! install it. The npm process inherits the terminal and its exit code is
//! passed through unchanged.

use crate::cli::output_format::OutputFormat;
use crate::error::{Error, Result};
use crate::installer::{build_args, detect_npm_binary, install, InstallOptions};
use crate::resolver::check_in;
use crate::utils::output::{print_info, print_success};
use clap::Args;
use serde::Serialize;
use std::process;

#[derive(Args)]
#[command(after_help = "\
Examples:
  autonpm install react                   Install if missing
  autonpm install react --save            Record in dependencies
  autonpm install jest --save-dev         Record in devDependencies
  autonpm install foo --flag registry=https://registry.example.com
                                          Pass arbitrary npm flags
  autonpm install foo --dry-run           Show the npm command without running it")]
pub struct InstallArgs {
    /// Module specifier to install when missing
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,

    /// Record as a production dependency (--save)
    #[arg(long)]
    pub save: bool,

    /// Record as a development dependency (--save-dev)
    #[arg(long = "save-dev")]
    pub save_dev: bool,

    /// Extra npm flag, NAME for boolean or NAME=VALUE for valued (repeatable)
    #[arg(long = "flag", value_name = "NAME[=VALUE]")]
    pub flags: Vec<String>,

    /// npm binary to invoke (overrides $NPM_BINARY and user config)
    #[arg(long)]
    pub npm: Option<String>,

    /// Print the npm command line without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct DryRunOutput<'a> {
    npm: &'a str,
    args: &'a [String],
}

/// Split a `--flag NAME[=VALUE]` argument into the options builder form.
fn parse_flag(raw: &str) -> (String, Option<String>) {
    match raw.split_once('=') {
        Some((name, value)) => (name.to_string(), Some(value.to_string())),
        None => (raw.to_string(), None),
    }
}

fn install_options(args: &InstallArgs) -> InstallOptions {
    let mut options = InstallOptions::new()
        .with_save(args.save)
        .with_save_dev(args.save_dev);

    for raw in &args.flags {
        let (name, value) = parse_flag(raw);
        options = match value {
            Some(value) => options.with_flag(&name, value),
            None => options.with_flag(&name, true),
        };
    }

    options
}

pub fn execute(args: &InstallArgs) -> Result<()> {
    let options = install_options(args);

    let cwd = std::env::current_dir()?;
    let decision = check_in(&args.specifier, &options.check_options(), &cwd);

    let dep = match decision {
        Some(dep) => dep,
        None => {
            if !args.format.is_machine_readable() {
                print_info(&format!("nothing to install for `{}`", args.specifier));
            } else {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "specifier": args.specifier,
                        "action": "skip",
                    }))?
                );
            }
            return Ok(());
        }
    };

    let npm_binary = detect_npm_binary(args.npm.as_deref())?;

    if args.dry_run {
        let argv = build_args(&dep, &options);
        match args.format {
            OutputFormat::Json => {
                let output = DryRunOutput {
                    npm: &npm_binary,
                    args: &argv,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Human => {
                println!("{} {}", npm_binary, argv.join(" "));
            }
        }
        return Ok(());
    }

    let outcome = install(Some(&dep), &options, &npm_binary)
        .expect("install with a decided dependency always produces an outcome");

    if let Some(error) = outcome.error {
        return Err(Error::Execution(format!(
            "could not spawn `{}`: {}",
            npm_binary, error
        )));
    }

    match outcome.status {
        Some(0) => {
            print_success(&format!("installed `{}`", dep));
            Ok(())
        }
        // npm already printed its own diagnostics to the inherited stderr
        Some(code) => process::exit(code),
        None => Err(Error::Execution(match outcome.signal {
            Some(signal) => format!("npm terminated by signal {}", signal),
            None => "npm terminated without an exit code".to_string(),
        })),
    }
}
