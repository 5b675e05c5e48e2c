use clap::{Parser, Subcommand};
use std::process;

use autonpm_cli::cli;

#[derive(Parser)]
#[command(name = "autonpm")]
#[command(version)]
#[command(before_help = concat!("\u{25b8} autonpm ", env!("CARGO_PKG_VERSION")))]
#[command(about = "Install missing npm dependencies on demand")]
#[command(
    long_about = "autonpm decides whether a module specifier names a registry package \
missing from the current project, and installs it through npm when it does."
)]
#[command(after_help = "\
Getting started:
  autonpm check react            Would `react` be installed here?
  autonpm install react --save   Install and record it if missing
  autonpm env                    Show the resolved npm binary and project state

Specifiers like `react`, `lodash/fp`, and `@babel/core/lib` are checked;
relative imports (`./x`, `../x`) and Node core modules are never installed.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a specifier needs installing
    #[command(display_order = 1)]
    Check(cli::check::CheckArgs),
    /// Install a specifier's package when it is missing
    #[command(display_order = 2)]
    Install(cli::install::InstallArgs),
    /// Show the effective environment for checks and installs
    #[command(display_order = 3)]
    Env(cli::env::EnvArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Check(args) => cli::check::execute(args),
        Commands::Install(args) => cli::install::execute(args),
        Commands::Env(args) => cli::env::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
