mod commands;
mod config;
mod error;
mod options;
mod platform;
mod utils;

use anyhow::Context;
use clap::{Parser, CommandFactory};
use colored::Colorize;

use options::Action;

fn main() -> anyhow::Result<()> {
    let cli = options::Cli::parse();

    options::verbose::set_verbose(cli.verbose);

    match cli.action() {
        Action::ShowVersion => {
            if cli.verbose {
                println!("Verbose mode: {}", "enabled".green());
            }
            options::version::show();
        }
        Action::Help => {
            let mut cmd = options::Cli::command();
            cmd.print_help()?;
            println!();
        }
        Action::Switch(query) => {
            let settings = config::Settings::load()?;
            options::verbose::log(&format!("Install root: {}", settings.install_root.display()));
            commands::switch::execute(query, &settings)
                .with_context(|| format!("Failed to switch to Go {}", query))?;
        }
        Action::TooManyVersions(queries) => {
            eprintln!(
                "{} expected exactly one version, got {}: {}",
                "error:".red(),
                queries.len(),
                queries.join(" ")
            );
        }
    }

    Ok(())
}
