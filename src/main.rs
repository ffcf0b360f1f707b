//! ppc - prompt pack compiler
//!
//! Usage: ppc <COMMAND>
//!
//! Commands:
//!   compile  Compile a prompt for a mode
//!   list     List available modules
//!   doctor   Check the prompt pack for structural problems

mod cli;
mod commands;
mod ui;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{cmd_compile, cmd_doctor, cmd_list, DoctorArgs};
use ppc::Config;

/// Overrides the `-v` derived log filter (EnvFilter syntax)
const LOG_ENV: &str = "PPC_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }
    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "config loaded");
    }
    let config = loaded.config;

    let code = match &cli.command {
        Commands::Compile(args) => cmd_compile(args, &config, cli.json)?,
        Commands::List { prompts } => cmd_list(prompts.as_deref(), &config, cli.json)?,
        Commands::Doctor {
            prompts,
            strict,
            stats,
            graph,
            graph_out,
        } => {
            let args = DoctorArgs {
                prompts: prompts.clone(),
                strict: *strict,
                stats: *stats,
                graph: *graph,
                graph_out: graph_out.clone(),
            };
            cmd_doctor(&args, &config, cli.json)?
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
