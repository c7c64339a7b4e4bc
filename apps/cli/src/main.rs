//! `grok` - drive the ticket-number form from the command line.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use grok_form::TicketForm;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _log = grok_log::init_with(log_config(cli.verbose)).context("failed to initialize logging")?;

    let form_config = config::load(&cli)?;
    tracing::debug!(?form_config, "configuration loaded");
    let mut form = TicketForm::with_config(form_config)?;

    match &cli.command {
        Command::Check { values } => commands::check(&mut form, values, cli.json),
        Command::Submit { value } => commands::submit(&mut form, value, cli.json),
    }
}

/// `GROK_LOG`/`RUST_LOG` set the baseline; each `-v` raises it.
fn log_config(verbose: u8) -> grok_log::Config {
    let config = grok_log::Config::from_env().with_service("grok");
    match verbose {
        0 => config,
        1 => config.with_level("info"),
        2 => config.with_level("debug"),
        _ => config.with_level("trace"),
    }
}
