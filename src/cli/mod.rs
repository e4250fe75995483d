// src/cli/mod.rs
pub mod args;

pub use args::Cli;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::annotate::Annotator;
use crate::config::{self, Config};
use crate::discovery;
use crate::engine::Engine;
use crate::reporting;

/// Builds the effective config: `docstamp.toml` first, CLI flags on top.
#[must_use]
pub fn build_config(cli: &Cli) -> Config {
    let mut config = Config::load();
    if !cli.comments.is_empty() {
        config.comments = cli.comments.clone();
    }
    if !cli.visibility.is_empty() {
        config.visibilities = config::parse_visibilities(&cli.visibility);
    }
    if !cli.kind.is_empty() {
        config.kinds = config::parse_kinds(&cli.kind);
    }
    config.recursive = !cli.no_recursive;
    config.dry_run = cli.dry_run;
    config.verbose = cli.verbose;
    config
}

/// Entry point behind the bin: dispatches stdin or batch mode.
///
/// # Errors
/// Returns error when no comment lines are configured, or on I/O and
/// parse failures in stdin mode.
pub fn handle(cli: &Cli) -> Result<()> {
    let config = build_config(cli);

    if config.comments.is_empty() {
        bail!("no comment lines configured; pass --comment or set [annotate] comments in docstamp.toml");
    }

    if cli.stdin {
        return handle_stdin(&config);
    }
    handle_batch(cli, &config)
}

fn handle_stdin(config: &Config) -> Result<()> {
    let mut code = String::new();
    std::io::stdin().read_to_string(&mut code)?;

    let annotator = Annotator::new(
        config.comments.clone(),
        config.visibilities.clone(),
        config.kinds.clone(),
    );
    print!("{}", annotator.process(&code)?);
    Ok(())
}

fn handle_batch(cli: &Cli, config: &Config) -> Result<()> {
    let roots = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };
    let files = discovery::discover(&roots, config)?;

    if files.is_empty() {
        println!("No PHP files to annotate.");
        return Ok(());
    }

    let report = Engine::new(config).run(&files);

    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report, config.verbose);
    }

    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
