//! CLI for maintaining the Beam site configuration.

mod commands;

use anyhow::Result;
use beamsite_core::config;
use beamsite_core::{ArtifactKind, Platform, Site};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{
    run_completions, run_hints, run_links, run_show, run_validate, run_verify,
};

/// Top-level CLI for the Beam site configuration.
#[derive(Debug, Parser)]
#[command(name = "beamsite")]
#[command(about = "Validate and inspect the Beam marketing site configuration", long_about = None)]
pub struct Cli {
    /// Path to site.toml (default: $XDG_CONFIG_HOME/beamsite/site.toml, created on first use).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the configuration and report every problem found.
    Validate,

    /// Print the assembled resource hints as JSON.
    Hints {
        /// Print `<link>` tags for the page head instead of JSON.
        #[arg(long)]
        html: bool,
    },

    /// Show version, date, links and checksums for one platform.
    Show {
        /// Platform name (ios, macos, windows, android, linux, chrome).
        platform: Platform,
    },

    /// List the external-link directory.
    Links,

    /// Check a local artifact file against the registry checksum.
    Verify {
        /// Platform name.
        platform: Platform,
        /// Artifact kind (store, wallet, cli, node).
        kind: ArtifactKind,
        /// Path to the downloaded artifact.
        file: PathBuf,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// Load and build the site from `path`, or from the XDG config file.
pub(crate) fn load_site(path: Option<&Path>) -> Result<Site> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!(links = cfg.links.len(), "loaded site config");
    Ok(Site::build(&cfg)?)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config = cli.config.as_deref();

        match cli.command {
            CliCommand::Validate => run_validate(config)?,
            CliCommand::Hints { html } => run_hints(&load_site(config)?, html)?,
            CliCommand::Show { platform } => run_show(&load_site(config)?, platform)?,
            CliCommand::Links => run_links(&load_site(config)?)?,
            CliCommand::Verify {
                platform,
                kind,
                file,
            } => run_verify(&load_site(config)?, platform, kind, &file)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
