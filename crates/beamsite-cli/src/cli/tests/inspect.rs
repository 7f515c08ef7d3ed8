//! Tests for validate, hints, show, links and completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use beamsite_core::Platform;
use clap::Parser;

#[test]
fn cli_parse_validate() {
    let cli = parse(&["beamsite", "validate"]);
    assert!(cli.config.is_none());
    match cli.command {
        CliCommand::Validate => {}
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = parse(&["beamsite", "hints", "--config", "/tmp/site.toml"]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/site.toml")));
    match cli.command {
        CliCommand::Hints { html } => assert!(!html),
        _ => panic!("expected Hints"),
    }
}

#[test]
fn cli_parse_hints_html() {
    match parse(&["beamsite", "hints", "--html"]).command {
        CliCommand::Hints { html } => assert!(html),
        _ => panic!("expected Hints"),
    }
}

#[test]
fn cli_parse_show_platform() {
    match parse(&["beamsite", "show", "macos"]).command {
        CliCommand::Show { platform } => assert_eq!(platform, Platform::Macos),
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_show_rejects_unknown_platform() {
    let err = Cli::try_parse_from(["beamsite", "show", "beos"]).unwrap_err();
    assert!(err.to_string().contains("unknown platform `beos`"));
}

#[test]
fn cli_parse_links() {
    match parse(&["beamsite", "--config", "site.toml", "links"]).command {
        CliCommand::Links => {}
        _ => panic!("expected Links"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["beamsite", "completions", "zsh"]).command {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Zsh),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
