//! `beamsite hints` – print the resource hint set as JSON or as `<link>` tags.

use anyhow::{Context, Result};
use beamsite_core::Site;

pub fn run_hints(site: &Site, html: bool) -> Result<()> {
    if html {
        for tag in site.hints.link_tags() {
            println!("{tag}");
        }
    } else {
        let json =
            serde_json::to_string_pretty(&site.hints).context("serialize resource hints")?;
        println!("{json}");
    }
    for w in &site.warnings {
        tracing::warn!("{}", w);
    }
    Ok(())
}
