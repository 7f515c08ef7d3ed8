//! `beamsite links` – list the external-link directory.

use anyhow::Result;
use beamsite_core::Site;

pub fn run_links(site: &Site) -> Result<()> {
    if site.links.is_empty() {
        println!("No links configured.");
        return Ok(());
    }
    println!("{:<12} {:<12} {:<12} {}", "KEY", "TITLE", "ICON", "URL");
    for l in site.links.iter() {
        println!(
            "{:<12} {:<12} {:<12} {}",
            l.entry.label, l.title, l.icon, l.entry.url
        );
    }
    Ok(())
}
