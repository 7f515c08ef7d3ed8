//! `beamsite show <platform>` – print one distribution entry.

use anyhow::Result;
use beamsite_core::{DistributionEntry, Platform, Site};

pub(crate) fn format_entry(platform: Platform, entry: &DistributionEntry) -> String {
    let mut out = format!(
        "{platform}: version {}, released {}\n",
        entry.version().unwrap_or("-"),
        entry.date().unwrap_or("-")
    );
    if entry.links().is_empty() {
        out.push_str("  (no downloads)\n");
    }
    for (kind, url) in entry.links().iter() {
        let sha = entry.checksum(kind).map(|c| c.as_str()).unwrap_or("-");
        out.push_str(&format!("  {:<7} {}\n          sha256 {}\n", kind, url, sha));
    }
    out
}

pub fn run_show(site: &Site, platform: Platform) -> Result<()> {
    print!("{}", format_entry(platform, site.distribution.get_entry(platform)));
    Ok(())
}
