//! `beamsite validate` – build the configuration and report problems.

use anyhow::Result;
use beamsite_core::Site;
use std::path::Path;

use crate::cli::load_site;

/// One-line summary of a successfully built site.
pub(crate) fn summary(site: &Site) -> String {
    let downloads: usize = site
        .distribution
        .iter()
        .map(|(_, e)| e.links().len())
        .sum();
    format!(
        "ok: {} ({}), {} downloads, {} links, {} press articles, {} resource hints",
        site.meta.app_title,
        site.meta.environment,
        downloads,
        site.links.len(),
        site.press.len(),
        site.hints.len()
    )
}

/// Fails with every violation listed if the configuration is invalid.
pub fn run_validate(config: Option<&Path>) -> Result<()> {
    let site = load_site(config)?;
    for w in &site.warnings {
        println!("warning: {w}");
    }
    println!("{}", summary(&site));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamsite_core::config::SiteConfig;

    #[test]
    fn summary_of_bundled_site() {
        let site = Site::build(&SiteConfig::bundled().unwrap()).unwrap();
        // 13 downloads; 3 preload + 2 preconnect + 1 prerender + 11 dns-prefetch hints.
        assert_eq!(
            summary(&site),
            "ok: Beam (mainnet), 13 downloads, 11 links, 8 press articles, 17 resource hints"
        );
    }

    #[test]
    fn invalid_file_reports_all_problems() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        let toml = beamsite_core::config::DEFAULT_SITE_TOML
            .replace("[distribution.chrome.links]", "[distribution.chromium.links]")
            .replace("environment = \"mainnet\"", "environment = \"testnet\"");
        std::fs::write(&path, toml).unwrap();

        let err = run_validate(Some(&path)).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("3 problems"), "{msg}");
        assert!(msg.contains("unknown platform `chromium`"), "{msg}");
        assert!(msg.contains("platform `chrome` has no distribution entry"), "{msg}");
        assert!(msg.contains("unknown environment `testnet`"), "{msg}");
    }

    #[test]
    fn valid_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, beamsite_core::config::DEFAULT_SITE_TOML).unwrap();
        assert!(run_validate(Some(&path)).is_ok());
    }
}
