//! `beamsite verify <platform> <kind> <file>` – compare a local artifact with the registry checksum.

use anyhow::{bail, Result};
use beamsite_core::checksum;
use beamsite_core::{ArtifactKind, Platform, Site};
use std::path::Path;

pub fn run_verify(site: &Site, platform: Platform, kind: ArtifactKind, file: &Path) -> Result<()> {
    let entry = site.distribution.get_entry(platform);
    let Some(expected) = entry.checksum(kind) else {
        bail!("no checksum recorded for {platform} {kind}");
    };
    let actual = checksum::sha256_path(file)?;
    if !expected.matches(&actual) {
        bail!(
            "checksum mismatch for {}: expected {expected}, got {actual}",
            file.display()
        );
    }
    tracing::info!(%platform, %kind, path = %file.display(), "artifact checksum verified");
    println!("OK  {actual}  {}", file.display());
    Ok(())
}
