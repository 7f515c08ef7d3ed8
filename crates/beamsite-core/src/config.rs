//! Raw site configuration as written in `site.toml`.
//!
//! Everything here is plain strings straight from the file. Typed, validated
//! values only come out of [`crate::site::Site::build`], which is the first
//! place the release literals are checked.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Bundled mainnet configuration, written out on first use.
pub const DEFAULT_SITE_TOML: &str = include_str!("../data/site.toml");

/// `[site]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSiteMeta {
    pub app_title: String,
    pub contact_email: String,
    /// Banner message; absent or empty disables the banner.
    #[serde(default)]
    pub announcement: Option<String>,
    /// "mainnet" or "dappnet". Defaults to mainnet.
    #[serde(default)]
    pub environment: Option<String>,
}

/// One `[[links]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLink {
    pub key: String,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// One `[[press]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPressArticle {
    pub image: String,
    pub href: String,
}

/// One `[[hints.preload]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPreload {
    pub href: String,
    #[serde(default, rename = "as")]
    pub as_type: Option<String>,
    #[serde(default)]
    pub crossorigin: bool,
}

/// `[hints]` section: the hand-authored hint lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHints {
    #[serde(default)]
    pub preload: Vec<RawPreload>,
    #[serde(default)]
    pub preconnect: Vec<String>,
    #[serde(default)]
    pub prerender: Vec<String>,
    #[serde(default)]
    pub prefetch: Vec<String>,
}

/// `[distribution.<platform>]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDistributionEntry {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    /// Artifact kind → download URL.
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    /// Artifact kind → SHA-256 hex digest.
    #[serde(default)]
    pub checksums: BTreeMap<String, String>,
}

/// Whole `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: RawSiteMeta,
    #[serde(default)]
    pub links: Vec<RawLink>,
    #[serde(default)]
    pub hints: RawHints,
    /// Platform name → entry. Keys are checked against the platform set at build time.
    #[serde(default)]
    pub distribution: BTreeMap<String, RawDistributionEntry>,
    #[serde(default)]
    pub press: Vec<RawPressArticle>,
}

impl SiteConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: SiteConfig = toml::from_str(data).context("parse site configuration")?;
        Ok(cfg)
    }

    /// The bundled mainnet configuration.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(DEFAULT_SITE_TOML)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("beamsite")?;
    Ok(xdg_dirs.place_config_file("site.toml")?)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<SiteConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    SiteConfig::from_toml_str(&data).with_context(|| format!("in {}", path.display()))
}

/// Load configuration from the XDG config dir, creating it from the bundled default if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    init_at(&path)?;
    load_from(&path)
}

/// Write the bundled default to `path` unless a file is already there.
/// Returns true if a file was created.
pub fn init_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_SITE_TOML).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default site config at {}", path.display());
    Ok(true)
}
