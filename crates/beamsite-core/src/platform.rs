//! Closed identifier sets: platforms, artifact kinds and deployment environments.
//!
//! Every consumer matches on these exhaustively, so adding a variant is a
//! compile error until the registry and renderers account for it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A name that does not belong to one of the closed identifier sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {set} `{value}` (expected one of: {expected})")]
pub struct UnknownVariant {
    pub set: &'static str,
    pub value: String,
    pub expected: String,
}

impl UnknownVariant {
    fn new<T: fmt::Display>(set: &'static str, value: &str, all: &[T]) -> Self {
        let expected = all
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            set,
            value: value.to_string(),
            expected,
        }
    }
}

/// Platform a build is distributed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Macos,
    Windows,
    Android,
    Linux,
    Chrome,
}

impl Platform {
    pub const COUNT: usize = 6;

    pub const ALL: [Platform; Platform::COUNT] = [
        Platform::Ios,
        Platform::Macos,
        Platform::Windows,
        Platform::Android,
        Platform::Linux,
        Platform::Chrome,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
            Platform::Android => "android",
            Platform::Linux => "linux",
            Platform::Chrome => "chrome",
        }
    }

    /// Position in [`Platform::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Platform::Ios => 0,
            Platform::Macos => 1,
            Platform::Windows => 2,
            Platform::Android => 3,
            Platform::Linux => 4,
            Platform::Chrome => 5,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant::new("platform", s, &Platform::ALL))
    }
}

/// Distribution channel for an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Application-store listing.
    Store,
    /// Full wallet installer.
    Wallet,
    /// Command-line wallet build.
    Cli,
    /// Headless node build.
    Node,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Store,
        ArtifactKind::Wallet,
        ArtifactKind::Cli,
        ArtifactKind::Node,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Store => "store",
            ArtifactKind::Wallet => "wallet",
            ArtifactKind::Cli => "cli",
            ArtifactKind::Node => "node",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ArtifactKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant::new("artifact kind", s, &ArtifactKind::ALL))
    }
}

/// Network the site is deployed for. Selected by the deployment, passed in as a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Mainnet,
    Dappnet,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Mainnet, Environment::Dappnet];

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Mainnet => "mainnet",
            Environment::Dappnet => "dappnet",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Environment::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVariant::new("environment", s, &Environment::ALL))
    }
}
