//! Build-time configuration errors.
//!
//! Validation never stops at the first problem: every violation found while
//! building the site is collected into one [`ConfigurationError`] so a batch
//! of data-entry mistakes can be fixed in a single pass.

use std::fmt;

use thiserror::Error;

use crate::checksum::ChecksumError;
use crate::origin::OriginError;
use crate::platform::{ArtifactKind, Platform, UnknownVariant};

/// A single problem found in the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("platform `{0}` has no distribution entry")]
    MissingPlatform(Platform),

    #[error("distribution: {0}")]
    UnknownPlatform(UnknownVariant),

    #[error("distribution: platform `{0}` is listed more than once")]
    DuplicatePlatform(Platform),

    #[error("distribution.{platform}.{field}: {source}")]
    UnknownArtifactKind {
        platform: Platform,
        field: &'static str,
        source: UnknownVariant,
    },

    #[error("distribution.{platform}.{field}: `{kind}` is listed more than once")]
    DuplicateArtifactKind {
        platform: Platform,
        field: &'static str,
        kind: ArtifactKind,
    },

    #[error("distribution.{platform}: checksum for `{kind}` has no matching download link")]
    ChecksumWithoutLink {
        platform: Platform,
        kind: ArtifactKind,
    },

    #[error("distribution.{platform}.checksums.{kind}: {source}")]
    MalformedChecksum {
        platform: Platform,
        kind: ArtifactKind,
        source: ChecksumError,
    },

    #[error("{location}: `{url}` is not an absolute URL ({reason})")]
    MalformedUrl {
        location: String,
        url: String,
        reason: String,
    },

    #[error("{location}: `{value}` is not a valid origin ({source})")]
    MalformedOrigin {
        location: String,
        value: String,
        source: OriginError,
    },

    #[error("{location}: must not be empty")]
    EmptyField { location: String },

    #[error("links: duplicate key `{0}`")]
    DuplicateLinkKey(String),

    #[error("site.environment: {0}")]
    UnknownEnvironment(UnknownVariant),
}

/// Fatal configuration error carrying every violation found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    violations: Vec<Violation>,
}

impl ConfigurationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.violations.len();
        write!(
            f,
            "invalid site configuration ({n} problem{}):",
            if n == 1 { "" } else { "s" }
        )?;
        for v in &self.violations {
            write!(f, "\n  - {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigurationError {}

/// Accumulates violations while a configuration is being built.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<Violation>);

impl Violations {
    pub(crate) fn push(&mut self, v: Violation) {
        tracing::debug!("config violation: {}", v);
        self.0.push(v);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ok(value) when nothing was recorded; otherwise all recorded violations.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, ConfigurationError> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(ConfigurationError {
                violations: self.0,
            })
        }
    }

    pub(crate) fn into_error(self) -> ConfigurationError {
        ConfigurationError {
            violations: self.0,
        }
    }
}
