//! SHA-256 artifact checksums: validated digest literals and local file hashing.
//!
//! Digests published on the download page are checked for shape when the
//! registry is built. Hashing a file is only used by the maintainer `verify`
//! command and never touches the network.

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

const BUF_SIZE: usize = 64 * 1024;

/// Hex length of a SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// Why a checksum literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("expected {SHA256_HEX_LEN} hex characters, got {0}")]
    Length(usize),
    #[error("not a hex string: {0}")]
    Charset(String),
}

/// A SHA-256 digest, stored as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    /// Validates a hex digest literal. Surrounding whitespace is ignored and
    /// uppercase hex is normalised to lowercase.
    pub fn parse(raw: &str) -> Result<Self, ChecksumError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len != SHA256_HEX_LEN {
            return Err(ChecksumError::Length(len));
        }
        hex::decode(trimmed).map_err(|e| ChecksumError::Charset(e.to_string()))?;
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a hex digest regardless of case.
    pub fn matches(&self, hex_digest: &str) -> bool {
        self.0.eq_ignore_ascii_case(hex_digest.trim())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large installers.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}
