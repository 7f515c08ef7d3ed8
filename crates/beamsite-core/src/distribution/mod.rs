//! Distribution registry: version, date, download links and checksums per platform.
//!
//! Built once from the release literals and immutable afterwards. Construction
//! checks that:
//! - every platform has an entry (possibly with no downloads)
//! - every checksum belongs to an artifact kind that also has a link
//! - every link is an absolute URL with a host
//! - every checksum is a 64-character SHA-256 hex digest

mod entry;
mod registry;

pub use entry::{ArtifactMap, DistributionEntry};
pub use registry::DistributionRegistry;
