pub mod config;
pub mod logging;

pub mod checksum;
pub mod distribution;
pub mod error;
pub mod hints;
pub mod links;
pub mod origin;
pub mod platform;
pub mod site;

pub use distribution::{ArtifactMap, DistributionEntry, DistributionRegistry};
pub use error::{ConfigurationError, Violation};
pub use hints::{HintKind, PreloadHint, ResourceHintSet, StaticHints};
pub use links::{ExternalLink, LinkDirectory, LinkEntry, PressArticle};
pub use origin::{extract_origins, LinkParseWarning, Origin, OriginExtraction};
pub use platform::{ArtifactKind, Environment, Platform};
pub use site::{Site, SiteMeta};
