//! Per-platform distribution entry and the partial artifact map it is built from.

use serde::Serialize;
use url::Url;

use crate::checksum::Checksum;
use crate::config::RawDistributionEntry;
use crate::error::{ConfigurationError, Violation, Violations};
use crate::links::parse_absolute_url;
use crate::platform::{ArtifactKind, Platform};

/// Partial mapping from [`ArtifactKind`] to `T`. Serializes as an object with
/// only the present kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cli: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<T>,
}

impl<T> Default for ArtifactMap<T> {
    fn default() -> Self {
        Self {
            store: None,
            wallet: None,
            cli: None,
            node: None,
        }
    }
}

impl<T> ArtifactMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: ArtifactKind) -> &Option<T> {
        match kind {
            ArtifactKind::Store => &self.store,
            ArtifactKind::Wallet => &self.wallet,
            ArtifactKind::Cli => &self.cli,
            ArtifactKind::Node => &self.node,
        }
    }

    fn slot_mut(&mut self, kind: ArtifactKind) -> &mut Option<T> {
        match kind {
            ArtifactKind::Store => &mut self.store,
            ArtifactKind::Wallet => &mut self.wallet,
            ArtifactKind::Cli => &mut self.cli,
            ArtifactKind::Node => &mut self.node,
        }
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&T> {
        self.slot(kind).as_ref()
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Sets `kind`, returning the previous value.
    pub fn insert(&mut self, kind: ArtifactKind, value: T) -> Option<T> {
        self.slot_mut(kind).replace(value)
    }

    /// Present kinds, in [`ArtifactKind::ALL`] order.
    pub fn kinds(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        ArtifactKind::ALL.into_iter().filter(|k| self.contains(*k))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &T)> + '_ {
        ArtifactKind::ALL
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k, v)))
    }

    pub fn len(&self) -> usize {
        self.kinds().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> FromIterator<(ArtifactKind, T)> for ArtifactMap<T> {
    fn from_iter<I: IntoIterator<Item = (ArtifactKind, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// What the download page shows for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    links: ArtifactMap<Url>,
    checksums: ArtifactMap<Checksum>,
}

impl DistributionEntry {
    /// Builds an entry, rejecting checksums for kinds that have no link.
    pub fn new(
        platform: Platform,
        version: Option<String>,
        date: Option<String>,
        links: ArtifactMap<Url>,
        checksums: ArtifactMap<Checksum>,
    ) -> Result<Self, ConfigurationError> {
        let mut violations = Violations::default();
        check_checksums_have_links(platform, &links, &checksums, &mut violations);
        violations.finish(Self {
            version: non_empty(version),
            date: non_empty(date),
            links,
            checksums,
        })
    }

    /// Converts a raw section, recording every problem in `violations`.
    /// Returns None if anything about this platform was invalid.
    pub(crate) fn from_raw(
        platform: Platform,
        raw: &RawDistributionEntry,
        violations: &mut Violations,
    ) -> Option<Self> {
        let mut ok = true;
        let mut links = ArtifactMap::new();
        for (name, url) in &raw.links {
            let Some(kind) = parse_kind(platform, "links", name, violations) else {
                ok = false;
                continue;
            };
            match parse_absolute_url(url) {
                Ok(u) => {
                    if links.insert(kind, u).is_some() {
                        ok = false;
                        violations.push(Violation::DuplicateArtifactKind {
                            platform,
                            field: "links",
                            kind,
                        });
                    }
                }
                Err(reason) => {
                    ok = false;
                    violations.push(Violation::MalformedUrl {
                        location: format!("distribution.{platform}.links.{kind}"),
                        url: url.clone(),
                        reason,
                    });
                }
            }
        }

        let mut checksums = ArtifactMap::new();
        for (name, digest) in &raw.checksums {
            let Some(kind) = parse_kind(platform, "checksums", name, violations) else {
                ok = false;
                continue;
            };
            if !raw_has_link(raw, kind) {
                ok = false;
                violations.push(Violation::ChecksumWithoutLink { platform, kind });
                continue;
            }
            match Checksum::parse(digest) {
                Ok(c) => {
                    if checksums.insert(kind, c).is_some() {
                        ok = false;
                        violations.push(Violation::DuplicateArtifactKind {
                            platform,
                            field: "checksums",
                            kind,
                        });
                    }
                }
                Err(source) => {
                    ok = false;
                    violations.push(Violation::MalformedChecksum {
                        platform,
                        kind,
                        source,
                    });
                }
            }
        }

        ok.then(|| Self {
            version: non_empty(raw.version.clone()),
            date: non_empty(raw.date.clone()),
            links,
            checksums,
        })
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn links(&self) -> &ArtifactMap<Url> {
        &self.links
    }

    pub fn checksums(&self) -> &ArtifactMap<Checksum> {
        &self.checksums
    }

    pub fn link(&self, kind: ArtifactKind) -> Option<&Url> {
        self.links.get(kind)
    }

    pub fn checksum(&self, kind: ArtifactKind) -> Option<&Checksum> {
        self.checksums.get(kind)
    }

    /// Artifact kinds this platform offers a download for.
    pub fn present_kinds(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.links.kinds()
    }
}

fn check_checksums_have_links<L, C>(
    platform: Platform,
    links: &ArtifactMap<L>,
    checksums: &ArtifactMap<C>,
    violations: &mut Violations,
) {
    for kind in checksums.kinds() {
        if !links.contains(kind) {
            violations.push(Violation::ChecksumWithoutLink { platform, kind });
        }
    }
}

// Checked against the raw keys so a link that fails URL parsing does not
// also report its checksum as orphaned.
fn raw_has_link(raw: &RawDistributionEntry, kind: ArtifactKind) -> bool {
    raw.links
        .keys()
        .any(|k| k.trim().eq_ignore_ascii_case(kind.as_str()))
}

fn parse_kind(
    platform: Platform,
    field: &'static str,
    name: &str,
    violations: &mut Violations,
) -> Option<ArtifactKind> {
    match name.parse::<ArtifactKind>() {
        Ok(k) => Some(k),
        Err(source) => {
            violations.push(Violation::UnknownArtifactKind {
                platform,
                field,
                source,
            });
            None
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
