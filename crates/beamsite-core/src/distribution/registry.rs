use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::DistributionEntry;
use crate::config::RawDistributionEntry;
use crate::error::{ConfigurationError, Violation, Violations};
use crate::platform::Platform;

/// Total mapping from every [`Platform`] to its [`DistributionEntry`].
///
/// One field per platform: a registry cannot exist with a platform missing,
/// and adding a platform does not compile until this struct has a slot for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRegistry {
    ios: DistributionEntry,
    macos: DistributionEntry,
    windows: DistributionEntry,
    android: DistributionEntry,
    linux: DistributionEntry,
    chrome: DistributionEntry,
}

type Slots = [Option<DistributionEntry>; Platform::COUNT];

impl DistributionRegistry {
    /// Validates raw `[distribution.*]` sections. Every violation is reported.
    pub fn from_raw(
        raw: &BTreeMap<String, RawDistributionEntry>,
    ) -> Result<Self, ConfigurationError> {
        let mut violations = Violations::default();
        match Self::build(raw, &mut violations) {
            Some(reg) => violations.finish(reg),
            None => Err(violations.into_error()),
        }
    }

    pub(crate) fn build(
        raw: &BTreeMap<String, RawDistributionEntry>,
        violations: &mut Violations,
    ) -> Option<Self> {
        let mut slots: Slots = Default::default();
        // Platforms that were present but invalid; not reported again as missing.
        let mut seen = [false; Platform::COUNT];

        for (name, entry) in raw {
            let platform = match name.parse::<Platform>() {
                Ok(p) => p,
                Err(e) => {
                    violations.push(Violation::UnknownPlatform(e));
                    continue;
                }
            };
            if std::mem::replace(&mut seen[platform.index()], true) {
                violations.push(Violation::DuplicatePlatform(platform));
                continue;
            }
            slots[platform.index()] = DistributionEntry::from_raw(platform, entry, violations);
        }

        for platform in Platform::ALL {
            if !seen[platform.index()] {
                violations.push(Violation::MissingPlatform(platform));
            }
        }

        Self::from_slots(slots)
    }

    fn from_slots(mut slots: Slots) -> Option<Self> {
        let mut take = |p: Platform| slots[p.index()].take();
        Some(Self {
            ios: take(Platform::Ios)?,
            macos: take(Platform::Macos)?,
            windows: take(Platform::Windows)?,
            android: take(Platform::Android)?,
            linux: take(Platform::Linux)?,
            chrome: take(Platform::Chrome)?,
        })
    }

    pub fn get_entry(&self, platform: Platform) -> &DistributionEntry {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Macos => &self.macos,
            Platform::Windows => &self.windows,
            Platform::Android => &self.android,
            Platform::Linux => &self.linux,
            Platform::Chrome => &self.chrome,
        }
    }

    /// Returns a registry with `platform`'s entry replaced as a whole.
    pub fn with_entry(mut self, platform: Platform, entry: DistributionEntry) -> Self {
        let slot = match platform {
            Platform::Ios => &mut self.ios,
            Platform::Macos => &mut self.macos,
            Platform::Windows => &mut self.windows,
            Platform::Android => &mut self.android,
            Platform::Linux => &mut self.linux,
            Platform::Chrome => &mut self.chrome,
        };
        *slot = entry;
        self
    }

    /// All entries in [`Platform::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &DistributionEntry)> + '_ {
        Platform::ALL.into_iter().map(|p| (p, self.get_entry(p)))
    }
}

impl Serialize for DistributionRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Platform::COUNT))?;
        for (platform, entry) in self.iter() {
            map.serialize_entry(platform.as_str(), entry)?;
        }
        map.end()
    }
}
