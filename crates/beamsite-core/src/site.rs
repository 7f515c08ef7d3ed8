//! One-shot build of the whole site configuration.
//!
//! [`Site::build`] validates every section of a [`SiteConfig`] and returns an
//! immutable value shared by reference with the renderer. Violations from all
//! sections are reported together.

use serde::Serialize;

use crate::config::{RawSiteMeta, SiteConfig};
use crate::distribution::DistributionRegistry;
use crate::error::{ConfigurationError, Violation, Violations};
use crate::hints::{ResourceHintSet, StaticHints};
use crate::links::{press_from_raw, LinkDirectory, PressArticle};
use crate::origin::LinkParseWarning;
use crate::platform::Environment;

/// Title, contact and banner shown site-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    pub app_title: String,
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    pub environment: Environment,
}

impl SiteMeta {
    fn from_raw(raw: &RawSiteMeta, violations: &mut Violations) -> Self {
        for (field, value) in [
            ("app_title", &raw.app_title),
            ("contact_email", &raw.contact_email),
        ] {
            if value.trim().is_empty() {
                violations.push(Violation::EmptyField {
                    location: format!("site.{field}"),
                });
            }
        }

        let environment = match raw.environment.as_deref() {
            None => Environment::default(),
            Some(s) => s.parse::<Environment>().unwrap_or_else(|e| {
                violations.push(Violation::UnknownEnvironment(e));
                Environment::default()
            }),
        };

        Self {
            app_title: raw.app_title.trim().to_string(),
            contact_email: raw.contact_email.trim().to_string(),
            announcement: raw
                .announcement
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            environment,
        }
    }
}

/// The validated site configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub meta: SiteMeta,
    pub distribution: DistributionRegistry,
    pub links: LinkDirectory,
    pub press: Vec<PressArticle>,
    pub hints: ResourceHintSet,
    /// Directory links excluded from `dns-prefetch`.
    #[serde(skip)]
    pub warnings: Vec<LinkParseWarning>,
}

impl Site {
    pub fn build(cfg: &SiteConfig) -> Result<Self, ConfigurationError> {
        let mut violations = Violations::default();

        let meta = SiteMeta::from_raw(&cfg.site, &mut violations);
        let distribution = DistributionRegistry::build(&cfg.distribution, &mut violations);
        let links = LinkDirectory::from_raw(&cfg.links, &mut violations);
        let press = press_from_raw(&cfg.press, &mut violations);
        let static_hints = StaticHints::from_raw(&cfg.hints, &mut violations);

        let distribution = match distribution {
            Some(d) if violations.is_empty() => d,
            _ => return Err(violations.into_error()),
        };

        let (hints, warnings) = ResourceHintSet::assemble(&static_hints, &links);
        tracing::info!(
            environment = %meta.environment,
            links = links.len(),
            press = press.len(),
            skipped_links = warnings.len(),
            "site configuration built"
        );

        Ok(Self {
            meta,
            distribution,
            links,
            press,
            hints,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[test]
    fn bundled_site_builds() {
        let cfg = SiteConfig::bundled().unwrap();
        let site = Site::build(&cfg).unwrap();
        assert_eq!(site.meta.app_title, "Beam");
        assert_eq!(site.meta.environment, Environment::Mainnet);
        assert!(site.meta.announcement.is_some());
        assert!(site.warnings.is_empty());
        assert_eq!(site.press.len(), 8);
        assert_eq!(
            site.distribution.get_entry(Platform::Android).version(),
            Some("7.1")
        );
    }

    #[test]
    fn meta_problems_are_collected_with_others() {
        let mut cfg = SiteConfig::bundled().unwrap();
        cfg.site.app_title = " ".to_string();
        cfg.site.environment = Some("testnet".to_string());
        cfg.distribution.remove("linux");
        let err = Site::build(&cfg).unwrap_err();
        let v = err.violations();
        assert_eq!(v.len(), 3, "{err}");
        assert!(v.contains(&Violation::EmptyField {
            location: "site.app_title".into()
        }));
        assert!(v.iter().any(|x| matches!(x, Violation::UnknownEnvironment(u) if u.value == "testnet")));
        assert!(v.contains(&Violation::MissingPlatform(Platform::Linux)));
    }

    #[test]
    fn empty_announcement_disables_banner() {
        let mut cfg = SiteConfig::bundled().unwrap();
        cfg.site.announcement = Some("   ".to_string());
        cfg.site.environment = Some("dappnet".to_string());
        let site = Site::build(&cfg).unwrap();
        assert!(site.meta.announcement.is_none());
        assert_eq!(site.meta.environment, Environment::Dappnet);
    }
}
