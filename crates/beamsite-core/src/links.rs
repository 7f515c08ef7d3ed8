//! External-link directory and press article list.
//!
//! Directory URLs are kept verbatim for rendering: a malformed marketing link
//! only drops out of the derived origin hints, it does not fail the build.
//! Press article links, by contrast, are rendered as anchors and must parse.

use std::collections::HashSet;

use serde::Serialize;
use url::Url;

use crate::config::{RawLink, RawPressArticle};
use crate::error::{Violation, Violations};

/// A labelled URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One entry of the links/social section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    #[serde(flatten)]
    pub entry: LinkEntry,
    /// Display title, e.g. "Medium Blog".
    pub title: String,
    /// Icon identifier understood by the renderer.
    pub icon: String,
}

/// Ordered label → URL / title / icon directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkDirectory {
    links: Vec<ExternalLink>,
}

impl LinkDirectory {
    pub(crate) fn from_raw(raw: &[RawLink], violations: &mut Violations) -> Self {
        let mut keys = HashSet::new();
        let mut links = Vec::with_capacity(raw.len());

        for (i, r) in raw.iter().enumerate() {
            let key = r.key.trim();
            if key.is_empty() {
                violations.push(Violation::EmptyField {
                    location: format!("links[{i}].key"),
                });
                continue;
            }
            if !keys.insert(key.to_string()) {
                violations.push(Violation::DuplicateLinkKey(key.to_string()));
                continue;
            }
            let title = non_empty_or(r.title.as_deref(), key);
            let icon = non_empty_or(r.icon.as_deref(), &key.to_ascii_lowercase());
            links.push(ExternalLink {
                entry: LinkEntry::new(key, r.url.trim()),
                title,
                icon,
            });
        }

        Self { links }
    }

    pub fn get(&self, key: &str) -> Option<&ExternalLink> {
        self.links.iter().find(|l| l.entry.label == key)
    }

    pub fn url(&self, key: &str) -> Option<&str> {
        self.get(key).map(|l| l.entry.url.as_str())
    }

    pub fn title(&self, key: &str) -> Option<&str> {
        self.get(key).map(|l| l.title.as_str())
    }

    pub fn icon(&self, key: &str) -> Option<&str> {
        self.get(key).map(|l| l.icon.as_str())
    }

    /// Links in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ExternalLink> {
        self.links.iter()
    }

    /// Label/URL pairs in declaration order, as fed to origin extraction.
    pub fn entries(&self) -> impl Iterator<Item = &LinkEntry> {
        self.links.iter().map(|l| &l.entry)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// A press mention: logo image identifier plus article link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressArticle {
    pub image: String,
    pub href: Url,
}

pub(crate) fn press_from_raw(
    raw: &[RawPressArticle],
    violations: &mut Violations,
) -> Vec<PressArticle> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, r) in raw.iter().enumerate() {
        let image = r.image.trim();
        if image.is_empty() {
            violations.push(Violation::EmptyField {
                location: format!("press[{i}].image"),
            });
        }
        let href = match parse_absolute_url(&r.href) {
            Ok(u) => Some(u),
            Err(reason) => {
                violations.push(Violation::MalformedUrl {
                    location: format!("press[{i}].href"),
                    url: r.href.clone(),
                    reason,
                });
                None
            }
        };
        if let (false, Some(href)) = (image.is_empty(), href) {
            out.push(PressArticle {
                image: image.to_string(),
                href,
            });
        }
    }
    out
}

/// Parses `raw` as an absolute URL with a host (scheme + host + path).
pub(crate) fn parse_absolute_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.host_str() {
        Some(h) if !h.is_empty() => Ok(url),
        _ => Err("URL has no host".to_string()),
    }
}
