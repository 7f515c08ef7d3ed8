//! Resource hints for the page head.
//!
//! `preload`, `preconnect`, `prerender` and `prefetch` are hand-authored lists.
//! `dns-prefetch` is derived from the external-link directory through
//! [`extract_origins`]. Buckets are not deduplicated against each other: an
//! origin may sit in `preconnect` as a known-critical target and again in
//! `dns-prefetch` as the fallback for the wider link set.

use serde::Serialize;

use crate::config::RawHints;
use crate::error::{Violation, Violations};
use crate::links::{parse_absolute_url, LinkDirectory};
use crate::origin::{extract_origins, LinkParseWarning, Origin};

/// Which `rel` a hint is emitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Preload,
    Preconnect,
    Prerender,
    Prefetch,
    DnsPrefetch,
}

impl HintKind {
    pub const ALL: [HintKind; 5] = [
        HintKind::Preload,
        HintKind::Preconnect,
        HintKind::Prerender,
        HintKind::Prefetch,
        HintKind::DnsPrefetch,
    ];

    /// Value of the `rel` attribute.
    pub fn rel(self) -> &'static str {
        match self {
            HintKind::Preload => "preload",
            HintKind::Preconnect => "preconnect",
            HintKind::Prerender => "prerender",
            HintKind::Prefetch => "prefetch",
            HintKind::DnsPrefetch => "dns-prefetch",
        }
    }
}

/// A `preload` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreloadHint {
    pub href: String,
    /// Resource destination (`font`, `style`, ...).
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub as_type: Option<String>,
    pub crossorigin: bool,
}

/// Hand-authored hint lists, validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHints {
    pub preload: Vec<PreloadHint>,
    pub preconnect: Vec<Origin>,
    pub prerender: Vec<String>,
    pub prefetch: Vec<String>,
}

impl StaticHints {
    pub(crate) fn from_raw(raw: &RawHints, violations: &mut Violations) -> Self {
        let preload = raw
            .preload
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let href = check_href(&format!("hints.preload[{i}].href"), &p.href, violations)?;
                Some(PreloadHint {
                    href,
                    as_type: p
                        .as_type
                        .as_deref()
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                    crossorigin: p.crossorigin,
                })
            })
            .collect();

        let preconnect = raw
            .preconnect
            .iter()
            .enumerate()
            .filter_map(|(i, value)| match Origin::parse(value) {
                Ok(o) => Some(o),
                Err(source) => {
                    violations.push(Violation::MalformedOrigin {
                        location: format!("hints.preconnect[{i}]"),
                        value: value.clone(),
                        source,
                    });
                    None
                }
            })
            .collect();

        Self {
            preload,
            preconnect,
            prerender: check_hrefs("hints.prerender", &raw.prerender, violations),
            prefetch: check_hrefs("hints.prefetch", &raw.prefetch, violations),
        }
    }
}

// Absolute URLs or site-root paths such as `/fonts/x.woff2`.
fn check_href(location: &str, raw: &str, violations: &mut Violations) -> Option<String> {
    let href = raw.trim();
    if href.is_empty() {
        violations.push(Violation::EmptyField {
            location: location.to_string(),
        });
        return None;
    }
    if href.starts_with('/') && !href.starts_with("//") {
        return Some(href.to_string());
    }
    match parse_absolute_url(href) {
        Ok(_) => Some(href.to_string()),
        Err(reason) => {
            violations.push(Violation::MalformedUrl {
                location: location.to_string(),
                url: raw.to_string(),
                reason,
            });
            None
        }
    }
}

fn check_hrefs(bucket: &str, raw: &[String], violations: &mut Violations) -> Vec<String> {
    raw.iter()
        .enumerate()
        .filter_map(|(i, h)| check_href(&format!("{bucket}[{i}]"), h, violations))
        .collect()
}

/// Final hint set consumed read-only by the page renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceHintSet {
    pub preload: Vec<PreloadHint>,
    pub preconnect: Vec<Origin>,
    pub prerender: Vec<String>,
    pub prefetch: Vec<String>,
    #[serde(rename = "dns-prefetch")]
    pub dns_prefetch: Vec<Origin>,
}

impl ResourceHintSet {
    /// Compose static lists with origins derived from `links`.
    ///
    /// Returns the links that were left out of `dns-prefetch` alongside the set.
    pub fn assemble(
        static_hints: &StaticHints,
        links: &LinkDirectory,
    ) -> (Self, Vec<LinkParseWarning>) {
        let derived = extract_origins(links.entries());
        let set = Self {
            preload: static_hints.preload.clone(),
            preconnect: static_hints.preconnect.clone(),
            prerender: static_hints.prerender.clone(),
            prefetch: static_hints.prefetch.clone(),
            dns_prefetch: derived.origins,
        };
        tracing::debug!(
            preload = set.preload.len(),
            preconnect = set.preconnect.len(),
            dns_prefetch = set.dns_prefetch.len(),
            "assembled resource hints"
        );
        (set, derived.warnings)
    }

    /// Target URLs of one bucket, as they go into `href`.
    pub fn hrefs(&self, kind: HintKind) -> Vec<String> {
        match kind {
            HintKind::Preload => self.preload.iter().map(|p| p.href.clone()).collect(),
            HintKind::Preconnect => self.preconnect.iter().map(Origin::to_string).collect(),
            HintKind::Prerender => self.prerender.clone(),
            HintKind::Prefetch => self.prefetch.clone(),
            HintKind::DnsPrefetch => self.dns_prefetch.iter().map(Origin::to_string).collect(),
        }
    }

    /// `<link>` elements for the page head, grouped in [`HintKind::ALL`] order.
    pub fn link_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(self.len());
        for kind in HintKind::ALL {
            if kind == HintKind::Preload {
                tags.extend(self.preload.iter().map(preload_tag));
                continue;
            }
            tags.extend(self.hrefs(kind).iter().map(|href| {
                format!(r#"<link rel="{}" href="{}">"#, kind.rel(), escape_attr(href))
            }));
        }
        tags
    }

    pub fn len(&self) -> usize {
        self.preload.len()
            + self.preconnect.len()
            + self.prerender.len()
            + self.prefetch.len()
            + self.dns_prefetch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn preload_tag(hint: &PreloadHint) -> String {
    let mut tag = format!(r#"<link rel="preload" href="{}""#, escape_attr(&hint.href));
    if let Some(as_type) = &hint.as_type {
        tag.push_str(&format!(r#" as="{}""#, escape_attr(as_type)));
    }
    if hint.crossorigin {
        tag.push_str(" crossorigin");
    }
    tag.push('>');
    tag
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
