//! Origin extraction for `preconnect` / `dns-prefetch` hints.
//!
//! Reduces an ordered list of labelled links to the distinct origins they
//! point at, keeping first-seen order. Links that fail to parse are skipped
//! with a warning; one bad marketing link never breaks the hint list.

mod key;

use std::collections::HashSet;

use thiserror::Error;

use crate::links::LinkEntry;

pub use key::{Origin, OriginError};

/// Non-fatal: a link was excluded from origin derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("link `{label}` ({url}) skipped: {source}")]
pub struct LinkParseWarning {
    pub label: String,
    pub url: String,
    pub source: OriginError,
}

/// Result of [`extract_origins`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginExtraction {
    pub origins: Vec<Origin>,
    pub warnings: Vec<LinkParseWarning>,
}

/// Deduplicated origins of `links`, in order of first occurrence.
///
/// Deterministic for a given input order. Same host under a different scheme
/// or port yields a distinct origin.
pub fn extract_origins<'a, I>(links: I) -> OriginExtraction
where
    I: IntoIterator<Item = &'a LinkEntry>,
{
    let mut seen = HashSet::new();
    let mut out = OriginExtraction::default();

    for link in links {
        match Origin::parse(&link.url) {
            Ok(origin) => {
                if seen.insert(origin.clone()) {
                    out.origins.push(origin);
                }
            }
            Err(e) => {
                tracing::warn!(label = %link.label, url = %link.url, "skipping link for origin hints: {}", e);
                out.warnings.push(LinkParseWarning {
                    label: link.label.clone(),
                    url: link.url.clone(),
                    source: e,
                });
            }
        }
    }

    tracing::debug!(
        origins = out.origins.len(),
        skipped = out.warnings.len(),
        "extracted link origins"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(urls: &[&str]) -> Vec<LinkEntry> {
        urls.iter()
            .enumerate()
            .map(|(i, u)| LinkEntry::new(format!("L{i}"), *u))
            .collect()
    }

    fn origin_strings(x: &OriginExtraction) -> Vec<String> {
        x.origins.iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn dedups_paths_and_keeps_schemes_distinct() {
        let links = entries(&["https://a.com/x", "https://a.com/y", "http://a.com/z"]);
        let x = extract_origins(&links);
        assert_eq!(origin_strings(&x), ["https://a.com", "http://a.com"]);
        assert!(x.warnings.is_empty());
    }

    #[test]
    fn preserves_first_seen_order() {
        let links = entries(&["https://b.com", "https://a.com", "https://b.com"]);
        let x = extract_origins(&links);
        assert_eq!(origin_strings(&x), ["https://b.com", "https://a.com"]);
    }

    #[test]
    fn is_idempotent() {
        let links = entries(&[
            "https://github.com/BeamMW/beam",
            "https://t.me/BeamPrivacy",
            "not a url",
            "https://GitHub.com/other",
        ]);
        assert_eq!(extract_origins(&links), extract_origins(&links));
    }

    #[test]
    fn malformed_link_warns_and_extraction_continues() {
        let links = entries(&["https://forum.beam.mw", "not a url", "https://medium.com/beam-mw"]);
        let x = extract_origins(&links);
        assert_eq!(
            origin_strings(&x),
            ["https://forum.beam.mw", "https://medium.com"]
        );
        assert_eq!(x.warnings.len(), 1);
        let w = &x.warnings[0];
        assert_eq!(w.label, "L1");
        assert_eq!(w.url, "not a url");
        assert!(w.to_string().contains("skipped"));
    }

    #[test]
    fn host_comparison_ignores_case() {
        let links = entries(&["https://Example.COM/a", "https://example.com/b"]);
        assert_eq!(origin_strings(&extract_origins(&links)), ["https://example.com"]);
    }

    #[test]
    fn ports_make_origins_distinct() {
        let links = entries(&[
            "https://example.com/",
            "https://example.com:8443/",
            "https://example.com:443/",
        ]);
        assert_eq!(
            origin_strings(&extract_origins(&links)),
            ["https://example.com", "https://example.com:8443"]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        let x = extract_origins(&Vec::<LinkEntry>::new());
        assert!(x.origins.is_empty());
        assert!(x.warnings.is_empty());
    }
}
