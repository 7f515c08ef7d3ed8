use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;
use url::Url;

/// Why a URL could not be reduced to an origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OriginError {
    #[error("unparseable URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("URL has no host")]
    MissingHost,
}

/// Scheme + host (+ explicit non-default port) of a URL.
///
/// Path, query and fragment are dropped. The host is lowercased so two URLs
/// differing only in host case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    /// Parse an absolute URL string and reduce it to its origin.
    pub fn parse(url: &str) -> Result<Self, OriginError> {
        let parsed = Url::parse(url.trim())?;
        Self::from_url(&parsed)
    }

    pub fn from_url(url: &Url) -> Result<Self, OriginError> {
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or(OriginError::MissingHost)?;
        // `Url::port` is None when the port is the scheme's default.
        Ok(Self {
            scheme: url.scheme().to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            port: url.port(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl Serialize for Origin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_path_query_and_fragment() {
        let o = Origin::parse("https://bitcointalk.org/index.php?topic=5052151#top").unwrap();
        assert_eq!(o.to_string(), "https://bitcointalk.org");
        assert_eq!(o.scheme(), "https");
        assert_eq!(o.host(), "bitcointalk.org");
        assert_eq!(o.port(), None);
    }

    #[test]
    fn default_port_is_omitted() {
        assert_eq!(
            Origin::parse("https://example.com:443/a").unwrap().to_string(),
            "https://example.com"
        );
        assert_eq!(
            Origin::parse("http://example.com:80").unwrap().to_string(),
            "http://example.com"
        );
    }

    #[test]
    fn explicit_port_is_kept() {
        let o = Origin::parse("https://example.com:8443/path").unwrap();
        assert_eq!(o.port(), Some(8443));
        assert_eq!(o.to_string(), "https://example.com:8443");
    }

    #[test]
    fn host_case_is_normalised() {
        let a = Origin::parse("https://WWW.Reddit.com/r/beamprivacy/").unwrap();
        let b = Origin::parse("https://www.reddit.com").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "https://www.reddit.com");
    }

    #[test]
    fn ipv6_host_keeps_brackets() {
        let o = Origin::parse("http://[::1]:8080/x").unwrap();
        assert_eq!(o.to_string(), "http://[::1]:8080");
    }

    #[test]
    fn relative_input_is_a_parse_error() {
        assert_eq!(
            Origin::parse("not a url").unwrap_err(),
            OriginError::Parse(url::ParseError::RelativeUrlWithoutBase)
        );
    }

    #[test]
    fn hostless_url_is_rejected() {
        assert_eq!(
            Origin::parse("mailto:support@beam.mw").unwrap_err(),
            OriginError::MissingHost
        );
    }

    #[test]
    fn serializes_as_string() {
        let o = Origin::parse("https://t.me/BeamPrivacy").unwrap();
        assert_eq!(serde_json::to_string(&o).unwrap(), "\"https://t.me\"");
    }
}
