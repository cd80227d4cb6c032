// SPDX-License-Identifier: MPL-2.0
//! External link port definition.
//!
//! [`LinkDispatcher`] is a one-way boundary: the caller hands over a
//! validated [`ExternalLink`] and gets nothing back. Whether a browser or
//! mail client actually opened is never observed by the screens.

use crate::error::LinkError;
use std::fmt;
use std::str::FromStr;

/// URI schemes the portfolio is allowed to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme {
    Https,
    Mailto,
}

impl LinkScheme {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            LinkScheme::Https => "https:",
            LinkScheme::Mailto => "mailto:",
        }
    }
}

/// A URI that passed scheme validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    uri: String,
    scheme: LinkScheme,
}

impl ExternalLink {
    /// Validates `uri`, accepting only `https:` and `mailto:` with a
    /// non-empty target. The scheme match is case-insensitive.
    pub fn parse(uri: impl Into<String>) -> Result<Self, LinkError> {
        let uri = uri.into().trim().to_string();
        if uri.is_empty() {
            return Err(LinkError::Empty);
        }

        let (scheme_part, target) = match uri.split_once(':') {
            Some(parts) => parts,
            None => return Err(LinkError::UnsupportedScheme(String::new())),
        };

        let scheme = match scheme_part.to_ascii_lowercase().as_str() {
            "https" => LinkScheme::Https,
            "mailto" => LinkScheme::Mailto,
            other => return Err(LinkError::UnsupportedScheme(other.to_string())),
        };

        let target = match scheme {
            LinkScheme::Https => target.trim_start_matches('/'),
            LinkScheme::Mailto => target,
        };
        if target.is_empty() {
            return Err(LinkError::MissingTarget);
        }

        Ok(Self { uri, scheme })
    }

    #[must_use]
    pub fn scheme(&self) -> LinkScheme {
        self.scheme
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl FromStr for ExternalLink {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Hands links to whatever the host has registered for them.
///
/// Implementations must return promptly and must not report failure to the
/// caller; log it instead.
pub trait LinkDispatcher: Send + Sync {
    fn dispatch(&self, link: &ExternalLink);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_and_mailto() {
        let web = ExternalLink::parse("https://github.com/geloyaco").unwrap();
        assert_eq!(web.scheme(), LinkScheme::Https);
        assert_eq!(web.as_str(), "https://github.com/geloyaco");

        let mail: ExternalLink = "mailto:yacomurielangelo@gmail.com".parse().unwrap();
        assert_eq!(mail.scheme(), LinkScheme::Mailto);
    }

    #[test]
    fn scheme_match_ignores_case_and_whitespace() {
        let link = ExternalLink::parse("  HTTPS://example.com \n").unwrap();
        assert_eq!(link.scheme(), LinkScheme::Https);
        assert_eq!(link.to_string(), "HTTPS://example.com");
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            ExternalLink::parse("http://example.com"),
            Err(LinkError::UnsupportedScheme("http".into()))
        );
        assert_eq!(
            ExternalLink::parse("file:///etc/passwd"),
            Err(LinkError::UnsupportedScheme("file".into()))
        );
        assert!(matches!(
            ExternalLink::parse("example.com"),
            Err(LinkError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn rejects_empty_and_targetless_links() {
        assert_eq!(ExternalLink::parse("   "), Err(LinkError::Empty));
        assert_eq!(ExternalLink::parse("mailto:"), Err(LinkError::MissingTarget));
        assert_eq!(ExternalLink::parse("https://"), Err(LinkError::MissingTarget));
    }

    #[test]
    fn scheme_prefixes() {
        assert_eq!(LinkScheme::Https.prefix(), "https:");
        assert_eq!(LinkScheme::Mailto.prefix(), "mailto:");
    }
}
