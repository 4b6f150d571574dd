//! `[seo]` configuration.
//!
//! Constants of a deployment that are not page inputs: the JSON-LD
//! publisher, fallback title and image, and the description limit.
//! Every field defaults to the values in [`crate::seo::defaults`].
//!
//! # Example
//!
//! ```toml
//! [seo]
//! default_image = "/hero.png"
//! description_limit = 160
//!
//! [seo.publisher]
//! name = "BetterSEQTA"
//! url = "https://betterseqta.org"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::defaults;
use serde::{Deserialize, Serialize};

/// Organization named as publisher in structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    pub name: String,
    pub url: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            name: defaults::PUBLISHER_NAME.into(),
            url: defaults::PUBLISHER_URL.into(),
        }
    }
}

/// Deployment-level SEO settings from `[seo]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Publisher block of the JSON-LD record.
    pub publisher: PublisherConfig,

    /// Image path used when neither the page nor the site sets one.
    pub default_image: String,

    /// Maximum description length, in characters.
    pub description_limit: usize,

    /// Title used when neither the call nor the page sets one.
    pub title_fallback: String,

    /// Separator between page title and site name.
    pub title_separator: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            publisher: PublisherConfig::default(),
            default_image: defaults::DEFAULT_IMAGE.into(),
            description_limit: defaults::DESCRIPTION_LIMIT,
            title_fallback: defaults::TITLE_FALLBACK.into(),
            title_separator: defaults::TITLE_SEPARATOR.into(),
        }
    }
}

impl SeoConfig {
    pub const DESCRIPTION_LIMIT: FieldPath = FieldPath::new("seo.description_limit");
    pub const DEFAULT_IMAGE: FieldPath = FieldPath::new("seo.default_image");
    pub const PUBLISHER_URL: FieldPath = FieldPath::new("seo.publisher.url");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.description_limit == 0 {
            diag.error_with_hint(
                Self::DESCRIPTION_LIMIT,
                "description limit must be greater than 0",
                format!("remove it to use the default ({})", defaults::DESCRIPTION_LIMIT),
            );
        }

        if self.default_image.is_empty() {
            diag.error_with_hint(
                Self::DEFAULT_IMAGE,
                "default image must not be empty",
                format!("e.g.: \"{}\"", defaults::DEFAULT_IMAGE),
            );
        }

        if url::Url::parse(&self.publisher.url).is_err() {
            diag.error_with_hint(
                Self::PUBLISHER_URL,
                format!("invalid publisher URL '{}'", self.publisher.url),
                "use format like https://example.org",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let seo = SeoConfig::default();
        assert_eq!(seo.publisher.name, "BetterSEQTA");
        assert_eq!(seo.publisher.url, "https://betterseqta.org");
        assert_eq!(seo.default_image, "/hero.png");
        assert_eq!(seo.description_limit, 160);
        assert_eq!(seo.title_fallback, "Documentation");
        assert_eq!(seo.title_separator, " - ");
    }

    #[test]
    fn test_defaults_are_valid() {
        let mut diag = ConfigDiagnostics::new();
        SeoConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let seo = SeoConfig {
            description_limit: 0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        seo.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SeoConfig::DESCRIPTION_LIMIT);
    }

    #[test]
    fn test_partial_publisher_keeps_default_url() {
        let seo: SeoConfig = toml::from_str("[publisher]\nname = \"Acme\"").unwrap();
        assert_eq!(seo.publisher.name, "Acme");
        assert_eq!(seo.publisher.url, defaults::PUBLISHER_URL);
        assert_eq!(seo.description_limit, defaults::DESCRIPTION_LIMIT);
    }
}
