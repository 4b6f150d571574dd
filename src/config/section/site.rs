//! `[site]` configuration.
//!
//! Global site identity. Read-only input to the metadata deriver.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "BetterSEQTA Docs"
//! description = "Documentation for BetterSEQTA and DesQTA"
//! keywords = ["betterseqta", "seqta"]
//! url = "https://docs.betterseqta.org"
//! og_image = "/og/default.png"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Base URL used when `site.url` is not configured.
pub const DEFAULT_SITE_URL: &str = "https://docs.betterseqta.org";

/// Site identity from `[site]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name, appended to every page title.
    pub name: String,

    /// Site description, the last description fallback.
    pub description: String,

    /// Default keywords, first tier of every page's keyword set.
    pub keywords: Vec<String>,

    /// Canonical base URL (e.g., "https://docs.example.org").
    pub url: Option<String>,

    /// Default Open Graph image (absolute URL or site-relative path).
    pub og_image: Option<String>,
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const OG_IMAGE: FieldPath = FieldPath::new("site.og_image");

    /// Canonical base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with http(s) scheme and a host; an empty
    ///   `url` is reported and treated as unset
    /// - empty `name` is allowed but reported, it shows up in every title
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.warn(Self::NAME, "site name is empty, titles will end with \" - \"");
        }

        match self.url.as_deref() {
            Some("") => diag.warn(
                Self::URL,
                format!("empty url, falling back to {DEFAULT_SITE_URL}"),
            ),
            Some(url_str) => match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://docs.example.org",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://docs.example.org",
                        );
                    }
                    if parsed.query().is_some() || parsed.fragment().is_some() {
                        diag.error(Self::URL, "URL must not carry a query or fragment");
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {e}"),
                        "use format like https://docs.example.org",
                    );
                }
            },
            None => {}
        }

        if self.og_image.as_deref().is_some_and(str::is_empty) {
            diag.warn(Self::OG_IMAGE, "empty og_image, the default image is used");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            name: "Docs".into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_url_default() {
        assert_eq!(SiteInfoConfig::default().base_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        assert_eq!(
            with_url("https://docs.example.org/").base_url(),
            "https://docs.example.org"
        );
    }

    #[test]
    fn test_base_url_empty_falls_back() {
        assert_eq!(with_url("").base_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_validate_accepts_https() {
        let mut diag = ConfigDiagnostics::new();
        with_url("https://docs.example.org").validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut diag = ConfigDiagnostics::new();
        with_url("ftp://docs.example.org").validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_validate_rejects_unparsable() {
        let mut diag = ConfigDiagnostics::new();
        with_url("docs.example.org").validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_query() {
        let mut diag = ConfigDiagnostics::new();
        with_url("https://docs.example.org/?ref=x").validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_empty_url_is_a_warning() {
        let mut diag = ConfigDiagnostics::new();
        with_url("").validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0.as_str(), "site.url");
    }

    #[test]
    fn test_validate_warns_on_empty_name() {
        let mut diag = ConfigDiagnostics::new();
        SiteInfoConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
