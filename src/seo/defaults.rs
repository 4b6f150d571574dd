//! Deployment constants.
//!
//! Defaults for the `[seo]` config section; see [`crate::config::SeoConfig`].

/// Organization named as publisher in structured data.
pub const PUBLISHER_NAME: &str = "BetterSEQTA";

/// Publisher homepage.
pub const PUBLISHER_URL: &str = "https://betterseqta.org";

/// Site-relative image used when neither the call nor the site sets one.
pub const DEFAULT_IMAGE: &str = "/hero.png";

/// Hard limit on description length, in characters.
pub const DESCRIPTION_LIMIT: usize = 160;

/// Title used when neither the call nor the page sets one.
pub const TITLE_FALLBACK: &str = "Documentation";

/// Joins page title and site name.
pub const TITLE_SEPARATOR: &str = " - ";

/// Separator of the `keywords` meta tag and JSON-LD field.
pub const KEYWORD_SEPARATOR: &str = ", ";

/// `og:type` of every page.
pub const OG_TYPE: &str = "website";

/// `twitter:card` of every page.
pub const TWITTER_CARD: &str = "summary_large_image";
