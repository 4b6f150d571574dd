//! Metadata derivation.
//!
//! Pure functions from (config, route, page, overrides) to
//! [`DerivedMetadata`]. Precedence, highest first:
//!
//! | Field       | Sources                                                 |
//! |-------------|---------------------------------------------------------|
//! | title       | override → page title → `seo.title_fallback`            |
//! | description | override → page description → site description          |
//! | image       | override → `site.og_image` → `seo.default_image`        |
//! | keywords    | union: site → page → override → title → path            |
//!
//! Nothing here fails: every input has a literal fallback.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::page::{PageData, RoutePath};

use super::jsonld::{JsonLd, Organization};
use super::keywords::{join_keywords, merge_keywords, path_keywords};

/// Per-call overrides, highest precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub image: Option<String>,
}

impl SeoOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Keywords, empty when unset.
    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

/// Read-only inputs of one derivation.
#[derive(Debug, Clone, Copy)]
pub struct SeoInputs<'a> {
    pub config: &'a SiteConfig,
    pub route: &'a RoutePath,
    pub page: &'a PageData,
}

impl<'a> SeoInputs<'a> {
    pub fn new(config: &'a SiteConfig, route: &'a RoutePath, page: &'a PageData) -> Self {
        Self {
            config,
            route,
            page,
        }
    }
}

/// Everything registered in the document head for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetadata {
    /// Display title, `"<title> - <site name>"`.
    pub title: String,
    /// Description, at most `seo.description_limit` characters.
    pub description: String,
    /// Canonical page URL.
    pub canonical_url: String,
    /// Absolute Open Graph / Twitter image URL.
    pub image: String,
    /// Ordered, deduplicated keyword set.
    pub keywords: Vec<String>,
    /// Structured data record.
    pub json_ld: JsonLd,
}

impl DerivedMetadata {
    /// Keywords joined for the `keywords` meta tag.
    pub fn keywords_joined(&self) -> String {
        join_keywords(&self.keywords)
    }
}

/// Derive the head metadata of a page.
pub fn derive(inputs: &SeoInputs<'_>, options: &SeoOptions) -> DerivedMetadata {
    let SeoInputs {
        config,
        route,
        page,
    } = *inputs;
    let site = &config.site;
    let seo = &config.seo;
    let base = site.base_url();

    let canonical_url = canonical_url(base, route);

    // Title as a keyword phrase: empty titles fall through to the page title
    let title_keyword: Vec<String> = options
        .title
        .as_ref()
        .filter(|t| !t.is_empty())
        .or(page.title.as_ref().filter(|t| !t.is_empty()))
        .cloned()
        .into_iter()
        .collect();
    let from_path = path_keywords(route);
    let keywords = merge_keywords([
        site.keywords.as_slice(),
        page.keywords(),
        options.keywords(),
        title_keyword.as_slice(),
        from_path.as_slice(),
    ]);

    let page_title = options.title.as_deref().or(page.title.as_deref());
    let title = display_title(
        page_title.unwrap_or(&seo.title_fallback),
        &seo.title_separator,
        &site.name,
    );

    let description = derive_description(
        options.description.as_deref().or(page.description.as_deref()),
        &site.description,
        seo.description_limit,
    );

    let image = resolve_image(
        options.image.as_deref().or(site.og_image.as_deref()),
        base,
        &seo.default_image,
    );

    let keywords_joined = join_keywords(&keywords);
    let json_ld = JsonLd::tech_article(
        page_title.unwrap_or(&site.name),
        description.clone(),
        &canonical_url,
        Organization::new(&seo.publisher.name, &seo.publisher.url),
        keywords_joined,
    );

    DerivedMetadata {
        title,
        description,
        canonical_url,
        image,
        keywords,
        json_ld,
    }
}

/// Base URL followed by the route path. The root contributes nothing, so
/// the home page is the bare base URL.
pub fn canonical_url(base: &str, route: &RoutePath) -> String {
    if route.is_root() {
        base.to_owned()
    } else {
        format!("{base}{route}")
    }
}

/// `"<title><separator><site name>"`.
#[inline]
pub fn display_title(title: &str, separator: &str, site_name: &str) -> String {
    format!("{title}{separator}{site_name}")
}

/// Cut `text` to at most `limit` characters.
///
/// Hard cut: no ellipsis, no word-boundary adjustment, possibly mid-word.
pub fn truncate_description(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => Cow::Borrowed(&text[..byte_idx]),
        None => Cow::Borrowed(text),
    }
}

/// Truncated description, falling back to the site description when the
/// chosen source is missing or empty.
fn derive_description(source: Option<&str>, site_description: &str, limit: usize) -> String {
    let truncated = truncate_description(source.unwrap_or(site_description), limit);
    if truncated.is_empty() {
        truncate_description(site_description, limit).into_owned()
    } else {
        truncated.into_owned()
    }
}

/// Whether `url` already carries a scheme we pass through.
#[inline]
fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve an image reference to an absolute URL.
///
/// - `https://cdn/x.png` passes through unchanged
/// - `/og/x.png` and `og/x.png` both become `<base>/og/x.png`
/// - `//cdn/x.png` takes the scheme of `base`
/// - a missing or empty image resolves `default_image` the same way
pub fn resolve_image(image: Option<&str>, base: &str, default_image: &str) -> String {
    let image = image.filter(|i| !i.is_empty()).unwrap_or(default_image);

    if is_absolute(image) {
        return image.to_owned();
    }

    if image.starts_with("//") {
        let scheme = base.split_once("://").map_or("https", |(scheme, _)| scheme);
        return format!("{scheme}:{image}");
    }

    if image.starts_with('/') {
        format!("{base}{image}")
    } else {
        format!("{base}/{image}")
    }
}
