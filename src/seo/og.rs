//! Conventional and social meta tags.
//!
//! [`SeoMeta`] is the typed tag set of one page: document title and
//! description, Open Graph, Twitter Card, canonical link and keywords.
//! It lowers to a [`HeadEntry`] for registration.

use super::defaults::{OG_TYPE, TWITTER_CARD};
use super::derive::DerivedMetadata;
use super::head::{HeadEntry, LinkTag, MetaTag};

/// Meta tag set of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub og_title: &'a str,
    pub og_description: &'a str,
    pub og_image: &'a str,
    pub og_url: &'a str,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
    pub twitter_title: &'a str,
    pub twitter_description: &'a str,
    pub twitter_image: &'a str,
    pub canonical: &'a str,
    pub keywords: String,
}

impl<'a> SeoMeta<'a> {
    /// Tag set of derived metadata. Social titles, descriptions and images
    /// mirror the document ones.
    pub fn from_derived(meta: &'a DerivedMetadata) -> Self {
        Self {
            title: &meta.title,
            description: &meta.description,
            og_title: &meta.title,
            og_description: &meta.description,
            og_image: &meta.image,
            og_url: &meta.canonical_url,
            og_type: OG_TYPE,
            twitter_card: TWITTER_CARD,
            twitter_title: &meta.title,
            twitter_description: &meta.description,
            twitter_image: &meta.image,
            canonical: &meta.canonical_url,
            keywords: meta.keywords_joined(),
        }
    }

    /// Lower to head entries: `<title>`, meta tags, canonical link.
    ///
    /// Open Graph tags use `property`, everything else uses `name`.
    pub fn to_head_entry(&self) -> HeadEntry {
        HeadEntry {
            title: Some(self.title.to_owned()),
            meta: vec![
                MetaTag::name("description", self.description),
                MetaTag::property("og:title", self.og_title),
                MetaTag::property("og:description", self.og_description),
                MetaTag::property("og:image", self.og_image),
                MetaTag::property("og:url", self.og_url),
                MetaTag::property("og:type", self.og_type),
                MetaTag::name("twitter:card", self.twitter_card),
                MetaTag::name("twitter:title", self.twitter_title),
                MetaTag::name("twitter:description", self.twitter_description),
                MetaTag::name("twitter:image", self.twitter_image),
                MetaTag::name("keywords", &self.keywords),
            ],
            link: vec![LinkTag::new("canonical", self.canonical)],
            script: Vec::new(),
        }
    }
}
