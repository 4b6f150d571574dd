//! Document head registration.
//!
//! [`HeadSink`] is the seam to whatever owns the document `<head>`: a
//! renderer, a template engine, a test recorder. Entries are registered
//! under a [`HeadKey`]; registering the same key again replaces the
//! previous entry, so re-deriving never duplicates tags.
//!
//! [`HeadState`] is the in-memory implementation shipped with the crate.

use std::fmt;

use serde::Serialize;

use crate::utils::html::render_element;

/// Registration slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadKey {
    /// Title, description, Open Graph, Twitter, canonical, keywords.
    SeoMeta,
    /// JSON-LD script block.
    StructuredData,
}

impl fmt::Display for HeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SeoMeta => "seo-meta",
            Self::StructuredData => "structured-data",
        })
    }
}

/// `<meta {attr}="{key}" content="{content}">`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// `name` or `property`
    pub attr: &'static str,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: "name",
            key: key.into(),
            content: content.into(),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attr: "property",
            key: key.into(),
            content: content.into(),
        }
    }

    fn render(&self) -> String {
        render_element(
            "meta",
            &[(self.attr, self.key.as_str()), ("content", self.content.as_str())],
            "",
        )
    }
}

/// `<link rel="{rel}" href="{href}">`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

impl LinkTag {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    fn render(&self) -> String {
        render_element(
            "link",
            &[("rel", self.rel.as_str()), ("href", self.href.as_str())],
            "",
        )
    }
}

/// `<script type="{kind}">{content}</script>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptTag {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl ScriptTag {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }

    fn render(&self) -> String {
        render_element("script", &[("type", self.kind.as_str())], &self.content)
    }
}

/// One registration: a group of head elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadEntry {
    pub title: Option<String>,
    pub meta: Vec<MetaTag>,
    pub link: Vec<LinkTag>,
    pub script: Vec<ScriptTag>,
}

impl HeadEntry {
    /// Content of the meta tag named `key` (`name` or `property`).
    pub fn meta_content(&self, key: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.content.as_str())
    }

    /// Render as HTML lines: title, meta, link, script.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(
            usize::from(self.title.is_some()) + self.meta.len() + self.link.len() + self.script.len(),
        );
        if let Some(title) = &self.title {
            lines.push(render_element("title", &[], title));
        }
        lines.extend(self.meta.iter().map(MetaTag::render));
        lines.extend(self.link.iter().map(LinkTag::render));
        lines.extend(self.script.iter().map(ScriptTag::render));
        lines
    }
}

/// The external head-management facility.
pub trait HeadSink {
    /// Register `entry` under `key`, replacing any entry already there.
    fn register(&mut self, key: HeadKey, entry: HeadEntry);
}

impl<T: HeadSink + ?Sized> HeadSink for &mut T {
    fn register(&mut self, key: HeadKey, entry: HeadEntry) {
        (**self).register(key, entry);
    }
}

/// In-memory document head.
///
/// Keeps entries in first-registration order; a re-registered key keeps
/// its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadState {
    entries: Vec<(HeadKey, HeadEntry)>,
}

impl HeadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: HeadKey) -> Option<&HeadEntry> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &(HeadKey, HeadEntry)> {
        self.entries.iter()
    }

    /// Render every entry as `<head>` inner HTML, one element per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (_, entry) in &self.entries {
            for line in entry.render_lines() {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

impl HeadSink for HeadState {
    fn register(&mut self, key: HeadKey, entry: HeadEntry) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> HeadEntry {
        HeadEntry {
            title: Some(title.into()),
            meta: vec![MetaTag::name("description", "d")],
            ..Default::default()
        }
    }

    #[test]
    fn test_register_replaces_same_key() {
        let mut head = HeadState::new();
        head.register(HeadKey::SeoMeta, entry("A"));
        head.register(HeadKey::SeoMeta, entry("B"));

        assert_eq!(head.len(), 1);
        assert_eq!(head.get(HeadKey::SeoMeta).unwrap().title.as_deref(), Some("B"));
    }

    #[test]
    fn test_replaced_key_keeps_slot() {
        let mut head = HeadState::new();
        head.register(HeadKey::StructuredData, HeadEntry::default());
        head.register(HeadKey::SeoMeta, entry("A"));
        head.register(HeadKey::StructuredData, HeadEntry::default());

        let keys: Vec<_> = head.entries().map(|(k, _)| *k).collect();
        assert_eq!(keys, [HeadKey::StructuredData, HeadKey::SeoMeta]);
    }

    #[test]
    fn test_render() {
        let mut head = HeadState::new();
        head.register(
            HeadKey::SeoMeta,
            HeadEntry {
                title: Some("A & B".into()),
                meta: vec![MetaTag::property("og:title", "A & B")],
                link: vec![LinkTag::new("canonical", "https://x.org/a")],
                script: Vec::new(),
            },
        );
        head.register(
            HeadKey::StructuredData,
            HeadEntry {
                script: vec![ScriptTag::new("application/ld+json", r#"{"a":"</script>"}"#)],
                ..Default::default()
            },
        );

        assert_eq!(
            head.render(),
            concat!(
                "<title>A &amp; B</title>\n",
                "<meta property=\"og:title\" content=\"A &amp; B\">\n",
                "<link rel=\"canonical\" href=\"https://x.org/a\">\n",
                "<script type=\"application/ld+json\">{\"a\":\"<\\/script>\"}</script>\n",
            )
        );
    }

    #[test]
    fn test_sink_through_mut_ref() {
        fn push(mut sink: impl HeadSink) {
            sink.register(HeadKey::SeoMeta, HeadEntry::default());
        }

        let mut head = HeadState::new();
        push(&mut head);
        assert_eq!(head.len(), 1);
    }

    #[test]
    fn test_head_key_display() {
        assert_eq!(HeadKey::SeoMeta.to_string(), "seo-meta");
        assert_eq!(HeadKey::StructuredData.to_string(), "structured-data");
    }
}
