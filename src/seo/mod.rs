//! Page-specific SEO metadata.
//!
//! # Flow
//!
//! ```text
//! SeoInputs + SeoOptions ─► derive() ─► DerivedMetadata
//!                                          ├─► SeoMeta ─► HeadKey::SeoMeta
//!                                          └─► JsonLd  ─► HeadKey::StructuredData
//! ```
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `defaults` | Deployment constants (publisher, fallbacks)       |
//! | `keywords` | Path terms and ordered keyword union              |
//! | `derive`   | Derivation rules, `SeoOptions`, `DerivedMetadata` |
//! | `og`       | Meta tag set (Open Graph, Twitter, canonical)     |
//! | `jsonld`   | schema.org `TechArticle` record                   |
//! | `head`     | `HeadSink` registration and `HeadState`           |
//! | `binding`  | Re-derive and re-register on input change        |

mod binding;
pub mod defaults;
mod derive;
mod head;
mod jsonld;
mod keywords;
mod og;

pub use binding::SeoBinding;
pub use derive::{
    DerivedMetadata, SeoInputs, SeoOptions, canonical_url, derive, display_title, resolve_image,
    truncate_description,
};
pub use head::{HeadEntry, HeadKey, HeadSink, HeadState, LinkTag, MetaTag, ScriptTag};
pub use jsonld::{JsonLd, Organization, WebPageRef};
pub use keywords::{join_keywords, merge_keywords, path_keywords};
pub use og::SeoMeta;

use crate::debug;

/// Register derived metadata: meta tags first, then the JSON-LD block.
pub fn register(meta: &DerivedMetadata, sink: &mut impl HeadSink) {
    sink.register(HeadKey::SeoMeta, SeoMeta::from_derived(meta).to_head_entry());
    sink.register(HeadKey::StructuredData, structured_data_entry(&meta.json_ld));
    debug!("seo"; "registered {} ({} keywords)", meta.canonical_url, meta.keywords.len());
}

/// Head entry holding the JSON-LD `<script>` block.
pub fn structured_data_entry(json_ld: &JsonLd) -> HeadEntry {
    HeadEntry {
        script: vec![ScriptTag::new(jsonld::SCRIPT_TYPE, json_ld.to_json())],
        ..Default::default()
    }
}

/// Derive the metadata of the current page and register it with `sink`.
///
/// Call once per rendered page. For inputs that change over the page's
/// lifetime use [`SeoBinding`].
pub fn use_dynamic_seo(inputs: &SeoInputs<'_>, options: &SeoOptions, sink: &mut impl HeadSink) {
    register(&derive(inputs, options), sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::page::{PageData, RoutePath};

    #[test]
    fn test_use_dynamic_seo_registers_both_entries() {
        let config = test_parse_config(
            "[site]\nname = \"Docs\"\ndescription = \"Site\"\nurl = \"https://docs.example.org\"",
        );
        let route = RoutePath::new("/guide/setup");
        let page = PageData {
            title: Some("Setup".into()),
            ..Default::default()
        };
        let mut head = HeadState::new();

        use_dynamic_seo(&SeoInputs::new(&config, &route, &page), &SeoOptions::new(), &mut head);

        assert_eq!(head.len(), 2);
        let meta = head.get(HeadKey::SeoMeta).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Setup - Docs"));
        assert_eq!(meta.meta_content("og:url"), Some("https://docs.example.org/guide/setup"));
        assert_eq!(meta.meta_content("keywords"), Some("Setup, guide, setup"));

        let ld = head.get(HeadKey::StructuredData).unwrap();
        assert_eq!(ld.script[0].kind, "application/ld+json");
        let value: serde_json::Value = serde_json::from_str(&ld.script[0].content).unwrap();
        assert_eq!(value["mainEntityOfPage"]["@id"], "https://docs.example.org/guide/setup");
        assert_eq!(value["name"], "Setup");
    }

    #[test]
    fn test_rendered_head() {
        let config = test_parse_config(
            "[site]\nname = \"Docs\"\ndescription = \"Site docs\"\nurl = \"https://docs.example.org\"",
        );
        let route = RoutePath::root();
        let page = PageData::default();
        let mut head = HeadState::new();

        use_dynamic_seo(&SeoInputs::new(&config, &route, &page), &SeoOptions::new(), &mut head);

        let html = head.render();
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines[0], "<title>Documentation - Docs</title>");
        assert!(lines.contains(&r#"<meta name="description" content="Site docs">"#));
        assert!(lines.contains(&r#"<meta property="og:type" content="website">"#));
        assert!(lines.contains(&r#"<meta property="og:image" content="https://docs.example.org/hero.png">"#));
        assert!(lines.contains(&r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(lines.contains(&r#"<link rel="canonical" href="https://docs.example.org">"#));
        assert!(lines.contains(&r#"<meta name="keywords" content="">"#));
        assert!(lines.last().unwrap().starts_with(r#"<script type="application/ld+json">{"@context""#));
    }
}
