//! JSON-LD structured data.
//!
//! A schema.org `TechArticle` record. Field order is the serialization
//! order (`serde_json` with `preserve_order`), matching what crawlers and
//! snapshot tests see.

use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const SCRIPT_TYPE: &str = "application/ld+json";

/// `publisher` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

impl Organization {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "Organization".into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `mainEntityOfPage` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
}

impl WebPageRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: "WebPage".into(),
            id: id.into(),
        }
    }
}

/// Structured data record of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonLd {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub publisher: Organization,
    pub keywords: String,
    pub main_entity_of_page: WebPageRef,
}

impl JsonLd {
    /// `TechArticle` for the page at `canonical_url`.
    ///
    /// `mainEntityOfPage.@id` is always `canonical_url`.
    pub fn tech_article(
        name: impl Into<String>,
        description: impl Into<String>,
        canonical_url: &str,
        publisher: Organization,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            context: SCHEMA_CONTEXT.into(),
            kind: "TechArticle".into(),
            name: name.into(),
            description: description.into(),
            url: canonical_url.to_owned(),
            publisher,
            keywords: keywords.into(),
            main_entity_of_page: WebPageRef::new(canonical_url),
        }
    }

    /// Compact JSON, the content of the `<script>` block.
    pub fn to_json(&self) -> String {
        // Only strings and nested structs: serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Indented JSON for terminal output.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonLd {
        JsonLd::tech_article(
            "Setup Guide",
            "How to install",
            "https://docs.example.org/guide/setup",
            Organization::new("BetterSEQTA", "https://betterseqta.org"),
            "seqta, Setup Guide",
        )
    }

    #[test]
    fn test_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@type": "TechArticle",
                "name": "Setup Guide",
                "description": "How to install",
                "url": "https://docs.example.org/guide/setup",
                "publisher": {
                    "@type": "Organization",
                    "name": "BetterSEQTA",
                    "url": "https://betterseqta.org"
                },
                "keywords": "seqta, Setup Guide",
                "mainEntityOfPage": {
                    "@type": "WebPage",
                    "@id": "https://docs.example.org/guide/setup"
                }
            })
        );
    }

    #[test]
    fn test_key_order() {
        let json = sample().to_json();
        let keys = [
            "\"@context\"",
            "\"@type\":\"TechArticle\"",
            "\"name\"",
            "\"description\"",
            "\"url\"",
            "\"publisher\"",
            "\"keywords\"",
            "\"mainEntityOfPage\"",
        ];
        let positions: Vec<_> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn test_compact() {
        let json = sample().to_json();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"{"@context":"https://schema.org","#));
    }

    #[test]
    fn test_main_entity_matches_url() {
        let ld = sample();
        assert_eq!(ld.main_entity_of_page.id, ld.url);
    }

    #[test]
    fn test_roundtrip_keeps_renames() {
        let parsed: JsonLd = serde_json::from_str(&sample().to_json()).unwrap();
        assert_eq!(parsed, sample());
    }
}
