//! Page data from frontmatter.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::frontmatter::{extract_frontmatter, first_heading_and_paragraph};

/// Keywords as a list or a comma-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordsField {
    List(Vec<String>),
    Joined(String),
}

/// Deserialize keywords, accepting `["a", "b"]`, `"a, b"` or `null`.
fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<KeywordsField> = Option::deserialize(deserializer)?;
    Ok(value.map(|field| match field {
        KeywordsField::List(list) => list,
        KeywordsField::Joined(joined) => split_keywords(&joined),
    }))
}

/// Split a comma-separated keyword string, dropping empty items.
fn split_keywords(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Metadata of the page being rendered.
///
/// | Field         | Type                  | Description                  |
/// |---------------|-----------------------|------------------------------|
/// | `title`       | `Option<String>`      | Page title                   |
/// | `description` | `Option<String>`      | Page summary                 |
/// | `keywords`    | `Option<Vec<String>>` | Page-level keywords          |
///
/// Other frontmatter fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_keywords")]
    pub keywords: Option<Vec<String>>,
}

impl PageData {
    /// Parse a content document.
    ///
    /// Frontmatter wins; a missing title or description is taken from the
    /// first `#` heading and first paragraph of the body.
    pub fn from_source(source: &str) -> Result<Self> {
        let (mut page, body) = match extract_frontmatter(source)? {
            Some((page, body)) => (page, body),
            None => (Self::default(), source),
        };

        if page.title.is_none() || page.description.is_none() {
            let (heading, paragraph) = first_heading_and_paragraph(body);
            page.title = page.title.or(heading);
            page.description = page.description.or(paragraph);
        }

        Ok(page)
    }

    /// Read and parse a content file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read content file `{}`", path.display()))?;
        Self::from_source(&source)
            .with_context(|| format!("invalid frontmatter in `{}`", path.display()))
    }

    /// Keywords, empty when unset.
    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_page_data_default() {
        let page = PageData::default();
        assert!(page.title.is_none());
        assert!(page.description.is_none());
        assert!(page.keywords().is_empty());
    }

    #[test]
    fn test_keywords_list_or_string() {
        let page: PageData = serde_json::from_str(r#"{"keywords": ["a", "b"]}"#).unwrap();
        assert_eq!(page.keywords(), ["a", "b"]);

        let page: PageData = serde_json::from_str(r#"{"keywords": "a, b,,c"}"#).unwrap();
        assert_eq!(page.keywords(), ["a", "b", "c"]);

        let page: PageData = serde_json::from_str(r#"{"keywords": null}"#).unwrap();
        assert!(page.keywords.is_none());
    }

    #[test]
    fn test_from_source_frontmatter_wins() {
        let source = "---\ntitle: Setup\ndescription: Install it\n---\n# Other\n\nBody text.";
        let page = PageData::from_source(source).unwrap();
        assert_eq!(page.title.as_deref(), Some("Setup"));
        assert_eq!(page.description.as_deref(), Some("Install it"));
    }

    #[test]
    fn test_from_source_body_fallback() {
        let source = "---\ntitle: Setup\n---\n# Heading\n\nFirst *paragraph* here.\n\nSecond.";
        let page = PageData::from_source(source).unwrap();
        assert_eq!(page.title.as_deref(), Some("Setup"));
        assert_eq!(page.description.as_deref(), Some("First paragraph here."));
    }

    #[test]
    fn test_from_source_without_frontmatter() {
        let page = PageData::from_source("# Welcome\n\nHello docs.").unwrap();
        assert_eq!(page.title.as_deref(), Some("Welcome"));
        assert_eq!(page.description.as_deref(), Some("Hello docs."));
        assert!(page.keywords.is_none());
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("guide.md");
        fs::write(&path, "+++\ntitle = \"Guide\"\nkeywords = [\"x\"]\n+++\nBody").unwrap();

        let page = PageData::from_file(&path).unwrap();
        assert_eq!(page.title.as_deref(), Some("Guide"));
        assert_eq!(page.keywords(), ["x"]);
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = PageData::from_file(&temp.path().join("missing.md")).unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }
}
