//! Frontmatter extraction from YAML (`---`) or TOML (`+++`) blocks.
//!
//! A block only counts as frontmatter when both fences are whole lines and
//! the block is empty or holds at least one top-level `key:` (`key =`)
//! line. A document opening with a Markdown thematic break is left alone.

use anyhow::Result;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use super::PageData;

/// Extract frontmatter and return (page data, body).
///
/// Returns `None` when the document has no frontmatter block.
pub fn extract_frontmatter(content: &str) -> Result<Option<(PageData, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, is_toml)) => {
            let page = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml(fm)?
            };
            Ok(Some((page, body)))
        }
        None => Ok(None),
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        let Some((opening, rest)) = trimmed.split_once('\n') else {
            continue;
        };
        if opening.trim_end() != fence {
            continue;
        }

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == fence {
                let fm = &rest[..offset];
                if !fm.trim().is_empty() && !has_metadata_keys(fm, is_toml) {
                    return None;
                }
                let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
                return Some((fm.trim(), body, is_toml));
            }
            offset += line.len();
        }
    }

    None
}

/// Whether `block` has a top-level `key:` (YAML) or `key =` / `[table]`
/// (TOML) line.
fn has_metadata_keys(block: &str, is_toml: bool) -> bool {
    let separator = if is_toml { '=' } else { ':' };
    block.lines().any(|line| {
        (is_toml && line.starts_with('['))
            || line
                .split_once(separator)
                .is_some_and(|(key, _)| is_plain_key(key.trim_end()))
    })
}

#[inline]
fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Parse TOML frontmatter.
fn parse_toml(content: &str) -> Result<PageData> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("Invalid TOML frontmatter: {}", e))
}

/// Parse YAML frontmatter. Fields other than title, description and
/// keywords are ignored.
fn parse_yaml(content: &str) -> Result<PageData> {
    if content.is_empty() {
        return Ok(PageData::default());
    }
    serde_yaml::from_str(content).map_err(|e| anyhow::anyhow!("Invalid YAML frontmatter: {}", e))
}

/// First level-1 heading and first top-level paragraph of a Markdown body,
/// as plain text.
pub(super) fn first_heading_and_paragraph(body: &str) -> (Option<String>, Option<String>) {
    let mut heading: Option<String> = None;
    let mut paragraph: Option<String> = None;
    let mut current: Option<(bool, String)> = None;
    let mut depth = 0usize;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if heading.is_none() => current = Some((true, String::new())),
            Event::Start(Tag::Paragraph) if depth == 0 && paragraph.is_none() => {
                current = Some((false, String::new()));
            }
            Event::Start(Tag::BlockQuote(_) | Tag::List(_) | Tag::Item) => depth += 1,
            Event::End(TagEnd::BlockQuote(_) | TagEnd::List(_) | TagEnd::Item) => {
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1) | TagEnd::Paragraph) => {
                if let Some((is_heading, text)) = current.take() {
                    let text = text.trim().to_string();
                    if text.is_empty() {
                        continue;
                    }
                    if is_heading {
                        heading = Some(text);
                    } else {
                        paragraph = Some(text);
                    }
                }
            }
            _ => {}
        }

        if heading.is_some() && paragraph.is_some() {
            break;
        }
    }

    (heading, paragraph)
}
