//! Keyword set construction.
//!
//! A page's keywords are the ordered union of five tiers:
//!
//! ```text
//! site defaults → page frontmatter → call overrides → title → path terms
//! ```
//!
//! The first occurrence of a keyword fixes its position; later duplicates
//! are dropped. Earlier terms are weighted more heavily by some SEO tools.

use rustc_hash::FxHashSet;

use crate::page::RoutePath;

use super::defaults::KEYWORD_SEPARATOR;

/// Topic terms derived from a route path.
///
/// `/betterseqta/desqta/user-guide` yields `betterseqta`, `desqta`,
/// `user guide`. Single-character and purely numeric segments (pagination,
/// ids) are not semantic and are dropped; `v2` is kept.
pub fn path_keywords(route: &RoutePath) -> Vec<String> {
    route
        .segments()
        .map(|segment| segment.replace('-', " "))
        .filter(|term| term.chars().count() > 1 && !is_numeric(term))
        .collect()
}

#[inline]
fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Ordered, deduplicated union of keyword tiers.
///
/// Empty keywords are skipped. Comparison is exact (case-sensitive).
pub fn merge_keywords<'a, T>(tiers: impl IntoIterator<Item = T>) -> Vec<String>
where
    T: IntoIterator<Item = &'a String>,
{
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut merged = Vec::new();

    for tier in tiers {
        for keyword in tier {
            if !keyword.is_empty() && seen.insert(keyword.as_str()) {
                merged.push(keyword.clone());
            }
        }
    }

    merged
}

/// Comma-join keywords for the `keywords` meta tag and JSON-LD.
#[inline]
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(KEYWORD_SEPARATOR)
}
