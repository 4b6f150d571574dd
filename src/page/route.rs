//! Route path of the page being rendered.
//!
//! Query strings and fragments never reach the canonical URL, so they are
//! stripped on construction. The path is otherwise kept verbatim: no
//! decoding, no trailing slash normalization.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// Current navigation path.
///
/// Invariants:
/// - Always starts with `/`
/// - Never contains `?` or `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Create from a router path such as `/guide/install?tab=linux`.
    pub fn new(raw: &str) -> Self {
        let path = raw.trim().split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() || path == "/" {
            return Self::root();
        }

        if path.starts_with('/') {
            Self(path.to_owned())
        } else {
            Self(format!("/{path}"))
        }
    }

    /// The site root `/`.
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Route of a content file, given its path relative to the content root.
    ///
    /// Follows content-directory routing:
    /// - the extension is dropped (`guide/setup.md` -> `/guide/setup`)
    /// - `index` maps to its directory (`guide/index.md` -> `/guide`)
    /// - ordering prefixes are stripped (`1.guide/2.setup.md` -> `/guide/setup`)
    pub fn from_content_path(relative: &Path) -> Self {
        let stem_path = relative.with_extension("");
        let mut segments: Vec<&str> = stem_path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => s.to_str(),
                _ => None,
            })
            .map(strip_order_prefix)
            .filter(|s| !s.is_empty())
            .collect();

        if segments.last() == Some(&"index") {
            segments.pop();
        }

        if segments.is_empty() {
            Self::root()
        } else {
            Self(format!("/{}", segments.join("/")))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Non-empty `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

/// Strip a numeric ordering prefix: `1.guide` -> `guide`.
fn strip_order_prefix(segment: &str) -> &str {
    match segment.split_once('.') {
        Some((prefix, rest))
            if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            rest
        }
        _ => segment,
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
