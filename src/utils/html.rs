//! HTML utility functions.
//!
//! Provides the pieces needed to render `<head>` entries:
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script()` - raw text safe inside `<script>`
//! - `is_void_element()` - Self-closing elements (meta, link, etc.)
//! - `render_element()` - one element as an HTML string

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make raw text safe inside `<script>`.
///
/// Script content is raw text: entities are not decoded, so only `</`
/// (which could close the element) is rewritten. `<\/` is an equivalent
/// escape in both JSON strings and JavaScript.
#[inline]
pub fn escape_script(s: &str) -> Cow<'_, str> {
    if s.contains("</") {
        Cow::Owned(s.replace("</", "<\\/"))
    } else {
        Cow::Borrowed(s)
    }
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Check if tag is a raw text element (content should not be HTML-escaped).
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

// =============================================================================
// Rendering
// =============================================================================

/// Render one element.
///
/// Attribute values are escaped. Body text is escaped unless the tag is a
/// raw text element, in which case it goes through [`escape_script`].
/// Void elements ignore `body`.
pub fn render_element(tag: &str, attrs: &[(&str, &str)], body: &str) -> String {
    let mut out = String::with_capacity(16 + body.len());
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if is_void_element(tag) {
        out.push('>');
        return out;
    }

    out.push('>');
    if is_raw_text_element(tag) {
        out.push_str(&escape_script(body));
    } else {
        out.push_str(&escape(body));
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}
