//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate providing the handful of DOM
//! operations classification needs. Keeping them in one place also pins
//! down parser behavior the classifier relies on, such as valueless
//! attributes reading back as empty strings.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// The parser is lenient and never fails: malformed input produces a
/// best-effort tree, and the `html`/`head`/`body` scaffolding is
/// synthesized when missing.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get the tag name of a selection's first node, ASCII-lowercased.
///
/// Returns `None` for empty selections and non-element nodes.
/// Foreign-content elements (SVG, MathML) keep mixed-case names in the
/// tree, so lowercasing here keeps tag comparison uniform.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Get any attribute value.
///
/// A valueless attribute (`<input checked>`) reads back as `Some("")`,
/// distinct from `None` for an absent one.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of a selection and its descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}
