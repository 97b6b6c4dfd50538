//! # htmlstr
//!
//! Structured HTML parsing balanced between content and interactivity.
//!
//! This library reduces an arbitrary HTML document to a closed model of
//! elements worth reading (text, headings, paragraphs, links, images) or
//! operating (buttons, inputs, selection and disclosure widgets). Styling
//! containers and unsupported markup disappear, while their supported
//! descendants surface in document order. Interactive controls receive
//! stable numeric ids, so a consumer can point back at "the thing to
//! click" without holding on to the DOM.
//!
//! ## Quick Start
//!
//! ```rust
//! use htmlstr::{parse, Element};
//!
//! let html = r#"<body><h1>Login</h1>
//! <div><input type="text" placeholder="Name"></div></body>"#;
//!
//! let elements = parse(html);
//!
//! assert_eq!(elements.len(), 2);
//! assert!(matches!(elements[0], Element::Heading { level: 1, .. }));
//! assert_eq!(elements[1].id(), Some(0));
//! ```
//!
//! ## Features
//!
//! - **Closed element model**: fifteen variants, nothing else ever appears
//! - **Control ids**: monotonic, document-ordered ids for the five
//!   interactive-control variants
//! - **Graceful degradation**: malformed or unsupported markup is omitted,
//!   never an error
//! - **Text rendering**: [`render_text`] turns an element sequence into a
//!   compact plain-text digest

mod classify;
mod element;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and decoding.
pub mod encoding;

/// Plain-text rendering of classified documents.
pub mod transform;

/// URL utilities for link-target resolution.
pub mod url_utils;

// Public API - re-exports
pub use element::Element;
pub use options::Options;
pub use transform::render_text;

/// Parses an HTML document into a structured element sequence using
/// default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// The classified elements of the document body, in document order. A
/// document without a body yields an empty sequence. This function does
/// not fail: anything unusable in the input is omitted from the output.
///
/// # Example
///
/// ```rust
/// use htmlstr::parse;
///
/// let elements = parse("<body><p>Hello</p></body>");
/// assert_eq!(elements.len(), 1);
/// ```
#[must_use]
pub fn parse(html: &str) -> Vec<Element> {
    parse_with_options(html, &Options::default())
}

/// Parses an HTML document into a structured element sequence with custom
/// options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `options` - Configuration options for classification behavior
///
/// # Example
///
/// ```rust
/// use htmlstr::{parse_with_options, Element, Options};
///
/// let options = Options {
///     base_url: Some("https://example.com/a/".to_string()),
///     ..Options::default()
/// };
/// let elements = parse_with_options(r#"<body><p><a href="b">x</a></p></body>"#, &options);
///
/// let Element::Paragraph { inner } = &elements[0] else {
///     panic!("expected paragraph");
/// };
/// let Element::Anchor { href, .. } = &inner[0] else {
///     panic!("expected anchor");
/// };
/// assert_eq!(href, "https://example.com/a/b");
/// ```
#[must_use]
pub fn parse_with_options(html: &str, options: &Options) -> Vec<Element> {
    classify::classify_document(html, options)
}

/// Parses HTML bytes with automatic encoding detection.
///
/// This function accepts the document as raw bytes, detects the character
/// encoding from a byte-order mark or meta tag, and decodes to UTF-8
/// before classification.
///
/// # Arguments
///
/// * `html` - The HTML document as raw bytes
///
/// # Character Encoding
///
/// The encoding is detected from:
/// - A byte-order mark (UTF-8, UTF-16LE, UTF-16BE)
/// - `<meta charset="...">`
/// - `<meta http-equiv="Content-Type" content="...; charset=...">`
/// - Defaults to UTF-8 if no declaration is found
///
/// Invalid byte sequences are replaced with U+FFFD rather than causing
/// errors.
///
/// # Example
///
/// ```rust
/// use htmlstr::{parse_bytes, Element};
///
/// // ISO-8859-1 encoded document with charset declaration
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let elements = parse_bytes(html);
///
/// let Element::Paragraph { inner } = &elements[0] else {
///     panic!("expected paragraph");
/// };
/// assert_eq!(inner[0], Element::Text { content: "Caf\u{E9}".to_string() });
/// ```
#[must_use]
pub fn parse_bytes(html: &[u8]) -> Vec<Element> {
    let html_str = encoding::decode_html(html);
    parse(&html_str)
}

/// Parses HTML bytes with custom options and automatic encoding detection.
///
/// This combines the functionality of [`parse_bytes`] and
/// [`parse_with_options`], accepting raw bytes and custom classification
/// options.
///
/// # Arguments
///
/// * `html` - The HTML document as raw bytes
/// * `options` - Configuration options for classification behavior
///
/// # Example
///
/// ```rust
/// use htmlstr::{parse_bytes_with_options, Options};
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body><p>Content</p></body></html>";
/// let elements = parse_bytes_with_options(html, &Options::default());
/// assert_eq!(elements.len(), 1);
/// ```
#[must_use]
pub fn parse_bytes_with_options(html: &[u8], options: &Options) -> Vec<Element> {
    let html_str = encoding::decode_html(html);
    parse_with_options(&html_str, options)
}
