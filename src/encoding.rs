//! Character encoding detection and decoding.
//!
//! Documents fetched as raw bytes declare their charset in a BOM or a meta
//! tag. This module finds the declaration and decodes to UTF-8 so the rest
//! of the crate only ever sees strings.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match the charset label in either meta form: `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Detect character encoding from raw HTML bytes.
///
/// Looks for declarations in the following order:
/// 1. A byte-order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. A `charset=` label in a meta tag
/// 3. Defaults to UTF-8 if nothing is found
///
/// Only the first 1024 bytes are examined for meta tags, which is where
/// conforming documents place them.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_length)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(label) = CHARSET_RE.captures(&head_str).and_then(|c| c.get(1)) {
        if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Decode raw HTML bytes to a UTF-8 string.
///
/// Invalid sequences become replacement characters rather than errors, and
/// any leading BOM is stripped instead of leaking into the text.
///
/// # Examples
///
/// ```
/// use htmlstr::encoding::decode_html;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(decode_html(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let (decoded, _encoding_used, _had_errors) = detect_encoding(html).decode(html);
    decoded.into_owned()
}
