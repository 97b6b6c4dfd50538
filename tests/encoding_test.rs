use htmlstr::{parse_bytes, parse_bytes_with_options, render_text, Element, Options};

/// UTF-8 content passes through untouched
#[test]
fn utf8_content_handled_correctly() {
    let html = "\
        <html>\
        <head><meta charset=\"utf-8\"></head>\
        <body>\
            <h1>Test Page</h1>\
            <p>This is UTF-8 content with special characters: é, ñ, ü, 中文</p>\
        </body>\
        </html>\
    "
    .as_bytes();

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Test Page"));
    assert!(text.contains("UTF-8 content"));
    assert!(text.contains("é"));
    assert!(text.contains("ñ"));
    assert!(text.contains("ü"));
    assert!(text.contains("中文"));
}

/// ISO-8859-1 bytes are decoded via the charset meta tag
#[test]
fn iso88591_converted_to_utf8() {
    // é = 0xE9, ñ = 0xF1, ü = 0xFC in ISO-8859-1
    let html = b"<html>\
        <head><meta charset=\"ISO-8859-1\"></head>\
        <body>\
            <h1>Caf\xE9 espa\xF1ol</h1>\
            <p>M\xFCnchen</p>\
        </body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Café"));
    assert!(text.contains("español"));
    assert!(text.contains("München"));
}

/// Windows-1252 smart punctuation is detected and converted
#[test]
fn windows1252_detected_and_converted() {
    // 0x93/0x94 are curly double quotes, 0x96 is an en-dash
    let html = b"<html>\
        <head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body>\
            <p>\x93Smart quotes\x94 and an en\x96dash.</p>\
        </body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("\u{201C}Smart quotes\u{201D}"));
    assert!(text.contains("en\u{2013}dash"));
}

/// UTF-8 is assumed when nothing declares a charset
#[test]
fn utf8_assumed_when_no_charset() {
    let html = b"<html><body><p>No charset specified</p></body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("No charset specified"));
}

/// Invalid byte sequences become replacement characters, not panics
#[test]
fn invalid_bytes_handled_gracefully() {
    let html = b"<html><body>\
        <p>Valid text</p>\
        <p>Invalid: \xFF\xFE\xFD</p>\
        <p>More valid text</p>\
        </body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Valid text"));
    assert!(text.contains("More valid text"));
}

/// Charset sniffing ignores case
#[test]
fn charset_detection_case_insensitive() {
    let html = b"<HTML><HEAD><META CHARSET=\"UTF-8\"></HEAD>\
        <BODY><P>Content</P></BODY></HTML>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Content"));
}

/// The first charset declaration wins
#[test]
fn multiple_charset_declarations() {
    let html = b"<html>\
        <head><meta charset=\"ISO-8859-1\"><meta charset=\"UTF-8\"></head>\
        <body><p>Caf\xE9</p></body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Café"));
}

/// A leading UTF-8 BOM is stripped before parsing
#[test]
fn utf8_bom_handled_correctly() {
    let html = b"\xEF\xBB\xBF<html><body><p>Content with BOM</p></body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Content with BOM"));
    assert!(!text.contains('\u{FEFF}'));
}

/// A byte order mark takes precedence over a conflicting meta tag
#[test]
fn bom_overrides_charset_meta() {
    // The body holds UTF-8 bytes for é; decoding them as ISO-8859-1
    // would produce mojibake.
    let html = b"\xEF\xBB\xBF<html>\
        <head><meta charset=\"ISO-8859-1\"></head>\
        <body><p>Caf\xC3\xA9</p></body></html>";

    let text = render_text(&parse_bytes(html));

    assert!(text.contains("Café"));
    assert!(!text.contains("Ã©"));
}

/// UTF-16LE input is recognized by its BOM
#[test]
fn utf16le_bom_detected() {
    let mut bytes = vec![0xFF, 0xFE];
    for b in "<html><body><p>UTF-16 page</p></body></html>".bytes() {
        bytes.push(b);
        bytes.push(0x00);
    }

    let text = render_text(&parse_bytes(&bytes));

    assert!(text.contains("UTF-16 page"));
}

/// Byte input combines with options like the string entry point
#[test]
fn parse_bytes_with_options_resolves_urls() {
    let html = b"<html>\
        <head><meta charset=\"ISO-8859-1\"></head>\
        <body><a href=\"caf\xE9.html\">Caf\xE9</a></body></html>";

    let options = Options {
        base_url: Some("https://example.com/menu/".to_string()),
        ..Options::default()
    };

    let elements = parse_bytes_with_options(html, &options);

    match &elements[0] {
        Element::Anchor { href, .. } => {
            assert!(href.starts_with("https://example.com/menu/caf"));
        }
        other => panic!("expected Anchor, got {other:?}"),
    }
}
