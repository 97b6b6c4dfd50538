use htmlstr::{parse, render_text};

#[test]
fn render_preserves_block_separation() {
    let html = "<body><p>First paragraph.</p><p>Second paragraph.</p></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "First paragraph.\n\nSecond paragraph.");
}

#[test]
fn render_strips_inline_wrappers() {
    let html = "<body><p>This is <strong>bold</strong> and <em>italic</em> text</p></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "This is bold and italic text");
}

#[test]
fn render_handles_nested_inline_elements() {
    let html = "<body><p>This is <strong><em>bold and italic</em></strong> text</p></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "This is bold and italic text");
}

#[test]
fn render_uses_link_notation_for_anchors() {
    let html = r#"<body><p>Visit <a href="https://example.com">our site</a></p></body>"#;
    let text = render_text(&parse(html));
    assert_eq!(text, "Visit [our site](https://example.com)");
}

#[test]
fn render_uses_image_notation() {
    let html = r#"<body><p><img src="/logo.png" alt="Logo"></p><p><img src="/plain.png"></p></body>"#;
    let text = render_text(&parse(html));
    assert_eq!(text, "![Logo](/logo.png)\n\n![](/plain.png)");
}

#[test]
fn render_preserves_headings_with_separation() {
    let html = "<body><h2>Heading</h2><p>Para</p></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "## Heading\n\nPara");
}

#[test]
fn render_normalizes_inline_whitespace() {
    let html = "<body><p> Hello\t\tworld </p><p> Second\nline </p></body>";
    let text = render_text(&parse(html));
    assert!(text.contains("Hello world"));
    assert!(text.contains("\n\n"));
    assert!(!text.contains("  "));
}

#[test]
fn render_separates_flattened_list_items_as_blocks() {
    let html = "<body><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "Item 1\n\nItem 2\n\nItem 3");
}

#[test]
fn render_produces_control_placeholders() {
    let html = r#"<body>
        <h2>Sign in</h2>
        <label>Email <input type="text" placeholder="you@example.com"></label>
        <label>Remember <input type="checkbox" checked></label>
        <button>Submit</button>
    </body>"#;
    let text = render_text(&parse(html));
    assert_eq!(
        text,
        "## Sign in\n\nEmail [input#0: you@example.com]\n\nRemember [checkbox#1: on]\n\n[button#2: Submit]"
    );
}

#[test]
fn render_joins_select_options_with_pipes() {
    let html = "<body><select multiple><option>A</option><option>B</option></select></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "[select multiple: A | B]");
}

#[test]
fn render_of_empty_parse_is_empty() {
    assert_eq!(render_text(&parse("")), "");
}

#[test]
fn render_expands_details_blocks() {
    let html = "<body><details><summary>More</summary><p>Hidden text</p></details></body>";
    let text = render_text(&parse(html));
    assert_eq!(text, "More\n\nHidden text");
}
