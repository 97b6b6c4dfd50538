//! Plain-text rendering of classified documents.
//!
//! This module turns an element sequence into a compact, readable text
//! digest: headings become `#` lines, links and images use Markdown-style
//! notation, and interactive controls render as bracketed placeholders
//! carrying their control id (`[input#0]`, `[checkbox#2: on]`), so a
//! downstream consumer can refer back to a control by id.

use std::sync::LazyLock;

use regex::Regex;

use crate::element::Element;

/// Collapses any whitespace run inside an inline rendering to one space.
#[allow(clippy::expect_used)]
static COLLAPSE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("COLLAPSE_WHITESPACE regex"));

/// Collapses runs of three or more newlines between blocks.
#[allow(clippy::expect_used)]
static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Render an element sequence to plain text.
///
/// Each top-level element becomes one block, blocks are separated by a
/// single blank line, and whitespace inside a block is collapsed. The
/// result is trimmed; an empty sequence renders to an empty string.
///
/// # Examples
///
/// ```
/// use htmlstr::{parse, render_text};
///
/// let elements = parse(
///     r##"<body><h2>Sign up</h2><p>Read <a href="/tos">the terms</a></p>
///     <label>Agree <input type="checkbox" checked></label></body>"##,
/// );
/// let text = render_text(&elements);
/// assert_eq!(
///     text,
///     "## Sign up\n\nRead [the terms](/tos)\n\nAgree [checkbox#0: on]"
/// );
/// ```
#[must_use]
pub fn render_text(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        push_block(element, &mut out);
    }

    MULTIPLE_NEWLINES.replace_all(out.trim(), "\n\n").into_owned()
}

/// Append one element's block rendering, followed by a blank line.
fn push_block(element: &Element, out: &mut String) {
    match element {
        Element::Heading { level, inner } => {
            out.push_str(&"#".repeat(usize::from(*level)));
            out.push(' ');
            out.push_str(&collapse_inline(&render_inline_seq(inner)));
            out.push_str("\n\n");
        }
        // A disclosure widget keeps its children as separate blocks, so the
        // summary line and the disclosed content stay apart.
        Element::Details { inner } => {
            for child in inner {
                push_block(child, out);
            }
        }
        other => {
            let line = collapse_inline(&render_inline(other));
            if !line.is_empty() {
                out.push_str(&line);
                out.push_str("\n\n");
            }
        }
    }
}

/// Render a child sequence on one line, children separated by spaces.
fn render_inline_seq(elements: &[Element]) -> String {
    let parts: Vec<String> = elements
        .iter()
        .map(render_inline)
        .filter(|part| !part.is_empty())
        .collect();
    parts.join(" ")
}

/// Render one element without block separation.
fn render_inline(element: &Element) -> String {
    match element {
        Element::Text { content } => content.clone(),
        Element::Anchor { href, inner } => {
            format!("[{}]({href})", render_inline_seq(inner))
        }
        Element::Image { src, alt } => {
            format!("![{}]({src})", alt.as_deref().unwrap_or_default())
        }
        Element::Button { id, inner } => {
            format!("[button#{id}: {}]", render_inline_seq(inner))
        }
        Element::Heading { inner, .. }
        | Element::Paragraph { inner }
        | Element::Label { inner }
        | Element::Details { inner }
        | Element::Summary { inner } => render_inline_seq(inner),
        Element::TextInput { id, placeholder } => {
            render_input("input", *id, placeholder.as_deref())
        }
        Element::UrlInput { id, placeholder } => {
            render_input("url-input", *id, placeholder.as_deref())
        }
        Element::CheckboxInput { id, checked } => render_toggle("checkbox", *id, *checked),
        Element::RadioInput { id, checked } => render_toggle("radio", *id, *checked),
        Element::Select { inner, multiple } => {
            let choices: Vec<String> = inner
                .iter()
                .map(render_inline)
                .filter(|choice| !choice.is_empty())
                .collect();
            let choices = choices.join(" | ");
            if *multiple {
                format!("[select multiple: {choices}]")
            } else {
                format!("[select: {choices}]")
            }
        }
        Element::Option { text } => text.clone(),
    }
}

fn render_input(kind: &str, id: u32, placeholder: Option<&str>) -> String {
    match placeholder.filter(|p| !p.is_empty()) {
        Some(placeholder) => format!("[{kind}#{id}: {placeholder}]"),
        None => format!("[{kind}#{id}]"),
    }
}

fn render_toggle(kind: &str, id: u32, checked: bool) -> String {
    let state = if checked { "on" } else { "off" };
    format!("[{kind}#{id}: {state}]")
}

/// Collapse whitespace runs to single spaces and trim the line.
fn collapse_inline(text: &str) -> String {
    COLLAPSE_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}
