//! Core classification algorithm.
//!
//! This module contains the recursive descent that reduces a parsed DOM
//! tree to the element model. Dispatch is a closed match over recognized
//! tags with a transparent default: an unrecognized container contributes
//! no element itself, but its classified children are spliced into the
//! parent sequence at its position. Every malformed or partial input
//! degrades by omission; no branch produces an error.

use url::Url;

use crate::dom::{self, Selection};
use crate::element::Element;
use crate::options::Options;
use crate::url_utils;

/// Monotonically increasing id source for interactive controls.
///
/// Owned by a single classification run and never shared between runs, so
/// each run's id space starts fresh at 0.
#[derive(Debug, Default)]
struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    fn new() -> Self {
        Self::default()
    }

    /// Return the current id, then advance the counter.
    fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Coerce an HTML boolean attribute to a bool.
///
/// Present with the literal value `"true"` or with an empty value counts as
/// true; present with any other value counts as false; absent is false.
/// Bare presence (`<input checked>`) parses as an empty value and therefore
/// lands in the true branch.
fn boolean_attribute(sel: &Selection, name: &str) -> bool {
    match dom::get_attribute(sel, name) {
        Some(value) => value.is_empty() || value == "true",
        None => false,
    }
}

/// Heading level for `h1` through `h9` tag names.
fn heading_level(tag: &str) -> Option<u8> {
    match tag.as_bytes() {
        [b'h', digit @ b'1'..=b'9'] => Some(digit - b'0'),
        _ => None,
    }
}

/// Resolve a link target against the configured base, when there is one.
fn resolve_url(target: String, base: Option<&Url>) -> String {
    match base {
        Some(base) => url_utils::create_absolute_url(&target, base),
        None => target,
    }
}

/// Main entry point for document classification.
///
/// Locates the `<body>` node and classifies its children. Documents
/// without a body produce an empty sequence rather than an error.
pub(crate) fn classify_document(html: &str, options: &Options) -> Vec<Element> {
    if cfg!(debug_assertions) {
        eprintln!("DEBUG: Starting classification (HTML length: {} bytes)", html.len());
    }

    let doc = dom::parse(html);
    let body = doc.select("body");
    if !body.exists() {
        return Vec::new();
    }

    let base = options
        .base_url
        .as_deref()
        .and_then(url_utils::parse_absolute_url);
    let mut ids = IdAllocator::new();

    let elements = classify_children(&body, &mut ids, base.as_ref(), options.max_depth);

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: Classification complete - {} top-level elements, {} control ids assigned",
            elements.len(),
            ids.next
        );
    }

    elements
}

/// Classify the direct children of one node, in document order.
///
/// Returns zero or more elements per child. Wrapping tags recurse before
/// deciding whether to emit anything, so a wrapper whose subtree classifies
/// to nothing is dropped without consuming a control id.
fn classify_children(
    root: &Selection,
    ids: &mut IdAllocator,
    base: Option<&Url>,
    depth: usize,
) -> Vec<Element> {
    let mut elements = Vec::new();

    if depth == 0 {
        return elements;
    }
    let Some(root_node) = root.nodes().first() else {
        return elements;
    };

    for child_node in root_node.children() {
        if child_node.is_element() {
            let el = Selection::from(child_node);
            let Some(tag) = dom::tag_name(&el) else {
                continue;
            };

            match tag.as_str() {
                "a" => {
                    let Some(href) = dom::get_attribute(&el, "href").filter(|h| !h.is_empty())
                    else {
                        // No usable target: the whole subtree is dropped,
                        // not flattened.
                        continue;
                    };

                    let inner = classify_children(&el, ids, base, depth - 1);
                    if inner.is_empty() {
                        continue;
                    }

                    elements.push(Element::Anchor {
                        href: resolve_url(href, base),
                        inner,
                    });
                }

                "img" => {
                    let Some(src) = dom::get_attribute(&el, "src").filter(|s| !s.is_empty())
                    else {
                        continue;
                    };

                    elements.push(Element::Image {
                        src: resolve_url(src, base),
                        alt: dom::get_attribute(&el, "alt"),
                    });
                }

                "button" => {
                    let inner = classify_children(&el, ids, base, depth - 1);
                    if inner.is_empty() {
                        continue;
                    }

                    // Children recurse first, so controls nested in the
                    // button carry lower ids than the button itself.
                    elements.push(Element::Button {
                        id: ids.next_id(),
                        inner,
                    });
                }

                "p" => {
                    let inner = classify_children(&el, ids, base, depth - 1);
                    if inner.is_empty() {
                        continue;
                    }

                    elements.push(Element::Paragraph { inner });
                }

                "input" => classify_input(&el, ids, &mut elements),

                "select" => {
                    let inner = classify_children(&el, ids, base, depth - 1);
                    if inner.is_empty() {
                        continue;
                    }

                    elements.push(Element::Select {
                        inner,
                        multiple: boolean_attribute(&el, "multiple"),
                    });
                }

                "option" => {
                    // Text content only; option contents are never
                    // classified into sub-elements.
                    let text = dom::text_content(&el);
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        elements.push(Element::Option {
                            text: trimmed.to_string(),
                        });
                    }
                }

                "label" => {
                    let inner = classify_children(&el, ids, base, depth - 1);
                    if !inner.is_empty() {
                        elements.push(Element::Label { inner });
                    }
                }

                "details" => {
                    let inner = classify_children(&el, ids, base, depth - 1);
                    if !inner.is_empty() {
                        elements.push(Element::Details { inner });
                    }
                }

                "summary" => {
                    let inner = classify_children(&el, ids, base, depth - 1);
                    if !inner.is_empty() {
                        elements.push(Element::Summary { inner });
                    }
                }

                _ => {
                    if let Some(level) = heading_level(&tag) {
                        let inner = classify_children(&el, ids, base, depth - 1);
                        if !inner.is_empty() {
                            elements.push(Element::Heading { level, inner });
                        }
                    } else {
                        // Transparent container: splice its classified
                        // children in at this position.
                        elements.extend(classify_children(&el, ids, base, depth - 1));
                    }
                }
            }
        } else if child_node.is_text() {
            let text = child_node.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                elements.push(Element::Text {
                    content: trimmed.to_string(),
                });
            }
        }
        // Comments and other node kinds produce nothing.
    }

    elements
}

/// Classify one `<input>` by its `type` attribute, absent meaning `"text"`.
///
/// Inputs are void elements, so there is no child check and the id is
/// allocated as soon as the type matches. Unrecognized types (including a
/// present-but-empty `type`) produce nothing.
fn classify_input(el: &Selection, ids: &mut IdAllocator, elements: &mut Vec<Element>) {
    match dom::get_attribute(el, "type").as_deref().unwrap_or("text") {
        "text" => elements.push(Element::TextInput {
            id: ids.next_id(),
            placeholder: dom::get_attribute(el, "placeholder"),
        }),
        "url" => elements.push(Element::UrlInput {
            id: ids.next_id(),
            placeholder: dom::get_attribute(el, "placeholder"),
        }),
        "checkbox" => elements.push(Element::CheckboxInput {
            id: ids.next_id(),
            checked: boolean_attribute(el, "checked"),
        }),
        "radio" => elements.push(Element::RadioInput {
            id: ids.next_id(),
            checked: boolean_attribute(el, "checked"),
        }),
        _ => {}
    }
}
