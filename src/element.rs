//! The structured element model.
//!
//! Classification reduces an HTML document to a tree of these variants:
//! content that can be read (text, headings, paragraphs, links, images)
//! balanced against controls that can be operated (buttons, inputs,
//! selection and disclosure widgets). Markup with no counterpart here has
//! no representation in the model.

use serde::{Deserialize, Serialize};

/// One element of the structured document model.
///
/// The enum is closed: classification never produces anything outside these
/// variants. Wrapping variants own their `inner` children exclusively, so a
/// classified document is a pure tree. A variant carrying `inner` or `text`
/// is only ever produced with non-empty content; an element with nothing in
/// it does not exist in the model.
///
/// Interactive controls (`Button`, `TextInput`, `UrlInput`, `CheckboxInput`,
/// `RadioInput`) carry an `id` assigned in document order within one
/// classification run, starting at 0. Ids are unique within a run and never
/// assigned to any other variant.
///
/// # Serialization
///
/// Serializes internally tagged with a snake_case `type` field:
///
/// ```
/// use htmlstr::Element;
///
/// let element = Element::Image {
///     src: "/logo.png".to_string(),
///     alt: Some("Logo".to_string()),
/// };
/// let json = serde_json::to_string(&element).unwrap();
/// assert_eq!(json, r#"{"type":"image","src":"/logo.png","alt":"Logo"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A run of text, trimmed and non-empty.
    Text {
        /// The trimmed text content.
        content: String,
    },

    /// A hyperlink (`<a>`). Only produced for anchors with a non-empty
    /// `href` and at least one classified child.
    Anchor {
        /// Link target, verbatim from the document unless resolved against
        /// a configured base URL.
        href: String,
        /// Classified children, never empty.
        inner: Vec<Element>,
    },

    /// An image (`<img>`) with a non-empty `src`.
    Image {
        /// Image source, verbatim unless resolved against a base URL.
        src: String,
        /// Alternative text, exactly as present in the document
        /// (`None` when the attribute is absent).
        alt: Option<String>,
    },

    /// A clickable button (`<button>`) with at least one classified child.
    Button {
        /// Control id.
        id: u32,
        /// Classified children, never empty.
        inner: Vec<Element>,
    },

    /// A heading (`<h1>`..`<h9>`).
    Heading {
        /// Heading level, 1 through 9.
        level: u8,
        /// Classified children, never empty.
        inner: Vec<Element>,
    },

    /// A paragraph (`<p>`).
    Paragraph {
        /// Classified children, never empty.
        inner: Vec<Element>,
    },

    /// A free-text input (`<input type="text">`, or `<input>` with no
    /// `type` attribute).
    TextInput {
        /// Control id.
        id: u32,
        /// Placeholder text, exactly as present in the document.
        placeholder: Option<String>,
    },

    /// A URL input (`<input type="url">`).
    UrlInput {
        /// Control id.
        id: u32,
        /// Placeholder text, exactly as present in the document.
        placeholder: Option<String>,
    },

    /// A checkbox (`<input type="checkbox">`).
    CheckboxInput {
        /// Control id.
        id: u32,
        /// Initial checked state.
        checked: bool,
    },

    /// A radio button (`<input type="radio">`).
    RadioInput {
        /// Control id.
        id: u32,
        /// Initial checked state.
        checked: bool,
    },

    /// A form label (`<label>`).
    Label {
        /// Classified children, never empty.
        inner: Vec<Element>,
    },

    /// A selection widget (`<select>`).
    Select {
        /// Classified children, never empty. In well-formed documents these
        /// are `Option` elements, but classification does not enforce that.
        inner: Vec<Element>,
        /// Whether multiple options may be selected at once.
        multiple: bool,
    },

    /// One choice inside a selection widget (`<option>`). Holds plain text
    /// only; option contents are never classified into sub-elements.
    Option {
        /// The trimmed option label, non-empty.
        text: String,
    },

    /// A disclosure widget (`<details>`).
    Details {
        /// Classified children, never empty.
        inner: Vec<Element>,
    },

    /// A disclosure caption (`<summary>`).
    Summary {
        /// Classified children, never empty.
        inner: Vec<Element>,
    },
}

impl Element {
    /// The control id, for the five interactive-control variants.
    ///
    /// Returns `None` for every other variant.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        match self {
            Element::Button { id, .. }
            | Element::TextInput { id, .. }
            | Element::UrlInput { id, .. }
            | Element::CheckboxInput { id, .. }
            | Element::RadioInput { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The classified children of wrapping variants.
    ///
    /// Returns `None` for leaf variants (`Text`, `Image`, the input
    /// controls, and `Option`).
    #[must_use]
    pub fn inner(&self) -> Option<&[Element]> {
        match self {
            Element::Anchor { inner, .. }
            | Element::Button { inner, .. }
            | Element::Heading { inner, .. }
            | Element::Paragraph { inner }
            | Element::Label { inner }
            | Element::Select { inner, .. }
            | Element::Details { inner }
            | Element::Summary { inner } => Some(inner),
            _ => None,
        }
    }
}
