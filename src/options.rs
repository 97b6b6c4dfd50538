//! Configuration options for document classification.

/// Configuration options for document classification.
///
/// Fields are public and meant to be set with struct-update syntax over
/// `Options::default()`.
///
/// # Example
///
/// ```rust
/// use htmlstr::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     base_url: Some("https://example.com/a/".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL the document was fetched from.
    ///
    /// When set to an absolute URL, relative `href` and `src` values are
    /// resolved against it. When unset, or when the value is not an
    /// absolute URL, link targets are kept verbatim.
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Maximum tree depth for classification.
    ///
    /// Children nested deeper than this are dropped. Prevents unbounded
    /// recursion on pathologically nested documents; the default is far
    /// deeper than any real page.
    ///
    /// Default: `100`
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            max_depth: 100,
        }
    }
}
