//! Directive builders for generated documents.

/// Builder for a `.. toctree::` directive.
///
/// Options are explicit typed fields rather than an open-ended bag, and are
/// emitted in a fixed order: `maxdepth`, `caption`, `hidden`, `numbered`.
/// Entries keep their insertion order.
///
/// # Example
///
/// ```rust
/// use rstout::Toctree;
///
/// let toc = Toctree::new().maxdepth(2).entries(["a", "b", "c"]);
/// assert_eq!(
///     toc.to_rst(),
///     "\n\n.. toctree::\n    :maxdepth: 2\n\n    a\n    b\n    c\n"
/// );
///
/// let toc = Toctree::new().hidden(true).entries(["a", "b", "c"]);
/// assert_eq!(
///     toc.to_rst(),
///     "\n\n.. toctree::\n    :hidden:\n\n    a\n    b\n    c\n"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Toctree {
    entries: Vec<String>,
    maxdepth: Option<usize>,
    caption: Option<String>,
    hidden: bool,
    numbered: bool,
}

impl Toctree {
    /// Create an empty toctree.
    pub fn new() -> Self {
        Toctree::default()
    }

    /// Add a document entry.
    pub fn entry(mut self, name: impl Into<String>) -> Self {
        self.entries.push(name.into());
        self
    }

    /// Add several document entries.
    pub fn entries<S: Into<String>, I: IntoIterator<Item = S>>(mut self, names: I) -> Self {
        self.entries.extend(names.into_iter().map(|n| n.into()));
        self
    }

    /// Set the `:maxdepth:` option.
    pub fn maxdepth(mut self, depth: usize) -> Self {
        self.maxdepth = Some(depth);
        self
    }

    /// Set the `:caption:` option.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the `:hidden:` flag.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the `:numbered:` flag.
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    /// Render the directive block.
    pub fn to_rst(&self) -> String {
        let mut text = String::from("\n\n.. toctree::");
        if let Some(depth) = self.maxdepth {
            text.push_str(&format!("\n    :maxdepth: {}", depth));
        }
        if let Some(caption) = &self.caption {
            text.push_str(&format!("\n    :caption: {}", caption));
        }
        if self.hidden {
            text.push_str("\n    :hidden:");
        }
        if self.numbered {
            text.push_str("\n    :numbered:");
        }
        text.push('\n');
        for entry in &self.entries {
            text.push_str("\n    ");
            text.push_str(entry);
        }
        text.push('\n');
        text
    }
}
