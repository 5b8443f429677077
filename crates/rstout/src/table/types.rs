//! Core types for table rendering configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how a table is rendered.
///
/// This is the full set of recognized options; there is no open-ended
/// option bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Whether to emit the header row and its separating rule.
    pub show_headers: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions { show_headers: true }
    }
}

/// A table renderer bound to a header schema.
///
/// The table holds only the column headers and rendering options, so it is
/// reusable across multiple row sets. Rendering is pure: each
/// [`to_rst`](Table::to_rst) call is independent and yields byte-identical
/// output for identical input.
///
/// # Example
///
/// ```rust
/// use rstout::Table;
///
/// let table = Table::new(["Name", "Status"]);
/// let out = table.to_rst(&[vec!["Alice", "active"]]).unwrap();
/// assert!(out.contains("Alice"));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    options: TableOptions,
}

impl Table {
    /// Create a table with the given column headers and default options.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(headers: I) -> Self {
        Table {
            headers: headers.into_iter().map(|s| s.into()).collect(),
            options: TableOptions::default(),
        }
    }

    /// Create a table with explicit options.
    pub fn with_options<S: Into<String>, I: IntoIterator<Item = S>>(
        headers: I,
        options: TableOptions,
    ) -> Self {
        Table {
            headers: headers.into_iter().map(|s| s.into()).collect(),
            options,
        }
    }

    /// Set whether the header row and its separating rule are emitted.
    pub fn show_headers(mut self, show: bool) -> Self {
        self.options.show_headers = show;
        self
    }

    /// The column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// The rendering options.
    pub fn options(&self) -> TableOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_shows_headers() {
        assert_eq!(TableOptions::default(), TableOptions { show_headers: true });
    }

    #[test]
    fn table_holds_headers() {
        let table = Table::new(["a", "b", "c"]);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.headers(), &["a", "b", "c"]);
        assert!(table.options().show_headers);
    }

    #[test]
    fn table_show_headers_setter() {
        let table = Table::new(["a"]).show_headers(false);
        assert!(!table.options().show_headers);
    }

    #[test]
    fn table_with_options() {
        let table = Table::with_options(["a"], TableOptions { show_headers: false });
        assert!(!table.options().show_headers);
    }
}
