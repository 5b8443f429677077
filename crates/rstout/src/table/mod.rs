//! Table rendering in simple and grid reStructuredText formats.
//!
//! Two strategies cover all tabular output:
//!
//! - **Simple**: fixed-width, space-padded columns bounded by `=` rule
//!   lines, used when no cell contains a line break.
//! - **Grid**: a boxed `+`/`|` grid where multi-line cell content wraps
//!   within its box, selected as soon as any cell contains a line break.
//!
//! The switch is content-driven and applies to the whole table; column
//! widths fit the longest individual line in each column. A table with zero
//! rows renders as two blank lines, keeping the output valid for strict rst
//! parsers that reject a header-only table.
//!
//! ```rust
//! use rstout::table;
//!
//! let out = table(
//!     &["Name", "Status"],
//!     &[vec!["Alice", "active"], vec!["Bob", "idle"]],
//! )
//! .unwrap();
//! assert!(out.starts_with("======"));
//! ```

mod record;
mod renderer;
mod resolve;
mod types;

pub use record::table_from;
pub use resolve::{ResolvedWidths, TableFormat};
pub use types::{Table, TableOptions};

use crate::error::RenderError;

/// Render `headers` and `rows` as a reStructuredText table block.
///
/// Convenience wrapper around [`Table`] with default options (headers
/// shown). See [`Table::to_rst`] for the full contract.
///
/// # Example
///
/// ```rust
/// use rstout::table;
///
/// let out = table(&["a", "b"], &[vec!["x", "y"]]).unwrap();
/// assert_eq!(out, "=== ===\n a   b\n--- ---\n x   y\n=== ===\n");
/// ```
pub fn table<H: AsRef<str>, S: AsRef<str>>(
    headers: &[H],
    rows: &[Vec<S>],
) -> Result<String, RenderError> {
    Table::new(headers.iter().map(|h| h.as_ref())).to_rst(rows)
}
