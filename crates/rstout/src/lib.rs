//! # Rstout - reStructuredText Generation Library
//!
//! `rstout` generates reStructuredText chunks from in-memory data: tables,
//! section headers, bullet lists, and toctree directives.
//!
//! ## Core Concepts
//!
//! - [`table()`] / [`Table`]: render tabular data, choosing between a simple
//!   space-padded format and a boxed grid format based on cell content
//! - [`table_from`]: render tables straight from serializable records
//! - [`header`]: section headers with level-based over/underline decoration
//! - [`ul`] / [`ol`] / [`Toctree`]: list and directive blocks
//! - [`srcref`]: resolve source-code links for generated documentation
//!
//! ## Quick Start
//!
//! ```rust
//! use rstout::table;
//!
//! let headers = ["Country", "City", "Name"];
//! let rows = vec![
//!     vec!["Belgium", "Eupen", "Gerd"],
//!     vec!["Estonia", "Vigala", "Luc"],
//! ];
//!
//! let out = table(&headers, &rows).unwrap();
//! assert!(out.starts_with("========"));
//! ```
//!
//! ## Format Selection
//!
//! Cells may contain embedded line breaks; any such cell switches the whole
//! table to the grid format:
//!
//! ```rust
//! use rstout::table;
//!
//! let out = table(&["a", "b"], &[vec!["x\ny", "z"]]).unwrap();
//! assert!(out.starts_with("+---+"));
//! ```
//!
//! ## Purity
//!
//! Rendering is a synchronous, side-effect-free transformation over fully
//! materialized input: no I/O, no shared mutable state, and byte-identical
//! output for identical input, so renderers are safe to share across
//! threads without coordination.

mod directive;
mod error;
mod header;
mod list;
mod srcref;
pub mod table;
mod util;

pub use directive::Toctree;
pub use error::RenderError;
pub use header::{boldheader, header, write_header};
pub use list::{bulleted, ol, ul};
pub use srcref::{srcref, SourceModule};
pub use table::{table, table_from, Table, TableFormat, TableOptions};
pub use util::{display_width, indentation, pad_right, unindent};
