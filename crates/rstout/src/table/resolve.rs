//! Strategy selection and column width resolution.
//!
//! Format selection is a single pre-pass over all cell content. Widths are
//! computed per visual line: a multi-line cell contributes each of its lines
//! independently, not its total length.

use crate::util::display_width;

/// The rendering strategy for a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    /// Space-padded columns bounded by `=` rule lines. Selected when no cell
    /// spans multiple lines.
    Simple,
    /// Boxed `+`/`|` grid supporting multi-line cell content.
    Grid,
}

impl TableFormat {
    /// Decide the format for the given rows.
    ///
    /// Any cell containing an embedded line break selects
    /// [`TableFormat::Grid`]. Header text is not scanned.
    pub fn detect<S: AsRef<str>>(rows: &[Vec<S>]) -> TableFormat {
        for row in rows {
            for cell in row {
                if cell.as_ref().contains('\n') {
                    return TableFormat::Grid;
                }
            }
        }
        TableFormat::Simple
    }
}

/// Resolved display widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without padding or separators).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Compute column widths from headers and row data.
///
/// Each column's width is the maximum display width over every individual
/// line of every cell in that column, and over the header's lines when
/// `show_headers` is true. A column that no content ever touches gets
/// width 1.
pub(crate) fn resolve_widths(
    headers: &[String],
    rows: &[Vec<String>],
    show_headers: bool,
) -> ResolvedWidths {
    let mut widths: Vec<Option<usize>> = vec![None; headers.len()];
    if show_headers {
        adjust(&mut widths, headers);
    }
    for row in rows {
        adjust(&mut widths, row);
    }
    ResolvedWidths {
        widths: widths.into_iter().map(|w| w.unwrap_or(1)).collect(),
    }
}

/// Widen each column to fit the given row's cell lines.
fn adjust(widths: &mut [Option<usize>], row: &[String]) {
    for (width, cell) in widths.iter_mut().zip(row) {
        for line in cell.lines() {
            let line_width = display_width(line);
            if width.map_or(true, |w| w < line_width) {
                *width = Some(line_width);
            }
        }
    }
}
