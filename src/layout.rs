//! Column layout: how many columns a table has and how wide each one is.
//!
//! Widths are resolved in a fixed order:
//!
//! 1. the natural width of a column is its widest cell (heading included)
//!    plus the cell margin on both sides;
//! 2. an explicit width override replaces the natural width;
//! 3. with justify enabled, every column takes the widest resolved width.

use std::collections::BTreeMap;

use crate::align::Alignment;
use crate::cell::CellValue;
use crate::cells::visible_len;

/// Per-column formatting overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnFormat {
    pub align: Alignment,
    /// Explicit width in cells, margins included. `None` derives it from content.
    pub width: Option<usize>,
    /// Split overflowing content into extra lines instead of truncating.
    /// Only takes effect together with an explicit width.
    pub wrapped: bool,
}

impl ColumnFormat {
    /// Whether every field holds its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether this column wraps its content.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wrapped && self.width.is_some()
    }
}

/// Sparse column formats, keyed by 0-based column index.
pub type ColumnFormats = BTreeMap<usize, ColumnFormat>;

/// Format of a column, or the defaults when none was set.
#[must_use]
pub fn format_of(formats: &ColumnFormats, col: usize) -> ColumnFormat {
    formats.get(&col).copied().unwrap_or_default()
}

/// Number of columns: the heading length, else the first row's length.
#[must_use]
pub fn column_count(heading: &[CellValue], rows: &[Vec<CellValue>]) -> usize {
    if heading.is_empty() {
        rows.first().map_or(0, Vec::len)
    } else {
        heading.len()
    }
}

/// Width left for content once the margins are taken out.
#[must_use]
pub fn content_area(width: usize, margin: usize) -> usize {
    width.saturating_sub(margin.saturating_mul(2))
}

/// Resolve the final width of every column.
///
/// ```
/// use asciitable::layout::{column_widths, ColumnFormats};
/// use asciitable::row;
///
/// let heading = row!["Title", "Count"];
/// let rows = vec![row!["Dummy 1", 10]];
/// let widths = column_widths(&heading, &rows, &ColumnFormats::new(), 1, false);
/// assert_eq!(widths, vec![9, 7]);
/// ```
#[must_use]
pub fn column_widths(
    heading: &[CellValue],
    rows: &[Vec<CellValue>],
    formats: &ColumnFormats,
    margin: usize,
    justify: bool,
) -> Vec<usize> {
    let count = column_count(heading, rows);
    let padding = margin.saturating_mul(2);

    let mut widths = vec![padding; count];
    for cells in std::iter::once(heading).chain(rows.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            let needed = visible_len(&cell.to_string()).saturating_add(padding);
            *width = (*width).max(needed);
        }
    }

    for (&col, format) in formats.range(..count) {
        if let Some(width) = format.width {
            widths[col] = width;
        }
    }

    if justify {
        let widest = widths.iter().copied().max().unwrap_or(0);
        widths.fill(widest);
    }

    log::trace!("resolved column widths {widths:?}");
    widths
}
