//! Expansion of logical rows into the physical lines they occupy.
//!
//! A logical row is one line of output unless a wrapped column needs more
//! room, in which case the row grows downwards and the other columns are
//! left blank on the continuation lines.

use crate::cell::CellValue;
use crate::layout::{ColumnFormats, content_area, format_of};
use crate::wrap::wrap_lines;

/// Split a logical row into physical rows.
///
/// Every physical row has exactly `widths.len()` cells. Cells missing from
/// `cells` render as empty strings; cells beyond the column count are
/// ignored.
#[must_use]
pub fn physical_rows(
    cells: &[CellValue],
    widths: &[usize],
    formats: &ColumnFormats,
    margin: usize,
) -> Vec<Vec<String>> {
    let columns: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let value = cells.get(col).map(ToString::to_string).unwrap_or_default();
            if format_of(formats, col).wraps() {
                wrap_lines(&value, content_area(width, margin))
            } else {
                vec![value]
            }
        })
        .collect();

    let height = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);
    if height > 1 {
        log::trace!("row expanded to {height} physical rows");
    }

    (0..height)
        .map(|line| {
            columns
                .iter()
                .map(|lines| lines.get(line).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
