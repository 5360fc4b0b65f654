//! Table state and its fluent mutation API.
//!
//! A [`Table`] owns everything that affects rendering: title, heading,
//! rows, per-column formats, cell margin, the justify flag and a private
//! copy of the style catalog. Every setter takes `&mut self` and returns
//! `&mut Self`, so calls chain:
//!
//! ```
//! use asciitable::prelude::*;
//!
//! let mut table = Table::new("Dummy title");
//! table
//!     .set_heading(["Title", "Count", "Rate (%)"])
//!     .add_row(row!["Dummy 1", 10, 2.3])
//!     .add_row(row!["Dummy 2", 5, 3.1])
//!     .set_cell_margin(0);
//!
//! assert_eq!(
//!     table.render(),
//!     "\
//! +----------------------+
//! |     Dummy title      |
//! +-------+-----+--------+
//! | Title |Count|Rate (%)|
//! +-------+-----+--------+
//! |Dummy 1|   10|     2.3|
//! |Dummy 2|    5|     3.1|
//! +-------+-----+--------+
//! "
//! );
//! ```
//!
//! Column indexes are 1-based. Index 0 is ignored by setters and reads as
//! the default on getters, as is any index past [`MAX_COLUMNS`].

use std::cmp::Ordering;
use std::fmt;

use crate::align::Alignment;
use crate::cell::CellValue;
use crate::error::{Result, TableError};
use crate::layout::{ColumnFormat, ColumnFormats, column_count, format_of};
use crate::render::Renderer;
use crate::style::{BorderStyle, DEFAULT_STYLE, NO_BORDER_STYLE, StyleCatalog};

const DEFAULT_MARGIN: usize = 1;

/// Highest column index accepted by `set_cell` and the column format setters.
pub const MAX_COLUMNS: usize = 4096;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A plain-text table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    title: String,
    title_align: Alignment,
    heading: Vec<CellValue>,
    heading_align: Alignment,
    rows: Vec<Vec<CellValue>>,
    formats: ColumnFormats,
    margin: usize,
    justify: bool,
    catalog: StyleCatalog,
    style: BorderStyle,
}

impl Default for Table {
    fn default() -> Self {
        Self::with_catalog(StyleCatalog::builtin())
    }
}

impl Table {
    /// Create an empty table with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let mut table = Self::default();
        table.title = title.into();
        table
    }

    /// Create an empty table that looks up styles in `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: StyleCatalog) -> Self {
        let style = catalog.find_or_default(DEFAULT_STYLE).clone();
        Self {
            title: String::new(),
            title_align: Alignment::Center,
            heading: Vec::new(),
            heading_align: Alignment::Center,
            rows: Vec::new(),
            formats: ColumnFormats::new(),
            margin: DEFAULT_MARGIN,
            justify: false,
            catalog,
            style,
        }
    }

    // --- title -------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title_align(&mut self, align: Alignment) -> &mut Self {
        self.title_align = align;
        self
    }

    pub fn set_title_align_left(&mut self) -> &mut Self {
        self.set_title_align(Alignment::Left)
    }

    pub fn set_title_align_right(&mut self) -> &mut Self {
        self.set_title_align(Alignment::Right)
    }

    pub fn set_title_align_center(&mut self) -> &mut Self {
        self.set_title_align(Alignment::Center)
    }

    #[must_use]
    pub fn title_align(&self) -> Alignment {
        self.title_align
    }

    // --- heading -----------------------------------------------------------

    /// Replace the heading. An empty heading hides the heading block.
    pub fn set_heading<I, T>(&mut self, heading: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        self.heading = heading.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn heading(&self) -> &[CellValue] {
        &self.heading
    }

    pub fn set_heading_align(&mut self, align: Alignment) -> &mut Self {
        self.heading_align = align;
        self
    }

    pub fn set_heading_align_left(&mut self) -> &mut Self {
        self.set_heading_align(Alignment::Left)
    }

    pub fn set_heading_align_right(&mut self) -> &mut Self {
        self.set_heading_align(Alignment::Right)
    }

    pub fn set_heading_align_center(&mut self) -> &mut Self {
        self.set_heading_align(Alignment::Center)
    }

    #[must_use]
    pub fn heading_align(&self) -> Alignment {
        self.heading_align
    }

    // --- rows --------------------------------------------------------------

    /// Append a row.
    pub fn add_row<I, T>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Append a row only if at least one of its cells is a non-zero number.
    pub fn add_non_zero_row<I, T>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let row: Vec<CellValue> = cells.into_iter().map(Into::into).collect();
        if row.iter().any(CellValue::is_non_zero_number) {
            self.rows.push(row);
        } else {
            log::debug!("skipping row without non-zero numbers: {row:?}");
        }
        self
    }

    /// Append several rows at once.
    pub fn add_rows<R, I, T>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Cell at a 1-based `(row, col)` position.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        let row = self.rows.get(row.checked_sub(1)?)?;
        row.get(col.checked_sub(1)?)
    }

    /// Overwrite the cell at a 1-based `(row, col)` position.
    ///
    /// Rows shorter than `col` are extended with empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowOutOfRange`] if `row` does not exist and
    /// [`TableError::ColumnOutOfRange`] if `col` is past [`MAX_COLUMNS`].
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<CellValue>,
    ) -> Result<&mut Self> {
        let rows = self.rows.len();
        let cells = row
            .checked_sub(1)
            .and_then(|idx| self.rows.get_mut(idx))
            .ok_or(TableError::RowOutOfRange { row, rows })?;
        if col > MAX_COLUMNS {
            return Err(TableError::ColumnOutOfRange { col, max: MAX_COLUMNS });
        }

        match col.checked_sub(1) {
            Some(idx) => {
                if cells.len() <= idx {
                    cells.resize(idx + 1, CellValue::Empty);
                }
                cells[idx] = value.into();
            }
            None => log::debug!("ignoring set_cell on column 0"),
        }
        Ok(self)
    }

    /// Remove all rows, keeping title, heading and formatting.
    pub fn clear_rows(&mut self) -> &mut Self {
        self.rows.clear();
        self
    }

    /// Reset everything except the style catalog.
    pub fn clear(&mut self) -> &mut Self {
        let catalog = std::mem::replace(&mut self.catalog, StyleCatalog::empty());
        *self = Self::with_catalog(catalog);
        self
    }

    // --- column formats ----------------------------------------------------

    fn update_format(&mut self, col: usize, update: impl FnOnce(&mut ColumnFormat)) {
        let Some(idx) = col.checked_sub(1) else {
            log::debug!("ignoring format change on column 0");
            return;
        };
        if idx >= MAX_COLUMNS {
            log::debug!("ignoring format change on column {col} (max {MAX_COLUMNS})");
            return;
        }
        let format = self.formats.entry(idx).or_default();
        update(format);
        if format.is_default() {
            self.formats.remove(&idx);
        }
    }

    fn format(&self, col: usize) -> ColumnFormat {
        col.checked_sub(1)
            .map(|idx| format_of(&self.formats, idx))
            .unwrap_or_default()
    }

    /// Number of columns covered by the plural format getters.
    fn format_span(&self) -> usize {
        self.formats.keys().next_back().map_or(0, |&idx| idx + 1)
    }

    fn format_columns<T>(&self, get: impl Fn(&ColumnFormat) -> T) -> Vec<T> {
        (0..self.format_span())
            .map(|idx| get(&format_of(&self.formats, idx)))
            .collect()
    }

    /// Set an explicit width (margins included). A width of 0 clears it.
    pub fn set_width(&mut self, col: usize, width: usize) -> &mut Self {
        self.update_format(col, |format| {
            format.width = (width > 0).then_some(width);
        });
        self
    }

    #[must_use]
    pub fn width(&self, col: usize) -> Option<usize> {
        self.format(col).width
    }

    /// Replace every explicit width; `widths[0]` applies to column 1.
    pub fn set_widths(&mut self, widths: impl IntoIterator<Item = usize>) -> &mut Self {
        for format in self.formats.values_mut() {
            format.width = None;
        }
        self.formats.retain(|_, format| !format.is_default());
        for (idx, width) in widths.into_iter().take(MAX_COLUMNS).enumerate() {
            self.set_width(idx + 1, width);
        }
        self
    }

    #[must_use]
    pub fn widths(&self) -> Vec<Option<usize>> {
        self.format_columns(|format| format.width)
    }

    pub fn set_align(&mut self, col: usize, align: Alignment) -> &mut Self {
        self.update_format(col, |format| format.align = align);
        self
    }

    pub fn set_align_left(&mut self, col: usize) -> &mut Self {
        self.set_align(col, Alignment::Left)
    }

    pub fn set_align_right(&mut self, col: usize) -> &mut Self {
        self.set_align(col, Alignment::Right)
    }

    pub fn set_align_center(&mut self, col: usize) -> &mut Self {
        self.set_align(col, Alignment::Center)
    }

    #[must_use]
    pub fn align(&self, col: usize) -> Alignment {
        self.format(col).align
    }

    /// Replace every column alignment; `aligns[0]` applies to column 1.
    pub fn set_aligns(&mut self, aligns: impl IntoIterator<Item = Alignment>) -> &mut Self {
        for format in self.formats.values_mut() {
            format.align = Alignment::Auto;
        }
        self.formats.retain(|_, format| !format.is_default());
        for (idx, align) in aligns.into_iter().take(MAX_COLUMNS).enumerate() {
            self.set_align(idx + 1, align);
        }
        self
    }

    #[must_use]
    pub fn aligns(&self) -> Vec<Alignment> {
        self.format_columns(|format| format.align)
    }

    /// Enable or disable wrapping for a column. Wrapping only applies to
    /// columns that also have an explicit width.
    pub fn set_wrapped(&mut self, col: usize, wrapped: bool) -> &mut Self {
        self.update_format(col, |format| format.wrapped = wrapped);
        self
    }

    #[must_use]
    pub fn is_wrapped(&self, col: usize) -> bool {
        self.format(col).wrapped
    }

    /// Replace every wrapping flag; `wrappings[0]` applies to column 1.
    pub fn set_wrappings(&mut self, wrappings: impl IntoIterator<Item = bool>) -> &mut Self {
        for format in self.formats.values_mut() {
            format.wrapped = false;
        }
        self.formats.retain(|_, format| !format.is_default());
        for (idx, wrapped) in wrappings.into_iter().take(MAX_COLUMNS).enumerate() {
            self.set_wrapped(idx + 1, wrapped);
        }
        self
    }

    #[must_use]
    pub fn wrappings(&self) -> Vec<bool> {
        self.format_columns(|format| format.wrapped)
    }

    // --- margin, justify ---------------------------------------------------

    /// Spaces on each side of every cell's content.
    pub fn set_cell_margin(&mut self, margin: usize) -> &mut Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn cell_margin(&self) -> usize {
        self.margin
    }

    /// Give every column the width of the widest one.
    pub fn set_justify(&mut self, justify: bool) -> &mut Self {
        self.justify = justify;
        self
    }

    #[must_use]
    pub fn is_justify(&self) -> bool {
        self.justify
    }

    // --- styles ------------------------------------------------------------

    /// Select a border style by name. Unknown names select `ramac`.
    pub fn set_style(&mut self, name: &str) -> &mut Self {
        self.style = self.catalog.find_or_default(name).clone();
        self
    }

    #[must_use]
    pub fn style(&self) -> &BorderStyle {
        &self.style
    }

    /// Every style this table can select, in catalog order.
    #[must_use]
    pub fn styles(&self) -> Vec<BorderStyle> {
        self.catalog.list()
    }

    #[must_use]
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Register a style with this table, replacing one of the same name.
    ///
    /// The style is not validated; see [`Table::try_add_style`].
    pub fn add_style(&mut self, style: BorderStyle) -> &mut Self {
        if style.name == self.style.name {
            self.style = style.clone();
        }
        self.catalog.add(style);
        self
    }

    /// Validate and register a style.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidStyle`] if [`BorderStyle::validate`] fails.
    pub fn try_add_style(&mut self, style: BorderStyle) -> Result<&mut Self> {
        style.validate()?;
        Ok(self.add_style(style))
    }

    /// Switch to the borderless `none` style.
    pub fn remove_border(&mut self) -> &mut Self {
        self.set_style(NO_BORDER_STYLE)
    }

    // --- sorting -----------------------------------------------------------

    /// Stable sort of the rows with a whole-row comparator.
    pub fn sort_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&[CellValue], &[CellValue]) -> Ordering,
    {
        self.rows.sort_by(|a, b| compare(a.as_slice(), b.as_slice()));
        self
    }

    /// Sort rows by all their cells, left to right.
    pub fn sort(&mut self) -> &mut Self {
        self.sort_by(|a, b| {
            let len = a.len().max(b.len());
            (0..len)
                .map(|idx| {
                    let left = a.get(idx).unwrap_or(&EMPTY_CELL);
                    let right = b.get(idx).unwrap_or(&EMPTY_CELL);
                    left.compare(right)
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Stable sort of the rows by one 1-based column with a cell comparator.
    pub fn sort_column_by<F>(&mut self, col: usize, mut compare: F) -> &mut Self
    where
        F: FnMut(&CellValue, &CellValue) -> Ordering,
    {
        let Some(idx) = col.checked_sub(1) else {
            log::debug!("ignoring sort on column 0");
            return self;
        };
        self.rows.sort_by(|a, b| {
            compare(
                a.get(idx).unwrap_or(&EMPTY_CELL),
                b.get(idx).unwrap_or(&EMPTY_CELL),
            )
        });
        self
    }

    /// Sort rows ascending by one column.
    pub fn sort_column(&mut self, col: usize) -> &mut Self {
        self.sort_column_by(col, CellValue::compare)
    }

    /// Sort rows descending by one column.
    pub fn sort_column_desc(&mut self, col: usize) -> &mut Self {
        self.sort_column_by(col, |a, b| b.compare(a))
    }

    // --- transpose ---------------------------------------------------------

    /// Swap rows and columns into a new table.
    ///
    /// Each original row becomes a column. When a heading is set it becomes
    /// the first column, so `transposed.cell(r, c + 1)` equals
    /// `self.cell(c, r)`; without one `transposed.cell(r, c)` equals
    /// `self.cell(c, r)`. Title, alignments of title and heading, margin,
    /// justify and style carry over; column formats do not.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::with_catalog(self.catalog.clone());
        transposed.title.clone_from(&self.title);
        transposed.title_align = self.title_align;
        transposed.heading_align = self.heading_align;
        transposed.margin = self.margin;
        transposed.justify = self.justify;
        transposed.style = self.style.clone();

        let columns = column_count(&self.heading, &self.rows);
        let heading = (!self.heading.is_empty()).then_some(&self.heading);
        transposed.rows = (0..columns)
            .map(|idx| {
                heading
                    .into_iter()
                    .chain(&self.rows)
                    .map(|cells| cells.get(idx).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        transposed
    }

    // --- output ------------------------------------------------------------

    /// Render the table into a `\n`-terminated block of lines.
    #[must_use]
    pub fn render(&self) -> String {
        Renderer {
            title: &self.title,
            title_align: self.title_align,
            heading: &self.heading,
            heading_align: self.heading_align,
            rows: &self.rows,
            formats: &self.formats,
            margin: self.margin,
            justify: self.justify,
            style: &self.style,
        }
        .render()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
