//! JSON snapshots of a table.
//!
//! A snapshot captures everything needed to reproduce a table's rendering:
//!
//! ```json
//! {
//!   "title": "Dummy title",
//!   "heading": ["Title", "Count"],
//!   "rows": [["Dummy 1", 10]],
//!   "formatting": {
//!     "titleAlign": 2,
//!     "headingAlign": 2,
//!     "justify": false,
//!     "cellMargin": 1,
//!     "style": "ramac",
//!     "columns": { "aligns": [3, 1], "widths": [null, 8], "wrappings": [false, true] }
//!   }
//! }
//! ```
//!
//! Alignments use their numeric codes and unset widths are `null`. Missing
//! fields take the same defaults as [`Table::default`].

use serde::{Deserialize, Serialize};

use crate::align::Alignment;
use crate::cell::CellValue;
use crate::error::Result;
use crate::style::{DEFAULT_STYLE, StyleCatalog};
use crate::table::Table;

fn center() -> Alignment {
    Alignment::Center
}

fn default_margin() -> usize {
    1
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

/// Serializable state of a [`Table`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSnapshot {
    pub title: String,
    pub heading: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
    pub formatting: Formatting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatting {
    #[serde(default = "center")]
    pub title_align: Alignment,
    #[serde(default = "center")]
    pub heading_align: Alignment,
    #[serde(default)]
    pub justify: bool,
    #[serde(default = "default_margin")]
    pub cell_margin: usize,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub columns: Columns,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            title_align: center(),
            heading_align: center(),
            justify: false,
            cell_margin: default_margin(),
            style: default_style(),
            columns: Columns::default(),
        }
    }
}

/// Per-column formats; element `i` describes column `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub aligns: Vec<Alignment>,
    pub widths: Vec<Option<usize>>,
    pub wrappings: Vec<bool>,
}

impl From<&Table> for TableSnapshot {
    fn from(table: &Table) -> Self {
        Self {
            title: table.title().to_string(),
            heading: table.heading().to_vec(),
            rows: table.rows().to_vec(),
            formatting: Formatting {
                title_align: table.title_align(),
                heading_align: table.heading_align(),
                justify: table.is_justify(),
                cell_margin: table.cell_margin(),
                style: table.style().name.clone(),
                columns: Columns {
                    aligns: table.aligns(),
                    widths: table.widths(),
                    wrappings: table.wrappings(),
                },
            },
        }
    }
}

impl Table {
    /// Capture the table's state.
    #[must_use]
    pub fn to_snapshot(&self) -> TableSnapshot {
        TableSnapshot::from(self)
    }

    /// Rebuild a table from a snapshot, using the bundled style catalog.
    #[must_use]
    pub fn from_snapshot(snapshot: TableSnapshot) -> Self {
        Self::from_snapshot_with_catalog(snapshot, StyleCatalog::builtin())
    }

    /// Rebuild a table from a snapshot, resolving its style in `catalog`.
    #[must_use]
    pub fn from_snapshot_with_catalog(snapshot: TableSnapshot, catalog: StyleCatalog) -> Self {
        let TableSnapshot {
            title,
            heading,
            rows,
            formatting,
        } = snapshot;
        let Columns {
            aligns,
            widths,
            wrappings,
        } = formatting.columns;

        let mut table = Self::with_catalog(catalog);
        table
            .set_title(title)
            .set_title_align(formatting.title_align)
            .set_heading(heading)
            .set_heading_align(formatting.heading_align)
            .add_rows(rows)
            .set_justify(formatting.justify)
            .set_cell_margin(formatting.cell_margin)
            .set_style(&formatting.style)
            .set_aligns(aligns)
            .set_widths(widths.into_iter().map(Option::unwrap_or_default))
            .set_wrappings(wrappings);
        table
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    /// Parse a table from JSON produced by [`Table::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::TableError::Json`] when the input is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: TableSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }
}
