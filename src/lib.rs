//! # asciitable
//!
//! Plain-text tables with ASCII and Unicode borders.
//!
//! Give a [`Table`] a title, a heading and rows of mixed values; it works
//! out the column widths, aligns, truncates or word-wraps every cell and
//! frames the result with one of the bundled border styles. Width
//! calculations ignore ANSI escape sequences, so coloured values line up.
//!
//! ## Quick Start
//!
//! ```rust
//! use asciitable::prelude::*;
//!
//! let mut table = Table::new("Sample table");
//! table
//!     .set_heading(["Name", "Age", "Eye color"])
//!     .add_row(row!["John", 23, "green"])
//!     .add_row(row!["Mary", 16, "brown"])
//!     .set_align_center(3)
//!     .set_style("unicode-round");
//!
//! println!("{table}");
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: owns the data and formatting; renders to a `String`
//! - **CellValue**: text, integer, float, boolean or empty
//! - **BorderStyle**: glyphs for the top, middle, bottom and data lines
//! - **StyleCatalog**: named styles a table can switch between
//! - **TableSnapshot**: the JSON form of a table

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod align;
pub mod cell;
pub mod cells;
pub mod error;
pub mod layout;
mod render;
pub mod rows;
pub mod snapshot;
pub mod style;
pub mod table;
pub mod wrap;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::align::{Alignment, align, align_default};
    pub use crate::cell::CellValue;
    pub use crate::error::TableError;
    pub use crate::layout::ColumnFormat;
    pub use crate::row;
    pub use crate::snapshot::TableSnapshot;
    pub use crate::style::{BorderStyle, SectionStyle, StyleCatalog};
    pub use crate::table::Table;
}

// Re-export key types at crate root
pub use align::Alignment;
pub use cell::CellValue;
pub use error::{Result, TableError};
pub use snapshot::TableSnapshot;
pub use style::{BorderStyle, SectionStyle, StyleCatalog};
pub use table::Table;
