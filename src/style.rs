//! Border styles for tables.
//!
//! A [`BorderStyle`] holds four [`SectionStyle`]s: the `top` border, the
//! `middle` separator under the heading, the `bottom` border and the `data`
//! glyphs that frame every content line. Each section is a set of four
//! glyph strings `[left, center, right, col_separator]`; any of them may be
//! empty or several characters long.
//!
//! The crate bundles a catalog of named styles (`styles.json`), parsed once
//! per process. Every table works on its own [`StyleCatalog`] clone, so
//! registering a custom style never leaks into other tables.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::cells::fill;
use crate::error::{Result, TableError};

/// Name of the style used when a requested style does not exist.
pub const DEFAULT_STYLE: &str = "ramac";

/// Name of the borderless style used by [`crate::table::Table::remove_border`].
pub const NO_BORDER_STYLE: &str = "none";

static BUILTIN_CATALOG: LazyLock<StyleCatalog> = LazyLock::new(|| {
    StyleCatalog::from_json(include_str!("styles.json"))
        .expect("src/styles.json: bundled style catalog must parse")
});

static DEFAULT_BORDER: LazyLock<BorderStyle> = LazyLock::new(BorderStyle::ramac);

/// Glyphs for one region of the table.
///
/// Serialized with camelCase keys; missing keys default to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionStyle {
    pub left: String,
    /// Horizontal fill for border lines, or the blank glyph on data lines.
    pub center: String,
    pub right: String,
    /// Drawn between two columns.
    pub col_separator: String,
}

impl SectionStyle {
    /// Create a section from its four glyphs.
    #[must_use]
    pub fn new(
        left: impl Into<String>,
        center: impl Into<String>,
        right: impl Into<String>,
        col_separator: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            center: center.into(),
            right: right.into(),
            col_separator: col_separator.into(),
        }
    }

    /// Whether every glyph is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.left.is_empty()
            && self.center.is_empty()
            && self.right.is_empty()
            && self.col_separator.is_empty()
    }

    /// Build a horizontal border line for the given column widths.
    ///
    /// Returns `None` when the line is blank once surrounding whitespace is
    /// trimmed; such lines are left out of the table.
    ///
    /// ```
    /// use asciitable::style::SectionStyle;
    ///
    /// let top = SectionStyle::new("+", "-", "+", "+");
    /// assert_eq!(top.horizontal_line(&[3, 2]).as_deref(), Some("+---+--+"));
    /// assert_eq!(SectionStyle::default().horizontal_line(&[3, 2]), None);
    /// ```
    #[must_use]
    pub fn horizontal_line(&self, widths: &[usize]) -> Option<String> {
        let mut line = String::new();
        line.push_str(&self.left);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.col_separator);
            }
            line.push_str(&fill(&self.center, width));
        }
        line.push_str(&self.right);

        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == line.len() {
            Some(line)
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Frame already-rendered cells into one content line.
    #[must_use]
    pub fn content_line(&self, cells: &[String]) -> String {
        let mut line = String::new();
        line.push_str(&self.left);
        line.push_str(&cells.join(&self.col_separator));
        line.push_str(&self.right);
        line
    }

    fn glyphs(&self) -> [(&'static str, &str); 4] {
        [
            ("left", self.left.as_str()),
            ("center", self.center.as_str()),
            ("right", self.right.as_str()),
            ("colSeparator", self.col_separator.as_str()),
        ]
    }
}

/// A named border style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBorderStyle", into = "RawBorderStyle")]
pub struct BorderStyle {
    pub name: String,
    pub top: SectionStyle,
    pub middle: SectionStyle,
    pub bottom: SectionStyle,
    pub data: SectionStyle,
}

impl BorderStyle {
    /// Create a style from its four sections.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        top: SectionStyle,
        middle: SectionStyle,
        bottom: SectionStyle,
        data: SectionStyle,
    ) -> Self {
        Self {
            name: name.into(),
            top,
            middle,
            bottom,
            data,
        }
    }

    /// The default `+-|` style.
    ///
    /// ```text
    /// +-------+-------+
    /// | Title | Count |
    /// +-------+-------+
    /// | Dummy |    10 |
    /// +-------+-------+
    /// ```
    #[must_use]
    pub fn ramac() -> Self {
        let line = SectionStyle::new("+", "-", "+", "+");
        Self::new(
            DEFAULT_STYLE,
            line.clone(),
            line.clone(),
            line,
            SectionStyle::new("|", " ", "|", "|"),
        )
    }

    fn sections(&self) -> [(&'static str, &SectionStyle); 4] {
        [
            ("top", &self.top),
            ("middle", &self.middle),
            ("bottom", &self.bottom),
            ("data", &self.data),
        ]
    }

    /// Check that this style can draw sensible borders.
    ///
    /// Border sections need a `center` fill unless they are entirely empty,
    /// and no glyph may contain a line break.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidStyle`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| TableError::InvalidStyle {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("style name is empty".to_string()));
        }

        for (section_name, section) in self.sections() {
            for (glyph_name, glyph) in section.glyphs() {
                if glyph.contains(['\n', '\r']) {
                    return Err(invalid(format!(
                        "{section_name}.{glyph_name} contains a line break"
                    )));
                }
            }
            if section_name != "data" && section.center.is_empty() && !section.is_blank() {
                return Err(invalid(format!(
                    "{section_name}.center is empty but other glyphs are set"
                )));
            }
        }

        Ok(())
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::ramac()
    }
}

#[derive(Serialize, Deserialize)]
struct RawBorders {
    #[serde(default)]
    top: SectionStyle,
    #[serde(default)]
    middle: SectionStyle,
    #[serde(default)]
    bottom: SectionStyle,
    #[serde(default)]
    data: SectionStyle,
}

/// On-disk shape: `{ "name": ..., "borders": { "top": ..., ... } }`.
#[derive(Serialize, Deserialize)]
struct RawBorderStyle {
    name: String,
    borders: RawBorders,
}

impl From<RawBorderStyle> for BorderStyle {
    fn from(raw: RawBorderStyle) -> Self {
        let RawBorders {
            top,
            middle,
            bottom,
            data,
        } = raw.borders;
        Self::new(raw.name, top, middle, bottom, data)
    }
}

impl From<BorderStyle> for RawBorderStyle {
    fn from(style: BorderStyle) -> Self {
        Self {
            name: style.name,
            borders: RawBorders {
                top: style.top,
                middle: style.middle,
                bottom: style.bottom,
                data: style.data,
            },
        }
    }
}

/// An ordered collection of named border styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalog {
    styles: Vec<BorderStyle>,
}

impl StyleCatalog {
    /// A catalog with no styles. Lookups fall back to `ramac`.
    #[must_use]
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// A copy of the bundled catalog.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_CATALOG.clone()
    }

    /// Parse a catalog from a JSON array of styles.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Json`] when the input is not a valid catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let styles: Vec<BorderStyle> = serde_json::from_str(json)?;
        let mut catalog = Self::empty();
        for style in styles {
            catalog.add(style);
        }
        Ok(catalog)
    }

    /// Read a JSON catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] when the file cannot be read and
    /// [`TableError::Json`] when it does not parse.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(&path).map_err(|err| TableError::Io {
            path: path.as_ref().to_path_buf(),
            err,
        })?;
        Self::from_json(&contents)
    }

    /// Serialize the catalog back to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.styles)?)
    }

    /// Look up a style by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&BorderStyle> {
        self.styles.iter().find(|style| style.name == name)
    }

    /// Look up a style by name, falling back to `ramac`.
    #[must_use]
    pub fn find_or_default(&self, name: &str) -> &BorderStyle {
        if let Some(style) = self.find(name) {
            return style;
        }
        log::debug!("unknown border style {name:?}, using {DEFAULT_STYLE:?}");
        self.find(DEFAULT_STYLE).unwrap_or(&*DEFAULT_BORDER)
    }

    /// Add a style, replacing any existing style with the same name.
    pub fn add(&mut self, style: BorderStyle) {
        match self.styles.iter_mut().find(|s| s.name == style.name) {
            Some(existing) => *existing = style,
            None => self.styles.push(style),
        }
    }

    /// Snapshot of every style, in catalog order.
    #[must_use]
    pub fn list(&self) -> Vec<BorderStyle> {
        self.styles.clone()
    }

    /// Style names, in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.styles.iter().map(|style| style.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BorderStyle> {
        self.styles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
