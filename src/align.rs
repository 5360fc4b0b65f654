//! Horizontal alignment of a value inside a fixed number of cells.
//!
//! # Example
//!
//! ```
//! use asciitable::align::{Alignment, align};
//!
//! assert_eq!(align(Alignment::Center, "ab", 5, "*"), "*ab**");
//! assert_eq!(align(Alignment::Auto, "42", 5, " "), "   42");
//! assert_eq!(align(Alignment::Auto, "ab", 5, " "), "ab   ");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cells::{is_numeric, pad_end, pad_start, visible_len};

/// Horizontal alignment of cell content.
///
/// Serialized as its numeric code: `Left` 0, `Right` 1, `Center` 2, `Auto` 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Alignment {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
    /// Split padding, the odd cell going right.
    Center,
    /// Right for numeric-looking values, left otherwise.
    #[default]
    Auto,
}

impl Alignment {
    /// Numeric code of this alignment.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Center => 2,
            Self::Auto => 3,
        }
    }

    /// Alignment for a numeric code; unknown codes map to `Auto`.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Center,
            _ => Self::Auto,
        }
    }

    /// Parse an alignment name, case-insensitively.
    ///
    /// Accepts `left`, `right`, `center`/`centre`, `auto` and the numeric
    /// codes. Anything else is `Auto`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            "center" | "centre" => Self::Center,
            _ => Self::Auto,
        }
    }

    /// Resolve `Auto` against a concrete value.
    #[must_use]
    pub fn resolve(self, value: &str) -> Self {
        match self {
            Self::Auto if is_numeric(value) => Self::Right,
            Self::Auto => Self::Left,
            other => other,
        }
    }
}

impl From<u8> for Alignment {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl From<Alignment> for u8 {
    fn from(alignment: Alignment) -> Self {
        alignment.code()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// Align `value` within `len` visible cells, padding with `pad`.
///
/// Values already `len` cells or wider are returned unmodified.
#[must_use]
pub fn align(direction: Alignment, value: &str, len: usize, pad: &str) -> String {
    match direction.resolve(value) {
        Alignment::Left => pad_end(value, len, pad),
        Alignment::Right => pad_start(value, len, pad),
        Alignment::Center | Alignment::Auto => {
            let n = visible_len(value);
            let left = len.saturating_sub(n) / 2;
            pad_end(&pad_start(value, n + left, pad), len, pad)
        }
    }
}

/// [`align`] with a single space as padding.
#[must_use]
pub fn align_default(direction: Alignment, value: &str, len: usize) -> String {
    align(direction, value, len, " ")
}

/// [`align`] towards the left: `value` first, padding after.
#[must_use]
pub fn align_left(value: &str, len: usize, pad: &str) -> String {
    align(Alignment::Left, value, len, pad)
}

/// [`align`] towards the right: padding first, `value` after.
#[must_use]
pub fn align_right(value: &str, len: usize, pad: &str) -> String {
    align(Alignment::Right, value, len, pad)
}

/// [`align`] centred; an odd leftover cell of padding goes on the right.
#[must_use]
pub fn align_center(value: &str, len: usize, pad: &str) -> String {
    align(Alignment::Center, value, len, pad)
}

/// [`align`] with [`Alignment::Auto`]: numbers go right, anything else left.
///
/// ```
/// use asciitable::align::align_auto;
///
/// assert_eq!(align_auto("42", 5, " "), "   42");
/// assert_eq!(align_auto("ab", 5, " "), "ab   ");
/// ```
#[must_use]
pub fn align_auto(value: &str, len: usize, pad: &str) -> String {
    align(Alignment::Auto, value, len, pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_left_right() {
        assert_eq!(align_left("ab", 5, " "), "ab   ");
        assert_eq!(align_right("ab", 5, " "), "   ab");
        assert_eq!(align_left("ab", 4, "-"), "ab--");
    }

    #[test]
    fn test_align_center_odd_remainder_goes_right() {
        assert_eq!(align_center("ab", 5, "*"), "*ab**");
        assert_eq!(align_center("ab", 6, "*"), "**ab**");
        assert_eq!(align_center("abc", 4, " "), "abc ");
    }

    #[test]
    fn test_align_auto_dispatch() {
        assert_eq!(align_auto("10", 4, " "), "  10");
        assert_eq!(align_auto("2.3", 5, " "), "  2.3");
        assert_eq!(align_auto("Dummy", 7, " "), "Dummy  ");
        assert_eq!(align_auto("", 3, " "), "   ");
    }

    #[test]
    fn test_align_never_truncates() {
        assert_eq!(align_default(Alignment::Left, "toolong", 3), "toolong");
        assert_eq!(align_default(Alignment::Center, "toolong", 3), "toolong");
        assert_eq!(align_default(Alignment::Right, "toolong", 0), "toolong");
    }

    #[test]
    fn test_align_with_escapes() {
        let value = "\x1b[34mab\x1b[0m";
        let out = align_center(value, 6, " ");
        assert_eq!(out, "\x1b[34m  ab  \x1b[0m");
        assert_eq!(visible_len(&out), 6);
    }

    #[test]
    fn test_codes_round_trip() {
        for alignment in [
            Alignment::Left,
            Alignment::Right,
            Alignment::Center,
            Alignment::Auto,
        ] {
            assert_eq!(Alignment::from_code(alignment.code()), alignment);
        }
        assert_eq!(Alignment::from_code(9), Alignment::Auto);
    }

    #[test]
    fn test_parse_is_permissive() {
        assert_eq!(Alignment::parse("LEFT"), Alignment::Left);
        assert_eq!(Alignment::parse(" centre "), Alignment::Center);
        assert_eq!(Alignment::parse("1"), Alignment::Right);
        assert_eq!(Alignment::parse("bogus"), Alignment::Auto);
        assert_eq!(Alignment::default(), Alignment::Auto);
    }

    #[test]
    fn test_serde_numeric_codes() {
        let json = serde_json::to_string(&Alignment::Center).unwrap();
        assert_eq!(json, "2");
        let parsed: Alignment = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Alignment::Left);
        let parsed: Alignment = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, Alignment::Auto);
    }
}
