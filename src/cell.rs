//! Cell values.
//!
//! A table cell holds a string, a number, a boolean or nothing. Rendering
//! only ever sees the [`Display`](std::fmt::Display) form; the variant
//! matters for sorting, for [`Table::add_non_zero_row`] and for the JSON
//! snapshot, where values are stored as plain JSON scalars.
//!
//! [`Table::add_non_zero_row`]: crate::table::Table::add_non_zero_row

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// An absent value; renders as the empty string and serializes as `null`.
    #[default]
    Empty,
}

impl CellValue {
    /// Whether this is [`CellValue::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Numeric value of the cell, if it has one.
    ///
    /// Text cells count as numeric when they parse as a finite number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) if f.is_finite() => Some(*f),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Whether the cell holds a number different from zero.
    ///
    /// Numeric text counts, so `"7"` is non-zero and `"0"` is not.
    #[must_use]
    pub fn is_non_zero_number(&self) -> bool {
        self.as_f64().is_some_and(|f| f != 0.0)
    }

    /// Three-way comparison used by the column sorts.
    ///
    /// Two numeric cells compare by value; anything else compares by the
    /// rendered string.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write_float(f, *x),
            Self::Text(s) => f.write_str(s),
            Self::Empty => Ok(()),
        }
    }
}

/// Positional notation, switching to `1e+21` / `1e-7` exponent form outside
/// `[1e-6, 1e21)`. Non-finite values print nothing, as they do once a JSON
/// round trip has turned them into `null`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return Ok(());
    }
    if x == 0.0 {
        return f.write_str("0");
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return write!(f, "{x}");
    }
    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for CellValue {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(i: $t) -> Self {
                    Self::Integer(i64::from(i))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(i: $t) -> Self {
                    i64::try_from(i).map_or_else(|_| Self::Text(i.to_string()), Self::Integer)
                }
            }
        )*
    };
}

impl_from_wide_integer!(u64, usize, isize, i128, u128);

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Build a `Vec<CellValue>` from heterogeneous values.
///
/// ```
/// use asciitable::{row, CellValue};
///
/// let r = row!["Dummy 1", 10, 2.3, true];
/// assert_eq!(r[1], CellValue::Integer(10));
/// assert_eq!(r[2].to_string(), "2.3");
/// ```
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<$crate::cell::CellValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::cell::CellValue::from($value)),+]
    };
}
