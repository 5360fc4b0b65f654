//! Visible-width string measurement and manipulation.
//!
//! Cell values may carry ANSI escape sequences (colours, hyperlinks). Those
//! sequences occupy bytes but no terminal cells, so every width computation
//! in the crate goes through [`visible_len`] instead of `str::len` or a raw
//! character count. Printable text is measured in terminal cells, handling
//! wide characters (CJK, emoji) correctly.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;
use unicode_width::UnicodeWidthChar;

/// CSI sequences, OSC sequences (BEL or ST terminated) and two-byte escapes.
static ANSI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]")
        .expect("valid regex")
});

const ELLIPSIS: &str = "...";

/// A string split into `(non_printable, printable)` pairs, in order.
pub type Partition<'a> = SmallVec<[(&'a str, &'a str); 4]>;

/// Get the cell width of a single character.
///
/// Most characters are 1 cell wide, but CJK characters and some emoji
/// are 2 cells wide. Control characters have 0 width.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Get the total cell width of a string that contains no escape sequences.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Get the visible width of a string, ignoring ANSI escape sequences.
///
/// ```
/// use asciitable::cells::visible_len;
///
/// assert_eq!(visible_len("hello"), 5);
/// assert_eq!(visible_len("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(visible_len("日本"), 4);
/// ```
#[must_use]
pub fn visible_len(text: &str) -> usize {
    ANSI_PATTERN.split(text).map(cell_len).sum()
}

/// Remove every ANSI escape sequence from a string.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_PATTERN.replace_all(text, "")
}

/// Split a string into `(non_printable, printable)` pairs.
///
/// Each pair holds the run of escape sequences that precedes a run of
/// printable text. A trailing run of escapes is reported as a final pair
/// with an empty printable part. The empty string has no pairs.
#[must_use]
pub fn partition(text: &str) -> Partition<'_> {
    let mut parts = Partition::new();
    let mut escapes_start = 0;
    let mut cursor = 0;

    for m in ANSI_PATTERN.find_iter(text) {
        if m.start() > cursor {
            parts.push((&text[escapes_start..cursor], &text[cursor..m.start()]));
            escapes_start = m.start();
        }
        cursor = m.end();
    }

    if escapes_start < cursor || cursor < text.len() {
        parts.push((&text[escapes_start..cursor], &text[cursor..]));
    }

    parts
}

/// Byte offset where the leading run of escape sequences ends.
pub(crate) fn leading_escapes_end(text: &str) -> usize {
    let mut pos = 0;
    for m in ANSI_PATTERN.find_iter(text) {
        if m.start() != pos {
            break;
        }
        pos = m.end();
    }
    pos
}

/// Byte offset where the trailing run of escape sequences starts.
pub(crate) fn trailing_escapes_start(text: &str) -> usize {
    let matches: SmallVec<[(usize, usize); 4]> = ANSI_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut pos = text.len();
    for &(start, end) in matches.iter().rev() {
        if end != pos {
            break;
        }
        pos = start;
    }
    pos
}

/// Build exactly `cells` cells of padding by repeating `fill`.
///
/// An empty (or zero-width) fill produces an empty string. A wide fill
/// character that would overshoot is replaced by spaces.
#[must_use]
pub fn fill(fill: &str, cells: usize) -> String {
    if cells == 0 || cell_len(fill) == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(cells * fill.len().max(1));
    let mut used = 0;
    for c in fill.chars().cycle() {
        let width = get_character_cell_size(c);
        if used + width > cells {
            break;
        }
        used += width;
        out.push(c);
        if used == cells {
            break;
        }
    }
    out.extend(std::iter::repeat_n(' ', cells - used));
    out
}

/// Pad the start of a string with `fill` up to `width` visible cells.
///
/// Padding is inserted right before the first printable character, so any
/// leading escape sequences stay outermost. Strings already at least
/// `width` wide are returned unchanged.
#[must_use]
pub fn pad_start(text: &str, width: usize, fill_str: &str) -> String {
    let len = visible_len(text);
    if len >= width {
        return text.to_string();
    }

    let padding = fill(fill_str, width - len);
    let at = leading_escapes_end(text);

    let mut out = String::with_capacity(text.len() + padding.len());
    out.push_str(&text[..at]);
    out.push_str(&padding);
    out.push_str(&text[at..]);
    out
}

/// Pad the end of a string with `fill` up to `width` visible cells.
///
/// Padding is inserted right after the last printable character, so any
/// trailing escape sequences (typically a reset) stay outermost.
#[must_use]
pub fn pad_end(text: &str, width: usize, fill_str: &str) -> String {
    let len = visible_len(text);
    if len >= width {
        return text.to_string();
    }

    let padding = fill(fill_str, width - len);
    let at = trailing_escapes_start(text);

    let mut out = String::with_capacity(text.len() + padding.len());
    out.push_str(&text[..at]);
    out.push_str(&padding);
    out.push_str(&text[at..]);
    out
}

/// Truncate a string to at most `max_size` visible cells.
///
/// When truncation happens the last three cells become `"..."`; below three
/// cells the result is `max_size` dots. Escape sequences are kept in place.
///
/// ```
/// use asciitable::cells::truncate;
///
/// assert_eq!(truncate("Dummy 1", 5), "Du...");
/// assert_eq!(truncate("Dummy 1", 2), "..");
/// assert_eq!(truncate("Dummy", 10), "Dummy");
/// ```
#[must_use]
pub fn truncate(text: &str, max_size: usize) -> String {
    if visible_len(text) <= max_size {
        return text.to_string();
    }

    let dots = max_size.min(ELLIPSIS.len());
    let keep = max_size - dots;

    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut cut = false;

    for (escapes, printable) in partition(text) {
        out.push_str(escapes);
        if cut {
            continue;
        }
        for c in printable.chars() {
            let width = get_character_cell_size(c);
            if used + width > keep {
                cut = true;
                break;
            }
            used += width;
            out.push(c);
        }
        if cut {
            out.push_str(&ELLIPSIS[..dots]);
        }
    }

    out
}

/// Whether a rendered value looks like a finite number.
///
/// Surrounding whitespace and escape sequences are ignored.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    let plain = strip_ansi(text);
    let trimmed = plain.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}
