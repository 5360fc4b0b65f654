//! Word wrapping that measures visible width and keeps ANSI styling intact.
//!
//! Wrapping works on glyphs: each printable character together with the
//! escape sequences that directly precede it. Breaking between glyphs can
//! never split an escape sequence, and the escapes that surround the whole
//! value (a colour and its reset, typically) are re-applied to every
//! produced line so each line is styled on its own.

use crate::cells::{get_character_cell_size, leading_escapes_end, partition, trailing_escapes_start};

#[derive(Debug, Clone, Copy)]
struct Glyph<'a> {
    escapes: &'a str,
    ch: char,
    width: usize,
}

impl<'a> Glyph<'a> {
    fn new(escapes: &'a str, ch: char) -> Self {
        Self {
            escapes,
            ch,
            width: get_character_cell_size(ch),
        }
    }

    fn is_space(&self) -> bool {
        self.ch.is_whitespace()
    }
}

fn width_of(glyphs: &[Glyph<'_>]) -> usize {
    glyphs.iter().map(|g| g.width).sum()
}

/// Number of leading glyphs that fit in `max_width` cells.
fn fit_count(glyphs: &[Glyph<'_>], max_width: usize) -> usize {
    let mut used = 0;
    glyphs
        .iter()
        .take_while(|g| {
            used += g.width;
            used <= max_width
        })
        .count()
}

/// Render a line of glyphs, dropping trailing whitespace but not its escapes.
fn render_line(carry: &mut String, glyphs: &[Glyph<'_>]) -> String {
    let end = glyphs.len() - glyphs.iter().rev().take_while(|g| g.is_space()).count();

    let mut line = std::mem::take(carry);
    for glyph in &glyphs[..end] {
        line.push_str(glyph.escapes);
        line.push(glyph.ch);
    }
    for glyph in &glyphs[end..] {
        line.push_str(glyph.escapes);
    }
    line
}

/// Wrap `text` into lines of at most `max_width` visible cells.
///
/// Lines break at the last whitespace that fits; a word longer than the
/// window is broken hard. Whitespace at the edges of every line is removed.
/// A `max_width` of zero is treated as one.
///
/// ```
/// use asciitable::wrap::word_wrap;
///
/// assert_eq!(word_wrap("this is a test", 5), "this\nis a\ntest");
/// assert_eq!(word_wrap("rate (%)", 4), "rate\n(%)");
/// ```
#[must_use]
pub fn word_wrap(text: &str, max_width: usize) -> String {
    wrap_lines(text, max_width).join("\n")
}

/// Like [`word_wrap`], returning the lines instead of joining them.
#[must_use]
pub fn wrap_lines(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);

    let lead_end = leading_escapes_end(text);
    let trail_start = trailing_escapes_start(text).max(lead_end);
    let (lead, body, trail) = (
        &text[..lead_end],
        &text[lead_end..trail_start],
        &text[trail_start..],
    );

    let mut glyphs = Vec::with_capacity(body.len());
    let mut tail = "";
    for (escapes, printable) in partition(body) {
        let mut chars = printable.chars();
        match chars.next() {
            Some(first) => {
                glyphs.push(Glyph::new(escapes, first));
                glyphs.extend(chars.map(|c| Glyph::new("", c)));
            }
            None => tail = escapes,
        }
    }

    let mut lines = Vec::new();
    let mut carry = String::new();
    let mut rest = glyphs.as_slice();

    loop {
        let skip = rest.iter().take_while(|g| g.is_space()).count();
        for glyph in &rest[..skip] {
            carry.push_str(glyph.escapes);
        }
        rest = &rest[skip..];

        if rest.is_empty() && !lines.is_empty() {
            break;
        }
        if width_of(rest) <= max_width {
            lines.push(render_line(&mut carry, rest));
            break;
        }

        let fit = fit_count(rest, max_width).max(1);
        let split = rest[..fit]
            .iter()
            .rposition(Glyph::is_space)
            .unwrap_or(fit);
        lines.push(render_line(&mut carry, &rest[..split]));
        rest = &rest[split..];
    }

    if let Some(last) = lines.last_mut() {
        last.push_str(&carry);
        last.push_str(tail);
    }

    if lead.is_empty() && trail.is_empty() {
        return lines;
    }
    lines
        .into_iter()
        .map(|line| format!("{lead}{line}{trail}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::visible_len;

    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";

    #[test]
    fn test_wrap_at_spaces() {
        assert_eq!(word_wrap("this is a test", 5), "this\nis a\ntest");
        assert_eq!(word_wrap("rate (%)", 4), "rate\n(%)");
    }

    #[test]
    fn test_hard_break_long_words() {
        assert_eq!(word_wrap("this is a test", 3), "thi\ns\nis\na\ntes\nt");
        assert_eq!(word_wrap("abcdefgh", 3), "abc\ndef\ngh");
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(word_wrap("Dummy", 7), "Dummy");
        assert_eq!(word_wrap("Dummy 1", 7), "Dummy 1");
        assert_eq!(word_wrap("", 4), "");
    }

    #[test]
    fn test_whitespace_collapses_at_breaks() {
        assert_eq!(word_wrap("  ab    cd  ", 3), "ab\ncd");
        assert_eq!(word_wrap("   ", 2), "");
    }

    #[test]
    fn test_zero_width_is_clamped() {
        assert_eq!(word_wrap("abc", 0), "a\nb\nc");
    }

    #[test]
    fn test_wide_char_wider_than_window() {
        let lines = wrap_lines("日本", 1);
        assert_eq!(lines, vec!["日", "本"]);
    }

    #[test]
    fn test_wide_chars_respect_width() {
        for line in wrap_lines("日本語 テスト です", 4) {
            assert!(visible_len(&line) <= 4, "{line:?}");
        }
    }

    #[test]
    fn test_anchors_reapplied_per_line() {
        let text = format!("{RED}Dummy 1{RESET}");
        let lines = wrap_lines(&text, 5);
        assert_eq!(
            lines,
            vec![format!("{RED}Dummy{RESET}"), format!("{RED}1{RESET}")]
        );
    }

    #[test]
    fn test_inner_escapes_are_kept() {
        let text = format!("ab {RED}cd{RESET} ef");
        let joined: String = wrap_lines(&text, 2).concat();
        assert!(joined.contains(RED));
        assert!(joined.contains(RESET));
        assert_eq!(crate::cells::strip_ansi(&joined), "abcdef");
    }
}
