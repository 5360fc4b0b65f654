//! Property-based tests for asciitable.
//!
//! Uses proptest to check the layout invariants over generated values and
//! tables.

use proptest::prelude::*;

use asciitable::align::{Alignment, align};
use asciitable::cells::{strip_ansi, truncate, visible_len};
use asciitable::prelude::*;
use asciitable::wrap::wrap_lines;

// ============================================================================
// Custom Strategies
// ============================================================================

fn alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Right),
        Just(Alignment::Center),
        Just(Alignment::Auto),
    ]
}

/// A cell value as it would come from user data.
fn cell_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        "[a-zA-Z0-9 ()%.]{0,14}".prop_map(CellValue::Text),
        any::<i32>().prop_map(|n| CellValue::Integer(i64::from(n))),
        (-100_000i32..100_000).prop_map(|n| CellValue::Float(f64::from(n) / 100.0)),
        any::<bool>().prop_map(CellValue::Bool),
        Just(CellValue::Empty),
    ]
}

/// Text made of short words, each at most `max_word` characters.
fn words(max_word: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex(&format!("[a-z]{{1,{max_word}}}")).unwrap(), 1..8).prop_map(|w| w.join(" "))
}

/// A table with 1-5 columns and ragged rows. Column widths, when set,
/// always leave at least one cell of content area.
fn random_table() -> impl Strategy<Value = Table> {
    (1usize..=5, 0usize..=3).prop_flat_map(|(columns, margin)| {
        (
            prop::collection::vec(cell_value(), columns),
            prop::collection::vec(prop::collection::vec(cell_value(), 0..=columns), 0..6),
            prop::collection::vec(prop::option::of(margin * 2 + 1..margin * 2 + 12), columns),
            prop::collection::vec(any::<bool>(), columns),
            prop::collection::vec(alignment(), columns),
            Just(margin),
        )
            .prop_map(|(heading, rows, widths, wrappings, aligns, margin)| {
                let mut table = Table::default();
                table
                    .set_heading(heading)
                    .add_rows(rows)
                    .set_cell_margin(margin)
                    .set_widths(widths.into_iter().map(Option::unwrap_or_default))
                    .set_wrappings(wrappings)
                    .set_aligns(aligns);
                table
            })
    })
}

// ============================================================================
// Alignment and Truncation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Aligned text is exactly `len` wide unless the value is wider.
    #[test]
    fn prop_align_width(
        direction in alignment(),
        value in "[a-zA-Z0-9 .]{0,20}",
        len in 0usize..40,
    ) {
        let aligned = align(direction, &value, len, " ");
        prop_assert_eq!(visible_len(&aligned), len.max(visible_len(&value)));
        prop_assert!(aligned.contains(value.as_str()));
    }

    /// Escape sequences do not count toward alignment width.
    #[test]
    fn prop_align_ignores_escapes(
        direction in alignment(),
        value in "[a-z]{1,10}",
        len in 0usize..20,
    ) {
        let plain = align(direction, &value, len, " ");
        let coloured = align(direction, &format!("\x1b[1m{value}\x1b[0m"), len, " ");
        prop_assert_eq!(strip_ansi(&coloured).into_owned(), plain);
    }

    /// Truncated text never exceeds the limit and short text is untouched.
    #[test]
    fn prop_truncate_bounds(text in "[a-zA-Z \u{4e00}-\u{4e20}]{0,30}", max in 0usize..40) {
        let out = truncate(&text, max);
        prop_assert!(visible_len(&out) <= max);
        if visible_len(&text) <= max {
            prop_assert_eq!(out, text);
        }
    }

    /// For single-width text the limit is met exactly.
    #[test]
    fn prop_truncate_ascii_exact(text in "[a-zA-Z ]{0,30}", max in 0usize..40) {
        let out = truncate(&text, max);
        prop_assert_eq!(visible_len(&out), visible_len(&text).min(max));
    }
}

// ============================================================================
// Word Wrap
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// No wrapped line is wider than the limit.
    #[test]
    fn prop_wrap_line_bounds(text in words(12), width in 1usize..20) {
        for line in wrap_lines(&text, width) {
            prop_assert!(visible_len(&line) <= width, "{line:?} wider than {width}");
        }
    }

    /// Wrapping never drops or reorders printable characters.
    #[test]
    fn prop_wrap_is_lossless(text in words(12), width in 1usize..20) {
        let wrapped: String = wrap_lines(&text, width).concat();
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(strip(&wrapped), strip(&text));
    }

    /// Words that fit are never split.
    #[test]
    fn prop_wrap_keeps_short_words(text in words(6), width in 6usize..20) {
        let lines = wrap_lines(&text, width);
        let rejoined = lines.join(" ");
        let original: Vec<&str> = text.split_whitespace().collect();
        let wrapped: Vec<&str> = rejoined.split_whitespace().collect();
        prop_assert_eq!(wrapped, original);
    }
}

// ============================================================================
// Rendering
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every line of a bordered table has the same visible width.
    #[test]
    fn prop_render_is_rectangular(table in random_table()) {
        let output = table.render();
        let widths: Vec<usize> = output.lines().map(visible_len).collect();
        prop_assert!(!widths.is_empty());
        prop_assert!(widths.iter().all(|&w| w == widths[0]), "uneven lines:\n{output}");
    }

    /// Rendering does not depend on anything but the table state.
    #[test]
    fn prop_render_is_repeatable(table in random_table()) {
        let first = table.render();
        prop_assert_eq!(&first, &table.render());
        prop_assert_eq!(first, table.to_string());
    }

    /// Justified columns all share one width.
    #[test]
    fn prop_justify_equalizes_columns(mut table in random_table()) {
        table.set_justify(true);
        let output = table.render();
        let top = output.lines().next().unwrap();
        let segments: Vec<usize> = top
            .trim_matches('+')
            .split('+')
            .map(str::len)
            .collect();
        prop_assert!(segments.iter().all(|&w| w == segments[0]), "{top}");
    }

    /// Transposing maps row `r`, column `c` to row `c`, column `r + 1`.
    #[test]
    fn prop_transpose_mapping(table in random_table()) {
        let transposed = table.transpose();
        prop_assert!(transposed.heading().is_empty());
        prop_assert_eq!(transposed.rows().len(), table.heading().len());

        for (c, line) in transposed.rows().iter().enumerate() {
            prop_assert_eq!(&line[0], &table.heading()[c]);
            for (r, original) in table.rows().iter().enumerate() {
                let expected = original.get(c).cloned().unwrap_or_default();
                prop_assert_eq!(&line[r + 1], &expected);
            }
        }
    }

    /// Without a heading there is no leading heading column, so row `r`,
    /// column `c` maps to row `c`, column `r`. The first row sets the
    /// column count.
    #[test]
    fn prop_transpose_mapping_without_heading(table in random_table()) {
        let mut table = table;
        table.set_heading(row![]);
        let transposed = table.transpose();
        let columns = table.rows().first().map_or(0, Vec::len);
        prop_assert_eq!(transposed.rows().len(), columns);

        for (c, line) in transposed.rows().iter().enumerate() {
            prop_assert_eq!(line.len(), table.rows().len());
            for (r, original) in table.rows().iter().enumerate() {
                let expected = original.get(c).cloned().unwrap_or_default();
                prop_assert_eq!(&line[r], &expected);
            }
        }
    }

    /// A JSON round trip keeps the table intact.
    #[test]
    fn prop_json_round_trip(table in random_table()) {
        let json = table.to_json().unwrap();
        let restored = Table::from_json(&json).unwrap();
        prop_assert_eq!(restored.to_json().unwrap(), json);
        prop_assert_eq!(restored.render(), table.render());
    }
}
