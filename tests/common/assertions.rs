//! Logged assertion helpers for table rendering tests.
//!
//! These wrap standard assertions with tracing logs so a failing fixture
//! shows the full rendered table in CI output.

#![allow(dead_code)]

use std::fmt::Debug;

use asciitable::cells::visible_len;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );

    tracing::trace!(context = context, "assertion passed");
}

/// Assert that rendered output matches a fixture, printing both on failure.
#[track_caller]
pub fn assert_rendered(context: &str, actual: &str, expected: &str) {
    if actual != expected {
        tracing::error!(context = context, "rendered table differs from fixture");
        panic!("{context}: rendered table differs\n--- expected ---\n{expected}--- actual ---\n{actual}");
    }
    tracing::trace!(context = context, "rendered table matches");
}

/// Assert that a string contains a substring with logging.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(
        context = context,
        haystack_len = haystack.len(),
        needle = needle,
        "asserting contains"
    );

    if !haystack.contains(needle) {
        tracing::error!(
            context = context,
            haystack = haystack,
            needle = needle,
            "assertion failed: string does not contain substring"
        );
        panic!(
            "{context}: expected string to contain {needle:?}, but it doesn't.\nString: {haystack:?}"
        );
    }

    tracing::trace!(context = context, "assertion passed");
}

/// Assert that every line of a rendered table has the same visible width.
///
/// Holds for every style whose border lines are not trimmed away, which
/// covers all bordered styles.
#[track_caller]
pub fn assert_rectangular(context: &str, output: &str) {
    let widths: Vec<usize> = output.lines().map(visible_len).collect();
    tracing::debug!(context = context, widths = ?widths, "asserting rectangular output");

    if let Some(&first) = widths.first() {
        if widths.iter().any(|&w| w != first) {
            tracing::error!(context = context, output = output, "ragged table");
            panic!("{context}: lines have different widths {widths:?}\n{output}");
        }
    }
}
