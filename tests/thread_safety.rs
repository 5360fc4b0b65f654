//! Thread safety tests for asciitable.
//!
//! This module verifies:
//! 1. All public types are Send + Sync (compile-time verification)
//! 2. The lazily built style catalog and escape pattern work under concurrent access
//! 3. A shared table renders identically from many threads

use asciitable::prelude::*;
use std::thread;

// ============================================================================
// COMPILE-TIME SEND + SYNC VERIFICATION
// ============================================================================

/// Helper function to verify a type is Send + Sync at compile time.
fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_table_types_are_send_sync() {
    assert_send_sync::<Table>();
    assert_send_sync::<CellValue>();
    assert_send_sync::<Alignment>();
    assert_send_sync::<ColumnFormat>();
    assert_send_sync::<TableSnapshot>();
}

#[test]
fn test_style_types_are_send_sync() {
    assert_send_sync::<BorderStyle>();
    assert_send_sync::<SectionStyle>();
    assert_send_sync::<StyleCatalog>();
}

#[test]
fn test_error_is_send_sync() {
    assert_send_sync::<TableError>();
}

// ============================================================================
// CONCURRENT GLOBAL STATE TESTS
// ============================================================================

#[test]
fn test_concurrent_builtin_catalog_access() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..100 {
                    let catalog = StyleCatalog::builtin();
                    assert_eq!(catalog.len(), 15);
                    assert!(catalog.find("unicode-double").is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("Thread panicked during concurrent catalog access");
    }
}

#[test]
fn test_concurrent_visible_len_calculation() {
    use asciitable::cells::visible_len;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                for _ in 0..500 {
                    assert_eq!(visible_len("\x1b[31mred\x1b[0m"), 3);
                    assert_eq!(visible_len(&format!("Thread {i}")), 7 + i.to_string().len());
                    // Wide characters (CJK)
                    assert_eq!(visible_len("\u{4e2d}\u{6587}"), 4);
                    assert_eq!(visible_len(""), 0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("Thread panicked during concurrent width calculation");
    }
}

// ============================================================================
// CONCURRENT RENDERING TESTS
// ============================================================================

#[test]
fn test_concurrent_table_building() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                for j in 0..50 {
                    let mut table = Table::new(format!("Thread {i} Table {j}"));
                    table
                        .set_heading(["Name", "Value"])
                        .add_row(row![format!("Row {j}"), j])
                        .add_row(row!["Test", 123])
                        .set_width(1, 8)
                        .set_wrapped(1, true)
                        .set_style("unicode-single");

                    let output = table.render();
                    assert!(output.contains(&format!("Thread {i} Table {j}")));
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("Thread panicked during concurrent table rendering");
    }
}

#[test]
fn test_shared_table_renders_identically() {
    let mut table = Table::new("Shared");
    table.set_heading(["Name", "Age"]);
    for i in 0..20 {
        table.add_row(row![format!("Person {i}"), i]);
    }
    let expected = table.render();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..20).map(|_| table.render()).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            let outputs = handle
                .join()
                .expect("Thread panicked during shared table rendering");
            assert!(outputs.iter().all(|output| *output == expected));
        }
    });
}
