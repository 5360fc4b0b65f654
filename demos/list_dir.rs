//! Directory listing rendered as a table.
//!
//! Run with: cargo run --example list_dir -- [path]

use std::fs;
use std::path::Path;

use asciitable::prelude::*;
use time::format_description::{self, BorrowedFormatItem};
use time::{OffsetDateTime, UtcOffset};

fn kind_of(file_type: fs::FileType) -> &'static str {
    if file_type.is_dir() {
        "Directory"
    } else if file_type.is_file() {
        "File"
    } else if file_type.is_symlink() {
        "Sym Link"
    } else {
        "??"
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn list(path: &Path, stamp: &[BorrowedFormatItem<'_>]) -> std::io::Result<Table> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let mut table = Table::new(format!("Directory: {}", path.display()));
    table
        .set_heading(["Type", "Name", "Size (bytes)", "Last change"])
        .set_align_right(3);

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                eprintln!("{}: {err}", entry.path().display());
                continue;
            }
        };

        let kind = kind_of(metadata.file_type());
        let size = if metadata.is_dir() {
            "-".to_string()
        } else {
            group_thousands(metadata.len())
        };
        let changed = metadata
            .modified()
            .ok()
            .map(|modified| OffsetDateTime::from(modified).to_offset(offset))
            .and_then(|modified| modified.format(stamp).ok())
            .unwrap_or_default();
        let name = format!("\x1b[34m{}\x1b[0m", entry.file_name().to_string_lossy());

        table.add_row(row![kind, name, size, changed]);
    }

    table.sort().set_style("ascii-clean");
    Ok(table)
}

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let stamp = match format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]") {
        Ok(stamp) => stamp,
        Err(err) => {
            eprintln!("invalid timestamp format: {err}");
            return;
        }
    };

    match list(Path::new(&path), &stamp) {
        Ok(table) => print!("{table}"),
        Err(err) => eprintln!("{path}: {err}"),
    }
}
