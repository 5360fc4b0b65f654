//! A tour of the table API: margins, styles, widths, wrapping and custom styles.
//!
//! Run with: cargo run --example samples

use asciitable::prelude::*;

fn show(label: &str, table: &Table) {
    println!("{label}:\n{table}");
}

fn main() {
    let mut table = Table::new("Sample table");
    table
        .set_heading(["Name", "Age", "Eye color"])
        .set_align_center(3)
        .add_rows(vec![
            row!["John", 23, "green"],
            row!["Mary", 16, "brown"],
            row!["Rita", 47, "blue"],
            row!["Peter", 8, "brown"],
        ]);
    show("initial table", &table);

    table.set_cell_margin(0);
    show("cell margin = 0", &table);
    table.set_cell_margin(2);
    show("cell margin = 2", &table);
    table.set_cell_margin(1);

    for name in ["none", "compact", "ascii-table", "ramac", "unicode-single", "unicode-double"] {
        table.set_style(name);
        show(name, &table);
    }

    table.set_style("ramac").set_width(1, 10);
    show("name width = 10", &table);
    table.set_width(1, 5);
    show("name width = 5", &table);

    table.set_widths([10, 8, 12]);
    show("multiple widths = [10, 8, 12]", &table);

    table.set_width(3, 6).set_wrapped(3, true);
    show("eye color wrapped at 6", &table);
    table.set_wrapped(3, false).set_width(3, 0);

    table.add_style(BorderStyle::new(
        "rounded",
        SectionStyle::new(".", "-", ".", "."),
        SectionStyle::new(":", "-", ":", "+"),
        SectionStyle::new("'", "-", "'", "'"),
        SectionStyle::new("|", " ", "|", "|"),
    ));
    table.set_style("rounded");
    show("rounded style", &table);

    show("transposed", &table.transpose());

    table.sort_column_desc(2);
    show("sorted by age, descending", &table);

    table.set_title("").set_heading(row![]).set_style("ramac");
    show("no title/heading", &table);

    match table.to_json_pretty() {
        Ok(json) => println!("as JSON:\n{json}"),
        Err(err) => eprintln!("serialization failed: {err}"),
    }
}
