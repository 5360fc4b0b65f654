//! Assembly of the final text block.
//!
//! Lines are produced in a fixed order: title block, heading block, data
//! rows, bottom border. Border lines that come out blank are dropped;
//! content lines are always written, even when they only contain spaces.

use crate::align::{Alignment, align};
use crate::cell::CellValue;
use crate::cells::{truncate, visible_len};
use crate::layout::{ColumnFormats, column_widths, content_area, format_of};
use crate::rows::physical_rows;
use crate::style::{BorderStyle, SectionStyle};

/// Borrowed view of everything needed to draw a table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Renderer<'a> {
    pub title: &'a str,
    pub title_align: Alignment,
    pub heading: &'a [CellValue],
    pub heading_align: Alignment,
    pub rows: &'a [Vec<CellValue>],
    pub formats: &'a ColumnFormats,
    pub margin: usize,
    pub justify: bool,
    pub style: &'a BorderStyle,
}

impl Renderer<'_> {
    pub fn render(&self) -> String {
        let widths = column_widths(self.heading, self.rows, self.formats, self.margin, self.justify);
        let style = self.style;

        let mut out = String::new();

        if self.title.is_empty() {
            push_border(&mut out, &style.top, &widths);
        } else {
            let table_width = table_width(&widths, &style.data.col_separator);

            let over_title =
                SectionStyle::new(&*style.top.left, &*style.top.center, &*style.top.right, "");
            push_border(&mut out, &over_title, &[table_width]);

            let title = align(self.title_align, self.title, table_width, " ");
            out.push_str(&style.data.left);
            out.push_str(&title);
            out.push_str(&style.data.right);
            out.push('\n');

            if !style.top.center.is_empty() || !style.top.col_separator.is_empty() {
                let divider = SectionStyle::new(
                    &*style.middle.left,
                    &*style.top.center,
                    &*style.middle.right,
                    &*style.top.col_separator,
                );
                push_border(&mut out, &divider, &widths);
            }
        }

        if !self.heading.is_empty() {
            self.push_row(&mut out, self.heading, &widths, |_| self.heading_align);
            push_border(&mut out, &style.middle, &widths);
        }

        for row in self.rows {
            self.push_row(&mut out, row, &widths, |col| format_of(self.formats, col).align);
        }

        push_border(&mut out, &style.bottom, &widths);
        out
    }

    fn push_row(
        &self,
        out: &mut String,
        cells: &[CellValue],
        widths: &[usize],
        alignment: impl Fn(usize) -> Alignment,
    ) {
        let margin = " ".repeat(self.margin);
        let data = &self.style.data;

        for line in physical_rows(cells, widths, self.formats, self.margin) {
            let rendered: Vec<String> = line
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(col, (value, &width))| {
                    let area = content_area(width, self.margin);
                    let aligned = align(alignment(col), value, area, " ");
                    format!("{margin}{}{margin}", truncate(&aligned, area))
                })
                .collect();
            out.push_str(&data.content_line(&rendered));
            out.push('\n');
        }
    }
}

/// Total width between the left and right border glyphs.
fn table_width(widths: &[usize], col_separator: &str) -> usize {
    if widths.is_empty() {
        return 0;
    }
    widths.iter().sum::<usize>() + (widths.len() - 1) * visible_len(col_separator)
}

fn push_border(out: &mut String, section: &SectionStyle, widths: &[usize]) {
    if let Some(line) = section.horizontal_line(widths) {
        out.push_str(&line);
        out.push('\n');
    }
}
