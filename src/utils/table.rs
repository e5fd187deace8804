//! Table rendering for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Minimum width; the widest cell wins.
    pub width: usize,
    pub right: bool,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right: false,
        }
    }

    /// Right-aligned, for numbers.
    pub fn numeric(header: &str, width: usize) -> Self {
        Self {
            right: true,
            ..Self::new(header, width)
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain([col.width, UnicodeWidthStr::width(col.header.as_str())])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let cell = |col: &Column, text: &str, w: usize| {
            // format! pads by chars; aim for display width instead
            let target = (w + text.chars().count()).saturating_sub(UnicodeWidthStr::width(text));
            if col.right {
                pad_left(text, target)
            } else {
                pad_right(text, target)
            }
        };

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| cell(c, &c.header, *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join(" "));
        out.push('\n');

        for row in &self.rows {
            let line: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (c, w))| cell(c, row.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
