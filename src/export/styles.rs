// src/export/styles.rs

use crate::core::rollup::Level;
use crate::errors::AppResult;
use crate::models::agent::ComplianceStatus;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Worksheet};

pub(crate) const WHITE: u32 = 0xFFFFFF;
pub(crate) const BLACK: u32 = 0x000000;
pub(crate) const TEXT: u32 = 0x333333;
pub(crate) const MUTED: u32 = 0x999999;
pub(crate) const LIGHT_BORDER: u32 = 0xCCCCCC;

/// Sheet color scheme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub dark: u32,
    pub mid: u32,
    pub accent: u32,
    pub light: u32,
    pub lighter: u32,
    pub tab: u32,
}

/// Queue sheets: petrol blue.
pub(crate) const QUEUE_PALETTE: Palette = Palette {
    dark: 0x0F4C75,
    mid: 0x1B6CA8,
    accent: 0x4BA3E0,
    light: 0xEDF5FC,
    lighter: 0xF7FBFF,
    tab: 0x1B6CA8,
};

/// Summary and agent sheets: corporate blue.
pub(crate) const CORPORATE_PALETTE: Palette = Palette {
    dark: 0x1A3C5E,
    mid: 0x2E75B6,
    accent: 0x41A0E0,
    light: 0xD6E4F0,
    lighter: 0xEBF3FA,
    tab: 0x1A3C5E,
};

impl Palette {
    /// Alternating data-row background.
    pub fn band(&self, index: usize) -> u32 {
        if index % 2 == 0 { self.light } else { self.lighter }
    }
}

/// Pastel traffic-light background for a level.
pub(crate) fn level_color(level: Level) -> u32 {
    match level {
        Level::Good => 0xD4EDDA,
        Level::Medium => 0xFFF4CC,
        Level::High => 0xFFE8CC,
        Level::Critical => 0xF9D8D8,
    }
}

pub(crate) fn status_color(status: ComplianceStatus) -> u32 {
    match status {
        ComplianceStatus::Compliant => level_color(Level::Good),
        ComplianceStatus::NonCompliant => level_color(Level::Critical),
        ComplianceStatus::Work => WHITE,
    }
}

/// Solid-filled, centered Arial 10 cell.
pub(crate) fn cell(bg: u32, fg: u32) -> Format {
    Format::new()
        .set_font_name("Arial")
        .set_font_size(10)
        .set_font_color(Color::RGB(fg))
        .set_background_color(Color::RGB(bg))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Thin border on all four sides.
pub(crate) fn boxed(fmt: Format, color: u32) -> Format {
    fmt.set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(color))
}

/// Thin sides with a medium bottom rule, used for metric labels.
pub(crate) fn underlined(fmt: Format, sides: u32, bottom: u32) -> Format {
    boxed(fmt, sides)
        .set_border_bottom(FormatBorder::Medium)
        .set_border_bottom_color(Color::RGB(bottom))
}

/// Left-aligned text with an indent.
pub(crate) fn left(fmt: Format, indent: u8) -> Format {
    fmt.set_align(FormatAlign::Left).set_indent(indent)
}

/// Write `text` across `first_col..=last_col`, merging when it spans more
/// than one cell.
pub(crate) fn band(
    ws: &mut Worksheet,
    row: u32,
    first_col: u16,
    last_col: u16,
    text: &str,
    fmt: &Format,
) -> AppResult<()> {
    span(ws, row, first_col, row, last_col, text, fmt)
}

/// Merge a rectangular block; a single cell is written as-is.
pub(crate) fn span(
    ws: &mut Worksheet,
    first_row: u32,
    first_col: u16,
    last_row: u32,
    last_col: u16,
    text: &str,
    fmt: &Format,
) -> AppResult<()> {
    if first_row == last_row && first_col == last_col {
        ws.write_string_with_format(first_row, first_col, text, fmt)?;
    } else {
        ws.merge_range(first_row, first_col, last_row, last_col, text, fmt)?;
    }
    Ok(())
}

/// Merge two cells and put a number in them.
pub(crate) fn number_pair(ws: &mut Worksheet, row: u32, col: u16, value: f64, fmt: &Format) -> AppResult<()> {
    ws.merge_range(row, col, row, col + 1, "", fmt)?;
    ws.write_number_with_format(row, col, value, fmt)?;
    Ok(())
}

/// A thin colored separator row.
pub(crate) fn rule(ws: &mut Worksheet, row: u32, cols: u16, color: u32, height: f64) -> AppResult<()> {
    let fmt = cell(color, color);
    for c in 0..cols {
        ws.write_blank(row, c, &fmt)?;
    }
    ws.set_row_height(row, height)?;
    Ok(())
}

/// Sheet names are capped at 31 chars and may not contain `[]:*?/\`.
pub(crate) fn sheet_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if "[]:*?/\\".contains(c) { '-' } else { c })
        .collect();
    cleaned.chars().take(31).collect()
}
