//! Three-column directory table: NAME, CITY, BIRTHDAY

use crossterm::style::Stylize;

use super::ui::{selection_prefix, truncate};
use crate::models::Person;

/// `DD.MM.YYYY`
const BIRTHDAY_WIDTH: usize = 10;
/// Marker column plus the gaps between columns
const CHROME_WIDTH: usize = 2 + 2 + 2;

/// Column layout based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name_width: usize,
    pub city_width: usize,
}

impl ColumnLayout {
    pub fn for_width(width: usize) -> Self {
        if width >= 76 {
            ColumnLayout {
                name_width: 32,
                city_width: 24,
            }
        } else {
            // Split what is left 60/40 between name and city
            let avail = width.saturating_sub(BIRTHDAY_WIDTH + CHROME_WIDTH).max(14);
            let name_width = avail * 3 / 5;
            ColumnLayout {
                name_width,
                city_width: avail - name_width,
            }
        }
    }
}

/// How a row should stand out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowStyle {
    /// Cursor is on this row
    pub selected: bool,
    /// Oldest in its city
    pub highlighted: bool,
}

pub fn header_line(layout: ColumnLayout) -> String {
    format!(
        "  {:<name_w$}  {:<city_w$}  BIRTHDAY",
        "NAME",
        "CITY",
        name_w = layout.name_width,
        city_w = layout.city_width
    )
}

/// Plain text for one row, with a leading marker column
pub fn row_line(person: &Person, layout: ColumnLayout, marker: &str) -> String {
    format!(
        "{}{:<name_w$}  {:<city_w$}  {}",
        marker,
        truncate(&person.full_name(), layout.name_width),
        truncate(person.city(), layout.city_width),
        person.birth_date.display(),
        name_w = layout.name_width,
        city_w = layout.city_width
    )
}

/// Row with terminal styling: reverse video for the cursor, bold yellow for
/// the oldest person in a city.
pub fn styled_row(person: &Person, layout: ColumnLayout, style: RowStyle) -> String {
    let line = row_line(person, layout, selection_prefix(style.selected));
    match (style.selected, style.highlighted) {
        (true, true) => line.yellow().bold().reverse().to_string(),
        (true, false) => line.reverse().to_string(),
        (false, true) => line.yellow().bold().to_string(),
        (false, false) => line,
    }
}

/// Row for plain output (pipes, files): highlight shown as a `*` marker
pub fn plain_row(person: &Person, layout: ColumnLayout, highlighted: bool) -> String {
    row_line(person, layout, if highlighted { "* " } else { "  " })
}
