use anyhow::Result;
use std::collections::HashSet;
use std::io::{self, IsTerminal};
use tracing::info;

use super::table::{header_line, plain_row, styled_row, ColumnLayout, RowStyle};
use super::ui::term_size;
use crate::cities::city_index;
use crate::filter::visible;
use crate::oldest::oldest_ids;
use crate::source::{load_users, UserSource};

/// Print the filtered directory once and exit.
///
/// The name query applies immediately; there is no typing to debounce.
pub fn run_list(
    source: &dyn UserSource,
    name: Option<&str>,
    city: Option<&str>,
    highlight: bool,
) -> Result<()> {
    let records = load_users(source);

    if records.is_empty() {
        println!("No users.");
        return Ok(());
    }

    let rows = visible(&records, name.unwrap_or(""), city);
    info!(shown = rows.len(), total = records.len(), "listing users");

    if rows.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    let oldest: HashSet<u64> = if highlight {
        oldest_ids(&records)
    } else {
        HashSet::new()
    };

    let tty = io::stdout().is_terminal();
    let layout = if tty {
        ColumnLayout::for_width(term_size().0)
    } else {
        ColumnLayout::for_width(usize::MAX)
    };

    println!("{}", header_line(layout));
    for person in &rows {
        let highlighted = oldest.contains(&person.id);
        if tty {
            let style = RowStyle {
                selected: false,
                highlighted,
            };
            println!("{}", styled_row(person, layout, style));
        } else {
            println!("{}", plain_row(person, layout, highlighted));
        }
    }
    println!("\n{} of {} users", rows.len(), records.len());

    Ok(())
}

/// Print the distinct cities, one per line
pub fn run_cities(source: &dyn UserSource) -> Result<()> {
    for city in city_index(&load_users(source)) {
        println!("{}", city);
    }
    Ok(())
}
