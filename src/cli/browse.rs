//! Interactive directory browser
//!
//! Single-threaded loop: wait for a key or for the name filter's quiet
//! period to run out, feed the result to the `Directory`, redraw if needed.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::info;

use super::table::{header_line, styled_row, ColumnLayout, RowStyle};
use super::ui::{
    clear_screen, select, show_help, term_size, visible_lines, RawModeGuard, StatusBar, Term,
};
use crate::source::{load_users, UserSource};
use crate::state::{Directory, DirectoryEvent};

/// Lines around the table: name, city, blank, header, blank, status bar
const RESERVED_LINES: usize = 6;

/// How long to block on input when no timer is pending
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Picker entry that clears the city filter
const ANY_CITY: &str = "(any city)";

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Type(char),
    Backspace,
    ClearQuery,
    PickCity,
    ToggleHighlight,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Help,
    Quit,
}

/// Map a key press to a command. Printable characters always go to the
/// name filter, so every other command uses a non-printing key.
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('u') if ctrl => Some(Command::ClearQuery),
        KeyCode::Char('o') if ctrl => Some(Command::ToggleHighlight),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Command::Type(c)),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Tab => Some(Command::PickCity),
        KeyCode::Up => Some(Command::Up),
        KeyCode::Down => Some(Command::Down),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Home => Some(Command::Home),
        KeyCode::End => Some(Command::End),
        KeyCode::F(1) => Some(Command::Help),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Cursor and scroll position over the visible rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub cursor: usize,
    pub scroll: usize,
}

impl Viewport {
    /// Move the cursor for a navigation command. Other commands are ignored.
    pub fn navigate(&mut self, command: Command, total: usize, page: usize) {
        if total == 0 {
            *self = Self::default();
            return;
        }
        let last = total - 1;
        self.cursor = match command {
            Command::Up => self.cursor.saturating_sub(1),
            Command::Down => (self.cursor + 1).min(last),
            Command::PageUp => self.cursor.saturating_sub(page),
            Command::PageDown => (self.cursor + page).min(last),
            Command::Home => 0,
            Command::End => last,
            _ => self.cursor,
        };
    }

    /// Keep the cursor inside the row set and on screen
    pub fn clamp(&mut self, total: usize, page: usize) {
        if total == 0 {
            *self = Self::default();
            return;
        }
        self.cursor = self.cursor.min(total - 1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + page {
            self.scroll = self.cursor + 1 - page;
        }
    }
}

/// Open the interactive browser. The directory is fetched once, up front.
pub fn run_browse(source: &dyn UserSource, delay: Duration) -> Result<()> {
    clear_screen()?;
    println!("Loading {}…", source.name());

    let mut dir = Directory::new(delay);
    dir.apply(DirectoryEvent::UsersLoaded(load_users(source)), Instant::now());

    let mut viewport = Viewport::default();
    let mut dirty = true;

    loop {
        let page = visible_lines(RESERVED_LINES);
        if dirty {
            viewport.clamp(dir.visible_count(), page);
            render(&dir, &viewport, page);
            dirty = false;
        }

        let timeout = dir
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        let next = {
            let _guard = RawModeGuard::new()?;
            if event::poll(timeout)? {
                Some(event::read()?)
            } else {
                None
            }
        };

        match next {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let Some(command) = command_for_key(&key) else {
                    continue;
                };
                match command {
                    Command::Quit => break,
                    Command::Help => {
                        show_help()?;
                        dirty = true;
                    }
                    Command::PickCity => {
                        if let Some(city) = pick_city(&dir)? {
                            dir.apply(DirectoryEvent::CitySelected(city), Instant::now());
                        }
                        dirty = true;
                    }
                    Command::ToggleHighlight => {
                        dirty |= dir.apply(DirectoryEvent::HighlightToggled, Instant::now());
                    }
                    Command::Type(_) | Command::Backspace | Command::ClearQuery => {
                        let query = edit_query(dir.filters().raw_query(), command);
                        dirty |= dir.apply(DirectoryEvent::QueryEdited(query), Instant::now());
                    }
                    nav => {
                        viewport.navigate(nav, dir.visible_count(), page);
                        dirty = true;
                    }
                }
            }
            Some(Event::Resize(..)) => dirty = true,
            _ => {}
        }

        // Keys can arrive right at the deadline; let the timer fire either way
        dirty |= dir.apply(DirectoryEvent::Tick, Instant::now());
    }

    clear_screen()?;
    info!(
        visible = dir.visible_count(),
        total = dir.records().len(),
        "browser closed"
    );
    Ok(())
}

/// Apply a text-editing command to the raw query
pub fn edit_query(current: &str, command: Command) -> String {
    let mut query = current.to_string();
    match command {
        Command::Type(c) => query.push(c),
        Command::Backspace => {
            query.pop();
        }
        Command::ClearQuery => query.clear(),
        _ => {}
    }
    query
}

/// City picker. `Ok(None)` when cancelled, `Ok(Some(None))` for "any city".
fn pick_city(dir: &Directory) -> Result<Option<Option<String>>> {
    clear_screen()?;

    let mut options: Vec<&str> = Vec::with_capacity(dir.cities().len() + 1);
    options.push(ANY_CITY);
    options.extend(dir.cities().iter().map(String::as_str));

    Ok(select("city:", &options)?.map(|idx| city_for_choice(dir.cities(), idx)))
}

/// Picker index to selection: entry 0 is "any city", the rest follow the index
fn city_for_choice(cities: &[String], idx: usize) -> Option<String> {
    idx.checked_sub(1).and_then(|i| cities.get(i)).cloned()
}

fn render(dir: &Directory, viewport: &Viewport, page: usize) {
    let (width, _) = term_size();
    let layout = ColumnLayout::for_width(width);
    let filters = dir.filters();
    let mut term = Term::new();

    term.clear();

    let settling = if filters.is_settling() { " …" } else { "" };
    term.line(&format!("name: {}{}", filters.raw_query(), settling));
    term.line(&format!(
        "city: {}    oldest per city: {}",
        filters.city().unwrap_or(ANY_CITY),
        if filters.highlight() { "[x]" } else { "[ ]" }
    ));
    term.blank();
    term.line(&header_line(layout));

    let rows = dir.rows();
    if rows.is_empty() {
        if dir.records().is_empty() {
            term.line("  No users.");
        } else {
            term.line("  No matches.");
        }
    }

    for (i, row) in rows.iter().enumerate().skip(viewport.scroll).take(page) {
        let style = RowStyle {
            selected: i == viewport.cursor,
            highlighted: row.highlighted,
        };
        term.line(&styled_row(row.person, layout, style));
    }

    term.blank();
    let current = if rows.is_empty() { 0 } else { viewport.cursor + 1 };
    let bar = StatusBar::new()
        .counter(current, rows.len())
        .action("tab", "city")
        .action("^o", "oldest")
        .action("^u", "clear")
        .action("F1", "help")
        .action("esc", "quit");
    term.line(&bar.render(width));

    let prompt_col = "name: ".len() + filters.raw_query().chars().count();
    term.move_to(prompt_col.min(u16::MAX as usize) as u16, 0);
    term.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_keys_type() {
        assert_eq!(command_for_key(&key(KeyCode::Char('j'))), Some(Command::Type('j')));
        assert_eq!(command_for_key(&key(KeyCode::Char('q'))), Some(Command::Type('q')));
        assert_eq!(
            command_for_key(&KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)),
            Some(Command::Type('L'))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for_key(&ctrl('c')), Some(Command::Quit));
        assert_eq!(command_for_key(&ctrl('o')), Some(Command::ToggleHighlight));
        assert_eq!(command_for_key(&ctrl('u')), Some(Command::ClearQuery));
        assert_eq!(command_for_key(&ctrl('z')), None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(command_for_key(&key(KeyCode::Tab)), Some(Command::PickCity));
        assert_eq!(command_for_key(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for_key(&key(KeyCode::F(1))), Some(Command::Help));
        assert_eq!(command_for_key(&key(KeyCode::Insert)), None);
    }

    #[test]
    fn test_edit_query() {
        assert_eq!(edit_query("le", Command::Type('e')), "lee");
        assert_eq!(edit_query("lee", Command::Backspace), "le");
        assert_eq!(edit_query("", Command::Backspace), "");
        assert_eq!(edit_query("lee", Command::ClearQuery), "");
        assert_eq!(edit_query("日本", Command::Backspace), "日");
    }

    #[test]
    fn test_city_for_choice() {
        let cities = vec!["Berlin".to_string(), "Paris".to_string()];
        assert_eq!(city_for_choice(&cities, 0), None);
        assert_eq!(city_for_choice(&cities, 1), Some("Berlin".to_string()));
        assert_eq!(city_for_choice(&cities, 2), Some("Paris".to_string()));
        assert_eq!(city_for_choice(&cities, 3), None);
    }

    #[test]
    fn test_viewport_navigation() {
        let mut vp = Viewport::default();
        vp.navigate(Command::Up, 10, 5);
        assert_eq!(vp.cursor, 0);
        vp.navigate(Command::Down, 10, 5);
        assert_eq!(vp.cursor, 1);
        vp.navigate(Command::PageDown, 10, 5);
        assert_eq!(vp.cursor, 6);
        vp.navigate(Command::PageDown, 10, 5);
        assert_eq!(vp.cursor, 9);
        vp.navigate(Command::Home, 10, 5);
        assert_eq!(vp.cursor, 0);
        vp.navigate(Command::End, 10, 5);
        assert_eq!(vp.cursor, 9);
    }

    #[test]
    fn test_viewport_clamp_scrolls() {
        let mut vp = Viewport { cursor: 9, scroll: 0 };
        vp.clamp(10, 5);
        assert_eq!(vp.scroll, 5);

        vp.cursor = 2;
        vp.clamp(10, 5);
        assert_eq!(vp.scroll, 2);
    }

    #[test]
    fn test_viewport_clamp_after_filter_shrinks() {
        let mut vp = Viewport { cursor: 20, scroll: 18 };
        vp.clamp(3, 5);
        assert_eq!(vp, Viewport { cursor: 2, scroll: 2 });

        vp.clamp(0, 5);
        assert_eq!(vp, Viewport::default());
    }
}
