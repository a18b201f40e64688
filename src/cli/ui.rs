//! Shared UI primitives for userdir
//!
//! Design principles:
//! - Minimal: Show only what's needed
//! - Clean: No decorative borders or lines
//! - Consistent: Same patterns everywhere
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `name: `
//! - Key hints: key in brackets followed by the label: `[tab] city`
//! - Feedback: single word when possible: `Loading…`

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Select};
use std::io::{self, Write};

// ============================================================================
// Terminal Writer
// ============================================================================

/// Buffered writer for a full-screen redraw in cooked mode.
/// Terminal errors are ignored; a failed frame is simply redrawn next time.
pub struct Term {
    stdout: io::Stdout,
}

impl Term {
    #[inline]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Write a line
    #[inline]
    pub fn line(&mut self, s: &str) {
        let _ = writeln!(self.stdout, "{}", s);
    }

    /// Write a blank line
    #[inline]
    pub fn blank(&mut self) {
        let _ = writeln!(self.stdout);
    }

    /// Clear the screen and move cursor to top-left
    pub fn clear(&mut self) {
        let _ = self.stdout.execute(Clear(ClearType::All));
        let _ = self.stdout.execute(cursor::MoveTo(0, 0));
    }

    /// Move cursor to position
    #[inline]
    pub fn move_to(&mut self, col: u16, row: u16) {
        let _ = self.stdout.execute(cursor::MoveTo(col, row));
    }

    #[inline]
    pub fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Status Bar Builder
// ============================================================================

/// Maximum actions a status bar can hold (stack-allocated)
const MAX_STATUS_ACTIONS: usize = 8;

/// Builder for consistent status bar formatting.
///
/// Example output: "3/30 [tab] city [^o] oldest [esc] quit"
pub struct StatusBar<'a> {
    counter: Option<(usize, usize)>,
    actions: [Option<(&'a str, &'a str)>; MAX_STATUS_ACTIONS],
    action_count: usize,
}

impl<'a> StatusBar<'a> {
    #[inline]
    pub fn new() -> Self {
        Self {
            counter: None,
            actions: [None; MAX_STATUS_ACTIONS],
            action_count: 0,
        }
    }

    /// Add a counter (current/total)
    #[inline]
    pub fn counter(mut self, current: usize, total: usize) -> Self {
        self.counter = Some((current, total));
        self
    }

    /// Add an action hint (key, label)
    /// Example: `.action("tab", "city")` produces `[tab] city`
    #[inline]
    pub fn action(mut self, key: &'a str, label: &'a str) -> Self {
        if self.action_count < MAX_STATUS_ACTIONS {
            self.actions[self.action_count] = Some((key, label));
            self.action_count += 1;
        }
        self
    }

    /// Render, truncated to the given width
    pub fn render(&self, width: usize) -> String {
        truncate(&self.render_full(), width)
    }

    fn render_full(&self) -> String {
        use std::fmt::Write;

        let mut result = String::with_capacity(12 + self.action_count * 16);

        if let Some((current, total)) = self.counter {
            let _ = write!(result, "{}", counter(current, total));
        }

        for (key, label) in self.actions[..self.action_count].iter().flatten() {
            if !result.is_empty() {
                result.push(' ');
            }
            let _ = write!(result, "[{}]", key);
            if !label.is_empty() {
                let _ = write!(result, " {}", label);
            }
        }

        result
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Layout Primitives
// ============================================================================

/// Return selection prefix for list items
#[inline]
pub fn selection_prefix(selected: bool) -> &'static str {
    if selected { "> " } else { "  " }
}

/// Truncate a string to max_chars, adding ellipsis if needed.
/// Result will be at most max_chars characters (including ellipsis if truncated).
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }

    let truncate_at = max_chars.saturating_sub(1); // Leave room for ellipsis
    let mut truncate_idx = 0;

    for (count, (idx, _)) in s.char_indices().enumerate() {
        if count == truncate_at {
            truncate_idx = idx;
        }
        if count + 1 > max_chars {
            return format!("{}…", &s[..truncate_idx]);
        }
    }

    s.to_string()
}

/// Format a counter string (e.g., "12/345")
#[inline]
pub fn counter(current: usize, total: usize) -> String {
    format!("{}/{}", current, total)
}

// ============================================================================
// Raw Mode Guard
// ============================================================================

/// RAII guard that ensures raw mode is disabled on drop
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Wait for any key press
pub fn wait_for_key() -> Result<()> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(KeyEvent { .. }) = event::read()? {
            break;
        }
    }
    Ok(())
}

/// Display the key reference for the browser
pub fn show_help() -> Result<()> {
    clear_screen()?;

    println!(
        r#"
FILTERS

  type          Filter by first or last name (applies after a pause)
  Backspace     Delete last character
  Ctrl+U        Clear the name filter
  Tab           Pick a city
  Ctrl+O        Highlight the oldest person in each city

NAVIGATION

  ↑ / ↓         Move
  PgUp / PgDn   Page
  Home / End    Jump to first / last

EXIT

  Esc / Ctrl+C  Quit
  F1            This help screen
"#
    );
    println!("\nPress any key to return...");

    wait_for_key()
}

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get terminal dimensions, defaulting to 80x24 if unavailable
/// Falls back safely for pipes/non-TTY.
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Number of table rows that fit under `reserved` lines of chrome.
/// Call this inside your display loop to handle terminal resize.
pub fn visible_lines(reserved: usize) -> usize {
    let (_, height) = term_size();
    height.saturating_sub(reserved).max(5) // At least 5 lines of content
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Display a selection menu and return the chosen index
pub fn select<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines(4))
        .with_vim_mode(true)
        .prompt_skippable()?;

    Ok(result.and_then(|selected| items.iter().position(|o| *o == selected)))
}
