//! Test utilities for components built on search-select-core
//!
//! - [`key`]: Create `KeyEvent` from string (e.g., `key("ctrl+u")`)
//! - [`click`]: Create a left-button mouse press at a cell
//! - [`RenderHarness`]: Render into an in-memory terminal and read it back as text
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use search_select::testing::{key, RenderHarness};
//!
//! let actions: Vec<_> = select
//!     .handle_event(&EventKind::Key(key("down")), props)
//!     .into_iter()
//!     .collect();
//!
//! let mut render = RenderHarness::new(30, 10);
//! let output = render.render_to_string_plain(|frame| select.render(frame, frame.area(), props));
//! assert!(output.contains("Banana"));
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use search_select_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("down");
/// assert_eq!(k.code, KeyCode::Down);
///
/// let k = key("ctrl+u");
/// assert_eq!(k.code, KeyCode::Char('u'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Key events for every character of `text`, in order.
pub fn typed(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// Create a left-button press at (column, row).
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render components into an in-memory terminal for assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should build");
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    ///
    /// # Panics
    ///
    /// Panics if drawing fails.
    pub fn render<F>(&mut self, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(draw).expect("test draw should succeed");
        self.terminal.backend().buffer().clone()
    }

    /// Render a frame and return its text, one line per terminal row.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(draw);
        buffer_to_string_plain(&buffer)
    }

    /// Terminal cursor cell after the last render.
    ///
    /// # Panics
    ///
    /// Panics if the cursor cannot be read.
    pub fn cursor(&mut self) -> (u16, u16) {
        let position = self
            .terminal
            .get_cursor_position()
            .expect("test cursor should be readable");
        (position.x, position.y)
    }
}

/// Convert a buffer to plain text (symbols only, no styling).
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Convert one region of a buffer to plain text.
pub fn buffer_rect_to_string_plain(buffer: &Buffer, rect: Rect) -> String {
    let mut out = String::new();
    for y in rect.y..rect.y.saturating_add(rect.height) {
        for x in rect.x..rect.x.saturating_add(rect.width) {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// assert_emitted!(actions, Action::SelectionChanged(Some(_)));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("shift+tab").code, KeyCode::BackTab);
    }

    #[test]
    fn test_typed() {
        let events = typed("ab");
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[1], EventKind::Key(k) if k.code == KeyCode::Char('b')));
    }

    #[test]
    fn test_render_harness() {
        let mut render = RenderHarness::new(10, 2);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });
        assert_eq!(output, "hello     \n          \n");
    }

    #[derive(Debug, PartialEq)]
    enum TestAction {
        Foo,
        Bar(i32),
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Foo, TestAction::Bar(42)];

        assert_emitted!(actions, TestAction::Foo);
        assert_emitted!(actions, TestAction::Bar(n) if *n == 42);
        assert_not_emitted!(actions, TestAction::Bar(99));
        assert_eq!(count_emitted!(actions, TestAction::Bar(_)), 1);
    }
}
