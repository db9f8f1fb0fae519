//! Single-line search field with a cursor

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use search_select_core::{Component, EventKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::SelectStyle;

/// Props for SearchInput
pub struct SearchInputProps<'a, A> {
    /// Current search text
    pub value: &'a str,
    /// Whether the field holds keyboard input
    pub is_focused: bool,
    pub style: &'a SelectStyle,
    /// Callback when the text changes
    pub on_change: fn(String) -> A,
}

/// Text editing for the search field
///
/// Handles typing, backspace, delete and cursor movement, emitting `on_change`
/// with the full new text for every edit. Enter, arrows up/down, Tab and Esc
/// are left to the caller.
#[derive(Default)]
pub struct SearchInput {
    /// Cursor position (byte index)
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn prev_boundary(&self, value: &str) -> Option<usize> {
        value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    fn next_boundary(&self, value: &str) -> Option<usize> {
        value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        let start = self.prev_boundary(value)?;
        let new_value = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        let end = self.next_boundary(value)?;
        Some(format!("{}{}", &value[..self.cursor], &value[end..]))
    }
}

impl<A> Component<A> for SearchInput {
    type Props<'a> = SearchInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') if !props.value.is_empty() => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some((props.on_change)(self.insert_char(props.value, c))),
            KeyCode::Backspace => self.delete_before(props.value).map(props.on_change),
            KeyCode::Delete => self.delete_at(props.value).map(props.on_change),
            KeyCode::Left => {
                if let Some(i) = self.prev_boundary(props.value) {
                    self.cursor = i;
                }
                None
            }
            KeyCode::Right => {
                if let Some(i) = self.next_boundary(props.value) {
                    self.cursor = i;
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.clamp_cursor(props.value);

        let (skip, cursor_x) = viewport(props.value, self.cursor, area.width);
        frame.render_widget(
            Paragraph::new(&props.value[skip..]).style(props.style.input),
            area,
        );

        if props.is_focused {
            frame.set_cursor_position((area.x + cursor_x, area.y));
        }
    }
}

/// Scroll the text horizontally so the cursor cell fits in `width` columns
///
/// Returns the byte offset of the first visible char and the cursor's column
/// inside the area, both measured in display width.
fn viewport(value: &str, cursor: usize, width: u16) -> (usize, u16) {
    let width = usize::from(width.max(1));
    let cursor_col = value[..cursor].width();

    let mut skip = 0;
    let mut skipped_cols = 0;
    for c in value[..cursor].chars() {
        if cursor_col - skipped_cols < width {
            break;
        }
        skip += c.len_utf8();
        skipped_cols += c.width().unwrap_or(0);
    }

    let cursor_x = (cursor_col - skipped_cols).min(width - 1);
    (skip, cursor_x as u16)
}
