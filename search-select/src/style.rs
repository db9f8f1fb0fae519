//! Default skin of the select control

use ratatui::style::{Color, Modifier, Style};

/// Styles used when drawing the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStyle {
    pub border: Style,
    pub border_focused: Style,
    pub placeholder: Style,
    pub saved_option: Style,
    pub input: Style,
    /// Dropdown arrow drawn at the right edge of the control
    pub dropdown: Style,
    pub dropdown_symbol: &'static str,
    pub result: Style,
    /// Row holding keyboard input
    pub result_focused: Style,
    /// Part of a row label matching the search text
    pub highlight: Style,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            placeholder: Style::default().fg(Color::DarkGray),
            saved_option: Style::default(),
            input: Style::default(),
            dropdown: Style::default().fg(Color::Gray),
            dropdown_symbol: "▾",
            result: Style::default(),
            result_focused: Style::default().fg(Color::Black).bg(Color::Gray),
            highlight: Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        }
    }
}
