//! Event types delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;

/// The actual event payload
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// The owner moved keyboard focus into the component
    FocusIn,
    /// The owner moved keyboard focus away from the component
    FocusOut,
}

impl EventKind {
    /// Check if this is a global event (handled by the owner before any component)
    pub fn is_global(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            EventKind::Resize(_, _) => true,
            _ => false,
        }
    }
}

/// Check if a terminal cell lies inside an area
pub fn point_in_rect(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ctrl_key, key};

    #[test]
    fn test_is_global() {
        assert!(EventKind::Key(ctrl_key('c')).is_global());
        assert!(EventKind::Resize(10, 10).is_global());
        assert!(!EventKind::Key(key("esc")).is_global());
        assert!(!EventKind::FocusIn.is_global());
    }

    #[test]
    fn test_point_in_rect() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(point_in_rect(area, 2, 3));
        assert!(point_in_rect(area, 5, 4));
        assert!(!point_in_rect(area, 6, 4));
        assert!(!point_in_rect(area, 2, 5));
        assert!(!point_in_rect(area, 1, 3));
    }
}
