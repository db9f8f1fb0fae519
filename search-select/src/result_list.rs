//! Result panel listing the filtered options

use std::convert::Infallible;
use std::ops::Range;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use search_select_core::{point_in_rect, Component};

use crate::style::SelectStyle;

/// One row of the panel: its label and the part to highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub label: String,
    /// Byte range of `label` matching the search text
    pub highlight: Option<Range<usize>>,
}

impl ResultLine {
    fn spans(&self, base: ratatui::style::Style, highlight: ratatui::style::Style) -> Line<'_> {
        let mut spans = vec![Span::raw(" ")];
        match &self.highlight {
            Some(range) if self.label.get(range.clone()).is_some() => {
                spans.push(Span::raw(&self.label[..range.start]));
                spans.push(Span::styled(&self.label[range.clone()], base.patch(highlight)));
                spans.push(Span::raw(&self.label[range.end..]));
            }
            _ => spans.push(Span::raw(self.label.as_str())),
        }
        Line::from(spans).style(base)
    }
}

/// Props for ResultList
pub struct ResultListProps<'a> {
    pub lines: &'a [ResultLine],
    /// Position of the row holding keyboard input
    pub focused: Option<usize>,
    pub style: &'a SelectStyle,
}

/// Bordered list of result rows drawn over whatever lies below it
///
/// Render-only: selection is decided by the owning control, so the list never
/// emits actions. Keeps the focused row inside the viewport and remembers where each row was
/// drawn so mouse clicks can be mapped back to row positions.
#[derive(Default)]
pub struct ResultList {
    /// Scroll offset for viewport
    scroll_offset: usize,
    /// Screen area of every row drawn in the last frame
    row_areas: Vec<(usize, Rect)>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height the panel needs for `rows` rows, borders included
    pub fn height_for(rows: usize, max_rows: u16) -> u16 {
        (rows.min(max_rows as usize) as u16).saturating_add(2)
    }

    /// Row position under a terminal cell, from the last frame
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.row_areas
            .iter()
            .find(|(_, area)| point_in_rect(*area, x, y))
            .map(|(position, _)| *position)
    }

    /// Forget the rows from the last frame (the panel was not drawn)
    pub fn clear(&mut self) {
        self.row_areas.clear();
        self.scroll_offset = 0;
    }

    /// Ensure the focused row is visible within the viewport
    fn ensure_visible(&mut self, focused: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if focused < self.scroll_offset {
            self.scroll_offset = focused;
        } else if focused >= self.scroll_offset + viewport_height {
            self.scroll_offset = focused.saturating_sub(viewport_height - 1);
        }
    }
}

impl Component<Infallible> for ResultList {
    type Props<'a> = ResultListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.row_areas.clear();

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(props.style.border_focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let viewport_height = inner.height as usize;
        let max_offset = props.lines.len().saturating_sub(viewport_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
        if let Some(focused) = props.focused {
            self.ensure_visible(focused, viewport_height);
        }

        let visible = props
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(viewport_height);

        for (row, (position, line)) in visible.enumerate() {
            let row_area = Rect {
                x: inner.x,
                y: inner.y + row as u16,
                width: inner.width,
                height: 1,
            };
            let base = if props.focused == Some(position) {
                props.style.result_focused
            } else {
                props.style.result
            };
            frame.render_widget(
                Paragraph::new(line.spans(base, props.style.highlight)).style(base),
                row_area,
            );
            self.row_areas.push((position, row_area));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;
    use search_select_core::testing::RenderHarness;

    fn lines(labels: &[&str]) -> Vec<ResultLine> {
        labels
            .iter()
            .map(|label| ResultLine {
                label: label.to_string(),
                highlight: None,
            })
            .collect()
    }

    fn draw(
        list: &mut ResultList,
        render: &mut RenderHarness,
        lines: &[ResultLine],
        focused: Option<usize>,
    ) -> String {
        let style = SelectStyle::default();
        render.render_to_string_plain(|frame| {
            let area = frame.area();
            let props = ResultListProps {
                lines,
                focused,
                style: &style,
            };
            list.render(frame, area, props);
        })
    }

    #[test]
    fn test_render_rows() {
        let mut render = RenderHarness::new(20, 5);
        let mut list = ResultList::new();
        let output = draw(
            &mut list,
            &mut render,
            &lines(&["Apple", "Banana", "Cherry"]),
            None,
        );

        assert!(output.contains("Apple"));
        assert!(output.contains("Banana"));
        assert!(output.contains("Cherry"));
    }

    #[test]
    fn test_row_at_maps_clicks() {
        let mut render = RenderHarness::new(20, 5);
        let mut list = ResultList::new();
        draw(
            &mut list,
            &mut render,
            &lines(&["Apple", "Banana", "Cherry"]),
            None,
        );

        // Border occupies row 0 and column 0
        assert_eq!(list.row_at(3, 1), Some(0));
        assert_eq!(list.row_at(3, 3), Some(2));
        assert_eq!(list.row_at(0, 1), None);
        assert_eq!(list.row_at(3, 4), None);

        list.clear();
        assert_eq!(list.row_at(3, 1), None);
    }

    #[test]
    fn test_scrolls_to_focused_row() {
        let mut render = RenderHarness::new(20, 4);
        let mut list = ResultList::new();
        let output = draw(
            &mut list,
            &mut render,
            &lines(&["Apple", "Banana", "Cherry", "Damson"]),
            Some(3),
        );

        assert!(!output.contains("Apple"));
        assert!(output.contains("Cherry"));
        assert!(output.contains("Damson"));
        assert_eq!(list.row_at(3, 2), Some(3));
    }

    #[test]
    fn test_highlight_is_styled() {
        let mut render = RenderHarness::new(20, 3);
        let mut list = ResultList::new();
        let style = SelectStyle::default();
        let lines = vec![ResultLine {
            label: "Banana".into(),
            highlight: Some(1..3),
        }];

        let buffer = render.render(|frame| {
            let area = frame.area();
            let props = ResultListProps {
                lines: &lines,
                focused: None,
                style: &style,
            };
            list.render(frame, area, props);
        });

        // " Banana" starts at x=1 inside the border, so "an" sits at x=3..5
        assert!(!buffer[(2, 1)].modifier.contains(Modifier::BOLD));
        assert!(buffer[(3, 1)].modifier.contains(Modifier::BOLD));
        assert!(buffer[(4, 1)].modifier.contains(Modifier::BOLD));
        assert!(!buffer[(5, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_height_for() {
        assert_eq!(ResultList::height_for(3, 8), 5);
        assert_eq!(ResultList::height_for(20, 8), 10);
        assert_eq!(ResultList::height_for(0, 8), 2);
    }
}
