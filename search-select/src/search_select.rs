//! The searchable select control

use std::borrow::Cow;
use std::convert::identity;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;
use tracing::debug;

use search_select_core::{point_in_rect, Action, Component, EventKind};

use crate::config::SelectConfig;
use crate::filter::highlight_range;
use crate::input::{SearchInput, SearchInputProps};
use crate::navigator::{self, ResultRows, Step};
use crate::options::option_text;
use crate::result_list::{ResultLine, ResultList, ResultListProps};
use crate::state::{DisplayMode, InputFocus, SelectEvent, SelectState};
use crate::style::SelectStyle;

/// Rows shown at once in the result panel unless the owner asks otherwise
pub const DEFAULT_MAX_ROWS: u16 = 8;

/// Height of the closed control, borders included
const CONTROL_HEIGHT: u16 = 3;

/// Props for SearchSelect
pub struct SearchSelectProps<'a, A> {
    /// Candidate options, in display order
    pub options: &'a [Value],
    pub config: &'a SelectConfig,
    /// Maximum number of result rows visible at once
    pub max_rows: u16,
    /// Callback when the selected option changes
    pub on_change: fn(Option<Value>) -> A,
    /// Callback when the search text changes
    pub on_search: fn(Option<String>) -> A,
}

impl<A> Clone for SearchSelectProps<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SearchSelectProps<'_, A> {}

/// A select control the user filters by typing
///
/// Renders as a bordered box showing the placeholder, the saved option's label
/// or the live search field, with a result panel dropping down below it while
/// the control has focus and something matches. The panel is drawn inside the
/// area passed to `render`, so give the control room beneath its 3-row box.
///
/// # Keys
///
/// - Search field: type to filter, Down to enter the results, Backspace on an
///   empty field to clear the selection
/// - Result row: Enter to select, Down/Up to move (wrapping back to the field)
/// - Tab/Shift+Tab walk field and rows, Esc leaves the control
///
/// # Example
///
/// ```ignore
/// let mut select = SearchSelect::mount(&options, None, &config);
///
/// let props = SearchSelectProps {
///     options: &options,
///     config: &config,
///     max_rows: DEFAULT_MAX_ROWS,
///     on_change: Action::SelectionChanged,
///     on_search: Action::SearchChanged,
/// };
/// for action in select.handle_event(&event, props) {
///     store.dispatch(action);
/// }
/// ```
pub struct SearchSelect {
    state: SelectState,
    input: SearchInput,
    list: ResultList,
    rows: ResultRows,
    style: SelectStyle,
    control_area: Option<Rect>,
    panel_area: Option<Rect>,
    /// Notifications raised outside event handling, not yet delivered
    pending: Vec<SelectEvent>,
}

impl SearchSelect {
    /// Create the control, pre-selecting `value` if it matches one of `options`
    ///
    /// A resolved selection is queued as a selection change carrying the full
    /// option record. It is delivered by [`take_notifications`](Self::take_notifications)
    /// or ahead of the actions from the next `handle_event`.
    pub fn mount(options: &[Value], value: Option<&Value>, config: &SelectConfig) -> Self {
        let (state, event) = SelectState::mount(options, value, config);
        let rows = ResultRows::rebuild(options, state.search(), config);
        Self {
            state,
            input: SearchInput::new(),
            list: ResultList::new(),
            rows,
            style: SelectStyle::default(),
            control_area: None,
            panel_area: None,
            pending: event.into_iter().collect(),
        }
    }

    /// Deliver queued notifications through the owner's callbacks
    pub fn take_notifications<A>(&mut self, props: SearchSelectProps<'_, A>) -> Vec<A> {
        notify(std::mem::take(&mut self.pending), props)
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// Result rows as of the last event or render
    pub fn rows(&self) -> &ResultRows {
        &self.rows
    }

    /// Whether the result panel is showing
    pub fn is_open(&self) -> bool {
        self.state.shows_results(self.rows.len())
    }

    /// The filtered options, as of the last event or render
    pub fn results<'a>(&self, options: &'a [Value]) -> Vec<&'a Value> {
        self.rows
            .iter()
            .filter_map(|handle| options.get(handle.option_index))
            .collect()
    }

    fn sync_rows(&mut self, options: &[Value], config: &SelectConfig) {
        self.rows = ResultRows::rebuild(options, self.state.search(), config);
        navigator::revalidate(&mut self.state, &self.rows);
    }

    fn on_input_key(&mut self, key: &KeyEvent, event: &EventKind) -> Vec<SelectEvent> {
        match key.code {
            KeyCode::Down => {
                navigator::move_to_results(&mut self.state, &self.rows);
                Vec::new()
            }
            KeyCode::Backspace if self.state.search_is_empty() => self.state.remove_option(),
            KeyCode::Tab => navigator::tab(&mut self.state, &self.rows, true),
            KeyCode::BackTab => navigator::tab(&mut self.state, &self.rows, false),
            KeyCode::Esc => self.state.blur(),
            KeyCode::Enter | KeyCode::Up => Vec::new(),
            _ => self.edit_search(event),
        }
    }

    fn edit_search(&mut self, event: &EventKind) -> Vec<SelectEvent> {
        let value = self.state.search().unwrap_or_default().to_string();
        let props = SearchInputProps {
            value: &value,
            is_focused: true,
            style: &self.style,
            on_change: identity::<String>,
        };
        let edited = self.input.handle_event(event, props).into_iter().last();
        edited
            .and_then(|text| self.state.set_search(Some(text)))
            .into_iter()
            .collect()
    }

    fn on_row_key(&mut self, position: usize, key: &KeyEvent, options: &[Value]) -> Vec<SelectEvent> {
        match key.code {
            KeyCode::Enter => self.select_row(position, options),
            KeyCode::Down => {
                navigator::step(&mut self.state, &self.rows, Step::Down);
                Vec::new()
            }
            KeyCode::Up => {
                navigator::step(&mut self.state, &self.rows, Step::Up);
                Vec::new()
            }
            KeyCode::Tab => navigator::tab(&mut self.state, &self.rows, true),
            KeyCode::BackTab => navigator::tab(&mut self.state, &self.rows, false),
            KeyCode::Esc => self.state.blur(),
            _ => Vec::new(),
        }
    }

    fn on_click(&mut self, x: u16, y: u16, options: &[Value]) -> Vec<SelectEvent> {
        if self.is_open() {
            if let Some(position) = self.list.row_at(x, y) {
                return self.select_row(position, options);
            }
        }

        let inside = |area: Option<Rect>| area.is_some_and(|area| point_in_rect(area, x, y));
        if inside(self.control_area) || (self.is_open() && inside(self.panel_area)) {
            self.state.focus_input();
            Vec::new()
        } else {
            self.state.blur()
        }
    }

    fn select_row(&mut self, position: usize, options: &[Value]) -> Vec<SelectEvent> {
        match self.rows.option(position, options) {
            Some(option) => {
                debug!(position, "Selecting result row");
                self.state.select_option(option.clone())
            }
            None => Vec::new(),
        }
    }

    fn result_lines(&self, options: &[Value], config: &SelectConfig) -> Vec<ResultLine> {
        let search = self.state.search().filter(|s| !s.is_empty());
        self.rows
            .iter()
            .map(|handle| {
                let label = options
                    .get(handle.option_index)
                    .and_then(|option| option_text(option, &config.option_text))
                    .map(Cow::into_owned)
                    .unwrap_or_default();
                let highlight = search.and_then(|s| highlight_range(&label, s));
                ResultLine { label, highlight }
            })
            .collect()
    }
}

fn notify<A>(events: Vec<SelectEvent>, props: SearchSelectProps<'_, A>) -> Vec<A> {
    events
        .into_iter()
        .map(|event| {
            debug!(notification = event.name(), "Select notification");
            match event {
                SelectEvent::SelectionChanged(option) => (props.on_change)(option),
                SelectEvent::SearchChanged(text) => (props.on_search)(text),
            }
        })
        .collect()
}

impl<A> Component<A> for SearchSelect {
    type Props<'a> = SearchSelectProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        // The owner may have swapped the options since the last call
        self.sync_rows(props.options, props.config);

        let events = match event {
            EventKind::FocusIn => {
                self.state.focus_input();
                Vec::new()
            }
            EventKind::FocusOut => self.state.blur(),
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.on_click(mouse.column, mouse.row, props.options)
            }
            EventKind::Key(key) if key.kind != KeyEventKind::Release && self.state.has_focus() => {
                match self.state.input_focus() {
                    InputFocus::Input => self.on_input_key(key, event),
                    InputFocus::Row(position) => self.on_row_key(position, key, props.options),
                    InputFocus::None => Vec::new(),
                }
            }
            _ => Vec::new(),
        };

        self.sync_rows(props.options, props.config);

        let mut queued = std::mem::take(&mut self.pending);
        queued.extend(events);
        notify(queued, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync_rows(props.options, props.config);

        let control_area = Rect {
            height: area.height.min(CONTROL_HEIGHT),
            ..area
        };
        self.control_area = Some(control_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.state.has_focus() {
                self.style.border_focused
            } else {
                self.style.border
            });
        let inner = block.inner(control_area);
        frame.render_widget(block, control_area);

        let [text_area, arrow_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(2)]).areas(inner);
        frame.render_widget(
            Paragraph::new(self.style.dropdown_symbol)
                .style(self.style.dropdown)
                .alignment(Alignment::Right),
            arrow_area,
        );

        match self.state.display_mode() {
            DisplayMode::Placeholder => {
                frame.render_widget(
                    Paragraph::new(props.config.placeholder.as_str()).style(self.style.placeholder),
                    text_area,
                );
            }
            DisplayMode::SavedOption => {
                let label = self
                    .state
                    .saved()
                    .and_then(|saved| option_text(saved, &props.config.option_text))
                    .unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(label.as_ref()).style(self.style.saved_option),
                    text_area,
                );
            }
            DisplayMode::Input => {
                let input_props = SearchInputProps {
                    value: self.state.search().unwrap_or_default(),
                    is_focused: self.state.input_focus() == InputFocus::Input,
                    style: &self.style,
                    on_change: identity::<String>,
                };
                self.input.render(frame, text_area, input_props);
            }
        }

        let below = area.height.saturating_sub(control_area.height);
        let panel_height = ResultList::height_for(self.rows.len(), props.max_rows).min(below);
        if !self.is_open() || panel_height <= 2 {
            self.list.clear();
            self.panel_area = None;
            return;
        }

        let panel_area = Rect {
            x: area.x,
            y: control_area.y + control_area.height,
            width: area.width,
            height: panel_height,
        };
        let lines = self.result_lines(props.options, props.config);
        let focused = match self.state.input_focus() {
            InputFocus::Row(position) => Some(position),
            _ => None,
        };
        self.list.render(
            frame,
            panel_area,
            ResultListProps {
                lines: &lines,
                focused,
                style: &self.style,
            },
        );
        self.panel_area = Some(panel_area);
    }
}
