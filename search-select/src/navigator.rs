//! Keyboard navigation between the search field and the result rows
//!
//! Rows are addressed through [`ResultRows`], an ordered list of handles rebuilt
//! every time the filtered results are recomputed. Navigation resolves rows by
//! position in that list and never keeps references across rebuilds.

use serde_json::Value;

use crate::config::SelectConfig;
use crate::filter::filter_options;
use crate::state::{InputFocus, SelectEvent, SelectState};

/// One rendered result row
#[derive(Debug, Clone, PartialEq)]
pub struct RowHandle {
    /// Position in the rendered list
    pub position: usize,
    /// Index into the option sequence
    pub option_index: usize,
    /// Identifier of the option, if it has one
    pub key: Option<Value>,
}

/// Ordered handles for the currently filtered results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRows {
    handles: Vec<RowHandle>,
}

impl ResultRows {
    /// Filter `options` by the current search text and build handles for the matches
    pub fn rebuild(options: &[Value], search: Option<&str>, config: &SelectConfig) -> Self {
        let handles = filter_options(options, search, &config.option_text)
            .into_iter()
            .enumerate()
            .map(|(position, option_index)| RowHandle {
                position,
                option_index,
                key: options[option_index].get(&config.option_value).cloned(),
            })
            .collect();
        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&RowHandle> {
        self.handles.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowHandle> {
        self.handles.iter()
    }

    /// The option a row stands for
    pub fn option<'a>(&self, position: usize, options: &'a [Value]) -> Option<&'a Value> {
        self.get(position)
            .and_then(|handle| options.get(handle.option_index))
    }
}

/// Direction of an arrow-key step through the rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Down,
    Up,
}

/// Down from the search field: focus the first row if there is one
///
/// Returns whether focus moved.
pub fn move_to_results(state: &mut SelectState, rows: &ResultRows) -> bool {
    if rows.is_empty() {
        return false;
    }
    state.set_selected_result(0);
    state.focus_row(0);
    true
}

/// Move the navigation cursor one row and focus the row under it
///
/// Running off either end resets the cursor and returns focus to the search field.
pub fn step(state: &mut SelectState, rows: &ResultRows, direction: Step) {
    let cursor = state.selected_result();
    let next = match direction {
        Step::Down => cursor.checked_add(1),
        Step::Up => cursor.checked_sub(1),
    };

    match next.filter(|&position| position < rows.len()) {
        Some(position) => {
            state.set_selected_result(position);
            state.focus_row(position);
        }
        None => {
            state.set_selected_result(0);
            state.focus_input();
        }
    }
}

/// Tab order is the search field followed by every row; past either end leaves the control
///
/// The arrow-key cursor is not touched.
pub fn tab(state: &mut SelectState, rows: &ResultRows, forward: bool) -> Vec<SelectEvent> {
    let target = match (state.input_focus(), forward) {
        (InputFocus::Input, true) if !rows.is_empty() => Some(InputFocus::Row(0)),
        (InputFocus::Row(p), true) if p + 1 < rows.len() => Some(InputFocus::Row(p + 1)),
        (InputFocus::Row(0), false) => Some(InputFocus::Input),
        (InputFocus::Row(p), false) => Some(InputFocus::Row(p - 1)),
        _ => None,
    };

    match target {
        Some(InputFocus::Input) => {
            state.focus_input();
            Vec::new()
        }
        Some(InputFocus::Row(position)) => {
            state.focus_row(position);
            Vec::new()
        }
        Some(InputFocus::None) | None => state.blur(),
    }
}

/// Return focus to the search field if the focused row no longer exists
pub fn revalidate(state: &mut SelectState, rows: &ResultRows) {
    if let InputFocus::Row(position) = state.input_focus() {
        if position >= rows.len() {
            state.focus_input();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Apple"}),
            json!({"id": 2, "name": "Banana"}),
            json!({"id": 3, "name": "Mandarin"}),
        ]
    }

    fn focused_state() -> SelectState {
        let mut state = SelectState::default();
        state.focus_input();
        state
    }

    fn rows(search: Option<&str>) -> ResultRows {
        ResultRows::rebuild(&options(), search, &SelectConfig::default())
    }

    #[test]
    fn test_rebuild_handles() {
        let rows = rows(Some("an"));
        let positions: Vec<_> = rows.iter().map(|h| (h.position, h.option_index)).collect();
        assert_eq!(positions, vec![(0, 1), (1, 2)]);
        assert_eq!(rows.get(0).unwrap().key, Some(json!(2)));
        assert_eq!(rows.option(1, &options()).unwrap()["name"], "Mandarin");
        assert!(rows.option(2, &options()).is_none());
    }

    #[test]
    fn test_move_to_results() {
        let mut state = focused_state();
        assert!(move_to_results(&mut state, &rows(None)));
        assert_eq!(state.input_focus(), InputFocus::Row(0));
        assert_eq!(state.selected_result(), 0);
    }

    #[test]
    fn test_move_to_results_without_rows() {
        let mut state = focused_state();
        assert!(!move_to_results(&mut state, &rows(Some("kiwi"))));
        assert_eq!(state.input_focus(), InputFocus::Input);
    }

    #[test]
    fn test_step_through_rows() {
        let rows = rows(None);
        let mut state = focused_state();
        move_to_results(&mut state, &rows);

        step(&mut state, &rows, Step::Down);
        assert_eq!(state.input_focus(), InputFocus::Row(1));
        step(&mut state, &rows, Step::Down);
        assert_eq!(state.input_focus(), InputFocus::Row(2));
        step(&mut state, &rows, Step::Up);
        assert_eq!(state.input_focus(), InputFocus::Row(1));
        assert_eq!(state.selected_result(), 1);
    }

    #[test]
    fn test_step_past_last_row_returns_to_input() {
        let rows = rows(None);
        let mut state = focused_state();
        move_to_results(&mut state, &rows);
        for _ in 0..3 {
            step(&mut state, &rows, Step::Down);
        }
        assert_eq!(state.input_focus(), InputFocus::Input);
        assert_eq!(state.selected_result(), 0);
        assert!(state.has_focus());
    }

    #[test]
    fn test_step_before_first_row_returns_to_input() {
        let rows = rows(None);
        let mut state = focused_state();
        move_to_results(&mut state, &rows);
        step(&mut state, &rows, Step::Up);
        assert_eq!(state.input_focus(), InputFocus::Input);
        assert_eq!(state.selected_result(), 0);
    }

    #[test]
    fn test_tab_order() {
        let rows = rows(Some("an"));
        let mut state = focused_state();

        assert!(tab(&mut state, &rows, true).is_empty());
        assert_eq!(state.input_focus(), InputFocus::Row(0));
        tab(&mut state, &rows, true);
        assert_eq!(state.input_focus(), InputFocus::Row(1));
        tab(&mut state, &rows, false);
        tab(&mut state, &rows, false);
        assert_eq!(state.input_focus(), InputFocus::Input);
    }

    #[test]
    fn test_tab_past_last_row_leaves() {
        let rows = rows(Some("apple"));
        let mut state = focused_state();
        state.set_search(Some("apple".into()));
        tab(&mut state, &rows, true);

        let events = tab(&mut state, &rows, true);

        assert_eq!(events, vec![SelectEvent::SearchChanged(None)]);
        assert!(!state.has_focus());
        assert_eq!(state.input_focus(), InputFocus::None);
    }

    #[test]
    fn test_backtab_from_input_leaves() {
        let mut state = focused_state();
        tab(&mut state, &rows(None), false);
        assert!(!state.has_focus());
    }

    #[test]
    fn test_revalidate_drops_stale_row() {
        let mut state = focused_state();
        state.focus_row(2);
        revalidate(&mut state, &rows(Some("an")));
        assert_eq!(state.input_focus(), InputFocus::Input);

        state.focus_row(1);
        revalidate(&mut state, &rows(Some("an")));
        assert_eq!(state.input_focus(), InputFocus::Row(1));
    }
}
