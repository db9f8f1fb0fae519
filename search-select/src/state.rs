//! Selection, search text and focus state of the select control
//!
//! Every field the owner observes is changed through a setter that returns the
//! notification to emit, so callers always know exactly what to forward.

use serde_json::Value;
use tracing::debug;

use crate::config::SelectConfig;
use crate::options::resolve_saved;
use search_select_core::Action;

/// Notifications the control emits to its owner
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent {
    /// The selected option changed (`None` when cleared)
    SelectionChanged(Option<Value>),
    /// The search text changed (`None` when reset on blur or selection)
    SearchChanged(Option<String>),
}

impl Action for SelectEvent {
    fn name(&self) -> &'static str {
        match self {
            SelectEvent::SelectionChanged(_) => "SelectionChanged",
            SelectEvent::SearchChanged(_) => "SearchChanged",
        }
    }
}

/// Which part of the control holds keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    None,
    /// The search text field
    Input,
    /// A result row, by position in the rendered list
    Row(usize),
}

/// What the closed part of the control shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Blurred with nothing selected
    Placeholder,
    /// Label of the saved option
    SavedOption,
    /// The live search text field
    Input,
}

/// State owned by one select control
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectState {
    saved: Option<Value>,
    search: Option<String>,
    has_focus: bool,
    input_focus: InputFocus,
    selected_result: usize,
}

impl SelectState {
    /// State for a freshly mounted control
    ///
    /// `value` becomes the saved option only if an option with the same
    /// identifier exists. The resolved option is the full record from
    /// `options`, so the owner is told about it like any other selection.
    pub fn mount(
        options: &[Value],
        value: Option<&Value>,
        config: &SelectConfig,
    ) -> (Self, Option<SelectEvent>) {
        let mut state = Self::default();
        let resolved = value
            .and_then(|value| resolve_saved(options, value, &config.option_value))
            .cloned();
        let event = state.set_selected(resolved);
        (state, event)
    }

    pub fn saved(&self) -> Option<&Value> {
        self.saved.as_ref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn search_is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// True while the input or a result row holds keyboard input
    pub fn typing(&self) -> bool {
        self.input_focus != InputFocus::None
    }

    pub fn input_focus(&self) -> InputFocus {
        self.input_focus
    }

    /// Navigation cursor over the result rows
    pub fn selected_result(&self) -> usize {
        self.selected_result
    }

    pub fn display_mode(&self) -> DisplayMode {
        if !self.has_focus && self.saved.is_none() {
            DisplayMode::Placeholder
        } else if self.saved.is_some() && !self.typing() {
            DisplayMode::SavedOption
        } else {
            DisplayMode::Input
        }
    }

    /// Whether the result panel is shown for a given number of results
    pub fn shows_results(&self, result_count: usize) -> bool {
        self.has_focus && result_count > 0
    }

    /// Replace the saved option, returning the notification if it changed
    pub fn set_selected(&mut self, option: Option<Value>) -> Option<SelectEvent> {
        if self.saved == option {
            return None;
        }
        debug!(selected = ?option, "Selection changed");
        self.saved = option.clone();
        Some(SelectEvent::SelectionChanged(option))
    }

    /// Replace the search text, returning the notification if it changed
    pub fn set_search(&mut self, text: Option<String>) -> Option<SelectEvent> {
        if self.search == text {
            return None;
        }
        self.search = text.clone();
        Some(SelectEvent::SearchChanged(text))
    }

    /// Enter or leave the control boundary
    ///
    /// Leaving always drops input focus, resets the navigation cursor and
    /// clears the search text, whatever the previous state was.
    pub fn set_has_focus(&mut self, has_focus: bool) -> Vec<SelectEvent> {
        if has_focus {
            self.has_focus = true;
            return Vec::new();
        }
        if self.has_focus {
            debug!("Select lost focus");
        }
        self.has_focus = false;
        self.input_focus = InputFocus::None;
        self.selected_result = 0;
        self.set_search(None).into_iter().collect()
    }

    /// Give the search field keyboard input
    pub fn focus_input(&mut self) {
        self.input_focus = InputFocus::Input;
        self.has_focus = true;
    }

    /// Give a result row keyboard input
    pub fn focus_row(&mut self, position: usize) {
        self.input_focus = InputFocus::Row(position);
        self.has_focus = true;
    }

    pub(crate) fn set_selected_result(&mut self, position: usize) {
        self.selected_result = position;
    }

    /// Drop keyboard input with nothing else taking it, which leaves the control
    pub fn blur(&mut self) -> Vec<SelectEvent> {
        self.set_has_focus(false)
    }

    /// Choose an option: save it, clear the search text and leave the control
    pub fn select_option(&mut self, option: Value) -> Vec<SelectEvent> {
        let mut events: Vec<SelectEvent> = self.set_selected(Some(option)).into_iter().collect();
        events.extend(self.set_search(None));
        events.extend(self.blur());
        events
    }

    /// Clear the saved option from an empty search field, then leave the control
    ///
    /// Does nothing while search text is present.
    pub fn remove_option(&mut self) -> Vec<SelectEvent> {
        if !self.search_is_empty() {
            return Vec::new();
        }
        debug!("Removing selected option");
        let mut events: Vec<SelectEvent> = self.set_selected(None).into_iter().collect();
        events.extend(self.blur());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fruits() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Apple"}),
            json!({"id": 2, "name": "Banana"}),
        ]
    }

    fn typing_state() -> SelectState {
        let mut state = SelectState::default();
        state.focus_input();
        state.set_search(Some("ban".into()));
        state
    }

    #[test]
    fn test_mount_resolves_saved() {
        let (state, event) =
            SelectState::mount(&fruits(), Some(&json!({"id": 2})), &SelectConfig::default());
        let banana = json!({"id": 2, "name": "Banana"});
        assert_eq!(state.saved(), Some(&banana));
        assert_eq!(state.display_mode(), DisplayMode::SavedOption);
        assert_eq!(event, Some(SelectEvent::SelectionChanged(Some(banana))));
    }

    #[test]
    fn test_mount_unknown_value() {
        let (state, event) =
            SelectState::mount(&fruits(), Some(&json!({"id": 7})), &SelectConfig::default());
        assert_eq!(state.saved(), None);
        assert_eq!(state.display_mode(), DisplayMode::Placeholder);
        assert_eq!(event, None);
    }

    #[test]
    fn test_setters_emit_only_on_change() {
        let mut state = SelectState::default();
        assert_eq!(
            state.set_search(Some("a".into())),
            Some(SelectEvent::SearchChanged(Some("a".into())))
        );
        assert_eq!(state.set_search(Some("a".into())), None);
        assert_eq!(
            state.set_selected(Some(json!({"id": 1}))),
            Some(SelectEvent::SelectionChanged(Some(json!({"id": 1}))))
        );
        assert_eq!(state.set_selected(Some(json!({"id": 1}))), None);
        assert_eq!(
            state.set_selected(None),
            Some(SelectEvent::SelectionChanged(None))
        );
    }

    #[test]
    fn test_losing_focus_resets_search_and_typing() {
        let mut state = typing_state();
        state.set_selected_result(3);

        let events = state.set_has_focus(false);

        assert_eq!(events, vec![SelectEvent::SearchChanged(None)]);
        assert!(!state.has_focus());
        assert!(!state.typing());
        assert_eq!(state.search(), None);
        assert_eq!(state.selected_result(), 0);
    }

    #[test]
    fn test_losing_focus_when_already_blurred() {
        let mut state = SelectState::default();
        state.set_search(Some("x".into()));
        let events = state.set_has_focus(false);
        assert_eq!(events, vec![SelectEvent::SearchChanged(None)]);
        assert!(state.set_has_focus(false).is_empty());
    }

    #[test]
    fn test_select_option() {
        let mut state = typing_state();
        let banana = json!({"id": 2, "name": "Banana"});

        let events = state.select_option(banana.clone());

        assert_eq!(
            events,
            vec![
                SelectEvent::SelectionChanged(Some(banana.clone())),
                SelectEvent::SearchChanged(None),
            ]
        );
        assert_eq!(state.saved(), Some(&banana));
        assert!(!state.has_focus());
        assert!(!state.typing());
        assert_eq!(state.display_mode(), DisplayMode::SavedOption);
    }

    #[test]
    fn test_remove_option_with_empty_search() {
        let (mut state, _) = SelectState::mount(&fruits(), Some(&json!({"id": 1})), &SelectConfig::default());
        state.focus_input();

        let events = state.remove_option();

        assert_eq!(events, vec![SelectEvent::SelectionChanged(None)]);
        assert_eq!(state.saved(), None);
        assert!(!state.typing());
        assert!(!state.has_focus());
    }

    #[test]
    fn test_remove_option_keeps_selection_while_searching() {
        let (mut state, _) = SelectState::mount(&fruits(), Some(&json!({"id": 1})), &SelectConfig::default());
        state.focus_input();
        state.set_search(Some("b".into()));

        assert!(state.remove_option().is_empty());
        assert!(state.saved().is_some());
        assert!(state.typing());
    }

    #[test]
    fn test_remove_option_treats_empty_string_as_empty() {
        let (mut state, _) = SelectState::mount(&fruits(), Some(&json!({"id": 1})), &SelectConfig::default());
        state.focus_input();
        state.set_search(Some(String::new()));

        let events = state.remove_option();

        assert_eq!(
            events,
            vec![
                SelectEvent::SelectionChanged(None),
                SelectEvent::SearchChanged(None),
            ]
        );
    }

    #[test]
    fn test_display_mode() {
        let mut state = SelectState::default();
        assert_eq!(state.display_mode(), DisplayMode::Placeholder);

        state.set_has_focus(true);
        assert_eq!(state.display_mode(), DisplayMode::Input);

        state.set_selected(Some(json!({"id": 1})));
        assert_eq!(state.display_mode(), DisplayMode::SavedOption);

        state.focus_input();
        assert_eq!(state.display_mode(), DisplayMode::Input);

        state.focus_row(0);
        assert_eq!(state.display_mode(), DisplayMode::Input);
    }

    #[test]
    fn test_shows_results() {
        let mut state = SelectState::default();
        assert!(!state.shows_results(3));
        state.set_has_focus(true);
        assert!(state.shows_results(3));
        assert!(!state.shows_results(0));
    }

    #[test]
    fn test_event_names() {
        assert_eq!(SelectEvent::SelectionChanged(None).name(), "SelectionChanged");
        assert_eq!(SelectEvent::SearchChanged(None).name(), "SearchChanged");
    }
}
