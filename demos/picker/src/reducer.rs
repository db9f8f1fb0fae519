//! Reducer for the picker demo

use crate::action::PickerAction;
use crate::state::PickerState;

/// Handle state transitions
pub fn reducer(state: &mut PickerState, action: PickerAction) -> bool {
    match action {
        PickerAction::SelectionChanged(option) => {
            if state.chosen == option {
                return false;
            }
            state.chosen = option;
            true
        }

        PickerAction::SearchChanged(text) => {
            state.last_search = text;
            true
        }

        // Handled in the main loop
        PickerAction::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_select::Store;
    use serde_json::json;

    #[test]
    fn test_selection_binds_value() {
        let mut store = Store::new(PickerState::default(), reducer);
        assert!(store.dispatch(PickerAction::SelectionChanged(Some(json!({"id": 1, "name": "Apple"})))));
        assert_eq!(store.state().chosen_label("name"), "Apple");

        assert!(store.dispatch(PickerAction::SelectionChanged(None)));
        assert_eq!(store.state().chosen_label("name"), "(nothing)");
        assert!(!store.dispatch(PickerAction::SelectionChanged(None)));

        assert_eq!(store.log().category_count("selection"), 3);
        assert_eq!(store.log().changed(), 2);
    }

    #[test]
    fn test_search_is_recorded() {
        let mut store = Store::new(PickerState::default(), reducer);
        store.dispatch(PickerAction::SearchChanged(Some("ap".into())));
        store.dispatch(PickerAction::SearchChanged(None));

        assert_eq!(store.state().last_search, None);
        assert_eq!(store.log().category_count("search"), 2);
        assert_eq!(store.log().category_count("selection"), 0);
    }

    #[test]
    fn test_label_without_text_field() {
        let state = PickerState {
            chosen: Some(json!({"id": 7})),
            ..PickerState::default()
        };
        assert_eq!(state.chosen_label("name"), r#"{"id":7}"#);
    }
}
