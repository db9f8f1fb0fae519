//! Actions for the picker demo

use serde_json::Value;

#[derive(search_select::Action, Clone, Debug, PartialEq)]
pub enum PickerAction {
    // ===== Select =====
    /// The select control chose an option or cleared it
    #[action(category = "selection")]
    SelectionChanged(Option<Value>),

    /// The search text in the select control changed
    #[action(category = "search")]
    SearchChanged(Option<String>),

    // ===== App =====
    /// Exit the application
    Quit,
}
