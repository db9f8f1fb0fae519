//! Application state for the picker demo

use serde_json::Value;

/// What the owner knows about the select control
#[derive(Debug, Default)]
pub struct PickerState {
    /// The bound value, updated from selection notifications
    pub chosen: Option<Value>,
    /// Most recent search text reported by the control
    pub last_search: Option<String>,
}

impl PickerState {
    /// Label of the chosen option for the status panel
    pub fn chosen_label(&self, text_field: &str) -> String {
        match &self.chosen {
            Some(option) => search_select::option_text(option, text_field)
                .map(|label| label.into_owned())
                .unwrap_or_else(|| option.to_string()),
            None => "(nothing)".to_string(),
        }
    }
}
