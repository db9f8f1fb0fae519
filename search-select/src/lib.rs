//! search-select: a searchable, filterable select control for ratatui
//!
//! The control shows a placeholder or the chosen option's label, turns into a
//! search field when focused and drops down the options whose label contains
//! the typed text. Options are JSON records; which fields hold the identifier
//! and the label is configured through [`SelectConfig`].
//!
//! The owner application keeps the authoritative selection. The control
//! reports changes as actions built by the owner's callbacks.
//!
//! # Example
//! ```ignore
//! use search_select::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum AppAction {
//!     FruitChanged(Option<serde_json::Value>),
//!     FruitSearched(Option<String>),
//! }
//!
//! let config = SelectConfig::default();
//! let mut select = SearchSelect::mount(&options, None, &config);
//! let props = SearchSelectProps {
//!     options: &options,
//!     config: &config,
//!     max_rows: DEFAULT_MAX_ROWS,
//!     on_change: AppAction::FruitChanged,
//!     on_search: AppAction::FruitSearched,
//! };
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod navigator;
pub mod options;
pub mod result_list;
pub mod search_select;
pub mod state;
pub mod style;

// Re-export everything from core
pub use search_select_core::*;

// Re-export derive macros
pub use search_select_macros::Action;

pub use config::SelectConfig;
pub use error::LoadError;
pub use filter::{filter_options, highlight_range};
pub use input::{SearchInput, SearchInputProps};
pub use navigator::{ResultRows, RowHandle, Step};
pub use options::{ids_match, load_options, option_id, option_text, parse_options};
pub use result_list::{ResultLine, ResultList, ResultListProps};
pub use search_select::{SearchSelect, SearchSelectProps, DEFAULT_MAX_ROWS};
pub use state::{DisplayMode, InputFocus, SelectEvent, SelectState};
pub use style::SelectStyle;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use search_select_core::{Action, ActionCategory, Component};

    // Event system
    pub use search_select_core::{spawn_event_poller, EventKind};

    // Keybindings
    pub use search_select_core::{format_key_for_display, parse_key_string};

    // Store
    pub use search_select_core::{DispatchLog, Reducer, Store};

    // Select control
    pub use crate::{
        load_options, LoadError, SearchSelect, SearchSelectProps, SelectConfig, SelectEvent,
        DEFAULT_MAX_ROWS,
    };

    // Derive macros
    pub use search_select_macros::Action;

    // Ratatui re-exports
    pub use search_select_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
