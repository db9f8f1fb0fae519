//! Core traits and types for search-select
//!
//! This crate provides the small toolkit the select control is built on:
//!
//! - **Action**: Values an owner application dispatches into its store
//! - **Component**: UI elements that render from props and emit actions
//! - **EventKind**: Key, mouse, resize and focus events delivered to components
//! - **Store**: Owner-side state container with reducer and a dispatch tally
//! - **Event poller**: Blocking task turning terminal input into `EventKind`s
//!
//! # Main loop
//!
//! ```ignore
//! use tokio::sync::mpsc;
//!
//! let (event_tx, mut event_rx) = mpsc::unbounded_channel();
//! let cancel = CancellationToken::new();
//! spawn_event_poller(event_tx, Duration::from_millis(10), cancel.clone());
//!
//! loop {
//!     tokio::select! {
//!         Some(event) = event_rx.recv() => {
//!             for action in component.handle_event(&event, props()) {
//!                 store.dispatch(action);
//!             }
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod bus;
pub mod component;
pub mod event;
pub mod keybindings;
pub mod store;
pub mod testing;

pub use action::{Action, ActionCategory};
pub use component::Component;

pub use bus::{spawn_event_poller, translate};
pub use event::{point_in_rect, EventKind};

pub use keybindings::{format_key_for_display, parse_key_string};

pub use store::{DispatchLog, Reducer, Store};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{
    buffer_rect_to_string_plain, buffer_to_string_plain, char_key, click, ctrl_key, key, typed,
    RenderHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory};
    pub use crate::bus::spawn_event_poller;
    pub use crate::component::Component;
    pub use crate::event::EventKind;
    pub use crate::keybindings::{format_key_for_display, parse_key_string};
    pub use crate::store::{Reducer, Store};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
