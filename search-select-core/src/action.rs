//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to a store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged or sent to multiple handlers
/// - Debug: For debugging and logging
/// - Send + 'static: For async dispatch across threads
///
/// Use `#[derive(Action)]` from `search-select-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Actions that belong to a named group (e.g. `"selection"`, `"search"`)
///
/// Generated by `#[derive(Action)]` from `#[action(category = "...")]` on
/// each variant. A [`Store`](crate::Store) tallies dispatches by category.
pub trait ActionCategory: Action {
    /// Category of this action, `None` if uncategorized
    fn category(&self) -> Option<&'static str>;
}
