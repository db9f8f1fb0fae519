//! Owner-side state store
//!
//! Components keep their own UI state; the application that embeds them keeps
//! everything it learns from their notifications in a `Store`. Every dispatch
//! is tallied by action category so the owner can tell how often the control
//! reported a selection or a search.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::ActionCategory;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Running tally of the actions a store has processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchLog {
    total: usize,
    changed: usize,
    by_category: BTreeMap<&'static str, usize>,
}

impl DispatchLog {
    fn record(&mut self, category: Option<&'static str>, changed: bool) {
        self.total += 1;
        if changed {
            self.changed += 1;
        }
        if let Some(category) = category {
            *self.by_category.entry(category).or_default() += 1;
        }
    }

    /// Actions dispatched so far
    pub fn total(&self) -> usize {
        self.total
    }

    /// Dispatches the reducer reported as a state change
    pub fn changed(&self) -> usize {
        self.changed
    }

    /// Dispatches whose action belongs to `category`
    pub fn category_count(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }
}

/// State container with a reducer
///
/// # Example
/// ```ignore
/// #[derive(Default)]
/// struct OwnerState {
///     chosen: Option<serde_json::Value>,
/// }
///
/// #[derive(Action, Clone, Debug)]
/// enum OwnerAction {
///     #[action(category = "selection")]
///     SelectionChanged(Option<serde_json::Value>),
/// }
///
/// fn reducer(state: &mut OwnerState, action: OwnerAction) -> bool {
///     match action {
///         OwnerAction::SelectionChanged(value) => {
///             state.chosen = value;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(OwnerState::default(), reducer);
/// store.dispatch(OwnerAction::SelectionChanged(None));
/// assert_eq!(store.log().category_count("selection"), 1);
/// ```
pub struct Store<S, A: ActionCategory> {
    state: S,
    reducer: Reducer<S, A>,
    log: DispatchLog,
    _marker: PhantomData<A>,
}

impl<S, A: ActionCategory> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            log: DispatchLog::default(),
            _marker: PhantomData,
        }
    }

    /// Dispatch an action to the store
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let name = action.name();
        let category = action.category();
        let changed = (self.reducer)(&mut self.state, action);
        self.log.record(category, changed);
        tracing::debug!(action = name, category, changed, "Action processed");
        changed
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Tally of everything dispatched so far
    pub fn log(&self) -> &DispatchLog {
        &self.log
    }
}
