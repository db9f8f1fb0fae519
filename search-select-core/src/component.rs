//! Component trait for UI elements driven by props

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI component that renders based on props and emits actions
///
/// Components follow these rules:
/// 1. Props contain the read-only data owned by the embedding application
/// 2. `handle_event` returns the owner's actions, never mutates owner state
/// 3. `render` draws from props plus the component's own UI state
///
/// Internal UI state (cursor, focus target, scroll position, current search text)
/// lives in `&mut self`. Anything the owner cares about leaves the component as an
/// action built through a callback in props.
///
/// # Focus
///
/// Components receive `EventKind` rather than a routed event with context.
/// Focus entering or leaving a component is delivered as
/// [`EventKind::FocusIn`] / [`EventKind::FocusOut`] by whoever owns focus routing.
///
/// # Example
///
/// ```ignore
/// use search_select::{Component, EventKind, Frame, Rect};
///
/// struct Counter;
///
/// struct CounterProps {
///     count: i32,
///     on_step: fn(i32) -> AppAction,
/// }
///
/// impl Component<AppAction> for Counter {
///     type Props<'a> = CounterProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         if let EventKind::Key(key) = event {
///             match key.code {
///                 KeyCode::Up => return Some((props.on_step)(1)),
///                 KeyCode::Down => return Some((props.on_step)(-1)),
///                 _ => {}
///             }
///         }
///         None
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("Count: {}", props.count);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `vec![...]` - multiple actions, in emission order
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
