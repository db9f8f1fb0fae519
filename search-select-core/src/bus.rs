//! Terminal input feed for the owner's main loop

use crate::event::EventKind;
use crossterm::event::{self, Event, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Read terminal input on a blocking thread and forward it as [`EventKind`]s
///
/// Each poll waits at most `poll_timeout`, so cancelling the token stops the
/// task within one timeout. The task also stops once the receiver is dropped.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !cancel.is_cancelled() {
            match event::poll(poll_timeout) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!(error = %e, "Terminal poll failed, stopping input");
                    return;
                }
            }

            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Terminal read failed");
                    continue;
                }
            };

            if let Some(kind) = translate(event) {
                if tx.send(kind).is_err() {
                    debug!("Event channel closed, stopping input");
                    return;
                }
            }
        }
        debug!("Input cancelled");
    })
}

/// Map a crossterm event onto what components react to
///
/// Mouse motion without a button, the scroll wheel, paste and terminal focus
/// changes have no meaning to the select control and map to `None`. Focus for
/// a component is decided by its owner, not by the terminal window.
pub fn translate(event: Event) -> Option<EventKind> {
    match event {
        Event::Key(key) => Some(EventKind::Key(key)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => None,
            _ => Some(EventKind::Mouse(mouse)),
        },
        Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}
