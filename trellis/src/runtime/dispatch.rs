//! Event dispatch for the runtime.
//!
//! One event is processed in two phases:
//! 1. Bubble: element handlers from the target up to the root
//! 2. Document: document-level listeners active when the dispatch began,
//!    in subscription order
//!
//! Listeners subscribed by either phase stay pending until the dispatch
//! finishes.

use markdom::{Document, Event};

use super::listeners::DocumentListeners;
use crate::handler_context::{HandlerContext, HandlerRegistry};

// =============================================================================
// DispatchResult
// =============================================================================

/// Result of event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// This many element handlers ran and document listeners acted.
    Handled(usize),
    /// No handler ran and no listener acted.
    NotHandled,
    /// The target id is not part of the mounted tree; nothing ran.
    StaleTarget,
    /// The runtime is not mounted; nothing ran.
    NotMounted,
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchResult::Handled(_))
    }
}

// =============================================================================
// dispatch_event
// =============================================================================

pub(crate) fn dispatch_event(
    event: &Event,
    document: &Document,
    registry: &HandlerRegistry,
    listeners: &DocumentListeners,
) -> DispatchResult {
    let kind = event.kind();
    let target = event.target();

    if let Some(target) = target
        && !document.is_connected(target)
    {
        log::debug!("dispatch: ignoring {} on stale target {}", kind.as_str(), target);
        return DispatchResult::StaleTarget;
    }

    let guard = listeners.begin_dispatch();
    let document_listeners = listeners.snapshot(kind);
    let mut handled = 0;

    // Bubble phase
    if let Some(target) = target {
        for id in document.ancestry(target) {
            if let Some(handler) = registry.get(id, kind) {
                log::trace!("dispatch: {} handler on {}", kind.as_str(), id);
                handler(&HandlerContext::new(event, Some(id), document, listeners));
                handled += 1;
            }
        }
    }

    // Document phase. Listeners removed by an earlier handler are skipped;
    // only listeners that acted count as handling the event.
    for (id, listener) in document_listeners {
        if !listeners.is_active(id) {
            continue;
        }
        let acted = listener(&HandlerContext::new(event, None, document, listeners));
        log::trace!("dispatch: {} document {} acted={}", kind.as_str(), id, acted);
        if acted {
            handled += 1;
        }
    }

    drop(guard);

    if handled == 0 {
        DispatchResult::NotHandled
    } else {
        DispatchResult::Handled(handled)
    }
}
