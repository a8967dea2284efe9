//! Handler context bundle and per-render handler registry.
//!
//! This module provides:
//! - `Handler`: closure type for element handlers
//! - `Listener`: closure type for document listeners
//! - `HandlerContext`: what a handler can see while an event is dispatched
//! - `HandlerRegistry`: handlers keyed by (element_id, event kind), plus the
//!   post-render effects queued by the current render

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use markdom::{Document, Event, EventKind};

use crate::runtime::DocumentListeners;

// =============================================================================
// Handler Types
// =============================================================================

/// A handler closure that receives a HandlerContext.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// A document-level listener. Returns whether it acted on the event; events
/// no listener or handler acted on leave the page as it is.
pub type Listener = Arc<dyn Fn(&HandlerContext) -> bool + Send + Sync>;

/// Value-change notification handed to widgets by their caller.
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Work scheduled by a render, run once the rendered tree is mounted.
pub type Effect = Box<dyn FnOnce() + Send>;

/// The callback used when a caller supplies none.
pub fn noop<T>() -> Callback<T> {
    Arc::new(|_| {})
}

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to handlers while one event is dispatched.
///
/// The document is read-only for the whole dispatch; structural changes
/// happen in the re-render that follows it.
pub struct HandlerContext<'a> {
    event: &'a Event,
    /// Element whose handler is running; `None` for document listeners.
    current_target: Option<&'a str>,
    document: &'a Document,
    listeners: &'a DocumentListeners,
}

impl<'a> HandlerContext<'a> {
    pub fn new(
        event: &'a Event,
        current_target: Option<&'a str>,
        document: &'a Document,
        listeners: &'a DocumentListeners,
    ) -> Self {
        Self {
            event,
            current_target,
            document,
            listeners,
        }
    }

    pub fn event(&self) -> &Event {
        self.event
    }

    /// The element the event was aimed at.
    pub fn target(&self) -> Option<&str> {
        self.event.target()
    }

    pub fn current_target(&self) -> Option<&str> {
        self.current_target
    }

    /// Value carried by input/change events.
    pub fn value(&self) -> Option<&str> {
        self.event.value()
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    /// Document-level listener table, for widgets that watch the whole page.
    pub fn listeners(&self) -> &DocumentListeners {
        self.listeners
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event kind) to handler closures. Cleared at the start
/// of every render so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, EventKind), Handler>>>,
    effects: Arc<Mutex<Vec<Effect>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, kind: EventKind, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), kind), handler);
        }
    }

    /// Register a click handler.
    pub fn on_click<F>(&self, element_id: &str, f: F)
    where
        F: Fn(&HandlerContext) + Send + Sync + 'static,
    {
        self.register(element_id, EventKind::Click, Arc::new(f));
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, kind: EventKind) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), kind))
            .cloned()
    }

    /// Queue an effect to run after the current render is mounted.
    pub fn after_render(&self, effect: impl FnOnce() + Send + 'static) {
        if let Ok(mut effects) = self.effects.lock() {
            effects.push(Box::new(effect));
        }
    }

    /// Drain queued effects.
    pub fn take_effects(&self) -> Vec<Effect> {
        self.effects
            .lock()
            .map(|mut effects| std::mem::take(&mut *effects))
            .unwrap_or_default()
    }

    /// Clear all handlers.
    ///
    /// Called at the start of every render.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pending = self.effects.lock().map(|e| e.len()).unwrap_or(0);
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .field("pending_effects", &pending)
            .finish()
    }
}
