//! Document-level listeners.
//!
//! Widgets that must observe events anywhere on the page (outside-click
//! dismissal) subscribe here instead of on an element. Every subscription is
//! scoped to the id of the element that owns it and is swept when that
//! element leaves the mounted tree.
//!
//! A subscription made while an event is being dispatched is *pending*: it
//! becomes active only once the outermost dispatch has finished, so the
//! event that caused the subscription is never delivered to it.

use std::sync::{Arc, RwLock, Weak};

use markdom::EventKind;

use crate::handler_context::Listener;

/// Hook run when a listener is removed by the runtime rather than by its owner.
pub type DetachHook = Box<dyn FnOnce() + Send + Sync>;

/// Unique id of a document-level listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

struct ListenerEntry {
    id: ListenerId,
    scope: String,
    kinds: Vec<EventKind>,
    listener: Listener,
    on_detach: Option<DetachHook>,
}

#[derive(Default)]
struct ListenerTable {
    active: Vec<ListenerEntry>,
    pending: Vec<ListenerEntry>,
    /// Nesting depth of dispatches currently running.
    depth: usize,
    next_id: u64,
}

impl ListenerTable {
    fn remove(&mut self, id: ListenerId) -> Option<ListenerEntry> {
        if let Some(pos) = self.active.iter().position(|e| e.id == id) {
            return Some(self.active.remove(pos));
        }
        let pos = self.pending.iter().position(|e| e.id == id)?;
        Some(self.pending.remove(pos))
    }

    fn entry_mut(&mut self, id: ListenerId) -> Option<&mut ListenerEntry> {
        self.active
            .iter_mut()
            .chain(self.pending.iter_mut())
            .find(|e| e.id == id)
    }
}

// =============================================================================
// DocumentListeners
// =============================================================================

/// Shared table of document-level listeners.
#[derive(Clone, Default)]
pub struct DocumentListeners {
    table: Arc<RwLock<ListenerTable>>,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to `kinds` for as long as the returned
    /// [`Subscription`] lives and `scope` stays mounted.
    pub fn subscribe(
        &self,
        scope: impl Into<String>,
        kinds: &[EventKind],
        listener: Listener,
    ) -> Subscription {
        let scope = scope.into();
        let mut table = self
            .table
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        table.next_id += 1;
        let id = ListenerId(table.next_id);
        let deferred = table.depth > 0;
        log::debug!(
            "DocumentListeners::subscribe id={} scope={} kinds={:?} deferred={}",
            id,
            scope,
            kinds,
            deferred
        );

        let entry = ListenerEntry {
            id,
            scope,
            kinds: kinds.to_vec(),
            listener,
            on_detach: None,
        };
        if deferred {
            table.pending.push(entry);
        } else {
            table.active.push(entry);
        }

        Subscription {
            id,
            table: Arc::downgrade(&self.table),
        }
    }

    /// Mark the start of a dispatch. Pending subscriptions are committed when
    /// the last guard is dropped.
    pub fn begin_dispatch(&self) -> DispatchGuard {
        if let Ok(mut table) = self.table.write() {
            table.depth += 1;
        }
        DispatchGuard {
            table: Arc::clone(&self.table),
        }
    }

    /// Whether a listener exists, active or pending.
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.table
            .read()
            .map(|t| t.active.iter().chain(t.pending.iter()).any(|e| e.id == id))
            .unwrap_or(false)
    }

    /// Whether a listener receives events right now.
    pub fn is_active(&self, id: ListenerId) -> bool {
        self.table
            .read()
            .map(|t| t.active.iter().any(|e| e.id == id))
            .unwrap_or(false)
    }

    /// Active listeners for `kind`, in subscription order.
    pub fn snapshot(&self, kind: EventKind) -> Vec<(ListenerId, Listener)> {
        self.table
            .read()
            .map(|t| {
                t.active
                    .iter()
                    .filter(|e| e.kinds.contains(&kind))
                    .map(|e| (e.id, Arc::clone(&e.listener)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of listeners, active or pending.
    pub fn len(&self) -> usize {
        self.table
            .read()
            .map(|t| t.active.len() + t.pending.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn active_len(&self) -> usize {
        self.table.read().map(|t| t.active.len()).unwrap_or(0)
    }

    /// Number of listeners scoped to `scope`.
    pub fn count_for(&self, scope: &str) -> usize {
        self.table
            .read()
            .map(|t| {
                t.active
                    .iter()
                    .chain(t.pending.iter())
                    .filter(|e| e.scope == scope)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Remove every listener whose scope is no longer mounted and run their
    /// detach hooks. Returns how many were removed.
    pub fn sweep(&self, is_connected: impl Fn(&str) -> bool) -> usize {
        let removed: Vec<ListenerEntry> = {
            let Ok(mut table) = self.table.write() else {
                return 0;
            };
            let (keep, gone): (Vec<_>, Vec<_>) = std::mem::take(&mut table.active)
                .into_iter()
                .partition(|e| is_connected(&e.scope));
            table.active = keep;
            let (keep_pending, gone_pending): (Vec<_>, Vec<_>) =
                std::mem::take(&mut table.pending)
                    .into_iter()
                    .partition(|e| is_connected(&e.scope));
            table.pending = keep_pending;
            gone.into_iter().chain(gone_pending).collect()
        };

        let count = removed.len();
        if count > 0 {
            log::debug!("DocumentListeners::sweep removed {} detached listener(s)", count);
        }
        run_detach_hooks(removed);
        count
    }

    /// Remove every listener and run their detach hooks.
    pub fn teardown_all(&self) -> usize {
        let removed: Vec<ListenerEntry> = {
            let Ok(mut table) = self.table.write() else {
                return 0;
            };
            let mut all = std::mem::take(&mut table.active);
            all.append(&mut table.pending);
            all
        };

        let count = removed.len();
        log::debug!("DocumentListeners::teardown_all removed {}", count);
        run_detach_hooks(removed);
        count
    }
}

// Called with the table unlocked: hooks usually drop the owner's
// subscription, which locks the table again.
fn run_detach_hooks(entries: Vec<ListenerEntry>) {
    for mut entry in entries {
        if let Some(hook) = entry.on_detach.take() {
            hook();
        }
    }
}

impl std::fmt::Debug for DocumentListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (active, pending, depth) = self
            .table
            .read()
            .map(|t| (t.active.len(), t.pending.len(), t.depth))
            .unwrap_or_default();
        f.debug_struct("DocumentListeners")
            .field("active", &active)
            .field("pending", &pending)
            .field("depth", &depth)
            .finish()
    }
}

// =============================================================================
// DispatchGuard
// =============================================================================

/// Keeps new subscriptions pending while a dispatch runs.
pub struct DispatchGuard {
    table: Arc<RwLock<ListenerTable>>,
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        let Ok(mut table) = self.table.write() else {
            return;
        };
        table.depth = table.depth.saturating_sub(1);
        if table.depth == 0 && !table.pending.is_empty() {
            let mut pending = std::mem::take(&mut table.pending);
            log::debug!("DispatchGuard: activating {} pending listener(s)", pending.len());
            table.active.append(&mut pending);
        }
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Handle to a document-level listener. Dropping it removes the listener.
pub struct Subscription {
    id: ListenerId,
    table: Weak<RwLock<ListenerTable>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Run `hook` if the runtime removes this listener (scope detached or
    /// runtime unmounted). Not run when the subscription is dropped.
    pub fn on_detach(self, hook: impl FnOnce() + Send + Sync + 'static) -> Self {
        if let Some(shared) = self.table.upgrade()
            && let Ok(mut table) = shared.write()
            && let Some(entry) = table.entry_mut(self.id)
        {
            entry.on_detach = Some(Box::new(hook));
        }
        self
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(table) = self.table.upgrade() else {
            return;
        };
        let removed = match table.write() {
            Ok(mut table) => table.remove(self.id),
            Err(_) => None,
        };
        if removed.is_some() {
            log::debug!("Subscription dropped: {}", self.id);
        }
        // `removed` is dropped here, after the lock is released.
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn noop_handler() -> Listener {
        Arc::new(|_| false)
    }

    #[test]
    fn drop_removes_listener() {
        let listeners = DocumentListeners::new();
        let sub = listeners.subscribe("scope", &[EventKind::Click], noop_handler());
        assert!(listeners.is_active(sub.id()));
        let id = sub.id();
        drop(sub);
        assert!(!listeners.is_registered(id));
        assert!(listeners.is_empty());
    }

    #[test]
    fn subscribe_during_dispatch_is_pending() {
        let listeners = DocumentListeners::new();
        let guard = listeners.begin_dispatch();
        let sub = listeners.subscribe("scope", &[EventKind::Click], noop_handler());
        assert!(listeners.is_registered(sub.id()));
        assert!(!listeners.is_active(sub.id()));
        assert!(listeners.snapshot(EventKind::Click).is_empty());
        drop(guard);
        assert!(listeners.is_active(sub.id()));
        assert_eq!(listeners.snapshot(EventKind::Click).len(), 1);
    }

    #[test]
    fn nested_dispatch_commits_at_outermost() {
        let listeners = DocumentListeners::new();
        let outer = listeners.begin_dispatch();
        let inner = listeners.begin_dispatch();
        let sub = listeners.subscribe("scope", &[EventKind::Click], noop_handler());
        drop(inner);
        assert!(!listeners.is_active(sub.id()));
        drop(outer);
        assert!(listeners.is_active(sub.id()));
    }

    #[test]
    fn sweep_runs_detach_hooks() {
        let listeners = DocumentListeners::new();
        let detached = Arc::new(AtomicUsize::new(0));
        let hook_count = Arc::clone(&detached);
        let gone = listeners
            .subscribe("gone", &[EventKind::Click], noop_handler())
            .on_detach(move || {
                hook_count.fetch_add(1, Ordering::SeqCst);
            });
        let kept = listeners.subscribe("kept", &[EventKind::Click], noop_handler());

        assert_eq!(listeners.sweep(|scope| scope == "kept"), 1);
        assert_eq!(detached.load(Ordering::SeqCst), 1);
        assert!(!listeners.is_registered(gone.id()));
        assert!(listeners.is_active(kept.id()));
        assert_eq!(listeners.count_for("kept"), 1);
    }

    #[test]
    fn dropped_subscription_skips_detach_hook() {
        let listeners = DocumentListeners::new();
        let detached = Arc::new(AtomicUsize::new(0));
        let hook_count = Arc::clone(&detached);
        let sub = listeners
            .subscribe("scope", &[EventKind::Click], noop_handler())
            .on_detach(move || {
                hook_count.fetch_add(1, Ordering::SeqCst);
            });
        drop(sub);
        assert_eq!(listeners.teardown_all(), 0);
        assert_eq!(detached.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn snapshot_filters_by_kind() {
        let listeners = DocumentListeners::new();
        let _a = listeners.subscribe("a", &[EventKind::Click], noop_handler());
        let _b = listeners.subscribe("b", &[EventKind::PointerDown, EventKind::Click], noop_handler());
        assert_eq!(listeners.snapshot(EventKind::Click).len(), 2);
        assert_eq!(listeners.snapshot(EventKind::PointerDown).len(), 1);
        assert!(listeners.snapshot(EventKind::Input).is_empty());
    }
}
