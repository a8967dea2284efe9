//! Element id generation.
//!
//! Outside any scope, ids come from a process-wide counter and are unique
//! for the life of the process (`div-12`).
//!
//! Inside an [`IdScope`] ids are positional: the n-th element created in the
//! scope gets the same id every time the scope is entered again. A view that
//! renders the same structure twice therefore produces the same ids twice,
//! so an event aimed at an element still finds it after a re-render.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

struct Frame {
    prefix: String,
    next: u64,
}

thread_local! {
    static SCOPES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
}

pub(crate) fn generate_id(tag: &str) -> String {
    SCOPES.with(|scopes| match scopes.borrow_mut().last_mut() {
        Some(frame) => {
            let n = frame.next;
            frame.next += 1;
            format!("{}{tag}-{n}", frame.prefix)
        }
        None => {
            let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            format!("{tag}-{n}")
        }
    })
}

/// Guard for a positional id scope. Leaving the scope restores the enclosing
/// one, whose counter is unaffected by what the scope created.
///
/// Scopes belong to the thread that entered them.
#[must_use = "ids are only positional while the guard is alive"]
pub struct IdScope {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl IdScope {
    /// Top-level scope for one render pass. Ids look like `r/div-3`.
    pub fn render() -> Self {
        Self::push("r/".to_string())
    }

    /// Nested scope keyed by a stable id, e.g. a widget's container. Content
    /// created inside does not shift the ids of elements created after it.
    pub fn enter(key: &str) -> Self {
        let parent = SCOPES.with(|scopes| {
            scopes
                .borrow()
                .last()
                .map(|frame| frame.prefix.clone())
                .unwrap_or_default()
        });
        Self::push(format!("{parent}{key}/"))
    }

    fn push(prefix: String) -> Self {
        let depth = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.push(Frame { prefix, next: 0 });
            scopes.len()
        });
        Self {
            depth,
            _not_send: PhantomData,
        }
    }
}

impl Drop for IdScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| scopes.borrow_mut().truncate(self.depth - 1));
    }
}

impl std::fmt::Debug for IdScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdScope").field("depth", &self.depth).finish()
    }
}
