//! Trellis runtime - mounts a view, routes events and re-renders.
//!
//! The loop is cooperative and single-threaded: every event is dispatched
//! fully, then the view renders again, the new tree replaces the mounted
//! one, listeners whose scope left the tree are swept, and effects queued by
//! the render run.
//!
//! Each render runs inside a positional [`IdScope`], so an unchanged view
//! yields unchanged element ids and a pointer-down/click pair lands on the
//! same element even when the pointer-down caused a re-render.

mod dispatch;
mod listeners;

use markdom::{Document, Element, Event, IdScope, MouseButton};

use crate::config::RuntimeConfig;
use crate::error::TrellisError;
use crate::handler_context::HandlerRegistry;

pub use dispatch::DispatchResult;
pub use listeners::{DetachHook, DispatchGuard, DocumentListeners, ListenerId, Subscription};

// =============================================================================
// View
// =============================================================================

/// Something that renders an element tree, registering its handlers.
pub trait View {
    fn render(&self, registry: &HandlerRegistry) -> Element;
}

impl<F> View for F
where
    F: Fn(&HandlerRegistry) -> Element,
{
    fn render(&self, registry: &HandlerRegistry) -> Element {
        self(registry)
    }
}

// =============================================================================
// Runtime
// =============================================================================

/// Owns the mounted document and everything that routes events into it.
pub struct Runtime<V: View> {
    view: V,
    document: Document,
    registry: HandlerRegistry,
    listeners: DocumentListeners,
    config: RuntimeConfig,
    mounted: bool,
}

impl<V: View> Runtime<V> {
    pub fn new(view: V) -> Self {
        Self::with_config(view, RuntimeConfig::default())
    }

    pub fn with_config(view: V, config: RuntimeConfig) -> Self {
        Self {
            view,
            document: Document::new(),
            registry: HandlerRegistry::new(),
            listeners: DocumentListeners::new(),
            config,
            mounted: false,
        }
    }

    /// Render the view for the first time.
    pub fn mount(&mut self) -> Result<(), TrellisError> {
        log::debug!("Runtime::mount");
        self.render()?;
        self.mounted = true;
        Ok(())
    }

    /// Render again without an event, e.g. after caller state changed.
    pub fn refresh(&mut self) -> Result<(), TrellisError> {
        if !self.mounted {
            return Ok(());
        }
        self.render()
    }

    /// Dispatch one event and re-render if anything handled it.
    pub fn dispatch(&mut self, event: Event) -> Result<DispatchResult, TrellisError> {
        if !self.mounted {
            log::debug!("Runtime::dispatch: not mounted, dropping {:?}", event.kind());
            return Ok(DispatchResult::NotMounted);
        }

        let result =
            dispatch::dispatch_event(&event, &self.document, &self.registry, &self.listeners);
        if result.is_handled() {
            self.render()?;
        }
        Ok(result)
    }

    /// Pointer-down then click on `id`, as a primary-button press does.
    pub fn click(&mut self, id: &str) -> Result<DispatchResult, TrellisError> {
        self.dispatch(Event::pointer_down(id))?;
        self.dispatch(Event::click(id))
    }

    /// Pointer-down then click on the document background.
    pub fn click_outside(&mut self) -> Result<DispatchResult, TrellisError> {
        let button = MouseButton::Left;
        self.dispatch(Event::PointerDown {
            target: None,
            button,
        })?;
        self.dispatch(Event::Click {
            target: None,
            button,
        })
    }

    /// User edit of a text control.
    pub fn input(&mut self, id: &str, value: &str) -> Result<DispatchResult, TrellisError> {
        self.dispatch(Event::Input {
            target: id.to_string(),
            value: value.to_string(),
        })
    }

    /// User choice on a select control.
    pub fn change(&mut self, id: &str, value: &str) -> Result<DispatchResult, TrellisError> {
        self.dispatch(Event::Change {
            target: id.to_string(),
            value: value.to_string(),
        })
    }

    /// Id of the first mounted element matching `selector`.
    pub fn find_id(&self, selector: &str) -> Result<Option<String>, TrellisError> {
        Ok(self.document.select(selector)?.map(|el| el.id.clone()))
    }

    /// Remove every listener and the mounted tree. Later events are no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        log::debug!("Runtime::unmount");
        self.mounted = false;
        self.listeners.teardown_all();
        self.registry.clear();
        drop(self.registry.take_effects());
        self.document.clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn listeners(&self) -> &DocumentListeners {
        &self.listeners
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn to_html(&self) -> String {
        self.document.to_html()
    }

    fn render(&mut self) -> Result<(), TrellisError> {
        let mut passes = 0;
        loop {
            // Handlers go into a fresh registry that replaces the live one
            // only once the tree is mounted, so a rejected tree leaves the
            // mounted page wired.
            let registry = HandlerRegistry::new();
            let root = {
                let _ids = IdScope::render();
                self.view.render(&registry)
            };
            if let Err(e) = self.document.mount(root) {
                log::warn!("Runtime: render rejected, keeping previous tree: {}", e);
                drop(registry.take_effects());
                return Err(e.into());
            }
            self.registry = registry;

            let document = &self.document;
            self.listeners.sweep(|scope| document.is_connected(scope));

            let effects = self.registry.take_effects();
            if effects.is_empty() {
                return Ok(());
            }
            if passes >= self.config.max_effect_passes {
                log::warn!(
                    "Runtime: dropping {} effect(s) after {} render passes",
                    effects.len(),
                    passes
                );
                return Ok(());
            }

            log::trace!("Runtime: running {} effect(s)", effects.len());
            for effect in effects {
                effect();
            }
            passes += 1;
        }
    }
}

impl<V: View> Drop for Runtime<V> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<V: View> std::fmt::Debug for Runtime<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("mounted", &self.mounted)
            .field("nodes", &self.document.len())
            .field("registry", &self.registry)
            .field("listeners", &self.listeners)
            .finish()
    }
}
