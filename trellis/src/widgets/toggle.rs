//! ToggleField widget - an on/off switch that owns its state.
//!
//! Unlike the other fields the toggle is uncontrolled: it is seeded once
//! from `initial` and afterwards only clicks change it. Keep the same
//! `ToggleField` across renders; building a new one starts a new switch.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use markdom::Element;

use super::field::{FieldKind, FieldLayout};
use crate::config::{FieldOptions, PassThrough};
use crate::handler_context::{Callback, noop};
use crate::{HandlerRegistry, State};

static NEXT_TOGGLE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable element id of a toggle's root, `__toggle_<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToggleId(u64);

impl ToggleId {
    fn next() -> Self {
        Self(NEXT_TOGGLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ToggleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__toggle_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ToggleState {
    is_active: bool,
    /// Whether the initial state has been confirmed to `on_change`.
    announced: bool,
}

/// An on/off switch.
///
/// `on_change` receives the new state after every click. By default it is
/// also called once after the first render with the initial state; turn
/// that off with [`confirm_initial(false)`](Self::confirm_initial).
#[derive(Clone)]
pub struct ToggleField {
    id: ToggleId,
    state: State<ToggleState>,
    on_change: Callback<bool>,
    confirm_initial: bool,
    field: FieldOptions,
    attrs: PassThrough,
}

impl ToggleField {
    pub fn new(initial: bool) -> Self {
        Self {
            id: ToggleId::next(),
            state: State::new(ToggleState {
                is_active: initial,
                announced: false,
            }),
            on_change: noop(),
            confirm_initial: true,
            field: FieldOptions::default(),
            attrs: PassThrough::default(),
        }
    }

    pub fn on_change(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_change = Arc::new(f);
        self
    }

    /// Report the initial state to `on_change` after the first render.
    pub fn confirm_initial(mut self, confirm: bool) -> Self {
        self.confirm_initial = confirm;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = Some(label.into());
        self
    }

    pub fn field_options(mut self, options: FieldOptions) -> Self {
        self.field = options;
        self
    }

    pub fn attrs(mut self, attrs: PassThrough) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn id(&self) -> &ToggleId {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.state.with(|s| s.is_active)
    }

    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        let id = self.id.to_string();
        let mut first_build = false;
        self.state.update(|s| {
            first_build = !s.announced;
            s.announced = true;
        });
        let is_active = self.is_active();
        log::debug!("ToggleField::build id={} on={}", id, is_active);

        if first_build && self.confirm_initial {
            let state = self.state.clone();
            let on_change = Arc::clone(&self.on_change);
            registry.after_render(move || {
                let current = state.with(|s| s.is_active);
                log::debug!("ToggleField: confirming initial state {}", current);
                on_change(current);
            });
        }

        // Clicks anywhere inside the field bubble up to the root.
        let state = self.state.clone();
        let on_change = Arc::clone(&self.on_change);
        registry.on_click(&id, move |_| {
            let mut next = false;
            state.update(|s| {
                s.is_active = !s.is_active;
                next = s.is_active;
            });
            on_change(next);
        });

        let root = FieldLayout::new(FieldKind::Toggle)
            .options(&self.field)
            .build([Element::div().class("toggle")]);
        self.attrs
            .apply(root)
            .id(id)
            .data("on", is_active.to_string())
    }
}

impl std::fmt::Debug for ToggleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleField")
            .field("id", &self.id)
            .field("state", &self.state.get())
            .field("confirm_initial", &self.confirm_initial)
            .finish()
    }
}
