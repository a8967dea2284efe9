//! Pill widget - a rounded button with an active state.

use std::sync::Arc;

use markdom::{Element, Tag};

use crate::HandlerRegistry;

/// A pill button builder.
///
/// # Example
///
/// ```ignore
/// Pill::new("Daily")
///     .active(period == "daily")
///     .on_click(move || select("daily"))
///     .build(registry)
/// ```
#[derive(Clone, Default)]
pub struct Pill {
    label: String,
    id: Option<String>,
    active: bool,
    disabled: bool,
    small: bool,
    primary: bool,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Pill {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    /// Build the pill element.
    ///
    /// Registers the click handler if provided and not disabled.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let mut elem = Element::new(Tag::Button)
            .attr("type", "button")
            .class("pill")
            .content_text(self.label)
            .disabled(self.disabled)
            .data("active", self.active.to_string());
        if let Some(id) = self.id {
            elem = elem.id(id);
        }
        if self.primary {
            elem = elem.class("pill-primary");
        }
        if self.small {
            elem = elem.class("pill-small");
        }

        // Only register handler if not disabled
        if !self.disabled
            && let Some(on_click) = self.on_click
        {
            registry.on_click(&elem.id, move |_| on_click());
        }

        elem
    }
}

impl std::fmt::Debug for Pill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pill")
            .field("label", &self.label)
            .field("active", &self.active)
            .field("disabled", &self.disabled)
            .finish()
    }
}
