//! Search widget - a text field with a search icon and a clear button.

use std::sync::Arc;

use markdom::Element;

use super::field::{FieldKind, FieldLayout};
use super::icon::Icon;
use super::input::text_control;
use crate::config::{FieldOptions, InputOptions, PassThrough};
use crate::handler_context::{Callback, noop};
use crate::HandlerRegistry;

/// A controlled search box builder.
///
/// The clear icon is shown only while the value is non-empty; clicking it
/// reports an empty value.
#[derive(Clone)]
pub struct Search {
    value: String,
    on_change: Callback<String>,
    field: FieldOptions,
    options: InputOptions,
    attrs: PassThrough,
}

impl Search {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_change: noop(),
            field: FieldOptions::default(),
            options: InputOptions::default(),
            attrs: PassThrough::default(),
        }
    }

    pub fn on_change(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_change = Arc::new(f);
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

    pub fn options(mut self, options: InputOptions) -> Self {
        self.options = options;
        self
    }

    pub fn attrs(mut self, attrs: PassThrough) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let visible = !self.value.is_empty();
        log::debug!("Search::build clear_visible={}", visible);

        let clear = Icon::Clear
            .element()
            .data("display", visible.to_string());
        if visible && !self.options.disabled {
            let on_change = Arc::clone(&self.on_change);
            registry.on_click(&clear.id, move |_| on_change(String::new()));
        }

        let control = text_control(
            &self.value,
            &self.options,
            &self.attrs,
            self.on_change,
            registry,
        );

        FieldLayout::new(FieldKind::Search)
            .options(&self.field)
            .prefix(Icon::Search)
            .suffix(clear)
            .build([control])
    }
}
