//! Input widget - a controlled single-line text field.

use std::sync::Arc;

use markdom::{Element, EventKind};

use super::field::{FieldKind, FieldLayout};
use crate::config::{FieldOptions, InputOptions, PassThrough};
use crate::handler_context::{Callback, noop};
use crate::HandlerRegistry;

/// A controlled text input builder.
///
/// The caller owns the value: the widget renders whatever it is given and
/// reports edits through `on_change`.
///
/// # Example
///
/// ```ignore
/// Input::new(name.get())
///     .label("Name")
///     .on_change({
///         let name = name.clone();
///         move |next| name.set(next)
///     })
///     .build(registry)
/// ```
#[derive(Clone)]
pub struct Input {
    value: String,
    on_change: Callback<String>,
    field: FieldOptions,
    options: InputOptions,
    attrs: PassThrough,
}

impl Input {
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
        log::debug!("Input::build value_len={}", self.value.len());
        let control = text_control(
            &self.value,
            &self.options,
            &self.attrs,
            self.on_change,
            registry,
        );
        FieldLayout::new(FieldKind::Input)
            .options(&self.field)
            .build([control])
    }
}

/// `<input type="text">` forwarding user edits to `on_change`.
pub(crate) fn text_control(
    value: &str,
    options: &InputOptions,
    attrs: &PassThrough,
    on_change: Callback<String>,
    registry: &HandlerRegistry,
) -> Element {
    let control = attrs.apply(options.apply(Element::text_input(value)));
    if !options.disabled {
        registry.register(
            &control.id,
            EventKind::Input,
            Arc::new(move |cx| {
                if let Some(next) = cx.value() {
                    on_change(next.to_string());
                }
            }),
        );
    }
    control
}
