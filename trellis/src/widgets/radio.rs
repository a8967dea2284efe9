//! RadioGroup widget - one pill per option, exactly one active.

use std::sync::Arc;

use markdom::Element;

use super::field::{FieldKind, FieldLayout};
use super::options::OptionSet;
use super::pill::Pill;
use crate::config::{FieldOptions, RadioOptions};
use crate::handler_context::{Callback, noop};
use crate::HandlerRegistry;

/// A controlled radio-pill group builder.
///
/// # Example
///
/// ```ignore
/// RadioGroup::new(period.get())
///     .options([("daily", "Daily"), ("weekly", "Weekly")].into_iter().collect())
///     .on_change(move |key| period.set(key))
///     .build(registry)
/// ```
#[derive(Clone)]
pub struct RadioGroup {
    value: String,
    options: OptionSet,
    on_change: Callback<String>,
    field: FieldOptions,
    radio: RadioOptions,
}

impl RadioGroup {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            options: OptionSet::default(),
            on_change: noop(),
            field: FieldOptions::default(),
            radio: RadioOptions::default(),
        }
    }

    pub fn options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    pub fn on_change(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_change = Arc::new(f);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = Some(label.into());
        self
    }

    pub fn small(mut self, small: bool) -> Self {
        self.radio.small = small;
        self
    }

    pub fn field_options(mut self, options: FieldOptions) -> Self {
        self.field = options;
        self
    }

    pub fn radio_options(mut self, options: RadioOptions) -> Self {
        self.radio = options;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        log::debug!(
            "RadioGroup::build value={} options={}",
            self.value,
            self.options.len()
        );

        let pills: Vec<Element> = self
            .options
            .iter()
            .map(|opt| {
                let on_change = Arc::clone(&self.on_change);
                let key = opt.key.clone();
                Pill::new(opt.label.as_str())
                    .primary(true)
                    .small(self.radio.small)
                    .active(opt.key == self.value)
                    .on_click(move || on_change(key.clone()))
                    .build(registry)
            })
            .collect();

        FieldLayout::new(FieldKind::RadioGroup)
            .options(&self.field)
            .build(pills)
    }
}
