//! Select widget - a controlled native choice list.

use std::sync::Arc;

use markdom::{Element, EventKind, Tag};

use super::field::{FieldKind, FieldLayout};
use super::icon::Icon;
use super::options::OptionSet;
use crate::config::{FieldOptions, PassThrough, SelectOptions};
use crate::handler_context::{Callback, noop};
use crate::HandlerRegistry;

/// A controlled select builder.
///
/// Options render in set order; the one whose key equals the value is
/// marked `selected`. Change events carrying an unknown key are ignored.
#[derive(Clone)]
pub struct Select {
    value: String,
    options: OptionSet,
    on_change: Callback<String>,
    field: FieldOptions,
    select: SelectOptions,
    attrs: PassThrough,
}

impl Select {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            options: OptionSet::default(),
            on_change: noop(),
            field: FieldOptions::default(),
            select: SelectOptions::default(),
            attrs: PassThrough::default(),
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

    pub fn field_options(mut self, options: FieldOptions) -> Self {
        self.field = options;
        self
    }

    pub fn select_options(mut self, options: SelectOptions) -> Self {
        self.select = options;
        self
    }

    pub fn attrs(mut self, attrs: PassThrough) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        log::debug!(
            "Select::build value={} options={}",
            self.value,
            self.options.len()
        );

        let choices = self.options.iter().map(|opt| {
            Element::new(Tag::Option)
                .attr("value", opt.key.as_str())
                .flag("selected", opt.key == self.value)
                .content_text(opt.label.as_str())
        });

        let mut control = Element::new(Tag::Select)
            .children(choices)
            .disabled(self.select.disabled);
        if let Some(name) = &self.select.name {
            control = control.attr("name", name.as_str());
        }
        let control = self.attrs.apply(control);

        if !self.select.disabled {
            let on_change = self.on_change;
            let options = self.options;
            registry.register(
                &control.id,
                EventKind::Change,
                Arc::new(move |cx| {
                    let Some(next) = cx.value() else {
                        return;
                    };
                    if options.contains(next) {
                        on_change(next.to_string());
                    } else {
                        log::debug!("Select: ignoring unknown option '{}'", next);
                    }
                }),
            );
        }

        FieldLayout::new(FieldKind::Select)
            .options(&self.field)
            .suffix(Icon::ChevronDown)
            .build([control])
    }
}
