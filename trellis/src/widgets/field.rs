//! Shared field wrapper: label, prefix/suffix slots and the control.
//!
//! ```text
//! div.field.field-<kind>
//!   label.field-label
//!   span.children
//!     span.prefix
//!     <control>
//!     span.suffix
//! ```

use markdom::{Element, Tag};
use serde::{Deserialize, Serialize};

use crate::config::FieldOptions;

/// Which control a field wraps. Only affects the `field-<kind>` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Input,
    Search,
    Select,
    Toggle,
    RadioGroup,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Search => "search",
            Self::Select => "select",
            Self::Toggle => "toggle",
            Self::RadioGroup => "radiogroup",
        }
    }

    /// The root class, e.g. `field-search`.
    pub fn class(&self) -> String {
        format!("field-{}", self.as_str())
    }
}

/// Layout-only wrapper shared by every field. Holds no state.
#[derive(Debug, Clone)]
pub struct FieldLayout {
    kind: FieldKind,
    label: Option<String>,
    prefix: Option<Element>,
    suffix: Option<Element>,
    inline: bool,
    class: Option<String>,
}

impl FieldLayout {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            label: None,
            prefix: None,
            suffix: None,
            inline: false,
            class: None,
        }
    }

    /// Label markup, inserted without escaping.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<Element>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<Element>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Take label, class and inline from `options`.
    pub fn options(mut self, options: &FieldOptions) -> Self {
        self.label = options.label.clone();
        self.class = options.class_name.clone();
        self.inline = options.inline;
        self
    }

    pub fn build(self, children: impl IntoIterator<Item = Element>) -> Element {
        let label = self
            .label
            .filter(|l| !l.is_empty())
            .map(|l| Element::new(Tag::Label).class("field-label").markup(l));

        let slot = Element::span()
            .class("children")
            .maybe_child(self.prefix.map(|p| Element::span().class("prefix").child(p)))
            .children(children)
            .maybe_child(self.suffix.map(|s| Element::span().class("suffix").child(s)));

        let mut root = Element::div().class("field").class(self.kind.class());
        if let Some(class) = self.class {
            root = root.class(class);
        }
        if self.inline {
            root = root.data("inline", "true");
        }

        root.maybe_child(label).child(slot)
    }
}
