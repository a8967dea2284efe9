//! Icon placeholders.
//!
//! Icons are opaque content: the toolkit only emits a hook element that a
//! stylesheet or asset pipeline fills in.

use markdom::{Element, Tag};

/// Built-in icons used by the field widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Search,
    Clear,
    ChevronDown,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Clear => "clear",
            Self::ChevronDown => "chevron-down",
        }
    }

    /// `<i class="icon icon-<name>">`
    pub fn element(&self) -> Element {
        Element::new(Tag::I)
            .class("icon")
            .class(format!("icon-{}", self.name()))
    }
}

impl From<Icon> for Element {
    fn from(icon: Icon) -> Self {
        icon.element()
    }
}
