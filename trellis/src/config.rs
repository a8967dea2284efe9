//! Widget and runtime configuration types.
//!
//! Option structs are closed: unknown keys are rejected when deserializing.
//! Arbitrary markup attributes go through [`PassThrough`] instead.

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::LevelFilter;
use markdom::Element;
use serde::{Deserialize, Serialize};

use crate::widgets::DropdownAlignment;

// =============================================================================
// Field options
// =============================================================================

/// Options shared by every field wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldOptions {
    /// Label markup. Rendered as-is; absent or empty omits the label.
    pub label: Option<String>,
    /// Extra class appended to the field root.
    pub class_name: Option<String>,
    /// Lay the label and control out in a row.
    pub inline: bool,
}

/// Options for text controls (`Input`, `Search`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InputOptions {
    pub placeholder: Option<String>,
    pub name: Option<String>,
    pub disabled: bool,
    pub autofocus: bool,
    pub max_length: Option<usize>,
}

impl InputOptions {
    pub(crate) fn apply(&self, mut element: Element) -> Element {
        if let Some(placeholder) = &self.placeholder {
            element = element.attr("placeholder", placeholder.as_str());
        }
        if let Some(name) = &self.name {
            element = element.attr("name", name.as_str());
        }
        if let Some(max) = self.max_length {
            element = element.attr("maxlength", max.to_string());
        }
        element
            .flag("autofocus", self.autofocus)
            .disabled(self.disabled)
    }
}

/// Options for `Select`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SelectOptions {
    pub name: Option<String>,
    pub disabled: bool,
}

/// Options for `RadioGroup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RadioOptions {
    /// Render compact pills.
    pub small: bool,
}

/// Options for `DropdownMenu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuOptions {
    /// Close the menu on any click inside it.
    pub close_on_select: bool,
    pub dropdown_alignment: DropdownAlignment,
    /// Extra class appended to the menu container.
    pub class_name: Option<String>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            close_on_select: true,
            dropdown_alignment: DropdownAlignment::default(),
            class_name: None,
        }
    }
}

// =============================================================================
// PassThrough
// =============================================================================

/// Extra markup attributes forwarded to a widget's control element.
///
/// Keys the widget renders itself are dropped with a warning, as are inline
/// event attributes (`onclick`, `onpointerdown`, ...). `data-*` keys become
/// data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassThrough(BTreeMap<String, String>);

const RESERVED_KEYS: &[&str] = &[
    "id",
    "class",
    "type",
    "value",
    "selected",
    "data-on",
    "data-display",
    "data-open",
    "data-active",
    "data-align",
    "data-inline",
];

/// Event names whose `on<name>` attribute would carry inline script.
const EVENT_ATTRIBUTES: &[&str] = &[
    "abort", "auxclick", "beforeinput", "blur", "change", "click", "contextmenu", "copy",
    "cut", "dblclick", "drag", "dragend", "dragenter", "dragleave", "dragover", "dragstart",
    "drop", "error", "focus", "focusin", "focusout", "input", "invalid", "keydown",
    "keypress", "keyup", "load", "mousedown", "mouseenter", "mouseleave", "mousemove",
    "mouseout", "mouseover", "mouseup", "paste", "pointercancel", "pointerdown",
    "pointerenter", "pointerleave", "pointermove", "pointerout", "pointerover", "pointerup",
    "reset", "scroll", "select", "submit", "toggle", "touchcancel", "touchend", "touchmove",
    "touchstart", "wheel",
];

impl PassThrough {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_reserved(key: &str) -> bool {
        RESERVED_KEYS.contains(&key) || Self::is_event_attribute(key)
    }

    fn is_event_attribute(key: &str) -> bool {
        key.get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
            && EVENT_ATTRIBUTES
                .iter()
                .any(|name| key[2..].eq_ignore_ascii_case(name))
    }

    /// Copy the allowed attributes onto `element`.
    pub fn apply(&self, mut element: Element) -> Element {
        for (key, value) in &self.0 {
            if Self::is_reserved(key) {
                log::warn!(
                    "PassThrough: dropping reserved attribute '{}' on {}",
                    key,
                    element.id
                );
                continue;
            }
            element = match key.strip_prefix("data-") {
                Some(data_key) => element.data(data_key, value.as_str()),
                None => element.attr(key.as_str(), value.as_str()),
            };
        }
        element
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PassThrough {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// =============================================================================
// Runtime and logging
// =============================================================================

/// Runtime behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Render passes allowed to run post-render effects before further
    /// effects are dropped.
    pub max_effect_passes: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_effect_passes: 4,
        }
    }
}

impl RuntimeConfig {
    pub fn max_effect_passes(mut self, passes: usize) -> Self {
        self.max_effect_passes = passes;
        self
    }
}

/// Logger configuration for [`crate::logging::init`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Log file; stdout when unset.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through_drops_reserved_keys() {
        let attrs: PassThrough = [
            ("id", "hijack"),
            ("onclick", "alert(1)"),
            ("aria-label", "Query"),
            ("data-test", "q"),
        ]
        .into_iter()
        .collect();

        let el = attrs.apply(Element::div().id("x"));
        assert_eq!(el.id, "x");
        assert!(!el.has_attr("onclick"));
        assert_eq!(el.get_attr("aria-label").map(String::as_str), Some("Query"));
        assert_eq!(el.get_data("test").map(String::as_str), Some("q"));
    }

    #[test]
    fn pass_through_keeps_non_event_on_attributes() {
        assert!(PassThrough::is_reserved("onclick"));
        assert!(PassThrough::is_reserved("onPointerDown"));
        assert!(!PassThrough::is_reserved("one"));
        assert!(!PassThrough::is_reserved("online"));
        assert!(!PassThrough::is_reserved("on"));

        let attrs = PassThrough::new().with("one", "1").with("oninput", "x()");
        let el = attrs.apply(Element::div());
        assert_eq!(el.get_attr("one").map(String::as_str), Some("1"));
        assert!(!el.has_attr("oninput"));
    }

    #[test]
    fn input_options_render_attributes() {
        let opts = InputOptions {
            placeholder: Some("Find".into()),
            max_length: Some(12),
            autofocus: true,
            ..Default::default()
        };
        let el = opts.apply(Element::text_input(""));
        assert_eq!(el.get_attr("placeholder").map(String::as_str), Some("Find"));
        assert_eq!(el.get_attr("maxlength").map(String::as_str), Some("12"));
        assert!(el.has_attr("autofocus"));
        assert!(!el.disabled);
    }
}
