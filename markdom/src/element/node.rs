use std::collections::BTreeMap;

use super::Content;
use super::id::generate_id;

/// Markup tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Label,
    Input,
    Select,
    Option,
    Button,
    Ul,
    Li,
    I,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
            Self::Input => "input",
            Self::Select => "select",
            Self::Option => "option",
            Self::Button => "button",
            Self::Ul => "ul",
            Self::Li => "li",
            Self::I => "i",
        }
    }

    /// Void elements have no closing tag and never carry content.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input)
    }

    pub fn parse(name: &str) -> Option<Self> {
        let tag = match name {
            "div" => Self::Div,
            "span" => Self::Span,
            "label" => Self::Label,
            "input" => Self::Input,
            "select" => Self::Select,
            "option" => Self::Option,
            "button" => Self::Button,
            "ul" => Self::Ul,
            "li" => Self::Li,
            "i" => Self::I,
            _ => return None,
        };
        Some(tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Styling hooks
    pub classes: Vec<String>,

    /// Plain attributes (`type`, `value`, `name`, ...).
    pub attrs: BTreeMap<String, String>,

    // State
    /// Whether this element is disabled. Rendered as the `disabled` attribute.
    pub disabled: bool,

    /// State flags rendered as `data-<key>` attributes.
    pub data: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    /// A span holding escaped text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a text input element showing `value`.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self::new(Tag::Input).attr("type", "text").attr("value", value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        for part in class.split_whitespace() {
            if !self.has_class(part) {
                self.classes.push(part.to_string());
            }
        }
        self
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, |el, c| el.class(c))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set a boolean attribute, rendered without a value (`selected`, `autofocus`).
    pub fn flag(mut self, key: impl Into<String>, on: bool) -> Self {
        let key = key.into();
        if on {
            self.attrs.insert(key, String::new());
        } else {
            self.attrs.remove(&key);
        }
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Content
    /// Replace content with trusted raw markup (not escaped when rendered).
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Markup(markup.into());
        self
    }

    pub fn content_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Add a child only when present.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Text content of this element and its descendants, concatenated.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) | Content::Markup(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
