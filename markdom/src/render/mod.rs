//! Markup serialization.
//!
//! Output is deterministic: `id`, then `class`, then plain attributes in key
//! order, then `disabled`, then `data-*` attributes in key order.

use std::fmt::Write;

use crate::element::{Content, Element};

pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out);
    out
}

fn render_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if !element.id.is_empty() {
        push_attr(out, "id", &element.id);
    }
    if !element.classes.is_empty() {
        push_attr(out, "class", &element.classes.join(" "));
    }
    for (key, value) in &element.attrs {
        if value.is_empty() {
            let _ = write!(out, " {key}");
        } else {
            push_attr(out, key, value);
        }
    }
    if element.disabled {
        out.push_str(" disabled");
    }
    for (key, value) in &element.data {
        push_attr(out, &format!("data-{key}"), value);
    }

    if element.tag.is_void() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Markup(markup) => out.push_str(markup),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, " {key}=\"{}\"", escape(value));
}

/// Escape text for use in markup content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
