use std::borrow::Cow;

use crate::element::{Element, Tag};
use crate::error::DomError;

/// An attribute condition inside a compound selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatch {
    pub name: String,
    /// `None` tests for presence only.
    pub value: Option<String>,
}

/// One compound: `tag#id.class[attr=value]`, every part optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub tag: Option<Tag>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrMatch>,
}

impl Compound {
    pub fn matches(&self, element: &Element) -> bool {
        if self.tag.is_some_and(|t| t != element.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| *id != element.id) {
            return false;
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match attribute(element, &a.name) {
            Some(actual) => a.value.as_ref().is_none_or(|v| *v == actual),
            None => false,
        })
    }
}

/// Descendant-combinator selector: compounds separated by whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let compounds = input
            .split_whitespace()
            .map(|part| parse_compound(input, part))
            .collect::<Result<Vec<_>, _>>()?;
        if compounds.is_empty() {
            return Err(DomError::invalid_selector(input, "empty selector"));
        }
        Ok(Self { compounds })
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Match `element` given its ancestors, nearest first.
    pub fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }

        // Greedy right-to-left walk is exact for descendant-only chains.
        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors {
            match remaining.peek() {
                Some(compound) if compound.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }
}

impl std::str::FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Resolve an attribute the way markup renders it.
fn attribute<'a>(element: &'a Element, name: &str) -> Option<Cow<'a, str>> {
    match name {
        "id" => Some(Cow::Borrowed(element.id.as_str())),
        "class" => Some(Cow::Owned(element.classes.join(" "))),
        "disabled" => element.disabled.then_some(Cow::Borrowed("")),
        _ => match name.strip_prefix("data-") {
            Some(key) => element.get_data(key).map(|v| Cow::Borrowed(v.as_str())),
            None => element.get_attr(name).map(|v| Cow::Borrowed(v.as_str())),
        },
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(selector: &str, part: &str) -> Result<Compound, DomError> {
    let mut compound = Compound::default();
    let mut chars = part.chars().peekable();

    let take_ident = |chars: &mut std::iter::Peekable<std::str::Chars<'_>>| {
        let mut ident = String::new();
        while let Some(&c) = chars.peek() {
            if !is_ident_char(c) {
                break;
            }
            ident.push(c);
            chars.next();
        }
        ident
    };

    if chars.peek() == Some(&'*') {
        chars.next();
    } else if chars.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        let name = take_ident(&mut chars);
        let tag = Tag::parse(&name)
            .ok_or_else(|| DomError::invalid_selector(selector, "unknown tag"))?;
        compound.tag = Some(tag);
    }

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                let id = take_ident(&mut chars);
                if id.is_empty() {
                    return Err(DomError::invalid_selector(selector, "empty id"));
                }
                compound.id = Some(id);
            }
            '.' => {
                let class = take_ident(&mut chars);
                if class.is_empty() {
                    return Err(DomError::invalid_selector(selector, "empty class"));
                }
                compound.classes.push(class);
            }
            '[' => {
                let name = take_ident(&mut chars);
                if name.is_empty() {
                    return Err(DomError::invalid_selector(selector, "empty attribute name"));
                }
                let value = match chars.next() {
                    Some(']') => None,
                    Some('=') => {
                        let mut value = String::new();
                        let mut closed = false;
                        for c in chars.by_ref() {
                            if c == ']' {
                                closed = true;
                                break;
                            }
                            value.push(c);
                        }
                        if !closed {
                            return Err(DomError::invalid_selector(selector, "unclosed attribute"));
                        }
                        Some(value.trim_matches(|c| c == '"' || c == '\'').to_string())
                    }
                    _ => return Err(DomError::invalid_selector(selector, "unclosed attribute")),
                };
                compound.attrs.push(AttrMatch { name, value });
            }
            _ => return Err(DomError::invalid_selector(selector, "unexpected character")),
        }
    }

    Ok(compound)
}
