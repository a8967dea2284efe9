use std::collections::BTreeMap;

use super::Selector;
use crate::document::Document;
use crate::error::DomError;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn color(property: impl Into<String>, color: &Color) -> Self {
        Self::new(property, color.to_css())
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    selector: Selector,
    declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: &str) -> Result<Self, DomError> {
        Ok(Self {
            source: selector.trim().to_string(),
            selector: Selector::parse(selector)?,
            declarations: Vec::new(),
        })
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn color(mut self, property: impl Into<String>, color: &Color) -> Self {
        self.declarations.push(Declaration::color(property, color));
        self
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

/// Ordered style rules, applied independently of widget behavior.
///
/// Cascade is by source order only: when several matching rules set the
/// same property, the rule added last wins.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn extend(&mut self, other: StyleSheet) {
        self.rules.extend(other.rules);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Resolved declarations for a mounted element, keyed by property.
    pub fn computed(&self, document: &Document, id: &str) -> BTreeMap<String, String> {
        let mut computed = BTreeMap::new();
        let Some(element) = document.get(id) else {
            return computed;
        };
        let ancestors = document.ancestors_of(id);
        for rule in &self.rules {
            if rule.selector.matches(element, &ancestors) {
                for decl in &rule.declarations {
                    computed.insert(decl.property.clone(), decl.value.clone());
                }
            }
        }
        computed
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.source);
            css.push_str(" {\n");
            for decl in &rule.declarations {
                css.push_str(&format!("  {}: {};\n", decl.property, decl.value));
            }
            css.push_str("}\n");
        }
        css
    }
}
