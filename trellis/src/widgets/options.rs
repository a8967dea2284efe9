//! Ordered option sets for choice widgets.

use serde::{Deserialize, Serialize};

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub key: String,
    pub label: String,
}

/// Ordered key → label mapping.
///
/// Keys are unique and iteration follows insertion order. Inserting an
/// existing key replaces its label in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ChoiceOption>", into = "Vec<ChoiceOption>")]
pub struct OptionSet {
    options: Vec<ChoiceOption>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(key, label);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        let label = label.into();
        match self.options.iter_mut().find(|o| o.key == key) {
            Some(existing) => existing.label = label,
            None => self.options.push(ChoiceOption { key, label }),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key == key)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChoiceOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, label) in iter {
            set.insert(key, label);
        }
        set
    }
}

impl From<Vec<ChoiceOption>> for OptionSet {
    fn from(options: Vec<ChoiceOption>) -> Self {
        options.into_iter().map(|o| (o.key, o.label)).collect()
    }
}

impl From<OptionSet> for Vec<ChoiceOption> {
    fn from(set: OptionSet) -> Self {
        set.options
    }
}
