//! Error types

/// Structural errors raised while indexing a tree or parsing selectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Two elements in one mounted tree share an id.
    #[error("Duplicate element id '{0}' in mounted tree")]
    DuplicateId(String),

    /// A selector string could not be parsed.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        selector: String,
        reason: &'static str,
    },
}

impl DomError {
    pub fn invalid_selector(selector: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            reason,
        }
    }
}
