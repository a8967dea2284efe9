#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Plain text, escaped when rendered.
    Text(String),
    /// Trusted markup, rendered verbatim.
    Markup(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Markup(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }
}
