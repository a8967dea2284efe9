/// High-level events with element targeting.
///
/// A `None` target means the pointer landed on the document background,
/// outside every element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer button pressed
    PointerDown {
        target: Option<String>,
        button: MouseButton,
    },
    /// Pointer button pressed and released on the same target
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// Text control edited by the user
    Input { target: String, value: String },
    /// Choice committed by the user (select)
    Change { target: String, value: String },
}

/// Discriminant of an [`Event`], used to key listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    PointerDown,
    Click,
    Input,
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointerDown => "pointerdown",
            Self::Click => "click",
            Self::Input => "input",
            Self::Change => "change",
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    pub fn pointer_down(target: impl Into<String>) -> Self {
        Self::PointerDown {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::Click { .. } => EventKind::Click,
            Self::Input { .. } => EventKind::Input,
            Self::Change { .. } => EventKind::Change,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::PointerDown { target, .. } | Self::Click { target, .. } => target.as_deref(),
            Self::Input { target, .. } | Self::Change { target, .. } => Some(target),
        }
    }

    /// The carried value for `Input` and `Change` events.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Input { value, .. } | Self::Change { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Whether this is a pointer event from the primary button.
    pub fn is_primary(&self) -> bool {
        match self {
            Self::PointerDown { button, .. } | Self::Click { button, .. } => {
                *button == MouseButton::Left
            }
            _ => false,
        }
    }
}
