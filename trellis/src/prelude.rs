//! Prelude module for convenient imports.
//!
//! ```ignore
//! use trellis::prelude::*;
//! ```

// Runtime
pub use crate::error::TrellisError;
pub use crate::handler_context::{HandlerContext, HandlerRegistry};
pub use crate::runtime::{DispatchResult, DocumentListeners, Runtime, Subscription, View};
pub use crate::state::State;

// Configuration
pub use crate::config::{
    FieldOptions, InputOptions, LogConfig, MenuOptions, PassThrough, RadioOptions,
    RuntimeConfig, SelectOptions,
};

// Widgets
pub use crate::widgets::{
    DropdownAlignment, DropdownMenu, FieldKind, FieldLayout, Icon, Input, MenuItem, OptionSet,
    Pill, RadioGroup, Search, Select, ToggleField,
};

// Re-export markdom types used in views
pub use markdom::{Element, Event, EventKind, Tag};
