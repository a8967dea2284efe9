//! Built-in widgets.
//!
//! Each widget is a builder that produces a markdom `Element` and registers
//! its handlers in the `HandlerRegistry` passed to `build`. Field widgets
//! are controlled (the caller owns the value) except `ToggleField` and
//! `DropdownMenu`, which own their state and must be kept across renders.

pub mod field;
pub mod icon;
pub mod input;
pub mod menu;
pub mod options;
pub mod pill;
pub mod radio;
pub mod search;
pub mod select;
pub mod toggle;

pub use field::{FieldKind, FieldLayout};
pub use icon::Icon;
pub use input::Input;
pub use menu::{DropdownAlignment, DropdownMenu, MenuId, MenuItem};
pub use options::{ChoiceOption, OptionSet};
pub use pill::Pill;
pub use radio::RadioGroup;
pub use search::Search;
pub use select::Select;
pub use toggle::{ToggleField, ToggleId};
