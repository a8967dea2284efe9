pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod render;
pub mod style;
pub mod types;

pub use document::Document;
pub use element::{Content, Element, IdScope, Tag};
pub use error::DomError;
pub use event::{Event, EventKind, MouseButton};
pub use render::to_html;
pub use style::{Declaration, Rule, Selector, StyleSheet};
pub use types::*;
