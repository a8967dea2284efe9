//! Style layer: selectors and rule sheets keyed by classes and state attributes.

mod selector;
mod sheet;

pub use selector::{AttrMatch, Compound, Selector};
pub use sheet::{Declaration, Rule, StyleSheet};
