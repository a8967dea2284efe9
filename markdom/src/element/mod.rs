mod content;
mod id;
mod node;

pub use content::Content;
pub use id::IdScope;
pub use node::{Element, Tag};

/// Find the first element carrying `class`, depth-first.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_by_class(child, class))
}
