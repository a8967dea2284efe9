//! Mounted element tree with an id index.
//!
//! A `Document` owns the tree produced by the last render and answers the
//! structural questions event routing needs: is this id still connected,
//! who is its parent, does one element contain another.

use std::collections::HashMap;

use crate::element::Element;
use crate::error::DomError;
use crate::render;
use crate::style::Selector;

#[derive(Debug, Clone)]
struct NodeInfo {
    parent: Option<String>,
    /// Child indices from the root down to this node.
    path: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct Document {
    root: Option<Element>,
    index: HashMap<String, NodeInfo>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mounted tree.
    ///
    /// On error the previous tree stays mounted.
    pub fn mount(&mut self, root: Element) -> Result<(), DomError> {
        let mut index = HashMap::new();
        index_element(&root, None, Vec::new(), &mut index)?;
        log::trace!("Document::mount root={} nodes={}", root.id, index.len());
        self.root = Some(root);
        self.index = index;
        Ok(())
    }

    /// Remove the mounted tree entirely.
    pub fn clear(&mut self) {
        self.root = None;
        self.index.clear();
    }

    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether an element with this id is part of the mounted tree.
    pub fn is_connected(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        let info = self.index.get(id)?;
        let mut current = self.root.as_ref()?;
        for &i in &info.path {
            current = current.child_elements().get(i)?;
        }
        Some(current)
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.index.get(id)?.parent.as_deref()
    }

    /// Ids from `id` up to the root, `id` first. Empty when disconnected.
    pub fn ancestry(&self, id: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.index.get_key_value(id).map(|(k, _)| k.as_str());
        while let Some(node) = current {
            chain.push(node);
            current = self.parent(node);
        }
        chain
    }

    /// Inclusive containment: an element contains itself.
    ///
    /// Returns false when either id is not connected.
    pub fn contains(&self, ancestor: &str, target: &str) -> bool {
        if !self.is_connected(ancestor) {
            return false;
        }
        self.ancestry(target).into_iter().any(|id| id == ancestor)
    }

    /// All elements matching `selector`, in document order.
    pub fn query(&self, selector: &Selector) -> Vec<&Element> {
        let mut found = Vec::new();
        if let Some(root) = &self.root {
            let mut ancestors = Vec::new();
            collect_matches(root, selector, &mut ancestors, &mut found);
        }
        found
    }

    /// Parse `selector` and return every match.
    pub fn select_all(&self, selector: &str) -> Result<Vec<&Element>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self.query(&selector))
    }

    /// Parse `selector` and return the first match.
    pub fn select(&self, selector: &str) -> Result<Option<&Element>, DomError> {
        Ok(self.select_all(selector)?.into_iter().next())
    }

    /// The ancestors of `id`, nearest first (the element itself excluded).
    pub fn ancestors_of(&self, id: &str) -> Vec<&Element> {
        self.ancestry(id)
            .into_iter()
            .skip(1)
            .filter_map(|a| self.get(a))
            .collect()
    }

    pub fn to_html(&self) -> String {
        self.root.as_ref().map(render::to_html).unwrap_or_default()
    }
}

fn index_element(
    element: &Element,
    parent: Option<&str>,
    path: Vec<usize>,
    index: &mut HashMap<String, NodeInfo>,
) -> Result<(), DomError> {
    if index.contains_key(&element.id) {
        return Err(DomError::DuplicateId(element.id.clone()));
    }
    index.insert(
        element.id.clone(),
        NodeInfo {
            parent: parent.map(str::to_string),
            path: path.clone(),
        },
    );
    for (i, child) in element.child_elements().iter().enumerate() {
        let mut child_path = path.clone();
        child_path.push(i);
        index_element(child, Some(&element.id), child_path, index)?;
    }
    Ok(())
}

fn collect_matches<'a>(
    element: &'a Element,
    selector: &Selector,
    ancestors: &mut Vec<&'a Element>,
    found: &mut Vec<&'a Element>,
) {
    // `ancestors` is root-first here; matching wants nearest-first.
    let nearest_first: Vec<&Element> = ancestors.iter().rev().copied().collect();
    if selector.matches(element, &nearest_first) {
        found.push(element);
    }
    ancestors.push(element);
    for child in element.child_elements() {
        collect_matches(child, selector, ancestors, found);
    }
    ancestors.pop();
}
