use std::collections::BTreeMap;
use std::collections::btree_map;

/// A directory in the virtual hierarchy.
///
/// A node has no name of its own; it is known only by the key under which its
/// parent stores it. Children are kept in an ordered map, so iterating them
/// always yields names in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    children: BTreeMap<String, Node>,
}

impl Node {
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Returns the child called `name`, creating it as an empty directory first
    /// if it is missing.
    pub fn child_or_create(&mut self, name: &str) -> &mut Node {
        self.children.entry(name.to_string()).or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Stores `node` under `name`, returning the subtree it replaced, if any.
    pub fn insert_child(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        self.children.insert(name.into(), node)
    }

    /// Detaches the child called `name` together with its whole subtree.
    pub fn remove_child(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    pub fn children(&self) -> btree_map::Iter<'_, String, Node> {
        self.children.iter()
    }

    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

#[cfg(test)]
impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}
