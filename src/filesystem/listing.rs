use std::collections::btree_map;
use std::fmt;

use crate::filesystem::Node;

const INDENT: &str = "  ";

/// One line of a listing: a directory name and how deep it sits below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub depth: usize,
}

// Written by hand since the indent width depends on `depth`.
impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            f.write_str(INDENT)?;
        }
        f.write_str(&self.name)
    }
}

/// Depth-first, pre-order walk over a tree, visiting siblings by ascending name.
///
/// The walk is lazy and borrows the tree, so a listing always reflects the
/// state of the tree at the time it is consumed. It cannot be restarted; ask
/// the store for a new one instead.
pub struct Listing<'t> {
    stack: Vec<btree_map::Iter<'t, String, Node>>,
}

impl<'t> Listing<'t> {
    pub fn new(root: &'t Node) -> Self {
        Self {
            stack: vec![root.children()],
        }
    }
}

impl Iterator for Listing<'_> {
    type Item = ListEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            match self.stack.last_mut()?.next() {
                Some((name, node)) => {
                    self.stack.push(node.children());
                    return Some(ListEntry {
                        name: name.clone(),
                        depth,
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
