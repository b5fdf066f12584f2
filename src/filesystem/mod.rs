//! In-memory directory hierarchy.
//!
//! The tree is made of [`Node`]s that own their children outright, so the
//! structure is acyclic and dropping an entry frees its whole subtree.
//! [`TreeStore`] owns the root and exposes create, move, delete and list.

mod dir_path;
mod listing;
mod node;
mod path_resolver;
mod tree;

pub use dir_path::{DirPath, InvalidPathError};
pub use listing::{ListEntry, Listing};
pub use node::Node;
pub use path_resolver::{PathNotFound, PathResolver};
pub use tree::TreeStore;
