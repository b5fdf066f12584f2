use snafu::{OptionExt, Snafu, ensure};
use tracing::debug;

use crate::filesystem::{DirPath, Node};

/// The outcome of walking a path: the directory holding the target, and the
/// name of the target inside it.
#[derive(Debug)]
pub struct Resolved<'t, 'p> {
    pub parent: &'t mut Node,
    pub name: &'p str,
}

/// Walks a tree from its root along the segments of a [`DirPath`].
pub struct PathResolver;

impl PathResolver {
    /// Resolves `path` without touching the tree. Every segment, the final one
    /// included, has to exist already; otherwise the first missing segment,
    /// from left to right, is reported.
    pub fn resolve_strict<'t, 'p>(
        root: &'t mut Node,
        path: &'p DirPath,
    ) -> Result<Resolved<'t, 'p>, PathNotFound> {
        let mut current = root;
        for segment in path.ancestors() {
            current = current
                .child_mut(segment)
                .context(PathNotFoundSnafu { segment })?;
        }

        ensure!(
            current.contains(path.leaf()),
            PathNotFoundSnafu {
                segment: path.leaf()
            }
        );

        Ok(Resolved {
            parent: current,
            name: path.leaf(),
        })
    }

    /// Resolves `path`, creating every missing ancestor as an empty directory
    /// on the way down. The final segment is left for the caller to handle.
    pub fn resolve_creating<'t, 'p>(root: &'t mut Node, path: &'p DirPath) -> Resolved<'t, 'p> {
        let mut current = root;
        for segment in path.ancestors() {
            if !current.contains(segment) {
                debug!("Creating intermediate directory '{}' of '{}'", segment, path);
            }
            current = current.child_or_create(segment);
        }

        Resolved {
            parent: current,
            name: path.leaf(),
        }
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("{} does not exist", segment), visibility(pub(crate)))]
pub struct PathNotFound {
    segment: String,
}

#[cfg(test)]
impl PathNotFound {
    /// The first segment, from the left, that was absent from the tree.
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> DirPath {
        DirPath::try_from(raw).expect("test path should be valid")
    }

    fn tree_with(paths: &[&str]) -> Node {
        let mut root = Node::new();
        for raw in paths {
            let mut current = &mut root;
            for segment in path(raw).segments() {
                current = current.child_or_create(segment);
            }
        }
        root
    }

    #[test]
    fn strict_resolution_returns_parent_and_leaf() {
        let mut root = tree_with(&["a/b/c"]);
        let target = path("a/b/c");

        let resolved = PathResolver::resolve_strict(&mut root, &target).expect("path exists");
        assert_eq!(resolved.name, "c");
        assert!(resolved.parent.contains("c"));
        assert_eq!(resolved.parent.len(), 1);
    }

    #[test]
    fn strict_resolution_reports_first_missing_ancestor() {
        let mut root = tree_with(&["a"]);
        let target = path("a/x/y/z");

        let error = PathResolver::resolve_strict(&mut root, &target).unwrap_err();
        assert_eq!(error.segment(), "x");
        assert_eq!(error.to_string(), "x does not exist");
    }

    #[test]
    fn strict_resolution_reports_missing_leaf() {
        let mut root = tree_with(&["a/b"]);
        let target = path("a/b/c");

        let error = PathResolver::resolve_strict(&mut root, &target).unwrap_err();
        assert_eq!(error.segment(), "c");
    }

    #[test]
    fn strict_resolution_on_empty_tree_reports_first_segment() {
        let mut root = Node::new();
        let target = path("zzz/top");

        let error = PathResolver::resolve_strict(&mut root, &target).unwrap_err();
        assert_eq!(error.segment(), "zzz");
        assert!(root.is_empty());
    }

    #[test]
    fn creating_resolution_materializes_ancestors_only() {
        let mut root = Node::new();
        let target = path("a/b/c");

        let resolved = PathResolver::resolve_creating(&mut root, &target);
        assert_eq!(resolved.name, "c");
        assert!(!resolved.parent.contains("c"));

        let b = root.child("a").and_then(|a| a.child("b"));
        assert!(b.is_some_and(Node::is_empty));
        assert_eq!(root.descendant_count(), 2);
    }

    #[test]
    fn creating_resolution_reuses_existing_directories() {
        let mut root = tree_with(&["a/b/keep"]);
        let target = path("a/b/new");

        PathResolver::resolve_creating(&mut root, &target);
        assert_eq!(root.descendant_count(), 3);
    }
}
