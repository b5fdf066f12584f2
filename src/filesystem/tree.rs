use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::debug;

use crate::filesystem::path_resolver::PathNotFoundSnafu;
use crate::filesystem::{DirPath, Listing, Node, PathNotFound, PathResolver};

/// Owns the root of a directory hierarchy and every operation that changes or
/// reads it.
///
/// Each store is an independent session; nothing is shared between stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStore {
    root: Node,
}

impl TreeStore {
    /// Creates `path` and any missing ancestors. Creating a path that already
    /// exists leaves the tree untouched.
    pub fn create(&mut self, path: &DirPath) {
        let resolved = PathResolver::resolve_creating(&mut self.root, path);
        if !resolved.parent.contains(resolved.name) {
            debug!("Creating directory '{}'", path);
        }
        resolved.parent.child_or_create(resolved.name);
    }

    /// Removes `path` together with everything below it, handing back the
    /// detached subtree.
    pub fn delete(&mut self, path: &DirPath) -> Result<Node, PathNotFound> {
        let resolved = PathResolver::resolve_strict(&mut self.root, path)?;
        let removed = resolved
            .parent
            .remove_child(resolved.name)
            .context(PathNotFoundSnafu {
                segment: resolved.name,
            })?;

        debug!(
            "Deleted '{}' and {} directories below it",
            path,
            removed.descendant_count()
        );
        Ok(removed)
    }

    /// Moves the directory at `src` into the directory `dest`, keeping its name.
    ///
    /// `dest` is a container, not a new name: it is created along with its
    /// ancestors if missing, and the moved directory becomes its child. An
    /// existing child of `dest` with the same name is replaced.
    pub fn move_into(&mut self, src: &DirPath, dest: &DirPath) -> Result<(), MoveError> {
        let source =
            PathResolver::resolve_strict(&mut self.root, src).context(SourceMissingSnafu)?;

        ensure!(
            !dest.is_within(src),
            DestinationInsideSourceSnafu {
                src: src.as_str(),
                dest: dest.as_str(),
            }
        );

        let name = source.name;
        let moved = source
            .parent
            .remove_child(name)
            .context(PathNotFoundSnafu { segment: name })
            .context(SourceMissingSnafu)?;

        let target = PathResolver::resolve_creating(&mut self.root, dest);
        let container = target.parent.child_or_create(target.name);
        if container.insert_child(name, moved).is_some() {
            debug!("Moving '{}' replaced an existing '{}' in '{}'", src, name, dest);
        }

        debug!("Moved '{}' into '{}'", src, dest);
        Ok(())
    }

    /// Starts a fresh sorted, pre-order walk over the current tree.
    pub fn list(&self) -> Listing<'_> {
        Listing::new(&self.root)
    }
}

#[cfg(test)]
impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Looks `path` up without creating anything.
    pub fn get(&self, path: &DirPath) -> Option<&Node> {
        path.segments()
            .try_fold(&self.root, |current, segment| current.child(segment))
    }

    pub fn contains(&self, path: &DirPath) -> bool {
        self.get(path).is_some()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum MoveError {
    #[snafu(display("{}", source))]
    SourceMissing { source: PathNotFound },
    #[snafu(display("{} is inside {}", dest, src))]
    DestinationInsideSource { src: String, dest: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn path(raw: &str) -> DirPath {
        DirPath::try_from(raw).expect("test path should be valid")
    }

    fn store_with(paths: &[&str]) -> TreeStore {
        let mut store = TreeStore::new();
        for raw in paths {
            store.create(&path(raw));
        }
        store
    }

    fn listed(store: &TreeStore) -> Vec<String> {
        store.list().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn create_builds_missing_ancestors() {
        let store = store_with(&["a/b/c"]);

        assert!(store.contains(&path("a")));
        assert!(store.contains(&path("a/b")));
        assert!(store.get(&path("a/b/c")).is_some_and(Node::is_empty));
    }

    #[test]
    fn create_is_idempotent() {
        let once = store_with(&["a/b/c"]);
        let twice = store_with(&["a/b/c", "a/b/c", "a/b"]);

        assert_eq!(once, twice);
        assert_eq!(twice.root().descendant_count(), 3);
    }

    #[test]
    fn delete_removes_the_whole_subtree() {
        let mut store = store_with(&["a/b/c/d", "a/b/e", "a/f"]);

        let removed = store.delete(&path("a/b")).expect("a/b exists");
        assert_eq!(removed.descendant_count(), 3);

        assert!(!store.contains(&path("a/b")));
        assert!(store.contains(&path("a")));
        assert!(store.contains(&path("a/f")));
        assert_eq!(listed(&store), vec!["a", "  f"]);
    }

    #[rstest]
    #[case("zzz/top", "zzz")]
    #[case("a/missing", "missing")]
    #[case("a/b/c/d", "c")]
    fn delete_of_missing_path_changes_nothing(#[case] target: &str, #[case] missing: &str) {
        let mut store = store_with(&["a/b"]);
        let before = store.clone();

        let error = store.delete(&path(target)).unwrap_err();
        assert_eq!(error.segment(), missing);
        assert_eq!(store, before);
    }

    #[test]
    fn move_keeps_name_and_changes_parent() {
        let mut store = store_with(&["foo/bar/baz", "abc"]);

        store
            .move_into(&path("foo/bar"), &path("abc"))
            .expect("move should succeed");

        assert_eq!(listed(&store), vec!["abc", "  bar", "    baz", "foo"]);
        assert!(!store.contains(&path("foo/bar")));
    }

    #[test]
    fn move_creates_the_destination_container() {
        let mut store = store_with(&["a/b/c"]);

        store
            .move_into(&path("a/b"), &path("x/y"))
            .expect("move should succeed");

        assert!(store.contains(&path("x/y/b/c")));
        assert!(store.get(&path("a")).is_some_and(Node::is_empty));
    }

    #[test]
    fn move_into_current_parent_is_a_no_op() {
        let mut store = store_with(&["a/b/c", "a/d"]);
        let before = store.clone();

        store
            .move_into(&path("a/b"), &path("a"))
            .expect("move should succeed");

        assert_eq!(store, before);
    }

    #[test]
    fn move_replaces_same_named_child_of_destination() {
        let mut store = store_with(&["src/item/new", "dest/item/old"]);

        store
            .move_into(&path("src/item"), &path("dest"))
            .expect("move should succeed");

        assert!(store.contains(&path("dest/item/new")));
        assert!(!store.contains(&path("dest/item/old")));
    }

    #[test]
    fn move_of_missing_source_changes_nothing() {
        let mut store = store_with(&["a"]);
        let before = store.clone();

        let error = store
            .move_into(&path("a/ghost"), &path("new/place"))
            .unwrap_err();

        assert_eq!(error.to_string(), "ghost does not exist");
        assert!(matches!(error, MoveError::SourceMissing { .. }));
        assert_eq!(store, before);
    }

    #[rstest]
    #[case("a", "a")]
    #[case("a", "a/b")]
    #[case("a/b", "a/b/c/new")]
    fn move_into_own_subtree_is_rejected(#[case] src: &str, #[case] dest: &str) {
        let mut store = store_with(&["a/b/c"]);
        let before = store.clone();

        let error = store.move_into(&path(src), &path(dest)).unwrap_err();

        assert!(matches!(error, MoveError::DestinationInsideSource { .. }));
        assert_eq!(error.to_string(), format!("{dest} is inside {src}"));
        assert_eq!(store, before);
    }

    #[test]
    fn listing_ignores_insertion_order() {
        let forward = store_with(&["b/y", "b/x", "a", "c"]);
        let backward = store_with(&["c", "a", "b/x", "b/y"]);

        assert_eq!(listed(&forward), vec!["a", "b", "  x", "  y", "c"]);
        assert_eq!(listed(&forward), listed(&backward));
    }

    #[test]
    fn listing_reflects_live_state() {
        let mut store = store_with(&["a"]);
        assert_eq!(listed(&store), vec!["a"]);

        store.create(&path("b"));
        assert_eq!(listed(&store), vec!["a", "b"]);
    }
}
