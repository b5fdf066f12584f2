use derive_more::Display;
use snafu::{OptionExt, Snafu};

const SEPARATOR: char = '/';

/// A slash-delimited path to a directory, relative to the root of the tree.
///
/// The text is kept exactly as it was typed so it can be echoed back, while
/// the segments are split out once. Empty segments (`a//b`, `/a`, `a/`) are
/// skipped, and at least one segment is always present.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{raw}")]
pub struct DirPath {
    raw: String,
    ancestors: Vec<String>,
    leaf: String,
}

impl DirPath {
    /// The segments leading up to the target, outermost first.
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// The final segment, naming the target directory itself.
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.leaf.as_str()))
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len() + 1
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this path names `other` or a directory somewhere below it.
    pub fn is_within(&self, other: &DirPath) -> bool {
        self.depth() >= other.depth()
            && self
                .segments()
                .zip(other.segments())
                .all(|(ours, theirs)| ours == theirs)
    }
}

impl TryFrom<&str> for DirPath {
    type Error = InvalidPathError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let mut segments = raw
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        let leaf = segments.pop().context(InvalidPathSnafu { path: raw })?;

        Ok(DirPath {
            raw: raw.to_string(),
            ancestors: segments,
            leaf,
        })
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("Path '{}' does not name any directory", path))]
pub struct InvalidPathError {
    path: String,
}
