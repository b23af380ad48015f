use serde::{Deserialize, Serialize};

/// A single filesystem entry discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The entry's base name, without any path components.
    pub name: String,
    /// Levels below the root. The root itself is never emitted as a node,
    /// so this is always at least 1.
    pub depth: usize,
    /// Whether the entry is a directory. Symlinks are not followed, so a
    /// symlink pointing at a directory reports `false`.
    pub is_dir: bool,
    /// Whether the entry sorts last among its siblings.
    pub is_last: bool,
    /// Is-last flags for each ancestor, from depth 1 down to the parent.
    ///
    /// Length is always `depth - 1`. The renderer uses this to decide, per
    /// column, between a continuing `│` guide and blank space.
    pub ancestors_last: Vec<bool>,
}

/// The complete result of a treexport operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreexportResult {
    /// The rendered tree, starting with the root label line.
    ///
    /// This is a string similar to the output of the `tree` command.
    pub tree: String,
    /// Number of entries below the root that appear in the tree.
    pub entries: usize,
}
