use crate::error::TreexportError;
use crate::options::TreexportOptions;
use crate::tree::render;
use crate::types::{TreeNode, TreexportResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Name of the synthetic child node emitted in place of the children of a
/// directory that could not be scanned.
pub const PERMISSION_DENIED_MARKER: &str = "[permission denied]";

/// A pending entry on the traversal work-list.
///
/// The path is only consulted when the node is a directory that may still be
/// expanded; for files it is dead weight the moment the node is popped.
#[derive(Debug)]
struct WorkItem {
    node: TreeNode,
    path: PathBuf,
}

/// Lazy pre-order traversal of a directory tree.
///
/// Produced by [`traverse`]. Each call to `next` pops one entry off an
/// explicit LIFO work-list and, if the entry is a directory within the depth
/// limit, scans its children with a single `read_dir` call and pushes them in
/// reverse sorted order. The work-list therefore never holds more than one
/// directory-level of unexpanded entries per open ancestor, keeping memory
/// proportional to tree width times depth instead of consuming call stack.
#[derive(Debug)]
pub struct Traversal {
    stack: Vec<WorkItem>,
    max_depth: Option<usize>,
    include_hidden: bool,
    root_label: String,
}

impl Traversal {
    /// Base name of the (canonicalized) root directory, used by the renderer
    /// for the leading label line.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }
}

impl Iterator for Traversal {
    type Item = TreeNode;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        let expand = item.node.is_dir
            && self
                .max_depth
                .is_none_or(|limit| item.node.depth < limit);
        if expand {
            let mut chain = item.node.ancestors_last.clone();
            chain.push(item.node.is_last);
            match list_children(
                &item.path,
                item.node.depth + 1,
                &chain,
                self.include_hidden,
            ) {
                Ok(children) => {
                    self.stack.extend(children.into_iter().rev());
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!(
                        "Skipping unreadable directory {}: {}",
                        item.path.display(),
                        _e
                    );
                    // Unreadable subdirectory: keep the walk alive and leave
                    // a visible marker where its children would have been.
                    self.stack.push(WorkItem {
                        node: TreeNode {
                            name: PERMISSION_DENIED_MARKER.to_string(),
                            depth: item.node.depth + 1,
                            is_dir: false,
                            is_last: true,
                            ancestors_last: chain,
                        },
                        path: PathBuf::new(),
                    });
                }
            }
        }
        Some(item.node)
    }
}

/// Scans one directory level and returns its children as work items in final
/// sorted order.
///
/// Directories and files are merged and sorted case-insensitively by name,
/// with a raw byte-order tiebreak so that names differing only by case still
/// order deterministically. Hidden entries (leading `.`) are dropped unless
/// requested.
fn list_children(
    dir: &Path,
    depth: usize,
    ancestors_last: &[bool],
    include_hidden: bool,
) -> io::Result<Vec<WorkItem>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !include_hidden && name.starts_with('.') {
            continue;
        }
        // file_type comes from the directory scan itself on most platforms,
        // so no extra stat per entry. It does not follow symlinks, which is
        // what keeps symlink cycles out of the walk.
        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        children.push((name, is_dir, entry.path()));
    }
    children.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });
    let count = children.len();
    Ok(children
        .into_iter()
        .enumerate()
        .map(|(i, (name, is_dir, path))| WorkItem {
            node: TreeNode {
                name,
                depth,
                is_dir,
                is_last: i + 1 == count,
                ancestors_last: ancestors_last.to_vec(),
            },
            path,
        })
        .collect())
}

/// Starts a traversal rooted at `options.root`.
///
/// The root is validated up front: a missing path, a non-directory path, or a
/// root that cannot be scanned all fail here, before a single node is
/// produced. Errors below the root are recovered during iteration instead.
///
/// A `max_depth` of `Some(0)` yields an empty traversal; only the root label
/// line appears in the rendered output.
pub fn traverse(options: TreexportOptions) -> Result<Traversal, TreexportError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting traversal at root: {}", options.root.display());
    if !options.root.exists() {
        return Err(TreexportError::RootNotFound(options.root));
    }
    if !options.root.is_dir() {
        return Err(TreexportError::NotADirectory(options.root));
    }
    let canonical = fs::canonicalize(&options.root)
        .map_err(|e| TreexportError::io(&options.root, e))?;
    let root_label = canonical
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stack = if options.max_depth == Some(0) {
        Vec::new()
    } else {
        let mut seed = list_children(&options.root, 1, &[], options.include_hidden)
            .map_err(|e| TreexportError::io(&options.root, e))?;
        seed.reverse();
        seed
    };
    Ok(Traversal {
        stack,
        max_depth: options.max_depth,
        include_hidden: options.include_hidden,
        root_label,
    })
}

/// Walks the tree and renders it in one call.
///
/// This is the blocking convenience entry point composing [`traverse`] and
/// [`render`]; the traversal streams straight into the renderer without an
/// intermediate node buffer.
pub fn treexport(options: TreexportOptions) -> Result<TreexportResult, TreexportError> {
    let traversal = traverse(options)?;
    let root_label = traversal.root_label().to_owned();
    let tree = render(&root_label, traversal);
    let entries = tree.lines().count() - 1;
    Ok(TreexportResult { tree, entries })
}
