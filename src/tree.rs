//! Renders a traversal's node sequence as an ASCII tree diagram.

use crate::types::TreeNode;

const GUIDE: &str = "│   ";
const GAP: &str = "    ";
const TEE: &str = "├── ";
const ELBOW: &str = "└── ";

/// Builds the tree text from a root label and an ordered node sequence.
///
/// The first line is the bare root label with a trailing `/`; every node
/// contributes one line. For each ancestor level the prefix carries either a
/// continuing `│` guide (the ancestor has siblings still to come) or blank
/// space (the ancestor was the last of its siblings), followed by the node's
/// own connector. Directories get a trailing `/`.
///
/// Pure and infallible: for a fixed node sequence the output is
/// byte-for-byte reproducible.
pub fn render(root_label: &str, nodes: impl IntoIterator<Item = TreeNode>) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(root_label);
    out.push('/');
    for node in nodes {
        out.push('\n');
        for &ancestor_was_last in &node.ancestors_last {
            out.push_str(if ancestor_was_last { GAP } else { GUIDE });
        }
        out.push_str(if node.is_last { ELBOW } else { TEE });
        out.push_str(&node.name);
        if node.is_dir {
            out.push('/');
        }
    }
    out
}
