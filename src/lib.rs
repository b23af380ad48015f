//! # Treexport
//!
//! `treexport` is a library for rendering a filesystem directory's structure
//! as an ASCII tree diagram, the kind developers paste into READMEs and chat
//! to show a project's layout.
//!
//! The walk is iterative: an explicit work-list replaces call-stack
//! recursion, so arbitrarily deep trees traverse in bounded memory and the
//! node sequence streams straight into the renderer. Hidden-entry filtering
//! and depth cutoff happen during the walk, not as a post-pass.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treexport::{TreexportBuilder, treexport};
//!
//! let options = TreexportBuilder::new(".")
//!     .max_depth(2)
//!     .include_hidden(false)
//!     .build();
//!
//! let result = treexport(options).expect("failed to export tree");
//!
//! println!("{}", result.tree);
//! eprintln!("{} entries", result.entries);
//! ```

pub mod clipboard;
mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{PERMISSION_DENIED_MARKER, Traversal, traverse, treexport};
pub use error::TreexportError;
pub use options::{TreexportBuilder, TreexportOptions};
pub use tree::render;
pub use types::{TreeNode, TreexportResult};
