//! Output delivery for rendered trees.
//!
//! Routes the finished tree text to one of three destinations: the system
//! clipboard, a named file, or standard output. The tree itself is already
//! final at this point; delivery never alters it.

use crate::TreexportError;
use crate::clipboard;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the rendered tree ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Copy to the system clipboard (the default).
    Clipboard,
    /// Write to the given file, replacing any existing content.
    File(PathBuf),
    /// Print to standard output.
    Stdout,
}

/// Delivers `text` to the chosen destination.
///
/// # Errors
///
/// File writes surface as [`TreexportError::Io`]; clipboard failures as
/// [`TreexportError::Clipboard`]. Stdout delivery is infallible short of a
/// broken pipe, which the process-level handler owns.
pub fn deliver(text: &str, destination: &Destination) -> Result<(), TreexportError> {
    match destination {
        Destination::Clipboard => {
            clipboard::copy_to_clipboard(text)?;
        }
        Destination::File(path) => {
            write_to_file(text, path)?;
        }
        Destination::Stdout => {
            println!("{}", text);
        }
    }
    Ok(())
}

/// Writes the tree text to a file, with a trailing newline.
pub fn write_to_file(text: &str, path: impl AsRef<Path>) -> Result<(), TreexportError> {
    let mut content = String::with_capacity(text.len() + 1);
    content.push_str(text);
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(&path, content).map_err(|e| TreexportError::io(path.as_ref(), e))?;
    Ok(())
}
