//! System clipboard support.
//!
//! Copies text to the clipboard by piping it into whichever clipboard
//! command the platform provides, tried in order of preference. No clipboard
//! crate is linked; everything goes through external commands so the binary
//! stays dependency-light on every platform.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard command failed: {0}")]
    CommandFailed(String),
    #[error("no suitable clipboard mechanism found")]
    NoClipboardFound,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Clipboard commands known to this crate, in the order they are probed.
#[derive(Debug, Clone, Copy)]
enum Provider {
    /// tmux buffer, preferred when running inside a tmux session.
    Tmux,
    /// macOS pbcopy.
    MacOs,
    /// Wayland wl-copy.
    Wayland,
    /// X11 xsel.
    Xsel,
    /// X11 xclip.
    Xclip,
    /// Windows clip.exe, also reachable from WSL.
    Windows,
    /// Termux on Android.
    Termux,
}

impl Provider {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Provider::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Provider::MacOs => ("pbcopy", &[]),
            Provider::Wayland => ("wl-copy", &[]),
            Provider::Xsel => ("xsel", &["-b", "-i"]),
            Provider::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Provider::Windows => ("clip.exe", &[]),
            Provider::Termux => ("termux-clipboard-set", &[]),
        }
    }
}

/// Copies `text` to the system clipboard.
///
/// Probes the platform's clipboard commands in order of preference and pipes
/// the text into the first one found.
///
/// # Errors
///
/// Returns [`ClipboardError::NoClipboardFound`] when no clipboard command is
/// available, or [`ClipboardError::CommandFailed`] when the chosen command
/// exits unsuccessfully.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let provider = detect_provider().ok_or(ClipboardError::NoClipboardFound)?;
    let (cmd, args) = provider.command();
    pipe_into(cmd, args, text)
}

/// Returns true if `command` resolves on the current `PATH`.
fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| {
            env::split_paths(&paths).any(|dir| {
                let candidate = Path::new(&dir).join(command);
                candidate.is_file()
            })
        })
        .unwrap_or(false)
}

fn in_tmux_session() -> bool {
    env::var_os("TMUX").is_some()
}

fn detect_provider() -> Option<Provider> {
    if in_tmux_session() && command_exists("tmux") {
        return Some(Provider::Tmux);
    }
    let platform_order: &[Provider] = if cfg!(target_os = "macos") {
        &[Provider::MacOs]
    } else if cfg!(target_os = "windows") {
        &[Provider::Windows]
    } else if cfg!(target_os = "android") {
        &[Provider::Termux]
    } else {
        // Linux and friends: Wayland first, then X11, then WSL interop.
        &[
            Provider::Wayland,
            Provider::Xsel,
            Provider::Xclip,
            Provider::Windows,
        ]
    };
    platform_order
        .iter()
        .copied()
        .find(|p| command_exists(p.command().0))
}

fn pipe_into(cmd: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("failed to spawn {cmd}: {e}")))?;
    let stdin = child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("no stdin for {cmd}")))?;
    stdin.write_all(text.as_bytes())?;
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{cmd} exited with status {status}"
        )))
    }
}
