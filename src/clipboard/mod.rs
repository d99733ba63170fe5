//! Clipboard abstraction for the copy action.
//!
//! The copy action is write-only: it hands the exact source text to the
//! host and never reads back. Failures are reported to the caller as a
//! [`ClipboardError`] and are never fatal.

mod memory;
mod osc52;

pub use memory::MemoryClipboard;
pub use osc52::{Osc52Clipboard, SetClipboard};

use std::fmt::Debug;

use thiserror::Error;

/// Reasons a clipboard write can fail.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Writing the escape sequence to the terminal failed.
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
    /// The clipboard cannot be used right now.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Write-only access to a clipboard.
///
/// # Example
///
/// ```
/// use dip_docs::{Clipboard, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::new();
/// clipboard.write_text("disp(y)").unwrap();
/// assert_eq!(clipboard.last().as_deref(), Some("disp(y)"));
/// ```
pub trait Clipboard: Send + Debug {
    /// Place `text` on the clipboard exactly as given.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Human-readable name of the clipboard backend.
    fn description(&self) -> &str;
}
