//! In-process clipboard.

use std::sync::{Arc, Mutex};

use super::{Clipboard, ClipboardError};

/// A clipboard that keeps every write in memory.
///
/// Clones share the same storage, so a handle kept outside the app can
/// observe what the app copied. [`MemoryClipboard::failing`] builds one
/// that rejects every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            writes: Arc::default(),
            fail: true,
        }
    }

    /// The most recently written text.
    pub fn last(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("writes disabled".to_string()));
        }
        self.writes
            .lock()
            .map_err(|_| ClipboardError::Unavailable("storage poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }

    fn description(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let observer = MemoryClipboard::new();
        let mut writer = observer.clone();

        writer.write_text("first").unwrap();
        writer.write_text("second\r\n").unwrap();

        assert_eq!(observer.last().as_deref(), Some("second\r\n"));
        assert_eq!(observer.write_count(), 2);
    }

    #[test]
    fn test_failing_clipboard_rejects_writes() {
        let mut clipboard = MemoryClipboard::failing();
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
        assert!(clipboard.last().is_none());
        assert_eq!(clipboard.write_count(), 0);
    }
}
