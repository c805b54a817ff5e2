//! Clipboard text access for roster.
//!
//! The module uses a trait-based design for testability:
//! - [`ClipboardProvider`]: generic interface for writing (and reading back) text
//! - [`SystemClipboard`]: production implementation using the arboard crate (native only)
//! - [`MemoryClipboard`]: in-process implementation for tests and headless runs
//!
//! # Platform Support
//!
//! - **Windows**: Win32 clipboard API
//! - **macOS**: `NSPasteboard`
//! - **Linux X11 / Wayland**: X11 selections or the wlr data-control protocol
//!
//! On Linux the clipboard owner is the writing process, so text copied by a
//! short-lived CLI may disappear once it exits unless a clipboard manager is running.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_clipboard::{ClipboardProvider, SystemClipboard};
//!
//! let clipboard = SystemClipboard;
//! match clipboard.set_text("alice@example.com") {
//!     Ok(()) => println!("Copied"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::sync::Mutex;

use log::debug;

/// Error types for clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Failed to access the clipboard.
    #[error("Clipboard access error: {0}")]
    AccessError(String),
    /// The clipboard was reachable but refused the payload.
    #[error("Clipboard write error: {0}")]
    WriteError(String),
}

/// Trait for clipboard text access, enabling mock implementations for testing.
pub trait ClipboardProvider {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Reads the clipboard as text.
    ///
    /// # Returns
    /// - `Ok(Some(text))` if text is available
    /// - `Ok(None)` if the clipboard is accessible but holds no text
    /// - `Err(...)` if clipboard access failed
    fn get_text(&self) -> Result<Option<String>, ClipboardError>;
}

/// System clipboard implementation using the `arboard` crate.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(not(target_arch = "wasm32"))]
impl ClipboardProvider for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteError(e.to_string()))?;
        debug!("wrote {} bytes to the system clipboard", text.len());
        Ok(())
    }

    fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::AccessError(e.to_string())),
        }
    }
}

/// Clipboard kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::AccessError(e.to_string()))?;
        *guard = Some(text.to_owned());
        Ok(())
    }

    fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.contents())
    }
}
