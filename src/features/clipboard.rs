//! Injected clipboard capability
//!
//! The renderer never touches the clipboard itself; callers wire in a
//! `TextClipboard` implementation. An unavailable backend surfaces as an
//! explicit error the caller can downgrade to a warning.
//!
//! Implementations:
//! - `SystemClipboard`: arboard-backed system clipboard (`clipboard` feature)
//! - `MemoryClipboard`: in-memory store (testing, headless environments)
//! - `NoopClipboard`: always unavailable (WASM or stripped builds)

use crate::utils::error::{RenderError, RenderResult};

/// Capability for placing text on a clipboard
pub trait TextClipboard {
    /// Copy text, or report `ClipboardUnavailable`
    fn copy_text(&mut self, text: &str) -> RenderResult<()>;
}

/// System clipboard backed by arboard
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    backend: Option<arboard::Clipboard>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard {
            backend: arboard::Clipboard::new().ok(),
        }
    }
}

#[cfg(feature = "clipboard")]
impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "clipboard")]
impl TextClipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> RenderResult<()> {
        match self.backend.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| RenderError::clipboard(e.to_string())),
            None => Err(RenderError::clipboard(
                "no system clipboard on this platform",
            )),
        }
    }
}

/// In-memory clipboard (for testing and headless use)
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text copied, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl TextClipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> RenderResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that is never available
pub struct NoopClipboard;

impl TextClipboard for NoopClipboard {
    fn copy_text(&mut self, _text: &str) -> RenderResult<()> {
        Err(RenderError::clipboard(
            "clipboard support not compiled in; enable the 'clipboard' feature",
        ))
    }
}
