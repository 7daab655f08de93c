//! Feature modules
//!
//! Optional collaborators around the core renderer:
//! - `clipboard`: injected clipboard capability

pub mod clipboard;

pub use clipboard::{MemoryClipboard, NoopClipboard, TextClipboard};

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
