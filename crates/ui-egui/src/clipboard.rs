//! System clipboard sink backed by arboard

use arboard::Clipboard;
use trackshare_core::{ClipboardSink, ShareError};

/// Opens the clipboard per write; shares run seldom enough that holding
/// a handle across actions buys nothing.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ShareError::Clipboard(e.to_string()))?;
        Ok(())
    }
}
