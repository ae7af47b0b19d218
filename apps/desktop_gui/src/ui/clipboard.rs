use arboard::Clipboard;
use client_core::clipboard::{ClipboardError, ClipboardStrategy};
use eframe::egui;

/// System clipboard through `arboard`.
pub struct SystemClipboard;

impl ClipboardStrategy for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Hands the text to egui's platform output, which the integration copies at frame end.
pub struct EguiClipboard<'a>(pub &'a egui::Context);

impl ClipboardStrategy for EguiClipboard<'_> {
    fn name(&self) -> &'static str {
        "egui"
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.0.copy_text(text.to_string());
        Ok(())
    }
}
