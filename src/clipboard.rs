use crate::error::ClipboardError;

/// Somewhere generated code can be copied to.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard. Natively this goes through `arboard`; on the web
/// the text is handed to egui, which forwards it to the browser.
pub struct SystemClipboard {
    ctx: egui::Context,
}

impl SystemClipboard {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl ClipboardSink for SystemClipboard {
    #[cfg(not(target_arch = "wasm32"))]
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        // Keep egui's own view of the clipboard in sync for text fields.
        self.ctx.copy_text(text.to_owned());
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text.to_owned());
        Ok(())
    }
}

/// Keeps every copy in memory. Used in tests and when no system clipboard
/// is reachable.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub history: Vec<String>,
    /// Makes every copy fail, to exercise error paths
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("memory clipboard set to fail".into()));
        }
        self.history.push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.copy("background: red;").unwrap();
        assert_eq!(clipboard.last(), Some("background: red;"));

        clipboard.fail = true;
        assert!(matches!(clipboard.copy("x"), Err(ClipboardError::WriteFailed(_))));
        assert_eq!(clipboard.history.len(), 1);
    }
}
