//! Clipboard integration.

use crate::api::Navigator;
use crate::error::Result;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Terminal sessions have no browser to hand links to, so download and
/// share locators are put on the clipboard instead.
#[derive(Debug, Default)]
pub struct ClipboardNavigator;

impl Navigator for ClipboardNavigator {
    fn open(&mut self, url: &str) -> Result<()> {
        copy_to_clipboard(url)
    }
}
