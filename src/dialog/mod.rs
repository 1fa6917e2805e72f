//! Format dialog feature - file format selection for saving results.

pub mod ui;

use crate::api::FileFormat;

/// State for the save-format dialog overlay.
#[derive(Debug)]
pub struct FormatDialogState {
    /// Is the dialog visible.
    pub visible: bool,
    /// Cursor position (index into [`FileFormat::ALL`]).
    cursor: usize,
}

impl FormatDialogState {
    /// Create a hidden dialog.
    pub fn new() -> Self {
        Self {
            visible: false,
            cursor: 0,
        }
    }

    /// Show the dialog with the cursor on the first format.
    pub fn open(&mut self) {
        self.visible = true;
        self.cursor = 0;
    }

    /// Hide the dialog.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Move the cursor to the next format, wrapping around.
    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % FileFormat::ALL.len();
    }

    /// Move the cursor to the previous format, wrapping around.
    pub fn prev(&mut self) {
        self.cursor = (self.cursor + FileFormat::ALL.len() - 1) % FileFormat::ALL.len();
    }

    /// Get the format under the cursor.
    pub fn selected(&self) -> FileFormat {
        FileFormat::ALL[self.cursor]
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for FormatDialogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut dialog = FormatDialogState::new();
        dialog.open();
        assert_eq!(dialog.selected(), FileFormat::Json);

        dialog.prev();
        assert_eq!(dialog.selected(), FileFormat::Parquet);

        dialog.next();
        assert_eq!(dialog.selected(), FileFormat::Json);
        dialog.next();
        assert_eq!(dialog.selected(), FileFormat::Csv);
    }

    #[test]
    fn reopen_resets_cursor() {
        let mut dialog = FormatDialogState::new();
        dialog.open();
        dialog.next();
        dialog.close();
        assert!(!dialog.visible);

        dialog.open();
        assert!(dialog.visible);
        assert_eq!(dialog.selected(), FileFormat::Json);
    }
}
