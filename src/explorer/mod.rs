//! Explorer feature - filter list and values preview.
//!
//! This module provides the main panel state: an ordered list of filters
//! with cursor navigation, and a preview pane showing the unique values
//! most recently loaded for a field.

pub mod ui;

use crate::api::UniqueValue;

/// A single filter in the explorer list.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Queryable field name.
    pub field: String,
    /// Requested values, joined into the search request.
    pub values: Vec<String>,
}

/// Unique values loaded for one field.
#[derive(Debug, Clone)]
pub struct ValuesPreview {
    /// Field the values belong to.
    pub field: String,
    /// Ranked (value, count) entries.
    pub values: Vec<UniqueValue>,
}

/// Explorer state - combines filter navigation and the values preview.
#[derive(Debug)]
pub struct ExplorerState {
    /// Active filters in display order.
    pub filters: Vec<Filter>,
    /// Cursor position (index into filters).
    cursor: usize,
    /// Scroll offset for the filter list.
    scroll_offset: usize,
    /// Values loaded for the preview pane.
    pub preview: Option<ValuesPreview>,
    /// Preview scroll offset.
    pub preview_scroll: u16,
}

impl ExplorerState {
    /// Create a new explorer state with no filters.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            preview: None,
            preview_scroll: 0,
        }
    }

    /// Move the cursor up one position.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down one position.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filters.len() {
            self.cursor += 1;
        }
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }

        if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.saturating_sub(viewport_height - 1);
        }
    }

    /// Get the current scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the field name under the cursor.
    pub fn selected_field(&self) -> Option<&str> {
        self.filters.get(self.cursor).map(|f| f.field.as_str())
    }

    /// Append filters for the given field names, skipping names already
    /// present. Returns the names actually added.
    pub fn add_fields(&mut self, fields: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for name in fields {
            if self.filters.iter().any(|f| &f.field == name) {
                continue;
            }
            self.filters.push(Filter {
                field: name.clone(),
                values: Vec::new(),
            });
            added.push(name.clone());
        }
        added
    }

    /// Remove filters for the given field names, clamping the cursor to
    /// the shrunk list. Returns the names actually removed.
    pub fn remove_fields(&mut self, fields: &[String]) -> Vec<String> {
        let mut removed = Vec::new();
        self.filters.retain(|f| {
            if fields.contains(&f.field) {
                removed.push(f.field.clone());
                false
            } else {
                true
            }
        });
        if self.cursor >= self.filters.len() {
            self.cursor = self.filters.len().saturating_sub(1);
        }
        removed
    }

    /// Replace the preview pane contents.
    pub fn set_preview(&mut self, field: &str, values: Vec<UniqueValue>) {
        self.preview = Some(ValuesPreview {
            field: field.to_string(),
            values,
        });
        self.preview_scroll = 0;
    }

    /// Scroll preview down.
    pub fn scroll_down(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_add(5);
    }

    /// Scroll preview up.
    pub fn scroll_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(5);
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[String]) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn add_skips_duplicates() {
        let mut state = ExplorerState::new();
        let added = state.add_fields(&["cell_type".to_string(), "supplier".to_string()]);
        assert_eq!(names(&added), ["cell_type", "supplier"]);

        let again = state.add_fields(&["supplier".to_string(), "screen".to_string()]);
        assert_eq!(names(&again), ["screen"]);
        assert_eq!(state.filters.len(), 3);
    }

    #[test]
    fn remove_clamps_cursor() {
        let mut state = ExplorerState::new();
        state.add_fields(&[
            "cell_type".to_string(),
            "supplier".to_string(),
            "screen".to_string(),
        ]);
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.selected_field(), Some("screen"));

        let removed = state.remove_fields(&["screen".to_string(), "absent".to_string()]);
        assert_eq!(names(&removed), ["screen"]);
        assert_eq!(state.selected_field(), Some("supplier"));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = ExplorerState::new();
        state.cursor_up();
        state.cursor_down();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.selected_field(), None);

        state.add_fields(&["cell_type".to_string()]);
        state.cursor_down();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut state = ExplorerState::new();
        let fields: Vec<String> = (0..20).map(|i| format!("field_{i}")).collect();
        state.add_fields(&fields);

        for _ in 0..12 {
            state.cursor_down();
        }
        state.adjust_scroll(10);
        assert_eq!(state.scroll_offset(), 3);

        for _ in 0..12 {
            state.cursor_up();
        }
        state.adjust_scroll(10);
        assert_eq!(state.scroll_offset(), 0);
    }
}
