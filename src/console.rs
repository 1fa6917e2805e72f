//! Command console for the system bar prompt.
//!
//! A small verb language dispatched by prefix matching: input is trimmed
//! and lowercased as a whole, so verbs and their arguments are both
//! case-insensitive. Unrecognized non-empty input parses to
//! [`Command::Unknown`] so the app can report it; empty input parses to
//! nothing. [`PromptState`] holds the line being edited in the system
//! bar.

use crate::api::FileFormat;

/// Editing state of the system bar command prompt.
#[derive(Debug)]
pub struct PromptState {
    active: bool,
    buffer: String,
    user: String,
}

impl PromptState {
    /// Create an idle prompt. The username shown in the prompt label is
    /// taken from the environment, falling back to `user`.
    pub fn new() -> Self {
        Self {
            active: false,
            buffer: String::new(),
            user: std::env::var("USER").unwrap_or_else(|_| "user".to_string()),
        }
    }

    /// Check if the prompt has focus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Give the prompt focus.
    pub fn focus(&mut self) {
        self.active = true;
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Take the entered line, clearing the buffer and dropping focus.
    pub fn submit(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.buffer)
    }

    /// Drop focus and discard the buffer.
    pub fn cancel(&mut self) {
        self.active = false;
        self.buffer.clear();
    }

    /// Get the current buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the username shown in the prompt label.
    pub fn user(&self) -> &str {
        &self.user
    }
}

impl Default for PromptState {
    fn default() -> Self {
        Self::new()
    }
}

/// One-line command summary shown by `help`.
pub const HELP_LINE: &str =
    "view <uid> | share | add <f1,f2,..> | remove <f1,f2,..> | save --json|--csv|--parquet | clear";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reset the prompt and status line.
    Clear,
    /// Load a specific result by uid.
    View {
        /// The requested uid (lowercased, like all input).
        uid: String,
    },
    /// Share the current result via a mail link.
    Share,
    /// Add fields to the active filter set.
    Add {
        /// Field names, trimmed, empties dropped.
        fields: Vec<String>,
    },
    /// Remove fields from the active filter set.
    Remove {
        /// Field names, trimmed, empties dropped.
        fields: Vec<String>,
    },
    /// Show the command summary.
    Help,
    /// Save the current result in a format. `None` means the format flag
    /// was not one of json/csv/parquet; the app ignores those, matching
    /// the save button's guard behavior.
    Save {
        /// Parsed format, when recognized.
        format: Option<FileFormat>,
    },
    /// Anything else that was non-empty.
    Unknown {
        /// The normalized input, for the "unknown command" report.
        input: String,
    },
}

/// Parse one line of console input. Returns `None` for blank input.
pub fn parse(input: &str) -> Option<Command> {
    let cmd = input.trim().to_lowercase();
    if cmd.is_empty() {
        return None;
    }

    let command = if cmd == "clear" {
        Command::Clear
    } else if let Some(rest) = cmd.strip_prefix("view ") {
        Command::View {
            uid: rest.trim().to_string(),
        }
    } else if cmd == "share" {
        Command::Share
    } else if let Some(rest) = cmd.strip_prefix("add ") {
        Command::Add {
            fields: split_fields(rest),
        }
    } else if let Some(rest) = cmd.strip_prefix("remove ") {
        Command::Remove {
            fields: split_fields(rest),
        }
    } else if cmd.starts_with("help") {
        Command::Help
    } else if let Some(rest) = cmd.strip_prefix("save --") {
        Command::Save {
            format: FileFormat::parse(rest),
        }
    } else {
        Command::Unknown { input: cmd }
    };
    Some(command)
}

fn split_fields(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_parses_to_nothing() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn verbs_are_case_insensitive_and_trimmed() {
        assert_eq!(parse("  CLEAR "), Some(Command::Clear));
        assert_eq!(parse("Share"), Some(Command::Share));
        assert_eq!(
            parse("VIEW AbC123"),
            Some(Command::View {
                uid: "abc123".to_string()
            })
        );
    }

    #[test]
    fn add_and_remove_split_field_lists() {
        assert_eq!(
            parse("add cell_type, supplier ,screen"),
            Some(Command::Add {
                fields: vec![
                    "cell_type".to_string(),
                    "supplier".to_string(),
                    "screen".to_string()
                ]
            })
        );
        assert_eq!(
            parse("remove supplier,,"),
            Some(Command::Remove {
                fields: vec!["supplier".to_string()]
            })
        );
    }

    #[test]
    fn bare_view_or_add_is_unknown() {
        // The verbs require a trailing argument; without one they fall
        // through to the unknown branch.
        assert_eq!(
            parse("view"),
            Some(Command::Unknown {
                input: "view".to_string()
            })
        );
        assert_eq!(
            parse("add"),
            Some(Command::Unknown {
                input: "add".to_string()
            })
        );
    }

    #[test]
    fn help_matches_by_prefix() {
        assert_eq!(parse("help"), Some(Command::Help));
        assert_eq!(parse("help me"), Some(Command::Help));
    }

    #[test]
    fn save_parses_known_formats_only() {
        assert_eq!(
            parse("save --json"),
            Some(Command::Save {
                format: Some(FileFormat::Json)
            })
        );
        assert_eq!(
            parse("save --PARQUET"),
            Some(Command::Save {
                format: Some(FileFormat::Parquet)
            })
        );
        assert_eq!(parse("save --xlsx"), Some(Command::Save { format: None }));
    }

    #[test]
    fn unrecognized_input_is_reported() {
        assert_eq!(
            parse("frobnicate now"),
            Some(Command::Unknown {
                input: "frobnicate now".to_string()
            })
        );
    }

    #[test]
    fn prompt_submit_clears_buffer_and_focus() {
        let mut prompt = PromptState::new();
        prompt.focus();
        assert!(prompt.is_active());
        for c in "view abc".chars() {
            prompt.input(c);
        }
        prompt.backspace();
        assert_eq!(prompt.buffer(), "view ab");
        assert_eq!(prompt.submit(), "view ab");
        assert!(!prompt.is_active());
        assert!(prompt.buffer().is_empty());
    }

    #[test]
    fn prompt_cancel_discards_buffer() {
        let mut prompt = PromptState::new();
        prompt.focus();
        prompt.input('q');
        prompt.cancel();
        assert!(!prompt.is_active());
        assert!(prompt.buffer().is_empty());
    }
}
