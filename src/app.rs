//! Application state and logic.

use crate::api::{ApiContract, ApiService, FileFormat, Notice, SearchRequest, SearchResponse};
use crate::clipboard::copy_to_clipboard;
use crate::console::{self, Command, PromptState, HELP_LINE};
use crate::dialog::FormatDialogState;
use crate::explorer::ExplorerState;
use crate::shared::Theme;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The mock API service behind every data operation.
    pub service: ApiService,
    /// Static field contract, consulted for add/remove hints.
    pub contract: ApiContract,
    /// Explorer state (filter list + values preview).
    pub explorer: ExplorerState,
    /// Save-format dialog state.
    pub dialog: FormatDialogState,
    /// Command prompt state.
    pub prompt: PromptState,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Whether the status line reports a failure.
    pub status_error: bool,
    /// Most recent search result.
    pub last_result: Option<SearchResponse>,
}

impl App {
    /// Create a new application instance.
    pub fn new(service: ApiService) -> Self {
        let contract = service.contract();
        Self {
            service,
            contract,
            explorer: ExplorerState::new(),
            dialog: FormatDialogState::new(),
            prompt: PromptState::new(),
            theme: Theme::Pro,
            status: "Ready".to_string(),
            status_error: false,
            last_result: None,
        }
    }

    /// Uid of the most recent search result.
    pub fn result_id(&self) -> Option<&str> {
        self.last_result.as_ref().map(|r| r.id.as_str())
    }

    /// Submit the prompt buffer and execute whatever it parses to.
    pub fn submit_prompt(&mut self) {
        let line = self.prompt.submit();
        if let Some(command) = console::parse(&line) {
            self.execute(command);
        }
    }

    /// Execute a console command.
    pub fn execute(&mut self, command: Command) {
        tracing::info!(?command, "console command");
        match command {
            Command::Clear => self.set_status("Ready"),
            Command::View { uid } => self.set_status(format!("Loading UID: {uid}")),
            Command::Share => {
                let id = self.last_result.as_ref().map(|r| r.id.clone());
                self.service.share(id.as_deref());
                self.drain_notices();
            }
            Command::Add { fields } => {
                let added = self.explorer.add_fields(&fields);
                let unknown: Vec<String> = fields
                    .iter()
                    .filter(|name| !self.contract.contains(name))
                    .cloned()
                    .collect();

                let mut status = if added.is_empty() {
                    "No new filters added".to_string()
                } else {
                    format!("Added: {}", added.join(", "))
                };
                if !unknown.is_empty() {
                    status.push_str(&format!(" (not in contract: {})", unknown.join(", ")));
                }
                self.set_status(status);
            }
            Command::Remove { fields } => {
                let removed = self.explorer.remove_fields(&fields);
                if removed.is_empty() {
                    self.set_status("No matching filters");
                } else {
                    self.set_status(format!("Removed: {}", removed.join(", ")));
                }
            }
            Command::Help => self.set_status(HELP_LINE),
            Command::Save {
                format: Some(format),
            } => self.save_result(format),
            // An unrecognized format after `save --` is ignored, like a
            // click on a disabled button.
            Command::Save { format: None } => {}
            Command::Unknown { input } => {
                self.set_failure(format!("Command not recognized: {input}"));
            }
        }
    }

    /// Run a search built from the current filters.
    pub fn run_search(&mut self) {
        let mut request = SearchRequest::new();
        for filter in &self.explorer.filters {
            request.set(&filter.field, filter.values.join(","));
        }

        let response = self.service.search(&request);
        self.set_status(format!("{} rows (uid {})", response.total, response.id));
        self.last_result = Some(response);
        self.drain_notices();
    }

    /// Load unique values for the selected filter into the preview pane.
    pub fn load_selected_values(&mut self) {
        let Some(field) = self.explorer.selected_field() else {
            self.set_status("No filter selected");
            return;
        };
        let field = field.to_string();

        let values = self.service.field_unique_values(&field);
        self.set_status(format!("{} values for {field}", values.len()));
        self.explorer.set_preview(&field, values);
        self.drain_notices();
    }

    /// Open the save-format dialog, if there is a result to save.
    pub fn open_format_dialog(&mut self) {
        if self.last_result.is_none() {
            self.set_status("No results to save");
            return;
        }
        self.dialog.open();
    }

    /// Trigger a download for the format selected in the dialog.
    pub fn confirm_download(&mut self) {
        let format = self.dialog.selected();
        self.dialog.close();
        self.save_result(format);
    }

    /// Copy the current result uid to the clipboard.
    pub fn copy_uid(&mut self) {
        let Some(id) = self.last_result.as_ref().map(|r| r.id.clone()) else {
            self.set_status("No UID available");
            return;
        };

        match copy_to_clipboard(&id) {
            Ok(()) => self.set_status(format!("Copied {id}!")),
            Err(e) => self.set_failure(format!("Copy failed: {e}")),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_status(format!("Theme: {}", self.theme.name()));
    }

    /// Focus the command prompt. The prompt is part of the pro chrome
    /// and stays hidden in the noob theme.
    pub fn focus_prompt(&mut self) {
        if self.theme.prompt_visible() {
            self.prompt.focus();
        } else {
            self.set_status("Command prompt is a pro-theme feature");
        }
    }

    /// Show the one-line command summary.
    pub fn show_help(&mut self) {
        self.set_status(HELP_LINE);
    }

    /// Close any open overlays.
    pub fn close_overlays(&mut self) {
        self.dialog.close();
        self.prompt.cancel();
    }

    /// Scroll preview down.
    pub fn scroll_preview_down(&mut self) {
        self.explorer.scroll_down();
    }

    /// Scroll preview up.
    pub fn scroll_preview_up(&mut self) {
        self.explorer.scroll_up();
    }

    fn save_result(&mut self, format: FileFormat) {
        let Some(id) = self.last_result.as_ref().map(|r| r.id.clone()) else {
            self.set_status("No results to save");
            return;
        };

        self.service.download(&id, format);
        self.drain_notices();
    }

    fn drain_notices(&mut self) {
        for notice in self.service.take_notices() {
            match notice {
                Notice::Degraded { operation, detail } => {
                    self.set_failure(format!("{operation} degraded: {detail}"));
                }
                Notice::LinkOpened { url } => {
                    if url.starts_with("mailto:") {
                        self.set_status("Share link copied to clipboard");
                    } else {
                        self.set_status("Download link copied to clipboard");
                    }
                }
                Notice::LinkFailed { detail, .. } => {
                    self.set_failure(format!("Link hand-off failed: {detail}"));
                }
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_error = false;
    }

    fn set_failure(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_error = true;
    }
}
