//! Benchtop - a terminal data explorer over fixture-backed mock APIs.

use anyhow::Result;
use benchtop::api::{ApiContract, ApiService, DirStore, FixtureResolver, Notice, SearchRequest};
use benchtop::app::App;
use benchtop::clipboard::ClipboardNavigator;
use benchtop::ui;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "benchtop")]
#[command(about = "A terminal data explorer over fixture-backed mock APIs", long_about = None)]
struct Args {
    /// Fixture root directory
    #[arg(default_value = "fixtures")]
    fixtures: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the field contract as JSON and exit
    #[arg(long)]
    contract: bool,

    /// Print unique values for FIELD as JSON and exit
    #[arg(long, value_name = "FIELD")]
    values: Option<String>,

    /// Run a search from a field=value,... spec, print the response as JSON and exit
    #[arg(long, value_name = "SPEC")]
    search: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting benchtop");
    }

    // The contract is pure data; dump it before touching any fixtures
    if args.contract {
        println!("{}", serde_json::to_string_pretty(&ApiContract::builtin())?);
        return Ok(());
    }

    if !args.fixtures.exists() {
        eprintln!("Error: Fixture root not found: {}", args.fixtures.display());
        std::process::exit(1);
    }

    let store = DirStore::new(&args.fixtures);
    let resolver = match FixtureResolver::new(Box::new(store)) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut service = ApiService::new(resolver, Box::new(ClipboardNavigator));

    // Batch mode: unique values for one field, strict
    if let Some(field) = args.values.as_deref() {
        match service.field_unique_values_checked(field) {
            Ok(values) => {
                println!("{}", serde_json::to_string_pretty(&values)?);
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Batch mode: one-shot search, degrading
    if let Some(spec) = args.search.as_deref() {
        let response = service.search(&SearchRequest::from_spec(spec));
        for notice in service.take_notices() {
            if let Notice::Degraded { operation, detail } = notice {
                eprintln!("warning: {} degraded: {}", operation, detail);
            }
        }
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(service);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("benchtop exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Dialog mode - handle separately
                if app.dialog.visible {
                    match (key.modifiers, key.code) {
                        // Close dialog
                        (KeyModifiers::NONE, KeyCode::Esc)
                        | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                            app.dialog.close();
                        }
                        // Format selection
                        (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.dialog.prev();
                        }
                        (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.dialog.next();
                        }
                        (KeyModifiers::NONE, KeyCode::Enter) => {
                            app.confirm_download();
                        }
                        _ => {}
                    }
                    continue;
                }

                // Prompt mode - handle separately
                if app.prompt.is_active() {
                    match key.code {
                        KeyCode::Enter => app.submit_prompt(),
                        KeyCode::Esc => app.prompt.cancel(),
                        KeyCode::Backspace => app.prompt.backspace(),
                        KeyCode::Char(c) => app.prompt.input(c),
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Navigation
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.explorer.cursor_up();
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.explorer.cursor_down();
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('u')) => {
                        app.load_selected_values();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.run_search();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('s')) => {
                        app.open_format_dialog();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('y')) => {
                        app.copy_uid();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    // Command prompt; shifted punctuation may or may not
                    // report the SHIFT modifier depending on the terminal
                    (KeyModifiers::NONE, KeyCode::Char(':'))
                    | (KeyModifiers::SHIFT, KeyCode::Char(':')) => {
                        app.focus_prompt();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('?'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.show_help();
                    },

                    // Preview scrolling
                    (KeyModifiers::CONTROL, KeyCode::Char('d'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('J')) => {
                        app.scroll_preview_down();
                    },
                    (KeyModifiers::CONTROL, KeyCode::Char('u'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('K')) => {
                        app.scroll_preview_up();
                    },

                    // Escape - close overlays
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.close_overlays();
                    },

                    _ => {},
                }
            }
        }
    }
}
