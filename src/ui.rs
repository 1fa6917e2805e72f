//! User interface rendering.

use crate::app::App;
use crate::dialog::ui::draw_dialog;
use crate::explorer::ui::draw_explorer;
use crate::shared::{draw_system_bar, draw_top_bar, ThemeColors};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout: top bar, explorer, status line, system bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_top_bar(f, chunks[0], &colors);
    draw_explorer(f, &mut app.explorer, chunks[1], &colors);
    draw_status(f, app, chunks[2], &colors);
    draw_system_bar(
        f,
        chunks[3],
        &app.prompt,
        app.theme,
        app.result_id(),
        &colors,
    );

    // Overlays
    draw_dialog(f, &app.dialog, &colors);
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let fg = if app.status_error {
        colors.error
    } else {
        colors.status_fg
    };

    let paragraph =
        Paragraph::new(app.status.as_str()).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
