//! Format dialog UI rendering.

use super::FormatDialogState;
use crate::api::FileFormat;
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the save-format dialog.
pub fn draw_dialog(f: &mut Frame<'_>, state: &FormatDialogState, colors: &ThemeColors) {
    if !state.visible {
        return;
    }

    let area = centered_rect(40, 40, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Save results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Select a file format:",
            Style::default().fg(colors.text),
        )),
        Line::from(""),
    ];

    for (idx, format) in FileFormat::ALL.iter().enumerate() {
        let marker = if idx == state.cursor() { "> " } else { "  " };
        let style = if idx == state.cursor() {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.value)
        };
        lines.push(Line::from(Span::styled(
            format!("  {}{}", marker, format.as_str()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "j/k:select | Enter:save | Esc:cancel",
        Style::default().fg(colors.label),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().fg(colors.text));
    f.render_widget(paragraph, inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
