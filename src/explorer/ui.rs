//! Explorer panel UI rendering.

use super::ExplorerState;
use crate::shared::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the explorer panel: filter list on the left, values preview on
/// the right.
pub fn draw_explorer(
    f: &mut Frame<'_>,
    explorer: &mut ExplorerState,
    area: Rect,
    colors: &ThemeColors,
) {
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_filters(f, explorer, content[0], colors);
    draw_preview(f, explorer, content[1], colors);
}

fn draw_filters(f: &mut Frame<'_>, explorer: &mut ExplorerState, area: Rect, colors: &ThemeColors) {
    if explorer.filters.is_empty() {
        draw_welcome(f, area, colors);
        return;
    }

    // Adjust scroll to keep cursor visible (subtract 2 for borders)
    let viewport_height = area.height.saturating_sub(2) as usize;
    explorer.adjust_scroll(viewport_height);

    let cursor = explorer.cursor();
    let scroll_offset = explorer.scroll_offset();

    let items: Vec<ListItem<'_>> = explorer
        .filters
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(viewport_height)
        .map(|(idx, filter)| {
            let text = if filter.values.is_empty() {
                format!("  {}", filter.field)
            } else {
                format!("  {} = {}", filter.field, filter.values.join(","))
            };

            let style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    let title = format!(" Filters ({}) ", explorer.filters.len());

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}

fn draw_preview(f: &mut Frame<'_>, explorer: &ExplorerState, area: Rect, colors: &ThemeColors) {
    let (title, lines) = match &explorer.preview {
        Some(preview) => {
            let title = format!(" {} values ({}) ", preview.field, preview.values.len());
            let lines: Vec<Line<'_>> = if preview.values.is_empty() {
                vec![Line::from(Span::styled(
                    "No values available",
                    Style::default().fg(colors.text),
                ))]
            } else {
                preview
                    .values
                    .iter()
                    .map(|entry| {
                        Line::from(vec![
                            Span::styled(
                                format!("{:>6}  ", entry.count),
                                Style::default().fg(colors.label),
                            ),
                            Span::styled(
                                entry.value.clone(),
                                Style::default().fg(colors.value),
                            ),
                        ])
                    })
                    .collect()
            };
            (title, lines)
        }
        None => (
            " Values ".to_string(),
            vec![Line::from(Span::styled(
                "Press u to load unique values for the selected filter",
                Style::default().fg(colors.text),
            ))],
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .scroll((explorer.preview_scroll, 0));

    f.render_widget(paragraph, area);
}

/// Draw the welcome screen shown while no filters are active.
fn draw_welcome(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to benchtop!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Add a filter to get started:"),
        Line::from("press : and type, say, add cell_type"),
        Line::from(""),
        Line::from("Keyboard shortcuts:"),
        Line::from("  j/k or ↓/↑  - Navigate filters"),
        Line::from("  u           - Load unique values"),
        Line::from("  r           - Run search"),
        Line::from("  s           - Save results"),
        Line::from("  y           - Copy result uid"),
        Line::from("  T           - Cycle theme"),
        Line::from("  :           - Command prompt"),
        Line::from("  q           - Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" benchtop ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}
