//! Top title bar UI component.

use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the top bar: product title on the left, a short tagline on the
/// right when there is room for both.
pub fn draw_top_bar(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    const TITLE: &str = " benchtop";
    const TAGLINE: &str = "fixture-backed data explorer ";

    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    )];

    let gap = (area.width as usize).saturating_sub(TITLE.len() + TAGLINE.len());
    if gap > 0 {
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(TAGLINE, Style::default().fg(colors.label)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.text).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
