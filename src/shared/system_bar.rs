//! System bar UI component.
//!
//! The bottom bar: version, active theme and current result uid on the
//! left, the command prompt on the right. The prompt is a pro-theme
//! feature; in noob the bar shows only the left segment.

use crate::console::PromptState;
use crate::shared::{Theme, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visible prefix length of the result uid.
const UID_VISIBLE: usize = 12;

/// Draw the system bar.
pub fn draw_system_bar(
    f: &mut Frame<'_>,
    area: Rect,
    prompt: &PromptState,
    theme: Theme,
    result_id: Option<&str>,
    colors: &ThemeColors,
) {
    let uid = result_id.map(short_uid).unwrap_or_else(|| "no results".to_string());
    let left = format!(" v{} | {} | {} ", env!("CARGO_PKG_VERSION"), theme.name(), uid);

    let mut spans = vec![Span::styled(left.clone(), Style::default().fg(colors.label))];

    if theme.prompt_visible() {
        let label = format!("{}@benchtop $ ", prompt.user());

        // Keep the tail of the buffer visible when it outgrows the bar.
        let used = left.width() + label.width() + 1;
        let budget = (area.width as usize).saturating_sub(used);
        let visible = tail_fitting(prompt.buffer(), budget);

        let label_style = if prompt.is_active() {
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.border)
        };
        spans.push(Span::styled(label, label_style));
        spans.push(Span::styled(
            visible.to_string(),
            Style::default().fg(colors.value),
        ));
        if prompt.is_active() {
            spans.push(Span::styled("█", Style::default().fg(colors.text)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn short_uid(uid: &str) -> String {
    if uid.chars().count() <= UID_VISIBLE {
        format!("uid {uid}")
    } else {
        let head: String = uid.chars().take(UID_VISIBLE).collect();
        format!("uid {head}…")
    }
}

/// Longest suffix of `text` whose display width fits in `budget` columns.
fn tail_fitting(text: &str, budget: usize) -> &str {
    if text.width() <= budget {
        return text;
    }
    let mut start = text.len();
    let mut width = 0;
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
