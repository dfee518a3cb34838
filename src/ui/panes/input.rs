//! Input array pane rendering

use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the input strings, marking the one being processed
pub fn render_input_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, scroll_offset: &mut usize) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let Some(step) = step else {
        let paragraph = Paragraph::new("(no input)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    // The recorded index identifies the current element even when strings repeat
    let current_index = step
        .current_index
        .filter(|_| step.operation.is_per_string());

    let total_items = step.input.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the current element in view
    if let Some(idx) = current_index {
        if idx < *scroll_offset {
            *scroll_offset = idx;
        } else if idx >= *scroll_offset + visible_height {
            *scroll_offset = idx + 1 - visible_height;
        }
    }
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = step
        .input
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, s)| {
            let shown = if s.is_empty() { "\"\"" } else { s.as_str() };
            let (marker, style) = if Some(idx) == current_index {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else if step.is_highlighted(s) {
                ("  ", Style::default().fg(DEFAULT_THEME.primary))
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:>4} ", marker, idx), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(shown.to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
