//! Grouping map pane rendering
//!
//! Shows the step's grouping snapshot one key per row, in insertion order. The
//! step's current key is drawn with a highlighted background and its members in
//! the highlight color.

use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Render the grouping snapshot of `step`
pub fn render_groups_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    scroll_offset: &mut usize,
) {
    let title = match step {
        Some(step) => format!(
            " Map ({} keys, {} strings) ",
            step.groups.len(),
            step.groups.total_members()
        ),
        None => " Map ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let Some(step) = step.filter(|s| !s.groups.is_empty()) else {
        let paragraph = Paragraph::new("{ }  (empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let current_key = step.current_key.as_deref();
    let current_string = step.current_string.as_deref();

    let total_items = step.groups.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Follow the current key, otherwise respect manual scrolling
    if let Some(pos) = current_key.and_then(|k| step.groups.position(k)) {
        if pos < *scroll_offset {
            *scroll_offset = pos;
        } else if pos >= *scroll_offset + visible_height {
            *scroll_offset = pos + 1 - visible_height;
        }
    }
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = step
        .groups
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(key, members)| {
            let is_current = Some(key) == current_key;
            let mut spans = vec![
                Span::styled(
                    quoted(key),
                    Style::default()
                        .fg(DEFAULT_THEME.group_key)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" → [", Style::default().fg(DEFAULT_THEME.comment)),
            ];
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.comment)));
                }
                let style = if is_current && Some(member.as_str()) == current_string {
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD)
                } else if is_current {
                    Style::default().fg(DEFAULT_THEME.primary)
                } else {
                    Style::default().fg(DEFAULT_THEME.string)
                };
                spans.push(Span::styled(quoted(member), style));
            }
            spans.push(Span::styled("]", Style::default().fg(DEFAULT_THEME.comment)));

            let item = ListItem::new(Line::from(spans));
            if is_current {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(visible_items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
