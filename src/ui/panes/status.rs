//! Status bar and narration rendering

use crate::code::Language;
use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
#[derive(Debug)]
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub language: Language,
    pub speed: f64,
    pub stars: Option<u64>,
    pub is_playing: bool,
    pub is_editing: bool,
}

/// Render the description of the current step
pub fn render_narration(frame: &mut Frame, area: Rect, step: Option<&Step>) {
    let line = match step {
        Some(step) => Line::from(vec![
            Span::styled(
                format!(" {} ", step.operation.label()),
                Style::default()
                    .bg(DEFAULT_THEME.group_key)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", step.description),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        None => Line::from(Span::styled(
            " No steps",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);

    // Left side: step info and status
    let mut left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.current_step + 1, data.total_steps),
            Style::default()
                .bg(if data.is_editing {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} · {}x ", data.language.name(), data.speed),
            bar_bg.fg(DEFAULT_THEME.group_key),
        ),
    ];
    if let Some(stars) = data.stars {
        left_spans.push(Span::styled(
            format!("★ {} ", stars),
            bar_bg.fg(DEFAULT_THEME.function),
        ));
    }
    left_spans.push(Span::styled("| ", bar_bg.fg(DEFAULT_THEME.comment)));
    left_spans.push(Span::styled(
        data.message.to_string(),
        bar_bg.fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if data.is_editing {
        &[(" ↵ ", " run "), (" esc ", " cancel ")]
    } else {
        &[
            (" ←/→ ", " step "),
            (" ⎵ ", " play "),
            (" ↵ / ⌫ ", " end/start "),
            (" tab ", " lang "),
            (" +/- ", " speed "),
            (" e ", " edit "),
            (" n ", " random "),
            (" q ", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    // Show status indicators based on position and state
    let is_at_start = data.current_step == 0;
    let is_at_end = data.current_step + 1 >= data.total_steps;

    let indicator = if data.is_editing {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some((text, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
