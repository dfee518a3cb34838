//! Code pane rendering with syntax highlighting
//!
//! This module renders the algorithm in the active [`Language`], highlighting the
//! line the current step maps to and printing that step's variables after it.
//!
//! # Features
//!
//! - Keyword, string, number and comment highlighting per language
//! - Current line highlighting with a variable readout
//! - The current line stays at a fixed visual row while stepping
//! - Line numbering
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use crate::code::{line_for, variables_for_line, Language};
use crate::snapshot::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for the algorithm sources
fn highlight_source_line(line: &str, language: Language) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let comment = language.comment_prefix();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte_idx, c) = chars[i];

        // Handle comments
        if line[byte_idx..].starts_with(comment) {
            flush_word(&mut spans, &mut current_word, language, false);
            spans.push(Span::styled(
                line[byte_idx..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // Handle string and char literals
        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut current_word, language, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                end += if chars[end].1 == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map_or(line.len(), |&(b, _)| b);
            spans.push(Span::styled(
                line[byte_idx..end_byte].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, language, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, language, false);
    Line::from(spans)
}

fn flush_word(
    spans: &mut Vec<Span<'static>>,
    word: &mut String,
    language: Language,
    is_call: bool,
) {
    if word.is_empty() {
        return;
    }
    let style = get_word_style(word, language, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn get_word_style(word: &str, language: Language, is_call: bool) -> Style {
    if language.keywords().contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_call {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Scroll state for the code pane
#[derive(Debug, Default)]
pub struct CodeScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Render the code pane
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    language: Language,
    step: Option<&Step>,
    scroll_state: &mut CodeScrollState,
) {
    let block = Block::default()
        .title(format!(" {} ", language.name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let lines: Vec<&str> = language.source().lines().collect();
    let total_lines = lines.len();
    let current_line = step.map_or(0, |s| line_for(language, s.operation));

    // Account for borders (2), min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if current_line > 0 && current_line <= total_lines {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);
        if total_lines > visible_height {
            scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
        } else {
            scroll_state.offset = 0;
        }
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_line(line, language);
            if is_current {
                let current_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(current_bg);
                }
            }

            let marker = if is_current { "▶" } else { " " };
            let mut final_spans = vec![Span::styled(format!("{}{:3} ", marker, line_num), num_style)];
            final_spans.extend(content_line.spans);

            if let Some(readout) = step.and_then(|s| variables_for_line(s, language, line_num)) {
                final_spans.push(Span::styled(
                    format!("  // {}", readout),
                    Style::default()
                        .fg(DEFAULT_THEME.variables)
                        .add_modifier(Modifier::ITALIC),
                ));
            }

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
