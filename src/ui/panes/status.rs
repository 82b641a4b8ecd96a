//! Status bar rendering with keybindings and playback indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub current_step: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    pub speed: f64,
    /// Prompt and buffer while editing input
    pub editing: Option<(&'a str, &'a str)>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.status_bg);

    // Left side: step counter and message (or the input prompt)
    let left_spans = if let Some((prompt, buffer)) = data.editing {
        vec![
            Span::styled(
                format!(" {} ", prompt),
                Style::default()
                    .bg(DEFAULT_THEME.playing)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}█", buffer), bar_bg.fg(DEFAULT_THEME.text)),
        ]
    } else {
        vec![
            Span::styled(
                format!(" Step {}/{} ", data.current_step + 1, data.total_steps),
                Style::default()
                    .bg(if data.is_error {
                        DEFAULT_THEME.failure
                    } else {
                        DEFAULT_THEME.accent
                    })
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | ", bar_bg.fg(DEFAULT_THEME.muted)),
            Span::styled(
                format!(" {} ", data.message),
                bar_bg.fg(if data.is_error {
                    DEFAULT_THEME.failure
                } else {
                    DEFAULT_THEME.text
                }),
            ),
        ]
    };

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_bg)
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.text);
    let sep_style = bar_bg.fg(DEFAULT_THEME.muted);

    let mut right_spans = if data.editing.is_some() {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" apply ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" +/- ", key_style),
            Span::styled(format!(" {}x ", data.speed), desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" l/a ", key_style),
            Span::styled(" lang/algo ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" i/t ", key_style),
            Span::styled(" input ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    let is_at_start = data.current_step == 0;
    let is_at_end = data.current_step + 1 >= data.total_steps;

    let badge = if data.editing.is_some() {
        Some((" ⌨ INPUT ", DEFAULT_THEME.playing))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.playing))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.failure))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.found))
    } else {
        None
    };

    if let Some((label, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_bg)
            .alignment(Alignment::Right),
        layout[1],
    );
}
