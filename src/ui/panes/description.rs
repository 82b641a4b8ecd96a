//! Step description pane

use super::utils::border_style;
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the description of the current step
pub fn render_description_pane(frame: &mut Frame, area: Rect, step: &Step, is_focused: bool) {
    let block = Block::default()
        .title(" What's happening ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let style = if step.is_terminal() {
        Style::default()
            .fg(DEFAULT_THEME.found)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.text)
    };

    let paragraph = Paragraph::new(step.description.as_str())
        .style(style)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
