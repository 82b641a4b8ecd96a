//! State pane: variables, working structure and result
//!
//! Variables are listed in the order the step recorded them. The auxiliary
//! snapshot and, on the terminal step, the result follow underneath.

use super::utils::{border_style, format_aux, scalar_style};
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the state pane
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" State · {} ", step.phase.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut all_items: Vec<ListItem> = Vec::new();

    let name_width = step
        .variables
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    if step.variables.is_empty() {
        all_items.push(ListItem::new("(no variables)").style(Style::default().fg(DEFAULT_THEME.muted)));
    }
    for (name, value) in &step.variables {
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("  {:<name_width$}", name),
                Style::default().fg(DEFAULT_THEME.text),
            ),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.muted)),
            Span::styled(value.to_string(), scalar_style(value)),
        ])));
    }

    if let Some((label, body)) = format_aux(&step.aux) {
        all_items.push(ListItem::new(""));
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.playing)),
            Span::styled(
                label,
                Style::default()
                    .fg(DEFAULT_THEME.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])));
        all_items.push(ListItem::new(Span::styled(
            format!("  {}", body),
            Style::default().fg(DEFAULT_THEME.text),
        )));
    }

    if let Some(result) = &step.result {
        all_items.push(ListItem::new(""));
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                "✔ result ",
                Style::default()
                    .fg(DEFAULT_THEME.found)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                result.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.marked)
                    .add_modifier(Modifier::BOLD),
            ),
        ])));
    }

    // Clamp scroll offset only if content exceeds visible area
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
