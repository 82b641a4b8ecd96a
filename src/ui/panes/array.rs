//! Input array strip
//!
//! Shows the input values as boxed cells with their indices, marking the cell
//! under the cursor and the cells the working state or result points at.

use super::utils::border_style;
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the array strip
pub struct ArrayRenderData<'a> {
    pub name: &'a str,
    pub values: &'a [i64],
    pub step: &'a Step,
    pub target: Option<i64>,
}

fn cell_style(idx: usize, step: &Step, marked: &[usize]) -> Style {
    if step.cursor == Some(idx) {
        Style::default()
            .fg(ratatui::style::Color::Black)
            .bg(DEFAULT_THEME.cursor)
            .add_modifier(Modifier::BOLD)
    } else if marked.contains(&idx) {
        Style::default()
            .fg(DEFAULT_THEME.marked)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.text)
    }
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: ArrayRenderData, is_focused: bool) {
    let title = match data.target {
        Some(target) => format!(" {} · target {} ", data.name, target),
        None => format!(" {} ", data.name),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let marked: Vec<usize> = match &data.step.result {
        Some(result) => result.indices(),
        None => data.step.aux.marked_indices(),
    };

    // Every cell is as wide as the widest value
    let width = data
        .values
        .iter()
        .map(|v| v.to_string().len())
        .chain(std::iter::once(data.values.len().saturating_sub(1).to_string().len()))
        .max()
        .unwrap_or(1);

    let mut value_spans = Vec::new();
    let mut index_spans = Vec::new();
    let mut cursor_spans = Vec::new();
    for (idx, value) in data.values.iter().enumerate() {
        let style = cell_style(idx, data.step, &marked);
        value_spans.push(Span::styled(format!(" {:>width$} ", value), style));
        value_spans.push(Span::raw(" "));
        index_spans.push(Span::styled(
            format!(" {:>width$} ", idx),
            Style::default().fg(DEFAULT_THEME.muted),
        ));
        index_spans.push(Span::raw(" "));
        let pointer = if data.step.cursor == Some(idx) { "↑" } else { " " };
        cursor_spans.push(Span::styled(
            format!(" {:>width$} ", pointer),
            Style::default().fg(DEFAULT_THEME.cursor),
        ));
        cursor_spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(value_spans),
        Line::from(index_spans),
        Line::from(cursor_spans),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
