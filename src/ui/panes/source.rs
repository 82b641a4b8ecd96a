//! Source listing pane with the synchronized line highlighted
//!
//! This module renders the algorithm's source listing in the selected
//! language, with basic syntax highlighting and the line that implements the
//! current step marked.
//!
//! # Features
//!
//! - Keyword/type highlighting for Python, JavaScript, Java and C++
//! - Current line highlighting with arrow indicator (none when the line
//!   synchronizer found no match)
//! - Title notes when the listing fell back to the default language
//! - Scroll state that keeps the highlighted line at a fixed visual row
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use super::utils::border_style;
use crate::catalog::SourceListing;
use crate::sync::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for one line of `language`
fn highlight_source_code(line: &str, language: Language) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let comment = language.comment_prefix();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (byte_idx, c) = chars[i];

        // Handle comments
        if line[byte_idx..].starts_with(comment) {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                line[byte_idx..].to_string(),
                Style::default().fg(DEFAULT_THEME.syntax.comment),
            ));
            break;
        }

        // Handle strings (single and double quoted)
        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                if chars[end].1 == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            end = (end + 1).min(chars.len());
            let end_byte = chars.get(end).map_or(line.len(), |(b, _)| *b);
            spans.push(Span::styled(
                line[byte_idx..end_byte].to_string(),
                Style::default().fg(DEFAULT_THEME.syntax.literal),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_func = c == '(';
                let style = get_keyword_style(&current_word, is_func, language);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.accent), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.text),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false, language);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn is_type_name(word: &str, language: Language) -> bool {
    match language {
        Language::Python => matches!(word, "set" | "dict" | "list" | "int" | "float"),
        Language::JavaScript => matches!(word, "Set" | "Map" | "Infinity"),
        Language::Java => matches!(
            word,
            "int" | "boolean" | "Integer" | "Set" | "HashSet" | "Map" | "HashMap"
        ),
        Language::Cpp => matches!(
            word,
            "int" | "bool" | "vector" | "unordered_set" | "unordered_map" | "INT_MAX"
        ),
    }
}

fn is_keyword(word: &str, language: Language) -> bool {
    match language {
        Language::Python => matches!(
            word,
            "def" | "for" | "in" | "if" | "else" | "elif" | "return" | "not" | "and" | "or"
                | "True" | "False" | "None"
        ),
        Language::JavaScript => matches!(
            word,
            "function" | "const" | "let" | "for" | "of" | "if" | "else" | "return" | "new"
                | "true" | "false"
        ),
        Language::Java => matches!(
            word,
            "class" | "public" | "for" | "if" | "else" | "return" | "new" | "true" | "false"
        ),
        Language::Cpp => matches!(
            word,
            "class" | "public" | "for" | "if" | "else" | "return" | "true" | "false"
        ),
    }
}

fn get_keyword_style(word: &str, is_function: bool, language: Language) -> Style {
    if is_type_name(word, language) {
        Style::default().fg(DEFAULT_THEME.syntax.builtin_type)
    } else if is_keyword(word, language) {
        Style::default()
            .fg(DEFAULT_THEME.syntax.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.syntax.number)
    } else if is_function {
        Style::default().fg(DEFAULT_THEME.syntax.call)
    } else {
        Style::default().fg(DEFAULT_THEME.text) // Variables/Identifiers
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Data needed to render the source pane
pub struct SourceRenderData {
    pub listing: SourceListing,
    /// 1-based line to highlight, None for no highlight
    pub current_line: Option<usize>,
    pub is_terminal: bool,
}

/// Render the source listing pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let title = if data.listing.fell_back() {
        format!(
            " Source · {} (no {} listing) ",
            data.listing.language, data.listing.requested
        )
    } else {
        format!(" Source · {} ", data.listing.language)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = data.listing.text.lines().collect();
    let total_lines = lines.len();

    // Account for borders (2), min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the current line at its visual row, centered initially
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(current_line) = data.current_line.filter(|l| *l > 0 && *l <= total_lines) {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);
    }
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = data.current_line == Some(line_num);
            let marker = if is_current { "▶" } else { " " };
            let line_num_str = format!("{}{:3} ", marker, line_num);

            let (num_style, content_base_style) = if is_current && data.is_terminal {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.found)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.synced_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.playing)
                        .add_modifier(Modifier::BOLD),
                    Style::default().bg(DEFAULT_THEME.synced_line_bg),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.muted), Style::default())
            };

            let mut content_line = highlight_source_code(line, data.listing.language);
            if is_current {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(content_base_style);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
