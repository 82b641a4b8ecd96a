//! Shared helpers for pane rendering

use crate::trace::value::{AuxState, Scalar};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.focus_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.idle_border)
    }
}

/// Style a scalar by its kind
pub(crate) fn scalar_style(value: &Scalar) -> Style {
    match value {
        Scalar::Int(_) | Scalar::Index(_) | Scalar::Infinity => {
            Style::default().fg(DEFAULT_THEME.value)
        }
        Scalar::Bool(true) => Style::default().fg(DEFAULT_THEME.found),
        Scalar::Bool(false) => Style::default().fg(DEFAULT_THEME.failure),
        Scalar::Unset => Style::default().fg(DEFAULT_THEME.muted),
    }
}

/// Header and body lines describing an auxiliary snapshot
pub(crate) fn format_aux(aux: &AuxState) -> Option<(&'static str, String)> {
    match aux {
        AuxState::Empty => None,
        AuxState::Set(items) => Some((
            "seen",
            format!(
                "{{{}}}",
                items
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )),
        AuxState::Map(entries) => Some((
            "seen",
            format!(
                "{{{}}}",
                entries
                    .iter()
                    .map(|(value, idx)| format!("{}: {}", value, idx))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )),
        AuxState::BestPair { buy, sell } => Some((
            "best",
            format!("buy @{}, sell @{}", format_index(*buy), format_index(*sell)),
        )),
    }
}

fn format_index(idx: Option<usize>) -> String {
    idx.map_or_else(|| "-".to_string(), |i| i.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_aux() {
        assert_eq!(format_aux(&AuxState::Empty), None);
        assert_eq!(
            format_aux(&AuxState::Set(vec![1, 2])),
            Some(("seen", "{1, 2}".to_string()))
        );
        assert_eq!(
            format_aux(&AuxState::Map(vec![(2, 0), (7, 1)])),
            Some(("seen", "{2: 0, 7: 1}".to_string()))
        );
        assert_eq!(
            format_aux(&AuxState::BestPair {
                buy: Some(1),
                sell: None
            }),
            Some(("best", "buy @1, sell @-".to_string()))
        );
    }
}
