//! Input boundary
//!
//! Turns user-typed text into the typed values the generators accept. All
//! validation happens here, before the engine is involved.

use thiserror::Error;

/// Rejections produced while parsing user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("enter at least one number")]
    Empty,

    #[error("'{token}' at position {position} is not an integer")]
    InvalidToken { token: String, position: usize },

    #[error("target '{text}' is not an integer")]
    InvalidTarget { text: String },
}

/// Parse a comma-separated list of integers such as `"1, 2, 3"` or `"[1,2,3]"`
pub fn parse_numbers(text: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    if inner.trim().is_empty() {
        return Err(InputError::Empty);
    }

    inner
        .split(',')
        .enumerate()
        .map(|(idx, token)| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| InputError::InvalidToken {
                token: token.to_string(),
                position: idx + 1,
            })
        })
        .collect()
}

pub fn parse_target(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidTarget {
            text: text.trim().to_string(),
        })
}

/// Render numbers back into the editable text form
pub fn format_numbers(nums: &[i64]) -> String {
    nums.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_list() {
        assert_eq!(parse_numbers("1, 2, 3, 1"), Ok(vec![1, 2, 3, 1]));
        assert_eq!(parse_numbers(" -4,0,17 "), Ok(vec![-4, 0, 17]));
    }

    #[test]
    fn test_parse_bracketed_list() {
        assert_eq!(parse_numbers("[7, 1, 5]"), Ok(vec![7, 1, 5]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_numbers(""), Err(InputError::Empty));
        assert_eq!(parse_numbers("  [ ] "), Err(InputError::Empty));
    }

    #[test]
    fn test_invalid_token_reports_position() {
        assert_eq!(
            parse_numbers("1, two, 3"),
            Err(InputError::InvalidToken {
                token: "two".to_string(),
                position: 2
            })
        );
        // A trailing comma leaves an empty token
        assert!(matches!(
            parse_numbers("1, 2,"),
            Err(InputError::InvalidToken { position: 3, .. })
        ));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" 9 "), Ok(9));
        assert_eq!(
            parse_target("nine").unwrap_err().to_string(),
            "target 'nine' is not an integer"
        );
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_numbers(&[1, -2, 3]), "1, -2, 3");
    }
}
