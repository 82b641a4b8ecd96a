//! Colour palette shared by every pane

use ratatui::style::Color;

/// Token colours for the source listing
pub struct SyntaxPalette {
    pub keyword: Color,
    pub literal: Color,
    pub number: Color,
    /// Identifier directly followed by `(`
    pub call: Color,
    pub builtin_type: Color,
    pub comment: Color,
}

pub struct Theme {
    pub text: Color,
    /// Labels, separators, line numbers
    pub muted: Color,
    pub accent: Color,
    /// Running badge, input prompt, current phase marker
    pub playing: Color,
    /// Terminal step, `true`, start badge
    pub found: Color,
    /// Errors, `false`, end badge
    pub failure: Color,
    pub focus_border: Color,
    pub idle_border: Color,
    /// Background of the line the current step maps to
    pub synced_line_bg: Color,
    pub status_bg: Color,
    /// Numeric variable values
    pub value: Color,
    /// Array cell under examination
    pub cursor: Color,
    /// Array cells held by the working state or the result
    pub marked: Color,
    pub syntax: SyntaxPalette,
}

// Gruvbox dark
pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Rgb(235, 219, 178),
    muted: Color::Rgb(146, 131, 116),
    accent: Color::Rgb(131, 165, 152),
    playing: Color::Rgb(254, 128, 25),
    found: Color::Rgb(184, 187, 38),
    failure: Color::Rgb(251, 73, 52),
    focus_border: Color::Rgb(250, 189, 47),
    idle_border: Color::Rgb(102, 92, 84),
    synced_line_bg: Color::Rgb(80, 73, 69),
    status_bg: Color::Rgb(50, 48, 47),
    value: Color::Rgb(142, 192, 124),
    cursor: Color::Rgb(250, 189, 47),
    marked: Color::Rgb(211, 134, 155),
    syntax: SyntaxPalette {
        keyword: Color::Rgb(251, 73, 52),
        literal: Color::Rgb(184, 187, 38),
        number: Color::Rgb(211, 134, 155),
        call: Color::Rgb(142, 192, 124),
        builtin_type: Color::Rgb(250, 189, 47),
        comment: Color::Rgb(146, 131, 116),
    },
};
