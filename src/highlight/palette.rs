//! Token colours for light and dark display modes.

use ratatui::style::{Color, Modifier, Style};

use super::TokenKind;

/// Colours used to style highlighted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxPalette {
    pub background: Color,
    pub plain: Color,
    pub keyword: Color,
    pub function: Color,
    pub number: Color,
    pub string: Color,
    pub comment: Color,
    pub operator: Color,
    pub punctuation: Color,
    pub line_number: Color,
}

impl SyntaxPalette {
    /// Visual Studio dark colours.
    pub fn vs_dark() -> Self {
        Self {
            background: Color::Rgb(24, 24, 27),
            plain: Color::Rgb(156, 220, 254),
            keyword: Color::Rgb(86, 156, 214),
            function: Color::Rgb(220, 220, 170),
            number: Color::Rgb(181, 206, 168),
            string: Color::Rgb(206, 145, 120),
            comment: Color::Rgb(106, 153, 85),
            operator: Color::Rgb(212, 212, 212),
            punctuation: Color::Rgb(212, 212, 212),
            line_number: Color::Rgb(133, 133, 133),
        }
    }

    /// Visual Studio light colours.
    pub fn vs_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            plain: Color::Rgb(0, 0, 128),
            keyword: Color::Rgb(0, 0, 255),
            function: Color::Rgb(57, 58, 52),
            number: Color::Rgb(9, 134, 88),
            string: Color::Rgb(163, 21, 21),
            comment: Color::Rgb(0, 128, 0),
            operator: Color::Rgb(57, 58, 52),
            punctuation: Color::Rgb(57, 58, 52),
            line_number: Color::Rgb(110, 110, 110),
        }
    }

    /// Style for a token of the given kind.
    pub fn style(&self, kind: TokenKind) -> Style {
        let base = Style::default().bg(self.background);
        match kind {
            TokenKind::Keyword => base.fg(self.keyword),
            TokenKind::Function => base.fg(self.function),
            TokenKind::Number => base.fg(self.number),
            TokenKind::String => base.fg(self.string),
            TokenKind::Comment => base.fg(self.comment).add_modifier(Modifier::ITALIC),
            TokenKind::Operator => base.fg(self.operator),
            TokenKind::Punctuation => base.fg(self.punctuation),
            TokenKind::Identifier | TokenKind::Whitespace | TokenKind::Text => base.fg(self.plain),
        }
    }

    /// De-emphasised style for the line-number gutter.
    pub fn line_number_style(&self) -> Style {
        Style::default()
            .fg(self.line_number)
            .bg(self.background)
            .add_modifier(Modifier::DIM)
    }
}
