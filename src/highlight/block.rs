//! A renderable, copyable code block.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{tokenize, Language, SyntaxPalette};

/// A code sample prepared for display.
///
/// Holds the exact source text so the copy action can hand it to the
/// clipboard untouched, independent of how it is styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    code: &'a str,
    language_tag: &'a str,
    language: Language,
    show_line_numbers: bool,
    title: Option<&'a str>,
}

impl<'a> CodeBlock<'a> {
    /// Create a block for `code` written in `language_tag`.
    ///
    /// Line numbers are shown by default.
    pub fn new(code: &'a str, language_tag: &'a str) -> Self {
        Self {
            code,
            language_tag,
            language: Language::from_tag(language_tag),
            show_line_numbers: true,
            title: None,
        }
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// The original source text, exactly as given.
    pub fn code(&self) -> &'a str {
        self.code
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of source lines.
    pub fn line_count(&self) -> usize {
        self.code.split('\n').count()
    }

    /// Title bar: the title on the left, the upper-cased language tag after it.
    ///
    /// Returns `None` when no title was set.
    pub fn header(&self, palette: &SyntaxPalette) -> Option<Line<'a>> {
        let title = self.title?;
        Some(Line::from(vec![
            Span::styled(
                format!(" {} ", title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", self.language_tag.to_uppercase()),
                Style::default().fg(palette.line_number).add_modifier(Modifier::DIM),
            ),
        ]))
    }

    /// Highlighted lines, with a right-aligned 1-indexed gutter when enabled.
    pub fn lines(&self, palette: &SyntaxPalette) -> Vec<Line<'a>> {
        let tokenized = tokenize(self.code, self.language);
        let width = tokenized.len().to_string().len();

        tokenized
            .into_iter()
            .enumerate()
            .map(|(index, tokens)| {
                let mut spans = Vec::with_capacity(tokens.len() + 1);
                if self.show_line_numbers {
                    spans.push(Span::styled(
                        format!("{:>width$}  ", index + 1, width = width),
                        palette.line_number_style(),
                    ));
                }
                spans.extend(
                    tokens.into_iter().map(|token| Span::styled(token.text, palette.style(token.kind))),
                );
                Line::from(spans).style(Style::default().bg(palette.background))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::TokenKind;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_line_numbers_are_right_aligned() {
        let code = (1..=12).map(|i| format!("x{} = {}", i, i)).collect::<Vec<_>>().join("\n");
        let block = CodeBlock::new(&code, "matlab");
        let lines = block.lines(&SyntaxPalette::vs_dark());

        assert_eq!(lines.len(), 12);
        assert_eq!(text_of(&lines[0]), " 1  x1 = 1");
        assert_eq!(text_of(&lines[11]), "12  x12 = 12");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_line_numbers_can_be_hidden() {
        let block = CodeBlock::new("a = 1\nb = 2", "matlab").show_line_numbers(false);
        let lines = block.lines(&SyntaxPalette::vs_light());
        assert_eq!(text_of(&lines[1]), "b = 2");
    }

    #[test]
    fn test_copy_source_is_untouched() {
        let code = "disp('a')\r\n  // tab\there\n";
        let block = CodeBlock::new(code, "matlab").title("Scilab Code");
        assert_eq!(block.code(), code);
        assert_eq!(block.line_count(), 3);
    }

    #[test]
    fn test_header_shows_language() {
        let palette = SyntaxPalette::vs_dark();
        assert!(CodeBlock::new("x", "matlab").header(&palette).is_none());

        let header = CodeBlock::new("x", "matlab").title("Scilab Code").header(&palette).unwrap();
        assert_eq!(text_of(&header), " Scilab Code  MATLAB ");
    }

    #[test]
    fn test_palette_follows_theme() {
        let block = CodeBlock::new("for", "matlab").show_line_numbers(false);
        let dark = block.lines(&SyntaxPalette::vs_dark());
        let light = block.lines(&SyntaxPalette::vs_light());
        assert_eq!(dark[0].spans[0].style, SyntaxPalette::vs_dark().style(TokenKind::Keyword));
        assert_ne!(dark[0].spans[0].style, light[0].spans[0].style);
    }

    #[test]
    fn test_non_code_input_degrades() {
        let block = CodeBlock::new("<<<>>> ¿qué? \u{1F600}", "brainfuck");
        assert_eq!(block.language(), Language::PlainText);
        let lines = block.lines(&SyntaxPalette::vs_dark());
        assert_eq!(text_of(&lines[0]), "1  <<<>>> ¿qué? \u{1F600}");
    }
}
