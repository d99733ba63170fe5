//! Syntax highlighting for code samples.
//!
//! Code is split into lines, each line into [`Token`]s tagged with a
//! [`TokenKind`]. Styling is applied later by [`CodeBlock`] using a
//! [`SyntaxPalette`] taken from the current theme, so the same token stream
//! can be re-rendered when the display mode changes.
//!
//! ```
//! use dip_docs::highlight::{tokenize, Language, TokenKind};
//!
//! let lines = tokenize("y = x' // transpose", Language::from_tag("matlab"));
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].last().map(|t| t.kind), Some(TokenKind::Comment));
//! ```

mod block;
mod matlab;
mod palette;

pub use block::CodeBlock;
pub use palette::SyntaxPalette;

/// Grammar used to tokenize a code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// MATLAB, Octave and Scilab.
    Matlab,
    /// Anything else: one text token per line.
    PlainText,
}

impl Language {
    /// Map a language tag such as `"matlab"` to a grammar.
    ///
    /// Unknown tags fall back to [`Language::PlainText`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "matlab" | "scilab" | "octave" => Language::Matlab,
            _ => Language::PlainText,
        }
    }
}

/// Syntax class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    /// An identifier directly followed by `(`.
    Function,
    Identifier,
    Number,
    String,
    Comment,
    Operator,
    Punctuation,
    Whitespace,
    /// Unclassified text.
    Text,
}

/// A classified slice of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Tokenize `code` line by line.
///
/// Always returns at least one line. A trailing `\r` on each line is
/// dropped; all other text is preserved exactly.
pub fn tokenize(code: &str, language: Language) -> Vec<Vec<Token<'_>>> {
    code.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| match language {
            Language::Matlab => matlab::lex_line(line),
            Language::PlainText if line.is_empty() => Vec::new(),
            Language::PlainText => vec![Token {
                kind: TokenKind::Text,
                text: line,
            }],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::from_tag("matlab"), Language::Matlab);
        assert_eq!(Language::from_tag(" Scilab "), Language::Matlab);
        assert_eq!(Language::from_tag("rust"), Language::PlainText);
        assert_eq!(Language::from_tag(""), Language::PlainText);
    }

    #[test]
    fn test_line_structure() {
        assert_eq!(tokenize("", Language::Matlab).len(), 1);
        assert_eq!(tokenize("a\r\nb\n", Language::Matlab).len(), 3);
        let plain = tokenize("<not code>\n\n", Language::PlainText);
        assert_eq!(plain.len(), 3);
        assert_eq!(plain[0], vec![Token { kind: TokenKind::Text, text: "<not code>" }]);
        assert!(plain[1].is_empty());
    }

    #[test]
    fn test_catalog_code_round_trips() {
        for record in catalog().iter() {
            let lines = tokenize(record.code, Language::Matlab);
            let rebuilt: Vec<String> =
                lines.iter().map(|line| line.iter().map(|t| t.text).collect()).collect();
            assert_eq!(rebuilt.join("\n"), record.code, "practical {}", record.id);
        }
    }

    #[test]
    fn test_catalog_code_has_no_unclassified_text() {
        for record in catalog().iter() {
            let stray: Vec<&str> = tokenize(record.code, Language::Matlab)
                .into_iter()
                .flatten()
                .filter(|t| t.kind == TokenKind::Text)
                .map(|t| t.text)
                .collect();
            assert!(stray.is_empty(), "practical {}: {:?}", record.id, stray);
        }
    }
}
