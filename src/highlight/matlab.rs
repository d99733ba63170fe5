//! Lexer for the MATLAB family (MATLAB, Octave, Scilab).
//!
//! Works one line at a time and never fails: anything it does not
//! recognise becomes a [`TokenKind::Text`] token, so concatenating the
//! token texts of a line always gives the line back.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{anychar, char, digit0, digit1, one_of},
    combinator::{map, not, opt, recognize, rest},
    sequence::{pair, terminated, tuple},
    IResult,
};

use super::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "continue",
    "do",
    "else",
    "elseif",
    "end",
    "endfunction",
    "for",
    "function",
    "global",
    "if",
    "Inf",
    "inf",
    "NaN",
    "nan",
    "otherwise",
    "parfor",
    "pause",
    "pi",
    "return",
    "select",
    "switch",
    "then",
    "try",
    "while",
];

/// Split one line of source into tokens.
pub(super) fn lex_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut input = line;
    let mut after_value = false;

    while !input.is_empty() {
        let Ok((remaining, kind)) = next_token(input, after_value) else {
            break;
        };
        let text = &input[..input.len() - remaining.len()];
        if text.is_empty() {
            break;
        }
        after_value = ends_value(kind, text);
        tokens.push(Token { kind, text });
        input = remaining;
    }

    if !input.is_empty() {
        tokens.push(Token {
            kind: TokenKind::Text,
            text: input,
        });
    }

    tokens
}

fn next_token(input: &str, after_value: bool) -> IResult<&str, TokenKind> {
    // A quote straight after a value is the transpose operator, not a string.
    if after_value {
        if let Ok((remaining, _)) = transpose(input) {
            return Ok((remaining, TokenKind::Operator));
        }
    }

    alt((
        map(whitespace, |_| TokenKind::Whitespace),
        map(comment, |_| TokenKind::Comment),
        map(string, |_| TokenKind::String),
        map(number, |_| TokenKind::Number),
        word,
        map(operator, |_| TokenKind::Operator),
        map(punctuation, |_| TokenKind::Punctuation),
        map(anychar, |_| TokenKind::Text),
    ))(input)
}

/// Whether a token leaves the lexer in "value" position.
fn ends_value(kind: TokenKind, text: &str) -> bool {
    match kind {
        TokenKind::Identifier | TokenKind::Number => true,
        TokenKind::Keyword => text == "end",
        TokenKind::Punctuation => matches!(text, ")" | "]" | "}"),
        TokenKind::Operator => matches!(text, "'" | ".'"),
        _ => false,
    }
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c == ' ' || c == '\t')(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(alt((tag("//"), tag("%"))), rest))(input)
}

fn transpose(input: &str) -> IResult<&str, &str> {
    alt((tag(".'"), tag("'")))(input)
}

fn delimiter(input: &str) -> IResult<&str, char> {
    one_of("'\"")(input)
}

/// A quoted string. A doubled delimiter is an escaped quote; an
/// unterminated string runs to the end of the line.
fn string(input: &str) -> IResult<&str, &str> {
    let (body, quote) = delimiter(input)?;
    let mut chars = body.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != quote {
            continue;
        }
        if matches!(chars.peek(), Some((_, next)) if *next == quote) {
            chars.next();
            continue;
        }
        let end = quote.len_utf8() + offset + c.len_utf8();
        return Ok((&input[end..], &input[..end]));
    }

    Ok(("", input))
}

/// A decimal literal. A trailing dot that starts an element-wise operator
/// (`2.^x`, `2.'`) is left for the operator.
fn number(input: &str) -> IResult<&str, &str> {
    let fraction = pair(terminated(char('.'), not(one_of("*/\\^'"))), digit0);
    recognize(tuple((
        alt((
            recognize(pair(digit1, opt(fraction))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn word(input: &str) -> IResult<&str, TokenKind> {
    let (remaining, text) = recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)?;

    let kind = if KEYWORDS.contains(&text) {
        TokenKind::Keyword
    } else if remaining.trim_start_matches([' ', '\t']).starts_with('(') {
        TokenKind::Function
    } else {
        TokenKind::Identifier
    };

    Ok((remaining, kind))
}

fn operator(input: &str) -> IResult<&str, &str> {
    alt((
        alt((
            tag(".^"),
            tag(".*"),
            tag("./"),
            tag(".\\"),
            tag("=="),
            tag("~="),
            tag("<>"),
            tag("<="),
            tag(">="),
            tag("&&"),
            tag("||"),
        )),
        recognize(one_of("+-*/\\^:@<>=~&|")),
    ))(input)
}

fn punctuation(input: &str) -> IResult<&str, &str> {
    alt((tag("..."), recognize(one_of(".,;[](){}!"))))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        lex_line(line).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    fn significant(line: &str) -> Vec<(TokenKind, &str)> {
        kinds(line).into_iter().filter(|(k, _)| *k != TokenKind::Whitespace).collect()
    }

    #[test]
    fn test_indexing_assignment() {
        assert_eq!(
            significant("y(i + j - 1) = y(i + j - 1) + x(i) * h(j)")[..6],
            [
                (TokenKind::Function, "y"),
                (TokenKind::Punctuation, "("),
                (TokenKind::Identifier, "i"),
                (TokenKind::Operator, "+"),
                (TokenKind::Identifier, "j"),
                (TokenKind::Operator, "-"),
            ]
        );
    }

    #[test]
    fn test_keywords_and_ranges() {
        assert_eq!(
            significant("for i = 2:m-1"),
            vec![
                (TokenKind::Keyword, "for"),
                (TokenKind::Identifier, "i"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "2"),
                (TokenKind::Operator, ":"),
                (TokenKind::Identifier, "m"),
                (TokenKind::Operator, "-"),
                (TokenKind::Number, "1"),
            ]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds("// Sobel Edge Detection"),
            vec![(TokenKind::Comment, "// Sobel Edge Detection")]
        );
        assert_eq!(
            significant("x = 1 % trailing"),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "1"),
                (TokenKind::Comment, "% trailing"),
            ]
        );
    }

    #[test]
    fn test_strings_and_transpose() {
        assert_eq!(
            significant("title('Original Image');"),
            vec![
                (TokenKind::Function, "title"),
                (TokenKind::Punctuation, "("),
                (TokenKind::String, "'Original Image'"),
                (TokenKind::Punctuation, ")"),
                (TokenKind::Punctuation, ";"),
            ]
        );
        assert_eq!(
            significant("b = a'"),
            vec![
                (TokenKind::Identifier, "b"),
                (TokenKind::Operator, "="),
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "'"),
            ]
        );
        assert_eq!(
            significant("s = 'it''s'"),
            vec![
                (TokenKind::Identifier, "s"),
                (TokenKind::Operator, "="),
                (TokenKind::String, "'it''s'"),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(
            significant("disp(\"oops"),
            vec![
                (TokenKind::Function, "disp"),
                (TokenKind::Punctuation, "("),
                (TokenKind::String, "\"oops"),
            ]
        );
    }

    #[test]
    fn test_element_wise_operators_and_numbers() {
        assert_eq!(
            significant("f3 = f1 .* f2 / 1.5e-3"),
            vec![
                (TokenKind::Identifier, "f3"),
                (TokenKind::Operator, "="),
                (TokenKind::Identifier, "f1"),
                (TokenKind::Operator, ".*"),
                (TokenKind::Identifier, "f2"),
                (TokenKind::Operator, "/"),
                (TokenKind::Number, "1.5e-3"),
            ]
        );
    }

    #[test]
    fn test_element_wise_after_number() {
        assert_eq!(
            significant("y = 2.^x"),
            vec![
                (TokenKind::Identifier, "y"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "2"),
                (TokenKind::Operator, ".^"),
                (TokenKind::Identifier, "x"),
            ]
        );
        for (line, op) in [("2.*x", ".*"), ("2./x", "./"), ("2.\\x", ".\\")] {
            assert_eq!(
                significant(line),
                vec![
                    (TokenKind::Number, "2"),
                    (TokenKind::Operator, op),
                    (TokenKind::Identifier, "x"),
                ],
                "{line}"
            );
        }
        assert_eq!(
            significant("b = 3.'"),
            vec![
                (TokenKind::Identifier, "b"),
                (TokenKind::Operator, "="),
                (TokenKind::Number, "3"),
                (TokenKind::Operator, ".'"),
            ]
        );
        assert_eq!(
            significant("2. + 2.5"),
            vec![
                (TokenKind::Number, "2."),
                (TokenKind::Operator, "+"),
                (TokenKind::Number, "2.5"),
            ]
        );
    }

    #[test]
    fn test_garbage_round_trips() {
        for line in ["¿¿ ## $$ ``` ✓", "\u{0}\u{7f}", "'", "\"", ".", "...", "a...b"] {
            let joined: String = lex_line(line).iter().map(|t| t.text).collect();
            assert_eq!(joined, line);
        }
    }

    #[test]
    fn test_windows_path_string() {
        let tokens = significant("I = imread('C:\\Users\\admin\\Desktop\\image.jpg');");
        assert_eq!(tokens[4], (TokenKind::String, "'C:\\Users\\admin\\Desktop\\image.jpg'"));
    }
}
