use logos::Logos;
use tracing::trace;

/// Represents a lexical token of an input line.
///
/// A token is a classified, contiguous slice of the line. Each variant carries
/// the exact text it was matched from, so joining the texts of a tokenized
/// line in order gives back the line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Real or imaginary literal, such as `2`, `-2.222`, `i`, `-i` or `+i2`.
    Number(String),
    /// One of `+`, `-`, `*` or `/`.
    Operator(String),
    /// `modulus` or `arg`, in any letter case.
    FunctionName(String),
    /// One or more spaces.
    Whitespace(String),
    /// `A` or `B`, in any letter case.
    MenuChoice(String),
    /// Everything from the first unclassifiable character to the end of the
    /// line.
    Unrecognized(String),
}

impl Token {
    /// Returns the text the token was matched from.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text)
            | Self::Operator(text)
            | Self::FunctionName(text)
            | Self::Whitespace(text)
            | Self::MenuChoice(text)
            | Self::Unrecognized(text) => text,
        }
    }
}

/// Lexical classes recognised by the scanner.
///
/// The classes are disjoint: no string matches two of them, so the scanner
/// only ever has to pick the longest match.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// `i`, `-i`, `+i2`, `0`, `-2.222`, `3.` ...
    #[regex(r"[-+]?i")]
    #[regex(r"[-+]?i?(0|[1-9][0-9]*)(\.[0-9]*)?")]
    Number,
    /// `+ - * /`
    #[regex(r"[-+*/]")]
    Operator,
    /// `modulus`, `arg`
    #[token("modulus", ignore(ascii_case))]
    #[token("arg", ignore(ascii_case))]
    FunctionName,
    /// ` `
    #[regex(r" +")]
    Whitespace,
    /// `A`, `B`
    #[token("a", ignore(ascii_case))]
    #[token("b", ignore(ascii_case))]
    MenuChoice,
}

/// Splits an input line into tokens.
///
/// Scanning is greedy: at each position the longest classifiable slice
/// becomes the next token. As soon as a position cannot start any token, the
/// rest of the line is emitted as a single [`Token::Unrecognized`]. The empty
/// line yields one empty `Unrecognized` token, so the result is never empty.
///
/// A signed real literal glued to a preceding real literal is split into an
/// operator and an unsigned number: `2-2` reads as `2`, `-`, `2`. Every other
/// signed literal stays whole, which is what lets `2+i2` and `i2-2` read as
/// the two halves of one complex operand.
///
/// # Example
/// ```
/// use cplx::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-i2 -2.222");
/// assert_eq!(tokens,
///            vec![Token::Number("-i2".into()),
///                 Token::Whitespace(" ".into()),
///                 Token::Number("-2.222".into())]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        match lexeme {
            Ok(Lexeme::Number) => push_number(&mut tokens, text),
            Ok(Lexeme::Operator) => tokens.push(Token::Operator(text.to_string())),
            Ok(Lexeme::FunctionName) => tokens.push(Token::FunctionName(text.to_string())),
            Ok(Lexeme::Whitespace) => tokens.push(Token::Whitespace(text.to_string())),
            Ok(Lexeme::MenuChoice) => tokens.push(Token::MenuChoice(text.to_string())),
            Err(()) => {
                let rest = &line[lexer.span().start..];
                tokens.push(Token::Unrecognized(rest.to_string()));
                return tokens;
            },
        }
    }

    if tokens.is_empty() {
        tokens.push(Token::Unrecognized(String::new()));
    }

    tokens
}

/// Pushes a number literal, splitting off its sign when both it and the
/// number it directly follows are real literals.
fn push_number(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Number(previous)) = tokens.last()
       && !previous.contains('i')
       && let Some(unsigned) = text.strip_prefix(['+', '-'])
       && !unsigned.contains('i')
    {
        trace!(literal = text, "splitting sign off a literal glued to a number");
        tokens.push(Token::Operator(text[..1].to_string()));
        tokens.push(Token::Number(unsigned.to_string()));
    } else {
        tokens.push(Token::Number(text.to_string()));
    }
}
