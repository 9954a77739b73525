//! Tokenizer for boolean expressions.
//!
//! The input is first [normalized][normalize]: lowercased, with all whitespace
//! removed. Keywords are then matched greedily at every position, so `"A and B"`
//! and `"AandB"` produce the same tokens. Every other letter is a variable.
//!
//! Accepted operators:
//!
//! | Operator | Spellings |
//! |---|---|
//! | AND | `and`, `&`, `&&`, `∧` |
//! | OR | `or`, `\|`, `\|\|`, `∨` |
//! | NOT | `not`, `!`, `~`, `¬` |
//! | XOR | `^`, `⊕` |
//!
//! The digits `0` and `1` are constants.

use std::fmt;

use crate::error::{ParseError, ParseErrorKind};
use crate::types::Var;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Var(Var),
    Const(bool),
    And,
    Or,
    Not,
    Xor,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(var) => write!(f, "{}", var),
            Token::Const(value) => write!(f, "{}", *value as u8),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Not => write!(f, "not"),
            Token::Xor => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Lowercases `text` and strips all whitespace.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

// Longer spellings first, so that `&&` wins over `&`.
const SPELLINGS: &[(&str, Token)] = &[
    ("and", Token::And),
    ("not", Token::Not),
    ("or", Token::Or),
    ("&&", Token::And),
    ("||", Token::Or),
    ("&", Token::And),
    ("|", Token::Or),
    ("!", Token::Not),
    ("~", Token::Not),
    ("^", Token::Xor),
    ("∧", Token::And),
    ("∨", Token::Or),
    ("¬", Token::Not),
    ("⊕", Token::Xor),
    ("(", Token::LParen),
    (")", Token::RParen),
    ("0", Token::Const(false)),
    ("1", Token::Const(true)),
];

/// Iterator over the tokens of an already normalized expression.
///
/// Yields `(position, token)` pairs, where `position` is the byte offset into the normalized text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(normalized: &'a str) -> Self {
        Self { input: normalized, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(usize, Token), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let c = rest.chars().next()?;
        let start = self.pos;

        if let Some(&(spelling, token)) = SPELLINGS.iter().find(|(s, _)| rest.starts_with(s)) {
            self.pos += spelling.len();
            return Some(Ok((start, token)));
        }

        self.pos += c.len_utf8();
        if c.is_ascii_alphabetic() {
            Some(Ok((start, Token::Var(Var::new(c)))))
        } else {
            Some(Err(ParseError::new(ParseErrorKind::UnexpectedChar(c), start)))
        }
    }
}

/// Normalizes `text` and splits it into tokens.
///
/// Fails with [`ParseErrorKind::Empty`] on blank input and
/// [`ParseErrorKind::UnexpectedChar`] on unknown symbols.
pub fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, ParseError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, 0));
    }
    Lexer::new(&normalized).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn tokens(text: &str) -> Vec<Token> {
        tokenize(text).unwrap().into_iter().map(|(_, t)| t).collect()
    }

    fn var(c: char) -> Token {
        Token::Var(Var::new(c))
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  (A and\tB) OR not C "), "(aandb)ornotc");
    }

    #[test]
    fn test_keywords_greedy() {
        assert_eq!(tokens("A and B"), vec![var('a'), Token::And, var('b')]);
        assert_eq!(tokens("AandB"), vec![var('a'), Token::And, var('b')]);
        assert_eq!(tokens("d and n"), vec![var('d'), Token::And, var('n')]);
        assert_eq!(tokens("b or not a"), vec![var('b'), Token::Or, Token::Not, var('a')]);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            tokens("!a && (b || c) ^ 1"),
            vec![
                Token::Not,
                var('a'),
                Token::And,
                Token::LParen,
                var('b'),
                Token::Or,
                var('c'),
                Token::RParen,
                Token::Xor,
                Token::Const(true),
            ]
        );
        assert_eq!(tokens("¬a∧b∨c⊕d"), vec![Token::Not, var('a'), Token::And, var('b'), Token::Or, var('c'), Token::Xor, var('d')]);
    }

    #[test]
    fn test_positions() {
        let spanned = tokenize("a or b").unwrap();
        let positions: Vec<usize> = spanned.iter().map(|&(p, _)| p).collect();
        // Normalized: "aorb"
        assert_eq!(positions, vec![0, 1, 3]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(tokenize("   ").unwrap_err().kind, ParseErrorKind::Empty);
        assert_eq!(tokenize("").unwrap_err().kind, ParseErrorKind::Empty);
    }

    #[test]
    fn test_unexpected_char() {
        let err = tokenize("a + b").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('+'));
        assert_eq!(err.position, 1);
    }
}
