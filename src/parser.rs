//! Recursive-descent parser for boolean expressions.
//!
//! Grammar, loosest binding first (all binary operators are left-associative):
//!
//! ```text
//! or    := and ("or" and)*
//! and   := xor ("and" xor)*
//! xor   := unary ("^" unary)*
//! unary := "not" unary | atom
//! atom  := VAR | "0" | "1" | "(" or ")"
//! ```
//!
//! Both the nesting of parentheses and negations and the depth of the
//! resulting tree are bounded by [`MAX_DEPTH`], so neither the parser nor the
//! recursive walks over [`Expr`] can exhaust the stack.

use std::iter::Peekable;
use std::str::FromStr;

use log::debug;

use crate::ast::Expr;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{normalize, Lexer, Token};

/// Deepest accepted nesting of parentheses and negations, and deepest accepted expression tree.
pub const MAX_DEPTH: usize = 256;

/// Subtree together with its depth.
type Parsed = (Expr, usize);

/// Parses `text` into an expression tree.
///
/// ```
/// use logic_rs::ast::Expr;
/// use logic_rs::parser::parse;
///
/// let e = parse("A or not B").unwrap();
/// assert_eq!(e, Expr::var('a') | !Expr::var('b'));
/// ```
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    debug!("parse({:?})", text);
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, 0));
    }
    let mut parser = Parser {
        tokens: Lexer::new(&normalized).peekable(),
        end: normalized.len(),
        nesting: 0,
    };
    let (expr, _) = parser.parse_or()?;
    match parser.next()? {
        None => Ok(expr),
        Some((pos, Token::RParen)) => Err(ParseError::new(ParseErrorKind::UnmatchedParen, pos)),
        Some((pos, token)) => Err(ParseError::new(ParseErrorKind::UnexpectedToken(token.to_string()), pos)),
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parser<'a> {
    tokens: Peekable<Lexer<'a>>,
    end: usize,
    /// Open parentheses and negations around the current position.
    nesting: usize,
}

impl Parser<'_> {
    fn next(&mut self) -> Result<Option<(usize, Token)>, ParseError> {
        self.tokens.next().transpose()
    }

    /// Consumes the next token if it is `expected`.
    fn eat(&mut self, expected: Token) -> Result<bool, ParseError> {
        match self.tokens.peek() {
            Some(Ok((_, token))) if *token == expected => {
                self.tokens.next();
                Ok(true)
            }
            Some(Err(e)) => Err(e.clone()),
            _ => Ok(false),
        }
    }

    fn position(&mut self) -> usize {
        match self.tokens.peek() {
            Some(Ok((pos, _))) => *pos,
            Some(Err(e)) => e.position,
            None => self.end,
        }
    }

    /// Node over children of depth `depth`, rejected when it would exceed [`MAX_DEPTH`].
    fn node(&self, expr: Expr, depth: usize, pos: usize) -> Result<Parsed, ParseError> {
        if depth >= MAX_DEPTH {
            return Err(ParseError::new(ParseErrorKind::TooDeep, pos));
        }
        Ok((expr, depth + 1))
    }

    fn enter(&mut self, pos: usize) -> Result<(), ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::new(ParseErrorKind::TooDeep, pos));
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn parse_or(&mut self) -> Result<Parsed, ParseError> {
        let (mut lhs, mut depth) = self.parse_and()?;
        loop {
            let pos = self.position();
            if !self.eat(Token::Or)? {
                break;
            }
            let (rhs, rhs_depth) = self.parse_and()?;
            (lhs, depth) = self.node(Expr::or(lhs, rhs), depth.max(rhs_depth), pos)?;
        }
        Ok((lhs, depth))
    }

    fn parse_and(&mut self) -> Result<Parsed, ParseError> {
        let (mut lhs, mut depth) = self.parse_xor()?;
        loop {
            let pos = self.position();
            if !self.eat(Token::And)? {
                break;
            }
            let (rhs, rhs_depth) = self.parse_xor()?;
            (lhs, depth) = self.node(Expr::and(lhs, rhs), depth.max(rhs_depth), pos)?;
        }
        Ok((lhs, depth))
    }

    fn parse_xor(&mut self) -> Result<Parsed, ParseError> {
        let (mut lhs, mut depth) = self.parse_unary()?;
        loop {
            let pos = self.position();
            if !self.eat(Token::Xor)? {
                break;
            }
            let (rhs, rhs_depth) = self.parse_unary()?;
            (lhs, depth) = self.node(Expr::xor(lhs, rhs), depth.max(rhs_depth), pos)?;
        }
        Ok((lhs, depth))
    }

    fn parse_unary(&mut self) -> Result<Parsed, ParseError> {
        let pos = self.position();
        if self.eat(Token::Not)? {
            self.enter(pos)?;
            let (inner, depth) = self.parse_unary()?;
            self.leave();
            return self.node(Expr::not(inner), depth, pos);
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Parsed, ParseError> {
        match self.next()? {
            Some((_, Token::Var(var))) => Ok((Expr::Var(var), 0)),
            Some((_, Token::Const(value))) => Ok((Expr::Const(value), 0)),
            Some((open, Token::LParen)) => {
                self.enter(open)?;
                let inner = self.parse_or()?;
                self.leave();
                match self.next()? {
                    Some((_, Token::RParen)) => Ok(inner),
                    Some((pos, token)) => Err(ParseError::new(ParseErrorKind::UnexpectedToken(token.to_string()), pos)),
                    None => Err(ParseError::new(ParseErrorKind::UnclosedParen, open)),
                }
            }
            Some((pos, token)) => Err(ParseError::new(ParseErrorKind::UnexpectedToken(token.to_string()), pos)),
            None => Err(ParseError::new(ParseErrorKind::UnexpectedEnd, self.end)),
        }
    }
}
