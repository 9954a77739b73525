//! Error types.

use std::fmt;

use crate::circuit::NodeId;
use crate::types::Var;

/// What went wrong while parsing an expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// The expression is empty or contains only whitespace.
    Empty,
    /// A character that is neither a letter, a digit `0`/`1`, an operator nor a parenthesis.
    UnexpectedChar(char),
    /// A token appeared where it is not allowed, e.g. two operands in a row.
    UnexpectedToken(String),
    /// The expression ended where an operand was expected.
    UnexpectedEnd,
    /// An opening parenthesis is never closed.
    UnclosedParen,
    /// A closing parenthesis has no matching opening one.
    UnmatchedParen,
    /// Parentheses, negations or operator chains nest deeper than [`MAX_DEPTH`][crate::parser::MAX_DEPTH].
    TooDeep,
}

/// Parse failure with the byte offset into the normalized expression text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "expression is empty"),
            ParseErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {:?} at {}", c, self.position),
            ParseErrorKind::UnexpectedToken(t) => write!(f, "unexpected '{}' at {}", t, self.position),
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of expression at {}", self.position),
            ParseErrorKind::UnclosedParen => write!(f, "unclosed parenthesis at {}", self.position),
            ParseErrorKind::UnmatchedParen => write!(f, "unmatched closing parenthesis at {}", self.position),
            ParseErrorKind::TooDeep => write!(f, "expression nested too deeply at {}", self.position),
        }
    }
}

impl std::error::Error for ParseError {}

/// Why a wire was rejected by [`Circuit::connect`][crate::circuit::Circuit::connect].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WireError {
    /// Inputs are sources and cannot be driven.
    IntoInput,
    /// Outputs are sinks and cannot drive anything.
    FromOutput,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The expression text is malformed.
    Parse(ParseError),
    /// The expression contains no variables.
    NoVariables,
    /// The expression has more distinct variables than the solver allows.
    TooManyVariables { count: usize, limit: usize },
    /// The expression references a variable the assignment does not bind.
    Evaluation(Var),
    /// Evaluation reached this node again while it was still being evaluated.
    CycleDetected(NodeId),
    /// The handle does not refer to a live circuit element.
    UnknownNode(NodeId),
    /// Only inputs can be toggled or set.
    NotAnInput(NodeId),
    /// The wire violates the circuit's port rules.
    InvalidWire { from: NodeId, to: NodeId, reason: WireError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::NoVariables => write!(f, "No variables found in expression"),
            Error::TooManyVariables { count, limit } => {
                write!(f, "Too many variables: found {}, at most {} supported", count, limit)
            }
            Error::Evaluation(var) => write!(f, "Evaluation error: variable '{}' is not assigned", var),
            Error::CycleDetected(id) => write!(f, "Cycle detected at element {}", id),
            Error::UnknownNode(id) => write!(f, "Unknown element {}", id),
            Error::NotAnInput(id) => write!(f, "Element {} is not an input", id),
            Error::InvalidWire { from, to, reason } => {
                let why = match reason {
                    WireError::IntoInput => "inputs cannot be driven",
                    WireError::FromOutput => "outputs cannot drive other elements",
                };
                write!(f, "Invalid wire {} -> {}: {}", from, to, why)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}
