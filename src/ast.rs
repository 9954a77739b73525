//! Expression trees.
//!
//! [`Expr`] is the boxed tree produced by the [parser][crate::parser]. For
//! repeated evaluation over a whole truth table, [`ExprArena`] flattens a tree
//! into a topologically sorted array with variables resolved to bit positions.

use std::collections::VecDeque;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::error::{Error, Result};
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Const(bool),
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
}

// Constructors
impl Expr {
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn var(name: char) -> Self {
        Expr::Var(Var::new(name))
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Const(value)
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Expr::xor(self, rhs)
    }
}

// Queries
impl Expr {
    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of nodes in the expression tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Distinct variables in order of first appearance.
    ///
    /// Leaves are visited left to right, which for infix expressions is the
    /// order in which the variables appear in the source text.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<Var>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(var) => {
                if !vars.contains(var) {
                    vars.push(*var);
                }
            }
            Expr::Not(e) => e.collect_variables(vars),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Renders the expression with logic symbols (`¬`, `∧`, `∨`, `⊕`).
    pub fn to_unicode(&self) -> String {
        Unicode(self).to_string()
    }
}

// Binding strength, loosest first. Matches the parser.
const PREC_OR: u8 = 1;
const PREC_AND: u8 = 2;
const PREC_XOR: u8 = 3;
const PREC_NOT: u8 = 4;
const PREC_ATOM: u8 = 5;

struct Notation {
    not: &'static str,
    and: &'static str,
    or: &'static str,
    xor: &'static str,
}

const KEYWORDS: Notation = Notation {
    not: "not ",
    and: " and ",
    or: " or ",
    xor: " ^ ",
};

const SYMBOLS: Notation = Notation {
    not: "¬",
    and: " ∧ ",
    or: " ∨ ",
    xor: " ⊕ ",
};

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Const(_) | Expr::Var(_) => PREC_ATOM,
            Expr::Not(_) => PREC_NOT,
            Expr::Xor(_, _) => PREC_XOR,
            Expr::And(_, _) => PREC_AND,
            Expr::Or(_, _) => PREC_OR,
        }
    }

    fn write_with(&self, f: &mut fmt::Formatter<'_>, notation: &Notation, min_prec: u8) -> fmt::Result {
        let prec = self.precedence();
        if prec < min_prec {
            write!(f, "(")?;
        }
        match self {
            Expr::Const(value) => write!(f, "{}", *value as u8)?,
            Expr::Var(var) => write!(f, "{}", var)?,
            Expr::Not(e) => {
                write!(f, "{}", notation.not)?;
                e.write_with(f, notation, PREC_NOT)?;
            }
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) => {
                let op = match self {
                    Expr::And(_, _) => notation.and,
                    Expr::Or(_, _) => notation.or,
                    _ => notation.xor,
                };
                // Left-associative: only the right operand needs parentheses at equal precedence.
                l.write_with(f, notation, prec)?;
                write!(f, "{}", op)?;
                r.write_with(f, notation, prec + 1)?;
            }
        }
        if prec < min_prec {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &KEYWORDS, 0)
    }
}

struct Unicode<'a>(&'a Expr);

impl fmt::Display for Unicode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_with(f, &SYMBOLS, 0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Idx(usize);

/// Node of a flattened expression.
///
/// Variables are resolved to their position in the variable list the arena was compiled against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Node {
    Const(bool),
    Var(usize),
    Not(Idx),
    And(Idx, Idx),
    Or(Idx, Idx),
    Xor(Idx, Idx),
}

/// Flattened expression, evaluated bottom-up without recursion.
#[derive(Debug, Clone)]
pub struct ExprArena {
    /// Topologically sorted nodes (parents before children), by construction.
    /// The root is at index 0.
    nodes: Vec<Node>,
    num_vars: usize,
}

impl ExprArena {
    /// Flattens `expr`, resolving each variable to its position in `vars`.
    ///
    /// Fails with [`Error::Evaluation`] if `expr` mentions a variable missing from `vars`.
    pub fn compile(expr: &Expr, vars: &[Var]) -> Result<Self> {
        let mut frontier: VecDeque<&Expr> = VecDeque::from([expr]);
        let mut nodes: Vec<Node> = Vec::with_capacity(expr.size());

        while let Some(e) = frontier.pop_front() {
            let placed = nodes.len();
            let node = match e {
                Expr::Const(value) => Node::Const(*value),
                Expr::Var(var) => {
                    let pos = vars.iter().position(|v| v == var).ok_or(Error::Evaluation(*var))?;
                    Node::Var(pos)
                }
                Expr::Not(a) => Node::Not(push_child(&mut frontier, placed, a)),
                Expr::And(a, b) => Node::And(push_child(&mut frontier, placed, a), push_child(&mut frontier, placed, b)),
                Expr::Or(a, b) => Node::Or(push_child(&mut frontier, placed, a), push_child(&mut frontier, placed, b)),
                Expr::Xor(a, b) => Node::Xor(push_child(&mut frontier, placed, a), push_child(&mut frontier, placed, b)),
            };
            nodes.push(node);
        }

        Ok(Self {
            nodes,
            num_vars: vars.len(),
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Evaluates with variable `k` bound to `values[k]`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than the variable list used for compilation.
    pub fn eval(&self, values: &[bool]) -> bool {
        assert!(values.len() >= self.num_vars, "Expected {} values, got {}", self.num_vars, values.len());
        let mut results = vec![false; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate().rev() {
            results[i] = match *node {
                Node::Const(value) => value,
                Node::Var(k) => values[k],
                Node::Not(a) => !results[a.0],
                Node::And(a, b) => results[a.0] && results[b.0],
                Node::Or(a, b) => results[a.0] || results[b.0],
                Node::Xor(a, b) => results[a.0] != results[b.0],
            };
        }
        results[0]
    }

    /// Evaluates truth table row `index`: variable `k` takes bit `n-1-k` of the index.
    pub fn eval_row(&self, index: usize) -> bool {
        let values: Vec<bool> = (0..self.num_vars)
            .map(|k| crate::enumerate::bit(index, self.num_vars, k))
            .collect();
        self.eval(&values)
    }
}

// Children are placed in frontier order, right after the node being expanded
// and everything still queued before them.
fn push_child<'e>(frontier: &mut VecDeque<&'e Expr>, placed: usize, child: &'e Expr) -> Idx {
    frontier.push_back(child);
    Idx(placed + frontier.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn a() -> Expr {
        Expr::var('a')
    }
    fn b() -> Expr {
        Expr::var('b')
    }
    fn c() -> Expr {
        Expr::var('c')
    }

    #[test]
    fn test_operators() {
        let e = a() & !b() | c();
        assert_eq!(e, Expr::or(Expr::and(a(), Expr::not(b())), c()));
    }

    #[test]
    fn test_depth_and_size() {
        let e = (a() & b()) ^ !c();
        assert_eq!(e.depth(), 2);
        assert_eq!(e.size(), 6);
        assert_eq!(a().depth(), 0);
        assert_eq!(a().size(), 1);
    }

    #[test]
    fn test_variables_order() {
        let e = (c() & a()) | (a() ^ b());
        let vars: Vec<char> = e.variables().into_iter().map(Var::name).collect();
        assert_eq!(vars, vec!['c', 'a', 'b']);
        assert!(Expr::constant(true).variables().is_empty());
    }

    #[test]
    fn test_display_keywords() {
        assert_eq!((a() & b()).to_string(), "a and b");
        assert_eq!((a() | !b()).to_string(), "a or not b");
        assert_eq!(((a() | b()) & c()).to_string(), "(a or b) and c");
        assert_eq!((a() & (b() & c())).to_string(), "a and (b and c)");
        assert_eq!(((a() & b()) & c()).to_string(), "a and b and c");
        assert_eq!((!(a() ^ b())).to_string(), "not (a ^ b)");
        assert_eq!((a() & Expr::constant(true)).to_string(), "a and 1");
    }

    #[test]
    fn test_display_unicode() {
        assert_eq!((a() & !b() | c() ^ a()).to_unicode(), "a ∧ ¬b ∨ c ⊕ a");
        assert_eq!((!(a() | b())).to_unicode(), "¬(a ∨ b)");
    }

    #[test]
    fn test_arena_layout() {
        let e = a() & !b();
        let vars = e.variables();
        let arena = ExprArena::compile(&e, &vars).unwrap();
        assert_eq!(
            arena.nodes(),
            &[Node::And(Idx(1), Idx(2)), Node::Var(0), Node::Not(Idx(3)), Node::Var(1)]
        );
    }

    #[test]
    fn test_arena_eval() {
        let e = (a() & !b()) | (c() ^ a());
        let vars = e.variables();
        let arena = ExprArena::compile(&e, &vars).unwrap();
        for index in 0..8 {
            let values: Vec<bool> = (0..3).map(|k| (index >> (2 - k)) & 1 == 1).collect();
            let (va, vb, vc) = (values[0], values[1], values[2]);
            let expected = (va && !vb) || (vc != va);
            assert_eq!(arena.eval_row(index), expected, "row {}", index);
        }
    }

    #[test]
    fn test_arena_missing_var() {
        let e = a() & b();
        let result = ExprArena::compile(&e, &[Var::new('a')]);
        assert_eq!(result.unwrap_err(), Error::Evaluation(Var::new('b')));
    }
}
