//! Truth tables for expressions and gates.

use std::fmt;

use log::{debug, trace};

use crate::ast::{Expr, ExprArena};
use crate::enumerate::assignment_at;
use crate::error::{Error, ParseError, ParseErrorKind, Result};
use crate::gate::GateKind;
use crate::lexer::{normalize, Lexer, Token};
use crate::parser::parse;
use crate::types::{Assignment, Var};

/// Default cap on the number of distinct variables in a solved expression (16 rows).
pub const DEFAULT_MAX_VARIABLES: usize = 4;

/// Largest cap a [`Solver`] accepts, keeping materialized tables bounded.
pub const MAX_VARIABLES_LIMIT: usize = 20;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthRow {
    pub assignment: Assignment,
    pub result: bool,
}

/// Rows in enumeration order: row `i` is the assignment with index `i`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    vars: Vec<Var>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Tabulates `f` over all assignments of `vars`.
    pub fn tabulate<F>(vars: Vec<Var>, mut f: F) -> Self
    where
        F: FnMut(usize, &Assignment) -> bool,
    {
        let rows = (0..1usize << vars.len())
            .map(|index| {
                let assignment = assignment_at(&vars, index);
                let result = f(index, &assignment);
                trace!("row {}: [{}] -> {}", index, assignment, result);
                TruthRow { assignment, result }
            })
            .collect();
        Self { vars, rows }
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// The result column as a string of `0`s and `1`s, top to bottom.
    pub fn result_bits(&self) -> String {
        self.results().map(|r| if r { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.vars.iter().map(|v| v.to_string()).collect();
        let header = header.join(" ");
        writeln!(f, "{} | f", header)?;
        writeln!(f, "{}-+--", "-".repeat(header.len()))?;
        for row in &self.rows {
            let values: Vec<String> = row.assignment.values().map(|v| (v as u8).to_string()).collect();
            writeln!(f, "{} | {}", values.join(" "), row.result as u8)?;
        }
        Ok(())
    }
}

/// Expression solver with a configurable variable cap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Solver {
    max_variables: usize,
}

impl Solver {
    /// Creates a solver accepting at most `max_variables` distinct variables.
    ///
    /// # Panics
    ///
    /// Panics if `max_variables` is 0 or exceeds [`MAX_VARIABLES_LIMIT`].
    pub fn new(max_variables: usize) -> Self {
        assert!(
            (1..=MAX_VARIABLES_LIMIT).contains(&max_variables),
            "Max variables should be in the range 1..={}",
            MAX_VARIABLES_LIMIT
        );
        Self { max_variables }
    }

    pub fn max_variables(&self) -> usize {
        self.max_variables
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new(DEFAULT_MAX_VARIABLES)
    }
}

impl Solver {
    /// Distinct variables of `text` in order of first appearance.
    ///
    /// Only blank input is a parse error here; unknown symbols are skipped and
    /// left for [`solve`][Solver::solve] to report.
    pub fn parse_variables(&self, text: &str) -> Result<Vec<Var>> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(ParseError::new(ParseErrorKind::Empty, 0).into());
        }
        let mut vars = Vec::new();
        for (_, token) in Lexer::new(&normalized).flatten() {
            if let Token::Var(var) = token {
                if !vars.contains(&var) {
                    vars.push(var);
                }
            }
        }
        self.check_variables(&vars)?;
        Ok(vars)
    }

    fn check_variables(&self, vars: &[Var]) -> Result<()> {
        if vars.is_empty() {
            return Err(Error::NoVariables);
        }
        if vars.len() > self.max_variables {
            return Err(Error::TooManyVariables {
                count: vars.len(),
                limit: self.max_variables,
            });
        }
        Ok(())
    }

    /// Parses `text` and builds its full truth table.
    ///
    /// ```
    /// use logic_rs::table::Solver;
    ///
    /// let table = Solver::default().solve("A or not B").unwrap();
    /// assert_eq!(table.result_bits(), "1011");
    /// ```
    pub fn solve(&self, text: &str) -> Result<TruthTable> {
        debug!("solve({:?})", text);
        let vars = self.parse_variables(text)?;
        let expr = parse(text)?;
        self.tabulate(&expr, vars)
    }

    /// Builds the truth table of an already parsed expression.
    pub fn solve_expr(&self, expr: &Expr) -> Result<TruthTable> {
        debug!("solve_expr({})", expr);
        let vars = expr.variables();
        self.check_variables(&vars)?;
        self.tabulate(expr, vars)
    }

    fn tabulate(&self, expr: &Expr, vars: Vec<Var>) -> Result<TruthTable> {
        let arena = ExprArena::compile(expr, &vars)?;
        let table = TruthTable::tabulate(vars, |index, _| arena.eval_row(index));
        debug!("solved {} rows: {}", table.len(), table.result_bits());
        Ok(table)
    }
}

/// Truth table of a single gate over inputs `a` and `b` (only `a` for NOT).
pub fn gate_truth_table(kind: GateKind) -> TruthTable {
    let inputs = [Var::new('a'), Var::new('b')];
    let vars = inputs[..kind.arity()].to_vec();
    TruthTable::tabulate(vars, |_, assignment| {
        let values: Vec<bool> = assignment.values().collect();
        kind.apply_slice(&values)
    })
}
