use log::trace;

use crate::ast::Expr;
use crate::error::{Error, Result};
use crate::parser::parse;
use crate::types::{Assignment, Var};

/// Things that have a boolean value under an assignment.
pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> Result<bool>;
}

impl Eval for bool {
    fn eval(&self, _assignment: &Assignment) -> Result<bool> {
        Ok(*self)
    }
}

impl Eval for Var {
    fn eval(&self, assignment: &Assignment) -> Result<bool> {
        assignment.get(*self).ok_or(Error::Evaluation(*self))
    }
}

impl Eval for Expr {
    fn eval(&self, assignment: &Assignment) -> Result<bool> {
        match self {
            Expr::Const(value) => value.eval(assignment),
            Expr::Var(var) => var.eval(assignment),
            Expr::Not(e) => Ok(!e.eval(assignment)?),
            // No short-circuiting: unbound variables are reported on both sides.
            Expr::And(l, r) => Ok(l.eval(assignment)? & r.eval(assignment)?),
            Expr::Or(l, r) => Ok(l.eval(assignment)? | r.eval(assignment)?),
            Expr::Xor(l, r) => Ok(l.eval(assignment)? != r.eval(assignment)?),
        }
    }
}

/// Parses `text` and evaluates it under `assignment`.
///
/// Fails with [`Error::Parse`] on malformed text and [`Error::Evaluation`] if
/// the expression mentions a variable that `assignment` does not bind.
pub fn evaluate(text: &str, assignment: &Assignment) -> Result<bool> {
    let expr = parse(text)?;
    let result = expr.eval(assignment)?;
    trace!("evaluate({:?}, [{}]) = {}", text, assignment, result);
    Ok(result)
}
