//! # logic-rs: Boolean logic evaluation in Rust
//!
//! **`logic-rs`** evaluates boolean expressions and combinational circuits, and
//! builds their truth tables. It is the engine behind three teaching tools:
//! an expression solver, a gate truth-table viewer and a circuit builder.
//!
//! ## Key Features
//!
//! - **Typed parsing**: expressions such as `"(A and B) or not C"` are parsed by a
//!   recursive-descent [parser] into an [`Expr`][crate::ast::Expr] tree. No text is ever evaluated as code.
//! - **Stable bit order**: truth tables list rows so that the first variable is the
//!   most significant bit, matching the classic `00, 01, 10, 11` layout of gate tables.
//! - **Configurable cap**: the [`Solver`][crate::table::Solver] limits the number of variables (4 by default, i.e. 16 rows).
//! - **Cycle-safe circuits**: the [`Circuit`][crate::circuit::Circuit] evaluator memoizes each
//!   pass and reports feedback loops as [`Error::CycleDetected`][crate::error::Error::CycleDetected].
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_rs::gate::GateKind;
//! use logic_rs::table::gate_truth_table;
//!
//! // 1. Solve an expression (variables are case-insensitive and stored lowercase)
//! let table = logic_rs::solve("A or not B").unwrap();
//! assert_eq!(table.result_bits(), "1011");
//!
//! // 2. Look up a gate
//! let imply = gate_truth_table(GateKind::Imply);
//! assert_eq!(imply.result_bits(), "1101");
//!
//! // 3. Evaluate under a single assignment
//! let vars = logic_rs::parse_variables("a ^ b").unwrap();
//! let rows = logic_rs::enumerate(&vars);
//! assert_eq!(logic_rs::evaluate("a ^ b", &rows[2]), Ok(true));
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]** and **[`ast`]**: text to expression trees, and back.
//! - **[`eval`]**: evaluation of expressions under an [`Assignment`][crate::types::Assignment].
//! - **[`enumerate`][mod@enumerate]**: all assignments of a variable list, in row order.
//! - **[`gate`]**: the seven fixed gates (AND, OR, NOT, XOR, NAND, NOR, IMPLY).
//! - **[`table`]**: truth tables and the configurable [`Solver`][crate::table::Solver].
//! - **[`circuit`]**: circuits of inputs, gates and outputs connected by wires.

pub mod ast;
pub mod circuit;
pub mod enumerate;
pub mod error;
pub mod eval;
pub mod gate;
pub mod lexer;
pub mod parser;
pub mod table;
pub mod types;

pub use crate::enumerate::enumerate;
pub use crate::error::{Error, Result};
pub use crate::eval::evaluate;
pub use crate::table::gate_truth_table;

use crate::table::{Solver, TruthTable};
use crate::types::Var;

/// Distinct variables of `text` in order of first appearance, using the default variable cap.
pub fn parse_variables(text: &str) -> Result<Vec<Var>> {
    Solver::default().parse_variables(text)
}

/// Truth table of `text`, using the default variable cap.
pub fn solve(text: &str) -> Result<TruthTable> {
    Solver::default().solve(text)
}
