//! The canonical one- and two-input logic gates.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GateKind {
    And,
    Or,
    Not,
    Xor,
    Nand,
    Nor,
    Imply,
}

impl GateKind {
    pub const ALL: [GateKind; 7] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Xor,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Imply,
    ];
}

// Evaluation
impl GateKind {
    /// Applies the gate to inputs `a` and `b`. NOT ignores `b`.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Not => !a,
            GateKind::Xor => a != b,
            GateKind::Nand => !(a && b),
            GateKind::Nor => !(a || b),
            GateKind::Imply => !a || b,
        }
    }

    /// Applies the gate to `inputs[..arity]`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than [`arity`][GateKind::arity] inputs are given.
    pub fn apply_slice(self, inputs: &[bool]) -> bool {
        assert!(
            inputs.len() >= self.arity(),
            "{} expects {} inputs, got {}",
            self,
            self.arity(),
            inputs.len()
        );
        match self {
            GateKind::Not => self.apply(inputs[0], false),
            _ => self.apply(inputs[0], inputs[1]),
        }
    }
}

// Getters
impl GateKind {
    pub fn arity(self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }

    pub fn symbol(self) -> char {
        match self {
            GateKind::And => '∧',
            GateKind::Or => '∨',
            GateKind::Not => '¬',
            GateKind::Xor => '⊕',
            GateKind::Nand => '↑',
            GateKind::Nor => '↓',
            GateKind::Imply => '→',
        }
    }

    /// Human-readable name, e.g. `"Exclusive OR"`.
    pub fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Xor => "Exclusive OR",
            GateKind::Nand => "NOT AND",
            GateKind::Nor => "NOT OR",
            GateKind::Imply => "Implication (A → B)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GateKind::And => "True only if all inputs are true",
            GateKind::Or => "True if at least one input is true",
            GateKind::Not => "Inverts the input",
            GateKind::Xor => "True if the inputs differ",
            GateKind::Nand => "Inverse of AND",
            GateKind::Nor => "Inverse of OR",
            GateKind::Imply => "False only if A is true and B is false",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Xor => "XOR",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Imply => "IMPLY",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownGate(pub String);

impl fmt::Display for UnknownGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gate '{}'", self.0)
    }
}

impl std::error::Error for UnknownGate {}

impl FromStr for GateKind {
    type Err = UnknownGate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGate(s.to_string()))
    }
}
