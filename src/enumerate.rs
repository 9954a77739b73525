//! Exhaustive enumeration of assignments.
//!
//! Row `i` of an `n`-variable table binds the variable at position `k` to bit
//! `n-1-k` of `i`. The first variable is the most significant bit and varies
//! slowest, so two variables give the rows `00, 01, 10, 11`.

use crate::types::{Assignment, Var};

/// Value of the variable at position `k` in row `index` of an `n`-variable table.
#[inline]
pub fn bit(index: usize, n: usize, k: usize) -> bool {
    debug_assert!(k < n, "Position {} out of range for {} variables", k, n);
    (index >> (n - 1 - k)) & 1 == 1
}

/// Row `index` of the table over `vars`.
pub fn assignment_at(vars: &[Var], index: usize) -> Assignment {
    let n = vars.len();
    vars.iter().enumerate().map(|(k, &var)| (var, bit(index, n, k))).collect()
}

/// All `2^n` assignments of `vars`, in row order.
///
/// # Panics
///
/// Panics if `vars` contains duplicates or has more variables than fit in a row index.
pub fn enumerate(vars: &[Var]) -> Vec<Assignment> {
    assert!(vars.len() < usize::BITS as usize, "Too many variables to enumerate: {}", vars.len());
    assert!(
        vars.iter().enumerate().all(|(i, v)| !vars[..i].contains(v)),
        "Variables must be distinct"
    );
    (0..1usize << vars.len()).map(|index| assignment_at(vars, index)).collect()
}
