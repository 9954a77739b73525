//! Variables and assignments.
//!
//! Variables are single letters, normalized to lowercase. An [`Assignment`]
//! keeps its variables in order, because the order decides the bit position
//! of each variable in a truth table row.

use std::fmt;

/// A boolean variable, named by a single ASCII letter.
///
/// # Invariants
///
/// - The name is always a lowercase ASCII letter (`'a'..='z'`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(char);

impl Var {
    /// Creates a new variable, lowercasing the given letter.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII letter.
    pub fn new(name: char) -> Self {
        assert!(name.is_ascii_alphabetic(), "Variable name must be an ASCII letter, got {:?}", name);
        Var(name.to_ascii_lowercase())
    }

    /// Returns the (lowercase) variable name.
    pub fn name(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// An ordered mapping from variables to boolean values.
///
/// Inserting a variable that is already bound replaces its value in place,
/// so the order of variables is the order of their first insertion.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: Vec<(Var, bool)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `value`.
    pub fn insert(&mut self, var: Var, value: bool) {
        match self.values.iter_mut().find(|(v, _)| *v == var) {
            Some((_, old)) => *old = value,
            None => self.values.push((var, value)),
        }
    }

    /// Builder-style [`insert`][Assignment::insert].
    pub fn with(mut self, var: Var, value: bool) -> Self {
        self.insert(var, value);
        self
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.iter().find(|(v, _)| *v == var).map(|&(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values.iter().copied()
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.values.iter().map(|&(var, _)| var)
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().map(|&(_, value)| value)
    }

    /// Row index of this assignment, reading the first variable as the most significant bit.
    ///
    /// This is the inverse of [`enumerate`][crate::enumerate::enumerate].
    pub fn index(&self) -> usize {
        self.values().fold(0, |acc, value| (acc << 1) | value as usize)
    }

    /// Values as a string of `0`s and `1`s, e.g. `"011"`.
    pub fn bits(&self) -> String {
        self.values().map(|value| if value { '1' } else { '0' }).collect()
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.insert(var, value);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, value as u8)?;
        }
        Ok(())
    }
}
