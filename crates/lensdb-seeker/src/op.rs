//! Comparison operators for numeric predicates.
//!
//! The [`Op`] enum defines how a record field is compared against the
//! canonical value of a condition: `field <op> value`.

use std::cmp::Ordering;

/// Comparison operator for a numeric predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Evaluates a comparison given the ordering of `field` relative to `value`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Compares two floats. Any NaN operand yields `false`.
    pub fn eval(self, field: f64, value: f64) -> bool {
        match field.partial_cmp(&value) {
            Some(ordering) => self.eval_ordering(ordering),
            None => false,
        }
    }

    /// Returns the mathematical symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
        }
    }
}
