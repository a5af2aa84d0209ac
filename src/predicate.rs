//! Comparison operators applied to field values.
//!
//! The predicate evaluation engine itself lives above this crate; only the
//! operator enumeration and the single-field comparison contract
//! ([`Field::compare`](crate::types::Field::compare)) are defined here.

use std::fmt;

/// Operator for comparing two field values of the same kind.
///
/// `Like` degenerates to equality on integers and means substring
/// containment on strings (the value contains the pattern), not a wildcard
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEq,
    LessThan,
    LessThanOrEq,
    Like,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Equals => "=",
            Op::NotEquals => "<>",
            Op::GreaterThan => ">",
            Op::GreaterThanOrEq => ">=",
            Op::LessThan => "<",
            Op::LessThanOrEq => "<=",
            Op::Like => "LIKE",
        };
        f.write_str(symbol)
    }
}
