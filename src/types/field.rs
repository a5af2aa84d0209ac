//! # Runtime Field Values
//!
//! `Field` is the tagged runtime value for one column of a tuple: either an
//! integer or a fixed-capacity string. Values are immutable after
//! construction and carry no shared state, so they are freely shareable
//! across threads.
//!
//! ## Comparison Semantics
//!
//! Operators apply homogeneously: comparing across kinds is never coerced
//! and fails with `Error::TypeMismatch`. Ordering on strings is
//! lexicographic on the text. `Like` is equality on integers and substring
//! containment on strings.
//!
//! ## Encoding
//!
//! `encode` appends exactly `field_type().byte_len()` bytes. Re-encoding a
//! decoded value is byte-identical to a well-formed original because padding
//! is deterministically zero; padding content of the input is never part of
//! the value.

use crate::error::{Error, Result};
use crate::predicate::Op;
use crate::types::{FieldType, STRING_CAPACITY};
use std::fmt;

/// One column's value, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Int(i32),
    /// Text payload of at most [`STRING_CAPACITY`] bytes. Use
    /// [`Field::string`] to construct; it enforces the capacity by
    /// truncation.
    Str(String),
}

impl Field {
    /// Builds a string field, truncating the input to [`STRING_CAPACITY`]
    /// bytes on a char boundary.
    pub fn string(s: impl Into<String>) -> Field {
        let mut s: String = s.into();
        if s.len() > STRING_CAPACITY {
            let mut end = STRING_CAPACITY;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            s.truncate(end);
        }
        Field::Str(s)
    }

    /// Returns the kind tag of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            Field::Int(_) => FieldType::Int,
            Field::Str(_) => FieldType::FixedString,
        }
    }

    /// Appends the encoded form of this value to `buf`, exactly
    /// `field_type().byte_len()` bytes.
    ///
    /// Fails with `Error::InvalidArgument` if a directly-constructed `Str`
    /// payload exceeds [`STRING_CAPACITY`].
    pub fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        match self {
            Field::Int(v) => {
                buf.extend(v.to_be_bytes());
            }
            Field::Str(s) => {
                if s.len() > STRING_CAPACITY {
                    return Err(Error::InvalidArgument(format!(
                        "string payload of {} bytes exceeds capacity {}",
                        s.len(),
                        STRING_CAPACITY
                    )));
                }
                buf.extend((s.len() as u32).to_be_bytes());
                buf.extend(s.as_bytes());
                buf.resize(buf.len() + (STRING_CAPACITY - s.len()), 0);
            }
        }
        Ok(())
    }

    /// Evaluates `self op other`.
    ///
    /// Both operands must be the same kind; otherwise the comparison fails
    /// with `Error::TypeMismatch`.
    pub fn compare(&self, op: Op, other: &Field) -> Result<bool> {
        match (self, other) {
            (Field::Int(a), Field::Int(b)) => Ok(match op {
                Op::Equals | Op::Like => a == b,
                Op::NotEquals => a != b,
                Op::GreaterThan => a > b,
                Op::GreaterThanOrEq => a >= b,
                Op::LessThan => a < b,
                Op::LessThanOrEq => a <= b,
            }),
            (Field::Str(a), Field::Str(b)) => Ok(match op {
                Op::Equals => a == b,
                Op::NotEquals => a != b,
                Op::GreaterThan => a > b,
                Op::GreaterThanOrEq => a >= b,
                Op::LessThan => a < b,
                Op::LessThanOrEq => a <= b,
                Op::Like => a.contains(b.as_str()),
            }),
            _ => Err(Error::TypeMismatch {
                left: self.field_type(),
                right: other.field_type(),
            }),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(v) => write!(f, "{v}"),
            Field::Str(s) => f.write_str(s),
        }
    }
}
