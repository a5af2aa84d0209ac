//! # Error Taxonomy
//!
//! Every failure in this crate is synchronous and surfaced to the immediate
//! caller; nothing retries or partially recovers. A fixed-stride record
//! format only works with all-or-nothing decode, so a truncated or malformed
//! buffer aborts the whole field/tuple read.
//!
//! ## Error Kinds
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `Parse` | `FieldType::decode`, `Tuple::decode` on truncated or malformed bytes |
//! | `TypeMismatch` | `Field::compare` across kinds, `Tuple::set_field` with the wrong tag |
//! | `FieldNotFound` | out-of-range positional access, unmatched name lookup |
//! | `InvalidSchema` | schema construction with no columns or mismatched name count |
//! | `InvalidArgument` | oversized string payload, tuple arity mismatch |
//!
//! Callers (query planner, page layer) dispatch on the variant; messages are
//! for diagnostics only.

use crate::types::FieldType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("parse failure: {0}")]
    Parse(String),

    #[error("type mismatch: {left} is not comparable with {right}")]
    TypeMismatch { left: FieldType, right: FieldType },

    #[error("field not found: {0}")]
    FieldNotFound(String),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
