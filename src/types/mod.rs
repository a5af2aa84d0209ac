//! # Field Types and Values
//!
//! The value layer of the tuple format: a closed set of column kinds, each
//! with a fixed encoded width, and the tagged runtime value that goes with
//! them.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `FieldType` | Storage-level kind discriminant with fixed `byte_len()` |
//! | `Field` | Runtime value tagged by its `FieldType` |
//! | `STRING_CAPACITY` | Fixed text payload reserved per string field (128) |
//!
//! Because every kind has a fixed encoded width, a tuple's total byte size
//! is a function of its schema alone; the page layer computes where the i-th
//! tuple starts without ever inspecting tuple contents.

mod field;
mod field_type;

pub use field::Field;
pub use field_type::{FieldType, STRING_CAPACITY};
