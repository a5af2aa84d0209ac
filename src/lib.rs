//! # tuplekit - Tuple Schema and Value Layer
//!
//! tuplekit is the tuple-schema and value-type layer of a record-oriented
//! storage engine. It fixes the binary contract every other layer (page
//! format, buffer pool, query executor) depends on: how a relation's column
//! layout is described, how field values are represented, compared, and
//! encoded, and how a tuple is addressed within a page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Query Executor / Predicates      │
//! ├─────────────────────────────────────┤
//! │   Buffer Pool │ Heap Files │ B-Tree  │   (external collaborators)
//! ├─────────────────────────────────────┤
//! │  Tuple Schema │ Field Values │ RIDs  │   <- this crate
//! └─────────────────────────────────────┘
//! ```
//!
//! A [`TupleSchema`] is built once per relation and shared by reference
//! (`Arc`); the page layer uses its fixed [`byte_size`](TupleSchema::byte_size)
//! to compute how many tuples fit per page and where the i-th tuple's bytes
//! begin (`i * byte_size`). Each [`Field`] is produced by dispatching to its
//! [`FieldType`]'s decoder; a [`RecordId`] is attached to a decoded tuple by
//! the caller.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use tuplekit::{Field, FieldType, Op, Tuple, TupleSchema};
//!
//! let schema = Arc::new(TupleSchema::with_names(
//!     &[FieldType::Int, FieldType::FixedString],
//!     &[Some("id"), Some("name")],
//! )?);
//!
//! let tuple = Tuple::new(schema.clone(), [Field::Int(1), Field::string("alice")])?;
//!
//! let mut buf = Vec::new();
//! tuple.encode(&mut buf)?;
//! assert_eq!(buf.len(), schema.byte_size());
//!
//! let decoded = Tuple::decode(schema, &buf)?;
//! assert!(decoded.field(0)?.compare(Op::Equals, &Field::Int(1))?);
//! # Ok::<(), tuplekit::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`types`]: `FieldType` registry and tagged `Field` values
//! - [`schema`]: ordered, immutable `TupleSchema`
//! - [`tuple`]: decoded `Tuple` rows, `PageId`/`RecordId` addressing
//! - [`predicate`]: comparison operator enumeration
//! - [`error`]: typed failure taxonomy
//!
//! ## Concurrency
//!
//! Every type here is an immutable value after construction, with no
//! internal locks, I/O, or retries. All operations are pure, synchronous,
//! and bounded by the fixed byte lengths of the field kinds; the only shared
//! mutable resource is the caller-supplied byte buffer, whose access
//! discipline belongs to the caller.

pub mod error;
pub mod predicate;
pub mod schema;
pub mod tuple;
pub mod types;

pub use error::{Error, Result};
pub use predicate::Op;
pub use schema::{Column, TupleSchema};
pub use tuple::{PageId, RecordId, Tuple};
pub use types::{Field, FieldType, STRING_CAPACITY};
