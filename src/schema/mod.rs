//! # Tuple Schema
//!
//! A `TupleSchema` is the ordered, immutable description of a relation's
//! columns: one `Column` (kind + optional name) per position. The schema is
//! built once per relation and shared by reference (`Arc`); one instance
//! backs every tuple of the relation.
//!
//! ## Schema Internals
//!
//! - `columns`: ordered column definitions, length >= 1
//! - `byte_size`: precomputed sum of the columns' encoded widths
//!
//! `byte_size` is the exact stride of one encoded tuple, which the page
//! layer uses to compute how many tuples fit per page and where the i-th
//! tuple's bytes begin.
//!
//! ## Equality and Hashing
//!
//! Two schemas are equal when their ordered type sequences match; names
//! never participate. There is deliberately no `Hash` impl: a hash
//! consistent with this equality would have to ignore names too, and keying
//! maps by schema is not a supported use. The missing impl makes that a
//! compile error instead of a runtime surprise.

use crate::error::{Error, Result};
use crate::types::FieldType;
use std::fmt;
use tracing::debug;

/// One column of a schema: a kind plus an optional name.
///
/// Names are not unique-constrained; lookup returns the first match.
#[derive(Debug, Clone)]
pub struct Column {
    ty: FieldType,
    name: Option<String>,
}

impl Column {
    /// An anonymous column of the given kind.
    pub fn new(ty: FieldType) -> Self {
        Self { ty, name: None }
    }

    /// A named column of the given kind.
    pub fn named(ty: FieldType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: Some(name.into()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.ty
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Ordered, immutable column layout of a relation.
#[derive(Debug, Clone)]
pub struct TupleSchema {
    columns: Vec<Column>,
    byte_size: usize,
}

impl TupleSchema {
    /// Builds a schema from at least one column.
    ///
    /// Fails with `Error::InvalidSchema` when `columns` is empty; an invalid
    /// schema must never exist, let alone be shared.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::InvalidSchema(
                "a schema needs at least one column".to_owned(),
            ));
        }
        let byte_size = columns.iter().map(|c| c.ty.byte_len()).sum();
        debug!(num_fields = columns.len(), byte_size, "constructed tuple schema");
        Ok(Self { columns, byte_size })
    }

    /// Builds a schema of anonymous columns from a type sequence.
    pub fn from_types(types: &[FieldType]) -> Result<Self> {
        Self::new(types.iter().copied().map(Column::new).collect())
    }

    /// Builds a schema from a type sequence and a parallel name sequence.
    ///
    /// The sequences must have the same length; individual names may be
    /// absent. Fails with `Error::InvalidSchema` on a length mismatch.
    pub fn with_names(types: &[FieldType], names: &[Option<&str>]) -> Result<Self> {
        if names.len() != types.len() {
            return Err(Error::InvalidSchema(format!(
                "{} names given for {} types",
                names.len(),
                types.len()
            )));
        }
        let columns = types
            .iter()
            .zip(names)
            .map(|(&ty, name)| match name {
                Some(n) => Column::named(ty, *n),
                None => Column::new(ty),
            })
            .collect();
        Self::new(columns)
    }

    /// Concatenates two schemas: all columns of `a` followed by all columns
    /// of `b`, both inputs untouched.
    pub fn combine(a: &TupleSchema, b: &TupleSchema) -> TupleSchema {
        let columns = a.columns.iter().chain(b.columns.iter()).cloned().collect();
        TupleSchema {
            columns,
            byte_size: a.byte_size + b.byte_size,
        }
    }

    /// Number of columns in this schema.
    pub fn num_fields(&self) -> usize {
        self.columns.len()
    }

    /// Kind of the i-th column, or `Error::FieldNotFound` when `i` is out of
    /// range.
    pub fn field_type(&self, i: usize) -> Result<FieldType> {
        self.columns
            .get(i)
            .map(|c| c.ty)
            .ok_or_else(|| self.out_of_range(i))
    }

    /// Name of the i-th column (possibly absent), or `Error::FieldNotFound`
    /// when `i` is out of range.
    pub fn field_name(&self, i: usize) -> Result<Option<&str>> {
        self.columns
            .get(i)
            .map(|c| c.name.as_deref())
            .ok_or_else(|| self.out_of_range(i))
    }

    /// First index whose column name equals `name` (exact, case-sensitive).
    ///
    /// Fails with `Error::FieldNotFound` when no column matches; anonymous
    /// columns never match.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name.as_deref() == Some(name))
            .ok_or_else(|| Error::FieldNotFound(format!("no column named {name:?}")))
    }

    /// Exact byte stride of one tuple encoded under this schema.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn out_of_range(&self, i: usize) -> Error {
        Error::FieldNotFound(format!(
            "index {} out of range for {} fields",
            i,
            self.columns.len()
        ))
    }
}

impl PartialEq for TupleSchema {
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|(a, b)| a.ty == b.ty)
    }
}

impl Eq for TupleSchema {}

impl fmt::Display for TupleSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}({})", col.ty, col.name.as_deref().unwrap_or("?"))?;
        }
        Ok(())
    }
}
