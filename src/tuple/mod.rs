//! # Tuples and Record Addressing
//!
//! A `Tuple` is one decoded row: a shared schema, one `Field` per column,
//! and optionally the [`RecordId`] the storage layer assigned when the tuple
//! was placed on a page. The address is attached by the caller, never by
//! decode.
//!
//! ## Binary Layout
//!
//! A tuple's bytes are its fields' encodings concatenated in schema column
//! order, exactly `schema.byte_size()` bytes. There is no per-tuple header;
//! all layout information lives in the schema, which is what makes the
//! stride fixed.
//!
//! ```text
//! +----------+----------+     +----------+
//! | field 0  | field 1  | ... | field N-1|
//! +----------+----------+     +----------+
//!   type[0].byte_len()    ...   type[N-1].byte_len()
//! ```

mod record_id;

pub use record_id::{PageId, RecordId};

use crate::error::{Error, Result};
use crate::schema::TupleSchema;
use crate::types::Field;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// One row of a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    schema: Arc<TupleSchema>,
    fields: SmallVec<[Field; 8]>,
    record_id: Option<RecordId>,
}

impl Tuple {
    /// Builds a tuple from a value per column.
    ///
    /// Fails with `Error::InvalidArgument` when the value count differs from
    /// `schema.num_fields()`, and with `Error::TypeMismatch` when a value's
    /// tag differs from its column's kind.
    pub fn new(schema: Arc<TupleSchema>, fields: impl IntoIterator<Item = Field>) -> Result<Self> {
        let fields: SmallVec<[Field; 8]> = fields.into_iter().collect();
        if fields.len() != schema.num_fields() {
            return Err(Error::InvalidArgument(format!(
                "schema has {} fields, got {} values",
                schema.num_fields(),
                fields.len()
            )));
        }
        for (i, field) in fields.iter().enumerate() {
            let expected = schema.field_type(i)?;
            if field.field_type() != expected {
                return Err(Error::TypeMismatch {
                    left: expected,
                    right: field.field_type(),
                });
            }
        }
        Ok(Self {
            schema,
            fields,
            record_id: None,
        })
    }

    /// Decodes one tuple from the front of `buf`, consuming exactly
    /// `schema.byte_size()` bytes.
    ///
    /// The result holds `schema.num_fields()` values whose i-th tag equals
    /// `schema.field_type(i)`. No record id is attached.
    pub fn decode(schema: Arc<TupleSchema>, buf: &[u8]) -> Result<Self> {
        if buf.len() < schema.byte_size() {
            return Err(Error::Parse(format!(
                "truncated tuple: need {} bytes, have {}",
                schema.byte_size(),
                buf.len()
            )));
        }

        let mut fields = SmallVec::with_capacity(schema.num_fields());
        let mut offset = 0;
        for col in schema.columns() {
            let ty = col.field_type();
            fields.push(ty.decode(&buf[offset..offset + ty.byte_len()])?);
            offset += ty.byte_len();
        }

        Ok(Self {
            schema,
            fields,
            record_id: None,
        })
    }

    /// Appends this tuple's encoding to `buf`: each field in column order,
    /// `schema.byte_size()` bytes total.
    pub fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        for field in &self.fields {
            field.encode(buf)?;
        }
        Ok(())
    }

    pub fn schema(&self) -> &Arc<TupleSchema> {
        &self.schema
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The i-th value, or `Error::FieldNotFound` when `i` is out of range.
    pub fn field(&self, i: usize) -> Result<&Field> {
        self.fields.get(i).ok_or_else(|| {
            Error::FieldNotFound(format!(
                "index {} out of range for {} fields",
                i,
                self.fields.len()
            ))
        })
    }

    /// Replaces the i-th value.
    ///
    /// The replacement must carry the column's kind; the tuple never drifts
    /// from its schema.
    pub fn set_field(&mut self, i: usize, field: Field) -> Result<()> {
        let expected = self.schema.field_type(i)?;
        if field.field_type() != expected {
            return Err(Error::TypeMismatch {
                left: expected,
                right: field.field_type(),
            });
        }
        self.fields[i] = field;
        Ok(())
    }

    /// Address assigned by the storage layer, if any.
    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    pub fn set_record_id(&mut self, rid: RecordId) {
        self.record_id = Some(rid);
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
