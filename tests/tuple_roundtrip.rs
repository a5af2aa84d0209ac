//! End-to-end exercises of the tuple format the way the page layer uses it:
//! fixed-stride records packed back to back, decoded by schema alone.

use std::sync::Arc;
use tuplekit::{Error, Field, FieldType, Op, PageId, RecordId, Tuple, TupleSchema};

fn user_schema() -> Arc<TupleSchema> {
    Arc::new(
        TupleSchema::with_names(
            &[FieldType::Int, FieldType::FixedString, FieldType::Int],
            &[Some("id"), Some("name"), Some("age")],
        )
        .unwrap(),
    )
}

#[test]
fn fixed_stride_page_scan() {
    let schema = user_schema();
    let stride = schema.byte_size();
    assert_eq!(stride, 4 + 132 + 4);

    let rows = [
        (1, "alice", 30),
        (2, "bob", 25),
        (3, "carol", 41),
        (4, "dave", 19),
    ];

    // Pack tuples back to back, the way a heap page stores them.
    let mut page = Vec::new();
    for &(id, name, age) in &rows {
        let tuple = Tuple::new(
            schema.clone(),
            [Field::Int(id), Field::string(name), Field::Int(age)],
        )
        .unwrap();
        tuple.encode(&mut page).unwrap();
    }
    assert_eq!(page.len(), rows.len() * stride);

    // The i-th tuple's bytes begin at i * stride; decode needs no scanning.
    for (slot, &(id, name, age)) in rows.iter().enumerate() {
        let start = slot * stride;
        let mut tuple = Tuple::decode(schema.clone(), &page[start..start + stride]).unwrap();

        assert_eq!(tuple.field(0).unwrap(), &Field::Int(id));
        assert_eq!(tuple.field(1).unwrap(), &Field::string(name));
        assert_eq!(tuple.field(2).unwrap(), &Field::Int(age));

        let rid = RecordId::new(PageId::new(1, 0), slot as u32);
        tuple.set_record_id(rid);
        assert_eq!(tuple.record_id(), Some(rid));
    }
}

#[test]
fn reencoding_a_decoded_tuple_is_byte_identical() {
    let schema = user_schema();
    let tuple = Tuple::new(
        schema.clone(),
        [Field::Int(9), Field::string("erin"), Field::Int(7)],
    )
    .unwrap();

    let mut first = Vec::new();
    tuple.encode(&mut first).unwrap();

    let decoded = Tuple::decode(schema, &first).unwrap();
    let mut second = Vec::new();
    decoded.encode(&mut second).unwrap();

    // Padding is deterministically zero, so the bytes match exactly.
    assert_eq!(first, second);
}

#[test]
fn combined_schema_decodes_joined_rows() {
    let left = Arc::new(
        TupleSchema::with_names(&[FieldType::Int], &[Some("id")]).unwrap(),
    );
    let right = Arc::new(
        TupleSchema::with_names(&[FieldType::FixedString], &[Some("city")]).unwrap(),
    );
    let joined = Arc::new(TupleSchema::combine(&left, &right));

    assert_eq!(joined.num_fields(), 2);
    assert_eq!(joined.byte_size(), left.byte_size() + right.byte_size());

    // A join concatenates the two encodings; the combined schema reads it.
    let mut buf = Vec::new();
    Tuple::new(left, [Field::Int(10)])
        .unwrap()
        .encode(&mut buf)
        .unwrap();
    Tuple::new(right, [Field::string("reno")])
        .unwrap()
        .encode(&mut buf)
        .unwrap();

    let row = Tuple::decode(joined, &buf).unwrap();
    assert_eq!(row.field(0).unwrap(), &Field::Int(10));
    assert_eq!(row.field(1).unwrap(), &Field::string("reno"));
}

#[test]
fn predicate_scan_over_decoded_fields() {
    let schema = user_schema();
    let tuple = Tuple::new(
        schema,
        [Field::Int(5), Field::string("hello world"), Field::Int(3)],
    )
    .unwrap();

    let id = tuple.field(0).unwrap();
    let age = tuple.field(2).unwrap();

    assert!(id.compare(Op::GreaterThan, age).unwrap());
    assert!(tuple
        .field(1)
        .unwrap()
        .compare(Op::Like, &Field::string("world"))
        .unwrap());

    // Cross-kind comparison surfaces immediately instead of coercing.
    let err = id.compare(Op::Equals, tuple.field(1).unwrap()).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn string_field_wire_format() {
    let schema = Arc::new(TupleSchema::from_types(&[FieldType::FixedString]).unwrap());
    let tuple = Tuple::new(schema.clone(), [Field::string("ab")]).unwrap();

    let mut buf = Vec::new();
    tuple.encode(&mut buf).unwrap();

    assert_eq!(buf.len(), 132);
    assert_eq!(&buf[..4], &[0, 0, 0, 2]);
    assert_eq!(&buf[4..6], b"ab");
    assert!(buf[6..].iter().all(|&b| b == 0));

    let back = Tuple::decode(schema, &buf).unwrap();
    assert_eq!(back.field(0).unwrap(), &Field::string("ab"));
}
