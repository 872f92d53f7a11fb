use ordinal_schema::{Error, Field, FieldDescriptor, FieldType, Value};
use pretty_assertions::assert_eq;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn descriptor_without_default_uses_fallback() {
    let field = Field::new(&FieldDescriptor::text()).unwrap();
    assert_eq!(field.field_type(), FieldType::Text);
    assert_eq!(field.default_value(), &Value::Text(String::new()));

    let field = Field::new(&FieldDescriptor::integer()).unwrap();
    assert_eq!(field.default_value(), &Value::Integer(0));
}

#[test]
fn descriptor_default_is_kept() {
    let field = Field::new(&FieldDescriptor::boolean().with_default(true)).unwrap();
    assert_eq!(field.default_value(), &Value::Boolean(true));
}

#[test]
fn alias_tag_resolves() {
    let field = Field::new(&FieldDescriptor::new("int")).unwrap();
    assert_eq!(field.field_type(), FieldType::Integer);
}

#[test]
fn unknown_tag_is_rejected() {
    let err = Field::new(&FieldDescriptor::new("timestamp")).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn mismatched_default_is_rejected() {
    let err = Field::new(&FieldDescriptor::integer().with_default("zero")).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    let err = Field::new(&FieldDescriptor::integer().with_default(1.5)).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn integer_default_widens_for_float_field() {
    let field = Field::new(&FieldDescriptor::float().with_default(3)).unwrap();
    assert_eq!(field.default_value(), &Value::Float(3.0));
}

#[test]
fn inexact_integer_default_for_float_field_is_rejected() {
    for n in [(1_i64 << 53) + 1, i64::MAX] {
        let err = Field::new(&FieldDescriptor::float().with_default(n)).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(format!("default {n} cannot be represented exactly as float"))
        );
    }
}

#[test]
fn largest_exact_integer_default_widens() {
    let n = 1_i64 << 53;
    let field = Field::new(&FieldDescriptor::float().with_default(n)).unwrap();
    assert_eq!(field.default_value(), &Value::Float(9_007_199_254_740_992.0));
}

#[test]
fn mismatched_default_error_names_value_and_type() {
    let err = Field::new(&FieldDescriptor::boolean().with_default(2.5)).unwrap_err();
    assert_eq!(
        err,
        Error::Configuration("default 2.5 (float) is not representable as boolean".into())
    );
}

// ── Serialize ────────────────────────────────────────────────────

#[test]
fn serialize_each_type() {
    assert_eq!(Field::of_type(FieldType::Text).serialize(&"a b".into()).unwrap(), "a b");
    assert_eq!(Field::of_type(FieldType::Integer).serialize(&42.into()).unwrap(), "42");
    assert_eq!(Field::of_type(FieldType::Integer).serialize(&(-7).into()).unwrap(), "-7");
    assert_eq!(Field::of_type(FieldType::Float).serialize(&2.5.into()).unwrap(), "2.5");
    assert_eq!(Field::of_type(FieldType::Boolean).serialize(&false.into()).unwrap(), "false");
}

#[test]
fn serialize_wrong_type_is_encoding_error() {
    let err = Field::of_type(FieldType::Integer)
        .serialize(&Value::from("42"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::Encoding {
            expected: FieldType::Integer,
            found: "text",
        }
    );
}

#[test]
fn serialize_does_not_widen_integers() {
    let err = Field::of_type(FieldType::Float)
        .serialize(&Value::Integer(1))
        .unwrap_err();
    assert!(matches!(err, Error::Encoding { .. }));
}

// ── Deserialize ──────────────────────────────────────────────────

#[test]
fn deserialize_each_type() {
    assert_eq!(Field::of_type(FieldType::Text).deserialize("").unwrap(), Value::from(""));
    assert_eq!(Field::of_type(FieldType::Integer).deserialize("42").unwrap(), Value::from(42));
    assert_eq!(Field::of_type(FieldType::Float).deserialize("1e3").unwrap(), Value::from(1000.0));
    assert_eq!(Field::of_type(FieldType::Boolean).deserialize("true").unwrap(), Value::from(true));
}

#[test]
fn deserialize_invalid_text_is_decoding_error() {
    let cases = [
        (FieldType::Integer, "forty-two"),
        (FieldType::Integer, " 42"),
        (FieldType::Integer, "4.2"),
        (FieldType::Float, "one"),
        (FieldType::Boolean, "TRUE"),
        (FieldType::Boolean, "1"),
    ];
    for (ft, text) in cases {
        let err = Field::of_type(ft).deserialize(text).unwrap_err();
        assert!(
            matches!(&err, Error::Decoding { expected, .. } if *expected == ft),
            "{ft} should reject {text:?}, got {err:?}"
        );
    }
}

#[test]
fn integer_limits_roundtrip() {
    let field = Field::of_type(FieldType::Integer);
    for n in [i64::MIN, -1, 0, i64::MAX] {
        let text = field.serialize(&n.into()).unwrap();
        assert_eq!(field.deserialize(&text).unwrap(), Value::Integer(n));
    }
}

#[test]
fn integer_overflow_is_decoding_error() {
    let err = Field::of_type(FieldType::Integer)
        .deserialize("9223372036854775808")
        .unwrap_err();
    assert!(matches!(err, Error::Decoding { .. }));
}

#[test]
fn nan_survives_roundtrip() {
    let field = Field::of_type(FieldType::Float);
    let text = field.serialize(&Value::Float(f64::NAN)).unwrap();
    let back = field.deserialize(&text).unwrap();
    assert!(back.as_f64().is_some_and(f64::is_nan));
}
