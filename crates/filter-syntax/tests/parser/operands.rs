use filter_syntax::{DataType, Node, Operand, parse};

fn right_operand(filter: &str) -> Operand {
    let node = parse(filter).unwrap();
    match node.as_operator().and_then(|n| n.right()) {
        Some(Node::Operand(operand)) => operand.clone(),
        other => panic!("expected an operand on the right, got {other:?}"),
    }
}

#[test]
fn test_typed_constants() {
    let cases = [
        ("a1c16s4dtrueo5", DataType::Boolean, "true"),
        ("a1c21s3d-12o5", DataType::Smallint, "-12"),
        ("a1c23s10d2147483647o5", DataType::Integer, "2147483647"),
        ("a1c20s19d9223372036854775807o5", DataType::Bigint, "9223372036854775807"),
        ("a1c700s4d1.25o5", DataType::Real, "1.25"),
        ("a1c701s6d-1e300o5", DataType::Float8, "-1e300"),
        ("a1c1700s5d12.50o5", DataType::Numeric, "12.50"),
        ("a1c1082s10d2016-01-03o5", DataType::Date, "2016-01-03"),
        ("a1c1114s19d2016-01-03 10:00:00o5", DataType::Timestamp, "2016-01-03 10:00:00"),
        ("a1c1042s3dab o5", DataType::Bpchar, "ab "),
        ("a1c25s0do5", DataType::Text, ""),
    ];

    for (filter, data_type, value) in cases {
        match right_operand(filter) {
            Operand::Scalar(scalar) => {
                assert_eq!(scalar.data_type(), data_type, "filter '{filter}'");
                assert_eq!(scalar.value(), value, "filter '{filter}'");
            }
            other => panic!("expected a scalar for '{filter}', got {other:?}"),
        }
    }
}

#[test]
fn test_multibyte_payload() {
    match right_operand("a0c25s5dcaf\u{e9}o5") {
        Operand::Scalar(scalar) => assert_eq!(scalar.value(), "caf\u{e9}"),
        other => panic!("expected a scalar, got {other:?}"),
    }
}

#[test]
fn test_list_constants() {
    match right_operand("a1m1015s3dabcs1dzo10") {
        Operand::List(list) => {
            assert_eq!(list.data_type(), DataType::VarcharArray);
            assert_eq!(list.values(), ["abc", "z"]);
        }
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn test_integer_width_checked_per_type() {
    assert!(parse("a1c21s5d32767o5").is_ok());
    assert_eq!(
        parse("a1c21s5d32768o5").unwrap_err().to_string(),
        "failed to parse number data type starting at 8"
    );
    assert_eq!(
        parse("a1c23s10d2147483648o5").unwrap_err().to_string(),
        "failed to parse number data type starting at 9"
    );
    assert!(parse("a1c20s10d2147483648o5").is_ok());
}
