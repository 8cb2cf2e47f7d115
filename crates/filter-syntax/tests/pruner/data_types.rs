use filter_syntax::{
    CapabilityPruner, ColumnDescriptor, ColumnResolver, DataType, OperatorSet, parse, prune,
    traverse,
};
use std::collections::HashSet;

use crate::helpers::{rendered, three_columns};

const AND_FILTER: &str = "a0c25s3dbaro5a1c23s3d999o6l0";
const OR_FILTER: &str = "a0c25s3dbaro5a1c23s3d999o6l1";

fn prune_types(filter: &str, columns: &dyn ColumnResolver, types: &[DataType]) -> String {
    let supported: HashSet<DataType> = types.iter().copied().collect();
    rendered(prune(
        parse(filter).unwrap(),
        OperatorSet::all(),
        Some((columns, &supported)),
    ))
}

#[test]
fn test_and_keeps_supported_side() {
    let columns = three_columns();
    assert_eq!(prune_types(AND_FILTER, &columns, &[DataType::Integer]), "_1_ <> 999");
    assert_eq!(prune_types(AND_FILTER, &columns, &[DataType::Text]), "_0_ = bar");
    assert_eq!(
        prune_types(AND_FILTER, &columns, &[DataType::Text, DataType::Integer]),
        "(_0_ = bar AND _1_ <> 999)"
    );
    assert_eq!(prune_types(AND_FILTER, &columns, &[DataType::Float8]), "");
}

#[test]
fn test_or_needs_both_sides() {
    let columns = three_columns();
    assert_eq!(prune_types(OR_FILTER, &columns, &[DataType::Text]), "");
    assert_eq!(prune_types(OR_FILTER, &columns, &[DataType::Integer]), "");
    assert_eq!(
        prune_types(OR_FILTER, &columns, &[DataType::Text, DataType::Integer]),
        "(_0_ = bar OR _1_ <> 999)"
    );
}

#[test]
fn test_not_follows_its_child() {
    let columns = three_columns();
    assert_eq!(
        prune_types("a2c701s3d1.5o5l2", &columns, &[DataType::Float8]),
        "NOT (_2_ = 1.5)"
    );
    assert_eq!(prune_types("a2c701s3d1.5o5l2", &columns, &[DataType::Text]), "");
}

#[test]
fn test_unknown_column_type_is_pruned() {
    let mut columns = three_columns();
    columns.push(ColumnDescriptor {
        name: "c3".into(),
        type_oid: 12345678,
        index: 3,
        type_name: "mystery".into(),
        type_modifiers: Vec::new(),
    });
    let all_known: Vec<DataType> = DataType::KNOWN.to_vec();
    assert_eq!(prune_types("a3c25s1dxo5", &columns, &all_known), "");
    assert_eq!(
        prune_types("a3c25s1dxo5a0c25s1dyo5l0", &columns, &all_known),
        "_0_ = y"
    );
}

#[test]
fn test_column_out_of_range() {
    let columns = three_columns();
    assert_eq!(prune_types("a7c25s1dxo5", &columns, &[DataType::Text]), "");
}

#[test]
fn test_null_check_is_type_checked() {
    let columns = three_columns();
    assert_eq!(prune_types("a0o9", &columns, &[DataType::Text]), "_0_ IS NOT NULL");
    assert_eq!(prune_types("a0o9", &columns, &[DataType::Integer]), "");
}

#[test]
fn test_builder_style_construction() {
    let columns = three_columns();
    let mut pruner = CapabilityPruner::new(OperatorSet::comparisons() | OperatorSet::AND)
        .with_supported_types(&columns, [DataType::Integer, DataType::Float8]);
    let result = traverse(
        parse("a0c25s3dbaro5a1c23s3d999o6l0a2c701s3d1.5o1l0").unwrap(),
        &mut pruner,
    );
    assert_eq!(rendered(result), "(_1_ <> 999 AND _2_ < 1.5)");
}
