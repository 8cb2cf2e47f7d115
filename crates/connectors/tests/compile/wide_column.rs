use connectors::{
    FilterCompiler,
    wide_column::{ScanFilterCompiler, TupleDescription, filter::ScanPlan},
};
use filter_syntax::{ColumnDescriptor, DataType};

fn compiler() -> ScanFilterCompiler {
    let tuple = TupleDescription::new(vec![
        ColumnDescriptor::new("recordkey", DataType::Text, 0),
        ColumnDescriptor::new("cf1:name", DataType::Text, 1),
        ColumnDescriptor::new("cf1:born", DataType::Date, 2),
        ColumnDescriptor::new("cf2:score", DataType::Bigint, 3),
    ])
    .unwrap();
    ScanFilterCompiler::new(tuple)
}

fn compile(filter: &str) -> Option<ScanPlan> {
    compiler().compile(filter).unwrap()
}

#[test]
fn test_row_key_range_and_column_filter() {
    let plan = compile("a0c25s3drowo4a0c25s3dsowo1l0a3c20s3d100o2l0").unwrap();
    assert_eq!(
        plan.filter.unwrap().to_string(),
        "((ROW GREATER_OR_EQUAL binary:row AND ROW LESS binary:sow) AND cf2:score GREATER integer:100)"
    );
    assert_eq!(plan.range.start_key(), Some(&b"row"[..]));
    assert_eq!(plan.range.end_key(), Some(&b"sow"[..]));
}

#[test]
fn test_date_columns_and_not_are_pruned() {
    let plan = compile("a2c1082s10d2000-01-01o5a1c25s1dxo5l2l0a1o9l0").unwrap();
    assert_eq!(plan.filter.unwrap().to_string(), "cf1:name NOT_EQUAL null");
    assert!(plan.range.is_unbounded());
}

#[test]
fn test_or_over_row_keys_scans_everything() {
    let plan = compile("a0c25s1dao5a1c25s1dbo5l1").unwrap();
    assert!(plan.range.is_unbounded());
}
