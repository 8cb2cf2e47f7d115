use filter_syntax::{ColumnDescriptor, DataType};

/// `id INTEGER, cdate DATE, amt FLOAT8, grade TEXT, b BOOLEAN, code BPCHAR(3)`
pub fn orders() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", DataType::Integer, 0),
        ColumnDescriptor::new("cdate", DataType::Date, 1),
        ColumnDescriptor::new("amt", DataType::Float8, 2),
        ColumnDescriptor::new("grade", DataType::Text, 3),
        ColumnDescriptor::new("b", DataType::Boolean, 4),
        ColumnDescriptor::new("code", DataType::Bpchar, 5).with_modifiers(vec![3]),
    ]
}
