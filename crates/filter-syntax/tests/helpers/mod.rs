use filter_syntax::{ColumnDescriptor, DataType, Node, OperatorSet, parse, prune};

pub fn rendered(node: Option<Node>) -> String {
    node.map(|node| node.to_string()).unwrap_or_default()
}

pub fn prune_operators(filter: &str, operators: OperatorSet) -> String {
    rendered(prune(parse(filter).unwrap(), operators, None))
}

/// `c0 TEXT, c1 INTEGER, c2 FLOAT8`
pub fn three_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("c0", DataType::Text, 0),
        ColumnDescriptor::new("c1", DataType::Integer, 1),
        ColumnDescriptor::new("c2", DataType::Float8, 2),
    ]
}
