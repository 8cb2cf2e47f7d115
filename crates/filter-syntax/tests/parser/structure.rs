use filter_syntax::{Node, Operand, Operator, OperatorNode, parse};

fn operator(node: &Node) -> &OperatorNode {
    node.as_operator().unwrap()
}

#[test]
fn test_nested_logical_tree() {
    let node = parse("a1c25s6dfoobaro5a2c23s3d999o6l0a1c25s6dfoobaro5a3c20s3d999o6l1l0").unwrap();
    assert_eq!(
        node.to_string(),
        "((_1_ = foobar AND _2_ <> 999) AND (_1_ = foobar OR _3_ <> 999))"
    );

    let root = operator(&node);
    assert_eq!(root.operator(), Operator::And);
    assert_eq!(operator(root.left().unwrap()).operator(), Operator::And);
    assert_eq!(operator(root.right().unwrap()).operator(), Operator::Or);
    assert_eq!(node.size(), 15);
}

#[test]
fn test_not_wraps_single_child() {
    let node = parse("a1c25s5dfirsto5a2c20s1d2o2l0l2").unwrap();
    let not = operator(&node);
    assert_eq!(not.operator(), Operator::Not);
    assert_eq!(not.child_count(), 1);
    assert!(not.right().is_none());
    assert_eq!(operator(not.left().unwrap()).operator(), Operator::And);
}

#[test]
fn test_column_to_column_is_not_swapped() {
    let node = parse("a2a1o1").unwrap();
    let lt = operator(&node);
    assert_eq!(lt.operator(), Operator::LessThan);
    assert_eq!(lt.left(), Some(&Node::Operand(Operand::column(2))));
    assert_eq!(lt.right(), Some(&Node::Operand(Operand::column(1))));
}

#[test]
fn test_logical_operands_are_not_swapped() {
    let node = parse("a1o8a2c23s1d5o1l1").unwrap();
    assert_eq!(node.to_string(), "(_1_ IS NULL OR _2_ < 5)");
}

#[test]
fn test_tree_serializes_to_json() {
    let node = parse("a1c23s1d5o5").unwrap();
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["operator"]["operator"], "EQUALS");
    assert_eq!(json["operator"]["left"]["operand"]["kind"], "column");
    assert_eq!(json["operator"]["left"]["operand"]["index"], 1);
    assert_eq!(json["operator"]["right"]["operand"]["data_type"], "INTEGER");
    assert_eq!(json["operator"]["right"]["operand"]["value"], "5");
}
