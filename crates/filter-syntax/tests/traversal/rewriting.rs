use filter_syntax::{
    DataType, Node, Operand, Operator, OperatorNode, ToStringTreeVisitor, TreeVisitor,
    TreeVisitorExt, parse, traverse,
};

/// Replaces the right side of the root in `visit`.
struct SwapRight {
    replacement: Option<Node>,
}

impl TreeVisitor for SwapRight {
    fn visit(&mut self, node: Node, depth: usize) -> Option<Node> {
        match node {
            Node::Operator(operator_node) if depth == 0 => {
                let (_, left, _) = operator_node.into_parts();
                Some(OperatorNode::from_parts(Operator::Or, left, self.replacement.take()).into())
            }
            other => Some(other),
        }
    }
}

#[derive(Default)]
struct LeafCounter {
    leaves: usize,
}

impl TreeVisitor for LeafCounter {
    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        if matches!(node, Node::Operand(_)) {
            self.leaves += 1;
        }
        Some(node)
    }
}

#[test]
fn test_substitute_right_child_is_walked() {
    let replacement = parse("a3o9").unwrap();
    let mut counter = LeafCounter::default();
    let mut renderer = ToStringTreeVisitor::new();
    let mut swap = SwapRight {
        replacement: Some(replacement),
    };

    let result = traverse(
        parse("a1c23s1d5o5a2c23s1d6o5l0").unwrap(),
        &mut (&mut swap).chain(&mut counter).chain(&mut renderer),
    );

    assert_eq!(renderer.render(), "(_1_ = 5 OR _3_ IS NOT NULL)");
    assert_eq!(result.map(|n| n.to_string()).as_deref(), Some("(_1_ = 5 OR _3_ IS NOT NULL)"));
    // _1_ and 5 from the kept left side, _3_ from the substitute.
    assert_eq!(counter.leaves, 3);
}

/// Uppercases every text constant on the way out.
struct Uppercase;

impl TreeVisitor for Uppercase {
    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        match node {
            Node::Operand(Operand::Scalar(scalar)) if scalar.data_type() == DataType::Text => {
                Some(Operand::scalar(DataType::Text, scalar.value().to_uppercase()).into())
            }
            other => Some(other),
        }
    }
}

#[test]
fn test_post_order_rewrite_rebuilds_parents() {
    let result = traverse(parse("a0c25s3dfooo5a1c25s3dbaro6l1").unwrap(), &mut Uppercase);
    assert_eq!(
        result.map(|n| n.to_string()).as_deref(),
        Some("(_0_ = FOO OR _1_ <> BAR)")
    );
}

#[test]
fn test_deleted_child_leaves_slot_empty() {
    struct DropLeaf;
    impl TreeVisitor for DropLeaf {
        fn after(&mut self, node: Node, depth: usize) -> Option<Node> {
            (depth == 0 || !matches!(node, Node::Operand(_))).then_some(node)
        }
    }

    let result = traverse(parse("a1c23s1d5o5").unwrap(), &mut DropLeaf).unwrap();
    assert_eq!(result.as_operator().map(OperatorNode::child_count), Some(0));
}
