use filter_syntax::{Node, TreeVisitor, TreeVisitorExt, parse, traverse};

#[derive(Default)]
struct Trace {
    events: Vec<String>,
}

impl Trace {
    fn record(&mut self, hook: &str, node: &Node, depth: usize) {
        let label = match node {
            Node::Operator(operator_node) => operator_node.operator().name().to_string(),
            Node::Operand(operand) => operand.to_string(),
        };
        self.events.push(format!("{hook}:{label}:{depth}"));
    }
}

impl TreeVisitor for Trace {
    fn before(&mut self, node: Node, depth: usize) -> Option<Node> {
        self.record("before", &node, depth);
        Some(node)
    }

    fn visit(&mut self, node: Node, depth: usize) -> Option<Node> {
        self.record("visit", &node, depth);
        Some(node)
    }

    fn after(&mut self, node: Node, depth: usize) -> Option<Node> {
        self.record("after", &node, depth);
        Some(node)
    }
}

#[test]
fn test_in_order_walk_of_logical_tree() {
    let mut trace = Trace::default();
    traverse(parse("a1o8a2o9l1").unwrap(), &mut trace);

    assert_eq!(
        trace.events,
        [
            "before:OR:0",
            "before:IS_NULL:1",
            "before:_1_:2",
            "visit:_1_:2",
            "after:_1_:2",
            "visit:IS_NULL:1",
            "after:IS_NULL:1",
            "visit:OR:0",
            "before:IS_NOT_NULL:1",
            "before:_2_:2",
            "visit:_2_:2",
            "after:_2_:2",
            "visit:IS_NOT_NULL:1",
            "after:IS_NOT_NULL:1",
            "after:OR:0",
        ]
    );
}

#[test]
fn test_chained_visitors_see_every_hook() {
    let mut first = Trace::default();
    let mut second = Trace::default();
    let root = parse("a1c23s1d5o5a2c23s1d6o5l0").unwrap();
    let result = traverse(root.clone(), &mut (&mut first).chain(&mut second));

    assert_eq!(result, Some(root));
    assert_eq!(first.events, second.events);
    assert_eq!(first.events.len(), 21);
}

#[test]
fn test_before_deletion_skips_subtree() {
    struct DropNot;
    impl TreeVisitor for DropNot {
        fn before(&mut self, node: Node, _depth: usize) -> Option<Node> {
            match &node {
                Node::Operator(n) if n.operator().name() == "NOT" => None,
                _ => Some(node),
            }
        }
    }

    let mut trace = Trace::default();
    let result = traverse(
        parse("a1c23s1d0o5l2a2o8l0").unwrap(),
        &mut DropNot.chain(&mut trace),
    );

    assert!(!trace.events.iter().any(|event| event.contains("EQUALS")));
    assert_eq!(result.map(|n| n.to_string()), Some("(_2_ IS NULL)".to_string()));
}
