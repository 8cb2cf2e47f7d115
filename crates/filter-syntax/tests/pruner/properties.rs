use filter_syntax::{Node, Operator, OperatorNode, OperatorSet, parse, prune};

const FILTERS: [&str; 5] = [
    "a1c25s6dfoobaro5a2c23s3d999o6l0a1c25s6dfoobaro5a3c20s3d999o6l1l0",
    "a1c25s10d2008-02-01o2a1c25s10d2008-12-01o1l1a2c20s4d1200o2l0",
    "a3c23s1d4o5l2a2c25s3ds_9o5l2l1",
    "a1o8a2m1007s1d1s1d2o10l0",
    "a1c25s5dfirsto5a2c20s1d2o2l0l2",
];

fn operator_sets() -> Vec<OperatorSet> {
    vec![
        OperatorSet::all(),
        OperatorSet::empty(),
        OperatorSet::comparisons() | OperatorSet::AND,
        OperatorSet::EQUALS | OperatorSet::OR | OperatorSet::NOT,
        OperatorSet::GREATER_THAN | OperatorSet::AND,
        OperatorSet::null_checks() | OperatorSet::logical(),
    ]
}

fn operators_in(node: &Node, found: &mut Vec<Operator>) {
    if let Node::Operator(operator_node) = node {
        found.push(operator_node.operator());
        operator_node.children().for_each(|child| operators_in(child, found));
    }
}

#[test]
fn test_pruning_is_idempotent() {
    for filter in FILTERS {
        for ops in operator_sets() {
            let once = prune(parse(filter).unwrap(), ops, None);
            let twice = once.clone().and_then(|node| prune(node, ops, None));
            assert_eq!(once, twice, "filter '{filter}' with {ops}");
        }
    }
}

#[test]
fn test_result_only_uses_supported_operators() {
    for filter in FILTERS {
        for ops in operator_sets() {
            if let Some(node) = prune(parse(filter).unwrap(), ops, None) {
                let mut found = Vec::new();
                operators_in(&node, &mut found);
                assert!(
                    found.iter().all(|operator| ops.contains_operator(*operator)),
                    "filter '{filter}' with {ops} kept {found:?}"
                );
            }
        }
    }
}

#[test]
fn test_and_with_unsupported_side_equals_supported_side() {
    let x = parse("a1c23s1d5o5").unwrap();
    let y = parse("a2c25s1dzo7").unwrap();
    let ops = OperatorSet::EQUALS | OperatorSet::AND;
    let both = Node::from(OperatorNode::binary(Operator::And, x.clone(), y));
    assert_eq!(prune(both, ops, None), prune(x, ops, None));
}

#[test]
fn test_or_with_unsupported_side_is_dropped() {
    let x = parse("a1c23s1d5o5").unwrap();
    let y = parse("a2c25s1dzo7").unwrap();
    let ops = OperatorSet::EQUALS | OperatorSet::OR;
    let either = Node::from(OperatorNode::binary(Operator::Or, x, y));
    assert_eq!(prune(either, ops, None), None);
}
