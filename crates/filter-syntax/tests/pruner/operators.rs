use filter_syntax::{Operator, OperatorSet};

use crate::helpers::prune_operators;

const NESTED: &str = "a1c25s6dfoobaro5a2c23s3d999o6l0a1c25s6dfoobaro5a3c20s3d999o6l1l0";

fn set(operators: &[Operator]) -> OperatorSet {
    operators.iter().copied().collect()
}

#[test]
fn test_everything_supported() {
    assert_eq!(
        prune_operators(NESTED, OperatorSet::all()),
        "((_1_ = foobar AND _2_ <> 999) AND (_1_ = foobar OR _3_ <> 999))"
    );
}

#[test]
fn test_or_unsupported() {
    let ops = set(&[Operator::Equals, Operator::NotEquals, Operator::And]);
    assert_eq!(prune_operators(NESTED, ops), "(_1_ = foobar AND _2_ <> 999)");
}

#[test]
fn test_and_unsupported() {
    let ops = set(&[Operator::Equals, Operator::NotEquals, Operator::Or]);
    assert_eq!(prune_operators(NESTED, ops), "");
}

#[test]
fn test_not_equals_unsupported() {
    let ops = set(&[Operator::Equals, Operator::And, Operator::Or]);
    assert_eq!(prune_operators(NESTED, ops), "_1_ = foobar");
}

#[test]
fn test_equals_unsupported() {
    let ops = set(&[Operator::NotEquals, Operator::And, Operator::Or]);
    assert_eq!(prune_operators(NESTED, ops), "_2_ <> 999");
}

#[test]
fn test_nothing_supported() {
    assert_eq!(prune_operators(NESTED, OperatorSet::empty()), "");
}

#[test]
fn test_or_under_and() {
    let ops = set(&[Operator::GreaterThan, Operator::And]);
    assert_eq!(
        prune_operators(
            "a1c25s10d2008-02-01o2a1c25s10d2008-12-01o1l1a2c20s4d1200o2l0",
            ops
        ),
        "_2_ > 1200"
    );
    assert_eq!(
        prune_operators(
            "a1c25s10d2008-02-01o2a1c25s10d2008-12-01o1l0a2c20s4d1200o2l0",
            ops
        ),
        "(_1_ > 2008-02-01 AND _2_ > 1200)"
    );
}

#[test]
fn test_not_unsupported_under_or() {
    let ops = set(&[Operator::Equals, Operator::Or]);
    assert_eq!(prune_operators("a3c23s1d4o5l2a2c25s3ds_9o5l2l1", ops), "");
}

#[test]
fn test_null_checks_and_in() {
    let ops = OperatorSet::null_checks() | OperatorSet::AND;
    assert_eq!(
        prune_operators("a1o8a2m1007s1d1s1d2o10l0", ops),
        "_1_ IS NULL"
    );
    assert_eq!(
        prune_operators("a1o8a2m1007s1d1s1d2o10l0", OperatorSet::IN | OperatorSet::AND),
        "_2_ IN (1,2)"
    );
}
