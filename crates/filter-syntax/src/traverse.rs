//! Depth-first traversal with pre-, in- and post-order hooks.

use crate::ast::{Node, OperatorNode};

/// Hooks called while walking a tree. Each hook may keep, replace or delete
/// (`None`) the node it is given.
pub trait TreeVisitor {
    fn before(&mut self, node: Node, _depth: usize) -> Option<Node> {
        Some(node)
    }

    fn visit(&mut self, node: Node, _depth: usize) -> Option<Node> {
        Some(node)
    }

    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        Some(node)
    }
}

impl<V: TreeVisitor + ?Sized> TreeVisitor for &mut V {
    fn before(&mut self, node: Node, depth: usize) -> Option<Node> {
        (**self).before(node, depth)
    }

    fn visit(&mut self, node: Node, depth: usize) -> Option<Node> {
        (**self).visit(node, depth)
    }

    fn after(&mut self, node: Node, depth: usize) -> Option<Node> {
        (**self).after(node, depth)
    }
}

/// Runs every visitor in order for each hook, stopping at the first deletion.
impl<'a> TreeVisitor for [&'a mut dyn TreeVisitor] {
    fn before(&mut self, node: Node, depth: usize) -> Option<Node> {
        self.iter_mut()
            .try_fold(node, |node, visitor| visitor.before(node, depth))
    }

    fn visit(&mut self, node: Node, depth: usize) -> Option<Node> {
        self.iter_mut()
            .try_fold(node, |node, visitor| visitor.visit(node, depth))
    }

    fn after(&mut self, node: Node, depth: usize) -> Option<Node> {
        self.iter_mut()
            .try_fold(node, |node, visitor| visitor.after(node, depth))
    }
}

/// `first` then `second` for every hook.
#[derive(Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: TreeVisitor, B: TreeVisitor> TreeVisitor for Chain<A, B> {
    fn before(&mut self, node: Node, depth: usize) -> Option<Node> {
        let node = self.first.before(node, depth)?;
        self.second.before(node, depth)
    }

    fn visit(&mut self, node: Node, depth: usize) -> Option<Node> {
        let node = self.first.visit(node, depth)?;
        self.second.visit(node, depth)
    }

    fn after(&mut self, node: Node, depth: usize) -> Option<Node> {
        let node = self.first.after(node, depth)?;
        self.second.after(node, depth)
    }
}

pub trait TreeVisitorExt: TreeVisitor + Sized {
    fn chain<B: TreeVisitor>(self, next: B) -> Chain<Self, B> {
        Chain::new(self, next)
    }
}

impl<V: TreeVisitor> TreeVisitorExt for V {}

/// Walks `root`: `before`, left subtree, `visit`, right subtree of whatever
/// `visit` returned, then `after`. Returns the (possibly rewritten) root, or
/// `None` when the root itself was deleted.
pub fn traverse<V: TreeVisitor + ?Sized>(root: Node, visitor: &mut V) -> Option<Node> {
    walk(root, 0, visitor)
}

fn walk<V: TreeVisitor + ?Sized>(node: Node, depth: usize, visitor: &mut V) -> Option<Node> {
    let node = visitor.before(node, depth)?;

    let node = match node {
        Node::Operator(operator_node) => {
            let (operator, left, right) = operator_node.into_parts();
            let left = left.and_then(|left| walk(left, depth + 1, visitor));
            Node::Operator(OperatorNode::from_parts(operator, left, right))
        }
        operand => operand,
    };

    let node = match visitor.visit(node, depth)? {
        Node::Operator(operator_node) => {
            let (operator, left, right) = operator_node.into_parts();
            let right = right.and_then(|right| walk(right, depth + 1, visitor));
            Node::Operator(OperatorNode::from_parts(operator, left, right))
        }
        operand => operand,
    };

    visitor.after(node, depth)
}
