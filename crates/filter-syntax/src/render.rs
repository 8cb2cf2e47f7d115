use crate::{ast::Node, traverse::TreeVisitor};

/// Captures the debug rendering of the tree as it leaves the traversal.
///
/// Only the root (depth 0) is rendered, so it can be chained after visitors
/// that rewrite the tree.
#[derive(Debug, Default)]
pub struct ToStringTreeVisitor {
    rendered: String,
}

impl ToStringTreeVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty when the root was deleted or never visited.
    pub fn render(&self) -> &str {
        &self.rendered
    }

    pub fn reset(&mut self) {
        self.rendered.clear();
    }
}

impl TreeVisitor for ToStringTreeVisitor {
    fn after(&mut self, node: Node, depth: usize) -> Option<Node> {
        if depth == 0 {
            self.rendered = node.to_string();
        }
        Some(node)
    }
}
