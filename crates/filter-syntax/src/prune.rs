use crate::{
    ast::{Node, Operator, OperatorNode, OperatorSet},
    column::ColumnResolver,
    traverse::{TreeVisitor, traverse},
    types::DataType,
};
use std::collections::HashSet;
use tracing::debug;

/// Removes the parts of a tree a backend cannot evaluate.
///
/// Unsupported operators, and (when type checking is enabled) comparisons on
/// columns of unsupported types, are deleted in `visit`. Logical parents are
/// re-linked in `after`:
///
/// * `AND` with one child left is replaced by that child
/// * `OR` with fewer than two children is deleted
/// * `AND`/`NOT` with no children are deleted
///
/// Pruning under `NOT` narrows the result: `NOT (a AND b)` with `b` pruned
/// becomes `NOT a`, which can reject rows the full filter would accept.
pub struct CapabilityPruner<'a> {
    operators: OperatorSet,
    types: Option<TypeSupport<'a>>,
}

struct TypeSupport<'a> {
    columns: &'a dyn ColumnResolver,
    supported: HashSet<DataType>,
}

impl<'a> CapabilityPruner<'a> {
    pub fn new(operators: OperatorSet) -> Self {
        Self {
            operators,
            types: None,
        }
    }

    pub fn with_supported_types(
        mut self,
        columns: &'a dyn ColumnResolver,
        types: impl IntoIterator<Item = DataType>,
    ) -> Self {
        self.types = Some(TypeSupport {
            columns,
            supported: types.into_iter().collect(),
        });
        self
    }

    fn rejection(&self, node: &OperatorNode) -> Option<String> {
        let operator = node.operator();
        if !self.operators.contains_operator(operator) {
            return Some("operator not supported".to_string());
        }
        if operator.is_logical() {
            return None;
        }

        let types = self.types.as_ref()?;
        let Some(column) = node.column_index_operand() else {
            return Some("no column operand".to_string());
        };
        match types.columns.column_type(column.index()) {
            None => Some(format!("column {} not found", column.index())),
            Some(data_type) if !types.supported.contains(&data_type) => {
                Some(format!("column type {data_type} not supported"))
            }
            Some(_) => None,
        }
    }
}

impl TreeVisitor for CapabilityPruner<'_> {
    fn visit(&mut self, node: Node, _depth: usize) -> Option<Node> {
        if let Node::Operator(operator_node) = &node {
            if let Some(reason) = self.rejection(operator_node) {
                debug!(operator = operator_node.operator().name(), reason = %reason, "Pruning filter node");
                return None;
            }
        }
        Some(node)
    }

    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        let Node::Operator(operator_node) = node else {
            return Some(node);
        };

        let operator = operator_node.operator();
        match (operator, operator_node.child_count()) {
            (Operator::And, 1) => {
                let (_, left, right) = operator_node.into_parts();
                debug!("Promoting the remaining child of a pruned AND");
                left.or(right)
            }
            (Operator::Or, 0 | 1) => {
                debug!(operator = operator.name(), "Pruning OR with a missing branch");
                None
            }
            (Operator::And | Operator::Not, 0) => {
                debug!(operator = operator.name(), "Pruning logical node with no children");
                None
            }
            _ => Some(Node::Operator(operator_node)),
        }
    }
}

/// Prunes `root` in one traversal. `None` means nothing can be pushed down.
pub fn prune(
    root: Node,
    operators: OperatorSet,
    types: Option<(&dyn ColumnResolver, &HashSet<DataType>)>,
) -> Option<Node> {
    let mut pruner = CapabilityPruner::new(operators);
    if let Some((columns, supported)) = types {
        pruner = pruner.with_supported_types(columns, supported.iter().copied());
    }
    traverse(root, &mut pruner)
}
