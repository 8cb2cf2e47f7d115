use filter_syntax::{
    ColumnResolver, DataType, Node, Operand, Operator, OperatorNode, TreeVisitor,
};
use tracing::trace;

/// Widens comparisons against fixed-width `bpchar(n)` columns.
///
/// Stored values may be space padded to the declared width or right trimmed,
/// while the constant may be either. A comparison is expanded to also test the
/// padded and/or trimmed form of the constant:
///
/// ```text
/// c = 'a '   =>   ((c = 'a ' OR c = 'a  ') OR c = 'a')     -- bpchar(3)
/// c <> 'a '  =>   ((c <> 'a ' AND c <> 'a  ') AND c <> 'a')
/// ```
pub struct BpcharTransformer<'a> {
    columns: &'a dyn ColumnResolver,
}

impl<'a> BpcharTransformer<'a> {
    pub fn new(columns: &'a dyn ColumnResolver) -> Self {
        Self { columns }
    }

    fn expand(&self, node: OperatorNode) -> OperatorNode {
        let operator = node.operator();
        let (Some(Node::Operand(Operand::Column(column))), Some(Node::Operand(Operand::Scalar(scalar)))) =
            (node.left(), node.right())
        else {
            return node;
        };
        let column = *column;
        if operator.is_logical() || scalar.data_type() != DataType::Bpchar {
            return node;
        }

        let value = scalar.value();
        let length = value.chars().count();
        let width = self
            .columns
            .column(column.index())
            .and_then(|descriptor| descriptor.char_width());
        let padded = width
            .filter(|width| length < *width)
            .map(|width| format!("{value}{}", " ".repeat(width - length)));
        let trimmed = value
            .ends_with(' ')
            .then(|| value.trim_end_matches(' ').to_string());

        if padded.is_none() && trimmed.is_none() {
            return node;
        }

        let join = if operator == Operator::NotEquals {
            Operator::And
        } else {
            Operator::Or
        };
        let column = Operand::Column(column);
        trace!(value, ?width, "Expanding bpchar comparison");

        [padded, trimmed]
            .into_iter()
            .flatten()
            .fold(node, |expanded, variant| {
                let copy = OperatorNode::binary(
                    operator,
                    column.clone(),
                    Operand::scalar(DataType::Bpchar, variant),
                );
                OperatorNode::binary(join, expanded, copy)
            })
    }
}

impl TreeVisitor for BpcharTransformer<'_> {
    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        match node {
            Node::Operator(operator_node) => Some(Node::Operator(self.expand(operator_node))),
            operand => Some(operand),
        }
    }
}
