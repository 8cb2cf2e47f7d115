use super::{
    operand::{ColumnIndexOperand, Operand},
    operator::Operator,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Operand(Operand),
    Operator(OperatorNode),
}

impl Node {
    pub fn as_operator(&self) -> Option<&OperatorNode> {
        match self {
            Node::Operator(operator_node) => Some(operator_node),
            Node::Operand(_) => None,
        }
    }

    pub fn as_operand(&self) -> Option<&Operand> {
        match self {
            Node::Operand(operand) => Some(operand),
            Node::Operator(_) => None,
        }
    }

    /// Number of nodes in the tree rooted here.
    pub fn size(&self) -> usize {
        match self {
            Node::Operand(_) => 1,
            Node::Operator(operator_node) => {
                1 + operator_node.children().map(Node::size).sum::<usize>()
            }
        }
    }
}

impl From<Operand> for Node {
    fn from(operand: Operand) -> Self {
        Node::Operand(operand)
    }
}

impl From<OperatorNode> for Node {
    fn from(operator_node: OperatorNode) -> Self {
        Node::Operator(operator_node)
    }
}

/// An operator applied to one (unary) or two (binary) child nodes.
///
/// Nodes seen mid-traversal may have lost children to a pruning visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorNode {
    operator: Operator,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<Box<Node>>,
}

impl OperatorNode {
    pub fn binary(operator: Operator, left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self::from_parts(operator, Some(left.into()), Some(right.into()))
    }

    pub fn unary(operator: Operator, operand: impl Into<Node>) -> Self {
        Self::from_parts(operator, Some(operand.into()), None)
    }

    pub fn from_parts(operator: Operator, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            operator,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn into_parts(self) -> (Operator, Option<Node>, Option<Node>) {
        (
            self.operator,
            self.left.map(|left| *left),
            self.right.map(|right| *right),
        )
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.left().into_iter().chain(self.right())
    }

    pub fn child_count(&self) -> usize {
        self.children().count()
    }

    /// The column reference on either side, left first.
    pub fn column_index_operand(&self) -> Option<&ColumnIndexOperand> {
        self.children().find_map(|child| match child {
            Node::Operand(Operand::Column(column)) => Some(column),
            _ => None,
        })
    }

    /// The scalar or list on either side, left first.
    pub fn value_operand(&self) -> Option<&Operand> {
        self.children().find_map(|child| match child {
            Node::Operand(operand @ (Operand::Scalar(_) | Operand::List(_))) => Some(operand),
            _ => None,
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand(operand) => write!(f, "{operand}"),
            Node::Operator(operator_node) => write!(f, "{operator_node}"),
        }
    }
}

impl fmt::Display for OperatorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::And | Operator::Or => {
                let parts: Vec<String> = self.children().map(Node::to_string).collect();
                write!(f, "({})", parts.join(&format!(" {} ", self.operator)))
            }
            Operator::Not => {
                f.write_str("NOT (")?;
                if let Some(child) = self.left().or(self.right()) {
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
            _ => {
                let mut first = true;
                for child in self.children() {
                    if !first {
                        write!(f, " {} ", self.operator)?;
                    }
                    write!(f, "{child}")?;
                    first = false;
                }
                if self.right.is_none() {
                    write!(f, " {}", self.operator)?;
                }
                Ok(())
            }
        }
    }
}
