use crate::{
    ast::{Node, Operand, Operator, OperatorNode},
    error::BuildError,
};

/// A stack entry handed to a [`FilterBuilder`]: either a raw operand or
/// something the builder produced for an earlier operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Term<T> {
    Operand(Operand),
    Built(T),
}

impl<T> Term<T> {
    pub fn is_column(&self) -> bool {
        matches!(self, Term::Operand(Operand::Column(_)))
    }

    pub fn as_operand(&self) -> Option<&Operand> {
        match self {
            Term::Operand(operand) => Some(operand),
            Term::Built(_) => None,
        }
    }

    pub fn into_built(self) -> Option<T> {
        match self {
            Term::Built(built) => Some(built),
            Term::Operand(_) => None,
        }
    }
}

impl Term<Node> {
    pub fn into_node(self) -> Node {
        match self {
            Term::Operand(operand) => Node::Operand(operand),
            Term::Built(node) => node,
        }
    }
}

/// Reduces operators as the parser meets them, without materialising a tree.
///
/// Binary operands arrive with the column on the left and directional
/// operators already inverted to match.
pub trait FilterBuilder {
    type Output;

    fn build_binary(
        &mut self,
        operator: Operator,
        left: Term<Self::Output>,
        right: Term<Self::Output>,
    ) -> Result<Self::Output, BuildError>;

    fn build_unary(
        &mut self,
        operator: Operator,
        operand: Term<Self::Output>,
    ) -> Result<Self::Output, BuildError>;
}

/// Builds the owned [`Node`] tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl FilterBuilder for TreeBuilder {
    type Output = Node;

    fn build_binary(
        &mut self,
        operator: Operator,
        left: Term<Node>,
        right: Term<Node>,
    ) -> Result<Node, BuildError> {
        Ok(OperatorNode::binary(operator, left.into_node(), right.into_node()).into())
    }

    fn build_unary(&mut self, operator: Operator, operand: Term<Node>) -> Result<Node, BuildError> {
        Ok(OperatorNode::unary(operator, operand.into_node()).into())
    }
}
