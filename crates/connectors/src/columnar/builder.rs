use super::predicate::{Literal, RecordPredicate};
use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use filter_syntax::{
    BuildError, ColumnDescriptor, DataType, Node, Operand, Operator, OperatorNode, TreeVisitor,
};
use std::str::FromStr;
use tracing::warn;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Folds a pruned tree into a [`RecordPredicate`].
pub struct RecordFilterBuilder<'a> {
    columns: &'a [ColumnDescriptor],
    stack: Vec<RecordPredicate>,
    error: Option<BuildError>,
}

impl<'a> RecordFilterBuilder<'a> {
    pub fn new(columns: &'a [ColumnDescriptor]) -> Self {
        Self {
            columns,
            stack: Vec::new(),
            error: None,
        }
    }

    /// `Ok(None)` when the traversal produced no predicate.
    pub fn build(mut self) -> Result<Option<RecordPredicate>, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.stack.len() > 1 {
            return Err(BuildError::UnbalancedStack);
        }
        Ok(self.stack.pop())
    }

    fn comparison(&self, node: &OperatorNode) -> Result<RecordPredicate, BuildError> {
        let operator = node.operator();
        let index = node
            .column_index_operand()
            .ok_or(BuildError::MissingColumnOperand(operator))?
            .index();
        let column = self
            .columns
            .get(index)
            .ok_or(BuildError::UnknownColumn(index))?;
        let name = column.name.clone();
        let data_type = column.data_type();

        match operator {
            Operator::IsNull => return Ok(RecordPredicate::IsNull(name)),
            Operator::IsNotNull => return Ok(RecordPredicate::IsNotNull(name)),
            Operator::Like => return Err(BuildError::OperatorNotSupported(operator)),
            _ => {}
        }

        if data_type == DataType::Boolean
            && !matches!(operator, Operator::Equals | Operator::NotEquals | Operator::In)
        {
            return Err(BuildError::UnsupportedOperator {
                operator,
                data_type,
            });
        }

        let values: Vec<&str> = match node.value_operand() {
            Some(Operand::Scalar(scalar)) => vec![scalar.value()],
            Some(Operand::List(list)) if operator == Operator::In => {
                list.values().iter().map(String::as_str).collect()
            }
            Some(Operand::List(list)) => {
                return Err(BuildError::UnsupportedOperator {
                    operator,
                    data_type: list.data_type(),
                });
            }
            _ => return Err(BuildError::MissingValueOperand(operator)),
        };
        let mut literals = values
            .into_iter()
            .map(|value| decode_literal(data_type, value))
            .collect::<Result<Vec<_>, _>>()?;

        if operator == Operator::In {
            return Ok(RecordPredicate::In(name, literals));
        }
        let literal = literals
            .pop()
            .ok_or(BuildError::MissingValueOperand(operator))?;
        Ok(match operator {
            Operator::LessThan => RecordPredicate::Lt(name, literal),
            Operator::LessThanOrEqual => RecordPredicate::LtEq(name, literal),
            Operator::GreaterThan => RecordPredicate::Gt(name, literal),
            Operator::GreaterThanOrEqual => RecordPredicate::GtEq(name, literal),
            Operator::Equals => RecordPredicate::Eq(name, literal),
            _ => RecordPredicate::NotEq(name, literal),
        })
    }

    fn combine(&mut self, node: &OperatorNode) -> Result<RecordPredicate, BuildError> {
        let operator = node.operator();
        let arity = node.child_count();
        let expected = if operator == Operator::Not { 1 } else { 2 };
        if arity != expected || self.stack.len() < arity {
            return Err(BuildError::MissingLogicalOperands(operator));
        }

        let mut children = self.stack.split_off(self.stack.len() - arity).into_iter();
        match (operator, children.next(), children.next()) {
            (Operator::And, Some(left), Some(right)) => Ok(RecordPredicate::and(left, right)),
            (Operator::Or, Some(left), Some(right)) => Ok(RecordPredicate::or(left, right)),
            (Operator::Not, Some(child), None) => Ok(RecordPredicate::not(child)),
            _ => Err(BuildError::MissingLogicalOperands(operator)),
        }
    }
}

/// Decodes a raw constant by the type of the column it is compared with.
pub fn decode_literal(data_type: DataType, value: &str) -> Result<Literal, BuildError> {
    let invalid = || BuildError::InvalidLiteral {
        data_type,
        value: value.to_string(),
    };

    match data_type {
        DataType::Smallint | DataType::Integer => {
            value.parse().map(Literal::Int32).map_err(|_| invalid())
        }
        DataType::Bigint => value.parse().map(Literal::Int64).map_err(|_| invalid()),
        DataType::Real => value.parse().map(Literal::Float).map_err(|_| invalid()),
        DataType::Float8 => value.parse().map(Literal::Double).map_err(|_| invalid()),
        DataType::Boolean => match value.to_ascii_lowercase().as_str() {
            "true" | "t" => Ok(Literal::Boolean(true)),
            "false" | "f" => Ok(Literal::Boolean(false)),
            _ => Err(invalid()),
        },
        DataType::Text | DataType::Varchar | DataType::Bpchar => {
            Ok(Literal::Binary(value.to_string()))
        }
        DataType::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| Literal::Date(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE))
            .map_err(|_| invalid()),
        DataType::Numeric => BigDecimal::from_str(value)
            .map(Literal::Decimal)
            .map_err(|_| invalid()),
        other => Err(BuildError::UnsupportedColumnType(other)),
    }
}

impl TreeVisitor for RecordFilterBuilder<'_> {
    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        if self.error.is_some() {
            return Some(node);
        }
        if let Node::Operator(operator_node) = &node {
            let predicate = if operator_node.operator().is_logical() {
                self.combine(operator_node)
            } else {
                self.comparison(operator_node)
            };
            match predicate {
                Ok(predicate) => self.stack.push(predicate),
                Err(err) => {
                    warn!(node = %operator_node, "Cannot build record predicate: {err}");
                    self.error = Some(err);
                }
            }
        }
        Some(node)
    }
}
