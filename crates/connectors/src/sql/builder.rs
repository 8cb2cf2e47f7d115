use super::{SqlFilter, condition::Condition, dialect::SqlDialect, expr::SqlFilterExpr};
use bigdecimal::BigDecimal;
use filter_syntax::{
    BuildError, ColumnDescriptor, DataType, Node, Operand, Operator, OperatorNode, TreeVisitor,
};
use std::str::FromStr;
use tracing::warn;

/// Folds a pruned tree into a SQL `WHERE` expression.
///
/// Values are serialized by the type of the column they are compared with,
/// not by the type tag of the constant.
pub struct SqlPredicateBuilder<'a> {
    dialect: SqlDialect,
    quote: String,
    columns: &'a [ColumnDescriptor],
    stack: Vec<SqlFilterExpr>,
    error: Option<BuildError>,
}

impl<'a> SqlPredicateBuilder<'a> {
    pub fn new(dialect: SqlDialect, columns: &'a [ColumnDescriptor]) -> Self {
        Self {
            dialect,
            quote: String::new(),
            columns,
            stack: Vec::new(),
            error: None,
        }
    }

    /// Identifier quote, e.g. `"` for Postgres or `` ` `` for MySQL.
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    pub fn build(mut self) -> Result<SqlFilter, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        match self.stack.len() {
            0 => Ok(SqlFilter::new()),
            1 => Ok(self
                .stack
                .pop()
                .map(SqlFilter::with_expr)
                .unwrap_or_default()),
            _ => Err(BuildError::UnbalancedStack),
        }
    }

    fn condition(&self, node: &OperatorNode) -> Result<Condition, BuildError> {
        let operator = node.operator();
        let index = node
            .column_index_operand()
            .ok_or(BuildError::MissingColumnOperand(operator))?
            .index();
        let column = self
            .columns
            .get(index)
            .ok_or(BuildError::UnknownColumn(index))?;
        let name = format!("{quote}{}{quote}", column.name, quote = self.quote);
        let data_type = column.data_type();

        if matches!(operator, Operator::IsNull | Operator::IsNotNull) {
            return Ok(Condition::unary(name, operator.to_string()));
        }

        let value = match node.value_operand() {
            Some(Operand::Scalar(scalar)) if operator == Operator::In => {
                format!("({})", self.serialize_value(data_type, scalar.value())?)
            }
            Some(Operand::Scalar(scalar)) => self.serialize_value(data_type, scalar.value())?,
            Some(Operand::List(list)) if operator == Operator::In => {
                let values = list
                    .values()
                    .iter()
                    .map(|value| self.serialize_value(data_type, value))
                    .collect::<Result<Vec<_>, _>>()?;
                format!("({})", values.join(","))
            }
            Some(Operand::List(list)) => {
                return Err(BuildError::UnsupportedOperator {
                    operator,
                    data_type: list.data_type(),
                });
            }
            _ => return Err(BuildError::MissingValueOperand(operator)),
        };
        Ok(Condition::new(name, operator.to_string(), value))
    }

    fn combine(&mut self, node: &OperatorNode) -> Result<SqlFilterExpr, BuildError> {
        let operator = node.operator();
        let arity = node.child_count();
        if arity == 0 || self.stack.len() < arity {
            return Err(BuildError::MissingLogicalOperands(operator));
        }

        let mut children = self.stack.split_off(self.stack.len() - arity);
        match operator {
            Operator::And => Ok(SqlFilterExpr::and(children)),
            Operator::Or => Ok(SqlFilterExpr::or(children)),
            _ => match (children.pop(), children.is_empty()) {
                (Some(child), true) => Ok(SqlFilterExpr::not(child)),
                _ => Err(BuildError::MissingLogicalOperands(operator)),
            },
        }
    }

    fn serialize_value(&self, data_type: DataType, value: &str) -> Result<String, BuildError> {
        let valid = match data_type {
            DataType::Smallint | DataType::Integer | DataType::Bigint => {
                value.parse::<i64>().is_ok()
            }
            DataType::Real | DataType::Float8 => {
                value.parse::<f64>().is_ok_and(|number| number.is_finite())
            }
            DataType::Numeric => BigDecimal::from_str(value).is_ok(),
            DataType::Boolean => {
                ["true", "false", "t", "f"].contains(&value.to_ascii_lowercase().as_str())
            }
            DataType::Text | DataType::Varchar | DataType::Bpchar => {
                return Ok(format!("'{}'", escape(value)));
            }
            DataType::Date => return Ok(self.dialect.wrap_date(&escape(value))),
            DataType::Timestamp => return Ok(self.dialect.wrap_timestamp(&escape(value))),
            other => return Err(BuildError::UnsupportedColumnType(other)),
        };

        if !valid {
            return Err(BuildError::InvalidLiteral {
                data_type,
                value: value.to_string(),
            });
        }
        Ok(value.to_string())
    }
}

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

impl TreeVisitor for SqlPredicateBuilder<'_> {
    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        if self.error.is_some() {
            return Some(node);
        }
        if let Node::Operator(operator_node) = &node {
            let expr = if operator_node.operator().is_logical() {
                self.combine(operator_node)
            } else {
                self.condition(operator_node).map(SqlFilterExpr::leaf)
            };
            match expr {
                Ok(expr) => self.stack.push(expr),
                Err(err) => {
                    warn!(node = %operator_node, "Cannot express filter node in SQL: {err}");
                    self.error = Some(err);
                }
            }
        }
        Some(node)
    }
}
