use super::{
    TupleDescription,
    filter::{CompareOp, Comparator, ListKind, ScanFilter, ScanPlan, ScanRange},
};
use filter_syntax::{BuildError, DataType, Node, Operand, Operator, OperatorNode, TreeVisitor};
use tracing::{debug, warn};

/// Folds a pruned tree into a [`ScanPlan`].
///
/// Comparisons on a textual row key also narrow the scanned row range, but
/// only when they are not nested under an `OR` (or `NOT`), since the range
/// must hold for every matching row.
pub struct ScanFilterBuilder<'a> {
    tuple: &'a TupleDescription,
    stack: Vec<ScanFilter>,
    range: ScanRange,
    disjunction_depth: usize,
    error: Option<BuildError>,
}

impl<'a> ScanFilterBuilder<'a> {
    pub fn new(tuple: &'a TupleDescription) -> Self {
        Self {
            tuple,
            stack: Vec::new(),
            range: ScanRange::default(),
            disjunction_depth: 0,
            error: None,
        }
    }

    pub fn build(mut self) -> Result<ScanPlan, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.stack.len() > 1 {
            return Err(BuildError::UnbalancedStack);
        }
        Ok(ScanPlan {
            filter: self.stack.pop(),
            range: self.range,
        })
    }

    fn comparison(&mut self, node: &OperatorNode) -> Result<ScanFilter, BuildError> {
        let operator = node.operator();
        let index = node
            .column_index_operand()
            .ok_or(BuildError::MissingColumnOperand(operator))?
            .index();
        let column = self
            .tuple
            .get(index)
            .ok_or(BuildError::UnknownColumn(index))?;

        if let Some(op) = null_check(operator) {
            return Ok(ScanFilter::SingleColumnValue {
                family: column.family.clone(),
                qualifier: column.qualifier.clone(),
                op,
                comparator: Comparator::Null,
            });
        }

        let op = compare_op(operator).ok_or(BuildError::OperatorNotSupported(operator))?;
        let Some(Operand::Scalar(scalar)) = node.value_operand() else {
            return Err(BuildError::MissingValueOperand(operator));
        };
        let comparator = comparator(column.data_type(), scalar.data_type(), scalar.value())?;

        if column.is_textual_row_key() && self.disjunction_depth == 0 {
            narrow_range(&mut self.range, operator, scalar.value().as_bytes());
        }

        if column.row_key {
            Ok(ScanFilter::RowKey { op, comparator })
        } else {
            Ok(ScanFilter::SingleColumnValue {
                family: column.family.clone(),
                qualifier: column.qualifier.clone(),
                op,
                comparator,
            })
        }
    }

    fn combine(&mut self, node: &OperatorNode) -> Result<ScanFilter, BuildError> {
        let operator = node.operator();
        let kind = match operator {
            Operator::And => ListKind::MustPassAll,
            Operator::Or => ListKind::MustPassOne,
            _ => return Err(BuildError::OperatorNotSupported(operator)),
        };
        let arity = node.child_count();
        if arity == 0 || self.stack.len() < arity {
            return Err(BuildError::MissingLogicalOperands(operator));
        }
        let filters = self.stack.split_off(self.stack.len() - arity);
        Ok(ScanFilter::List { kind, filters })
    }
}

fn opens_disjunction(node: &Node) -> bool {
    node.as_operator()
        .is_some_and(|operator_node| matches!(operator_node.operator(), Operator::Or | Operator::Not))
}

fn null_check(operator: Operator) -> Option<CompareOp> {
    match operator {
        Operator::IsNull => Some(CompareOp::Equal),
        Operator::IsNotNull => Some(CompareOp::NotEqual),
        _ => None,
    }
}

fn compare_op(operator: Operator) -> Option<CompareOp> {
    match operator {
        Operator::LessThan => Some(CompareOp::Less),
        Operator::LessThanOrEqual => Some(CompareOp::LessOrEqual),
        Operator::Equals => Some(CompareOp::Equal),
        Operator::NotEquals => Some(CompareOp::NotEqual),
        Operator::GreaterThanOrEqual => Some(CompareOp::GreaterOrEqual),
        Operator::GreaterThan => Some(CompareOp::Greater),
        _ => None,
    }
}

/// Picks the comparator from the column type. `BIGINT` and `REAL` columns
/// compare by the constant's own type so that `real_col > 1.5::float8`
/// is not truncated.
fn comparator(
    column_type: DataType,
    operand_type: DataType,
    value: &str,
) -> Result<Comparator, BuildError> {
    let invalid = |data_type| BuildError::InvalidLiteral {
        data_type,
        value: value.to_string(),
    };
    let integer = |data_type| value.parse().map(Comparator::Integer).map_err(|_| invalid(data_type));
    let float = |data_type| value.parse().map(Comparator::Float).map_err(|_| invalid(data_type));
    let double = |data_type| value.parse().map(Comparator::Double).map_err(|_| invalid(data_type));

    match column_type {
        DataType::Text => Ok(Comparator::Binary(value.as_bytes().to_vec())),
        DataType::Smallint | DataType::Integer => integer(column_type),
        DataType::Bigint | DataType::Real => match operand_type {
            DataType::Smallint | DataType::Integer | DataType::Bigint => integer(operand_type),
            DataType::Real => float(operand_type),
            DataType::Numeric | DataType::Float8 => double(operand_type),
            _ if column_type == DataType::Bigint => integer(column_type),
            _ => float(column_type),
        },
        DataType::Float8 => double(column_type),
        other => Err(BuildError::UnsupportedColumnType(other)),
    }
}

/// A trailing zero byte makes a start key exclusive and an end key inclusive.
fn narrow_range(range: &mut ScanRange, operator: Operator, key: &[u8]) {
    let with_zero = || [key, &[0u8]].concat();
    match operator {
        Operator::LessThan => range.set_end(key.to_vec()),
        Operator::GreaterThan => range.set_start(with_zero()),
        Operator::LessThanOrEqual => range.set_end(with_zero()),
        Operator::GreaterThanOrEqual => range.set_start(key.to_vec()),
        Operator::Equals => {
            range.set_start(key.to_vec());
            range.set_end(with_zero());
        }
        _ => return,
    }
    debug!(?operator, "Narrowed row key range");
}

impl TreeVisitor for ScanFilterBuilder<'_> {
    fn before(&mut self, node: Node, _depth: usize) -> Option<Node> {
        if opens_disjunction(&node) {
            self.disjunction_depth += 1;
        }
        Some(node)
    }

    fn after(&mut self, node: Node, _depth: usize) -> Option<Node> {
        if opens_disjunction(&node) {
            self.disjunction_depth = self.disjunction_depth.saturating_sub(1);
        }
        if self.error.is_some() {
            return Some(node);
        }
        if let Node::Operator(operator_node) = &node {
            let filter = if operator_node.operator().is_logical() {
                self.combine(operator_node)
            } else {
                self.comparison(operator_node)
            };
            match filter {
                Ok(filter) => self.stack.push(filter),
                Err(err) => {
                    warn!(node = %operator_node, "Cannot build scan filter: {err}");
                    self.error = Some(err);
                }
            }
        }
        Some(node)
    }
}
