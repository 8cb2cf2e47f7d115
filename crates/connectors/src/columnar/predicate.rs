use bigdecimal::BigDecimal;
use std::fmt;

/// Typed constant of a record predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Binary(String),
    /// Days since 1970-01-01.
    Date(i32),
    Decimal(BigDecimal),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int32(value) => write!(f, "{value}"),
            Literal::Int64(value) => write!(f, "{value}"),
            Literal::Float(value) => write!(f, "{value:?}"),
            Literal::Double(value) => write!(f, "{value:?}"),
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Binary(value) => write!(f, "{value:?}"),
            Literal::Date(days) => write!(f, "date({days})"),
            Literal::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// Predicate evaluated against record batches or row groups.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordPredicate {
    Eq(String, Literal),
    NotEq(String, Literal),
    Lt(String, Literal),
    LtEq(String, Literal),
    Gt(String, Literal),
    GtEq(String, Literal),
    IsNull(String),
    IsNotNull(String),
    In(String, Vec<Literal>),
    And(Box<RecordPredicate>, Box<RecordPredicate>),
    Or(Box<RecordPredicate>, Box<RecordPredicate>),
    Not(Box<RecordPredicate>),
}

impl RecordPredicate {
    pub fn and(left: RecordPredicate, right: RecordPredicate) -> Self {
        RecordPredicate::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: RecordPredicate, right: RecordPredicate) -> Self {
        RecordPredicate::Or(Box::new(left), Box::new(right))
    }

    pub fn not(predicate: RecordPredicate) -> Self {
        RecordPredicate::Not(Box::new(predicate))
    }

    /// Column names referenced by the predicate, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        self.collect_columns(&mut columns);
        columns
    }

    fn collect_columns<'a>(&'a self, columns: &mut Vec<&'a str>) {
        match self {
            RecordPredicate::Eq(column, _)
            | RecordPredicate::NotEq(column, _)
            | RecordPredicate::Lt(column, _)
            | RecordPredicate::LtEq(column, _)
            | RecordPredicate::Gt(column, _)
            | RecordPredicate::GtEq(column, _)
            | RecordPredicate::IsNull(column)
            | RecordPredicate::IsNotNull(column)
            | RecordPredicate::In(column, _) => {
                if !columns.contains(&column.as_str()) {
                    columns.push(column);
                }
            }
            RecordPredicate::And(left, right) | RecordPredicate::Or(left, right) => {
                left.collect_columns(columns);
                right.collect_columns(columns);
            }
            RecordPredicate::Not(predicate) => predicate.collect_columns(columns),
        }
    }
}

impl fmt::Display for RecordPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordPredicate::Eq(column, value) => write!(f, "eq({column}, {value})"),
            RecordPredicate::NotEq(column, value) => write!(f, "noteq({column}, {value})"),
            RecordPredicate::Lt(column, value) => write!(f, "lt({column}, {value})"),
            RecordPredicate::LtEq(column, value) => write!(f, "lteq({column}, {value})"),
            RecordPredicate::Gt(column, value) => write!(f, "gt({column}, {value})"),
            RecordPredicate::GtEq(column, value) => write!(f, "gteq({column}, {value})"),
            RecordPredicate::IsNull(column) => write!(f, "isnull({column})"),
            RecordPredicate::IsNotNull(column) => write!(f, "isnotnull({column})"),
            RecordPredicate::In(column, values) => {
                let values = values.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "in({column}, [{}])", values.join(", "))
            }
            RecordPredicate::And(left, right) => write!(f, "and({left}, {right})"),
            RecordPredicate::Or(left, right) => write!(f, "or({left}, {right})"),
            RecordPredicate::Not(predicate) => write!(f, "not({predicate})"),
        }
    }
}
