use crate::{ast::Operator, types::DataType};
use thiserror::Error;

/// A malformed filter string.
///
/// `Display` renders the bare message; use [`FilterSyntaxError::with_context`]
/// when the offending filter string should be logged alongside it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FilterSyntaxError {
    message: String,
    index: Option<usize>,
    filter: String,
}

impl FilterSyntaxError {
    pub fn new(message: impl Into<String>, index: Option<usize>, filter: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            index,
            filter: filter.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset the error was detected at, when the message carries one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn with_context(&self) -> String {
        format!("{} (filter string: '{}')", self.message, self.filter)
    }
}

/// Raised by a builder folding a tree (or a parse) into a backend filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("operator {0} does not contain a column index operand")]
    MissingColumnOperand(Operator),

    #[error("operator {0} does not contain a value operand")]
    MissingValueOperand(Operator),

    #[error("column index {0} does not exist in the table definition")]
    UnknownColumn(usize),

    #[error("unsupported column type for filtering {0}")]
    UnsupportedColumnType(DataType),

    #[error("operator {0} is not supported by this backend")]
    OperatorNotSupported(Operator),

    #[error("operator {operator} is not supported for {data_type} columns")]
    UnsupportedOperator {
        operator: Operator,
        data_type: DataType,
    },

    #[error("invalid {data_type} literal '{value}'")]
    InvalidLiteral { data_type: DataType, value: String },

    #[error("unable to process logical operator {0}: missing operands")]
    MissingLogicalOperands(Operator),

    #[error("filter stack is not empty after visiting all nodes")]
    UnbalancedStack,
}

/// Failure of an inline-reduction parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Syntax(#[from] FilterSyntaxError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
