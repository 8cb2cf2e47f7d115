use crate::types::DataType;
use serde::Serialize;
use std::fmt;

/// Leaf of a filter tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operand {
    Column(ColumnIndexOperand),
    Scalar(ScalarOperand),
    List(CollectionOperand),
}

impl Operand {
    pub fn column(index: usize) -> Self {
        Operand::Column(ColumnIndexOperand { index })
    }

    pub fn scalar(data_type: DataType, value: impl Into<String>) -> Self {
        Operand::Scalar(ScalarOperand::new(data_type, value))
    }

    pub fn as_column(&self) -> Option<&ColumnIndexOperand> {
        match self {
            Operand::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Operand::Column(_))
    }
}

/// Zero-based reference to a column of the table being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnIndexOperand {
    index: usize,
}

impl ColumnIndexOperand {
    /// Returns `None` for a negative index.
    pub fn new(index: i32) -> Option<Self> {
        usize::try_from(index).ok().map(|index| Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarOperand {
    data_type: DataType,
    value: String,
}

impl ScalarOperand {
    pub fn new(data_type: DataType, value: impl Into<String>) -> Self {
        Self {
            data_type,
            value: value.into(),
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionOperand {
    data_type: DataType,
    values: Vec<String>,
}

impl CollectionOperand {
    /// Returns `None` unless `data_type` is an array type.
    pub fn new(data_type: DataType, values: Vec<String>) -> Option<Self> {
        data_type
            .is_array()
            .then_some(Self { data_type, values })
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Column(column) => write!(f, "_{}_", column.index),
            Operand::Scalar(scalar) => f.write_str(&scalar.value),
            Operand::List(list) => write!(f, "({})", list.values.join(",")),
        }
    }
}
