use crate::types::DataType;
use serde::{Deserialize, Serialize};

/// Describes one column of the table a filter is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub type_oid: i32,
    pub index: usize,
    #[serde(default)]
    pub type_name: String,
    #[serde(default)]
    pub type_modifiers: Vec<i32>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType, index: usize) -> Self {
        Self {
            name: name.into(),
            type_oid: data_type.oid(),
            index,
            type_name: data_type.name().to_lowercase(),
            type_modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Vec<i32>) -> Self {
        self.type_modifiers = modifiers;
        self
    }

    pub fn data_type(&self) -> DataType {
        DataType::from_oid_or_unsupported(self.type_oid)
    }

    /// Declared width of a `bpchar(n)` column.
    pub fn char_width(&self) -> Option<usize> {
        if self.data_type() != DataType::Bpchar {
            return None;
        }
        self.type_modifiers
            .first()
            .and_then(|width| usize::try_from(*width).ok())
    }
}

/// Looks up column metadata by the index carried in a filter string.
pub trait ColumnResolver {
    fn column(&self, index: usize) -> Option<&ColumnDescriptor>;

    fn column_type(&self, index: usize) -> Option<DataType> {
        self.column(index).map(ColumnDescriptor::data_type)
    }
}

impl ColumnResolver for [ColumnDescriptor] {
    fn column(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.get(index)
    }
}

impl ColumnResolver for Vec<ColumnDescriptor> {
    fn column(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.get(index)
    }
}
