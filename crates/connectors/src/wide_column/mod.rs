//! Scan filters for wide-column stores addressed by `family:qualifier`.

pub mod builder;
pub mod filter;

use crate::{capabilities::BackendCapabilities, compiler::FilterCompiler, error::ConfigError};
use builder::ScanFilterBuilder;
use filter::ScanPlan;
use filter_syntax::{
    BuildError, ColumnDescriptor, ColumnResolver, DataType, Node, OperatorSet, traverse,
};

/// Column name reserved for the row key.
pub const ROW_KEY_COLUMN: &str = "recordkey";

pub fn supported_operators() -> OperatorSet {
    OperatorSet::comparisons() | OperatorSet::null_checks() | OperatorSet::AND | OperatorSet::OR
}

pub fn supported_types() -> Vec<DataType> {
    vec![
        DataType::Text,
        DataType::Smallint,
        DataType::Integer,
        DataType::Bigint,
        DataType::Real,
        DataType::Float8,
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideColumn {
    pub descriptor: ColumnDescriptor,
    pub family: String,
    pub qualifier: String,
    pub row_key: bool,
}

impl WideColumn {
    pub fn new(descriptor: ColumnDescriptor) -> Result<Self, ConfigError> {
        if descriptor.name.eq_ignore_ascii_case(ROW_KEY_COLUMN) {
            return Ok(Self {
                family: String::new(),
                qualifier: descriptor.name.clone(),
                descriptor,
                row_key: true,
            });
        }

        let (family, qualifier) = descriptor
            .name
            .split_once(':')
            .filter(|(family, qualifier)| !family.is_empty() && !qualifier.is_empty())
            .ok_or_else(|| ConfigError::InvalidColumnName(descriptor.name.clone()))?;
        Ok(Self {
            family: family.to_string(),
            qualifier: qualifier.to_string(),
            row_key: false,
            descriptor,
        })
    }

    pub fn data_type(&self) -> DataType {
        self.descriptor.data_type()
    }

    pub fn is_textual_row_key(&self) -> bool {
        self.row_key && self.data_type() == DataType::Text
    }
}

/// The projected columns of a wide-column table, by filter column index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TupleDescription {
    columns: Vec<WideColumn>,
}

impl TupleDescription {
    pub fn new(descriptors: Vec<ColumnDescriptor>) -> Result<Self, ConfigError> {
        let columns = descriptors
            .into_iter()
            .map(WideColumn::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns })
    }

    pub fn get(&self, index: usize) -> Option<&WideColumn> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl ColumnResolver for TupleDescription {
    fn column(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.get(index).map(|column| &column.descriptor)
    }
}

pub struct ScanFilterCompiler {
    tuple: TupleDescription,
}

impl ScanFilterCompiler {
    pub fn new(tuple: TupleDescription) -> Self {
        Self { tuple }
    }
}

impl FilterCompiler for ScanFilterCompiler {
    type Filter = ScanPlan;

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities::new(supported_operators()).with_types(supported_types())
    }

    fn columns(&self) -> &dyn ColumnResolver {
        &self.tuple
    }

    fn build(&self, root: &Node) -> Result<ScanPlan, BuildError> {
        let mut builder = ScanFilterBuilder::new(&self.tuple);
        traverse(root.clone(), &mut builder);
        builder.build()
    }
}
