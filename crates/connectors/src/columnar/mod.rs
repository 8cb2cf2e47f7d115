//! Predicates for columnar file readers (row group and record filtering).

pub mod builder;
pub mod predicate;

use crate::{
    capabilities::BackendCapabilities, compiler::FilterCompiler, transform::BpcharTransformer,
};
use builder::RecordFilterBuilder;
use filter_syntax::{
    BuildError, ColumnDescriptor, ColumnResolver, DataType, Node, OperatorSet, TreeVisitor,
    traverse,
};
use predicate::RecordPredicate;

pub fn supported_operators() -> OperatorSet {
    OperatorSet::comparisons() | OperatorSet::IN | OperatorSet::null_checks() | OperatorSet::logical()
}

pub fn supported_types() -> Vec<DataType> {
    vec![
        DataType::Boolean,
        DataType::Smallint,
        DataType::Integer,
        DataType::Bigint,
        DataType::Real,
        DataType::Float8,
        DataType::Numeric,
        DataType::Text,
        DataType::Varchar,
        DataType::Bpchar,
        DataType::Date,
    ]
}

pub struct RecordFilterCompiler {
    columns: Vec<ColumnDescriptor>,
}

impl RecordFilterCompiler {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }
}

impl FilterCompiler for RecordFilterCompiler {
    type Filter = RecordPredicate;

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities::new(supported_operators()).with_types(supported_types())
    }

    fn columns(&self) -> &dyn ColumnResolver {
        &self.columns
    }

    fn transformers(&self) -> Vec<Box<dyn TreeVisitor + '_>> {
        vec![Box::new(BpcharTransformer::new(&self.columns))]
    }

    fn build(&self, root: &Node) -> Result<RecordPredicate, BuildError> {
        let mut builder = RecordFilterBuilder::new(&self.columns);
        traverse(root.clone(), &mut builder);
        builder.build()?.ok_or(BuildError::UnbalancedStack)
    }
}
