pub mod builder;
pub mod condition;
pub mod dialect;
pub mod expr;

use crate::{capabilities::BackendCapabilities, compiler::FilterCompiler};
use builder::SqlPredicateBuilder;
use dialect::SqlDialect;
use expr::SqlFilterExpr;
use filter_syntax::{
    BuildError, ColumnDescriptor, ColumnResolver, DataType, Node, OperatorSet, traverse,
};

pub fn supported_operators() -> OperatorSet {
    OperatorSet::comparisons()
        | OperatorSet::LIKE
        | OperatorSet::IN
        | OperatorSet::null_checks()
        | OperatorSet::logical()
}

pub fn supported_types() -> Vec<DataType> {
    vec![
        DataType::Smallint,
        DataType::Integer,
        DataType::Bigint,
        DataType::Real,
        DataType::Float8,
        DataType::Numeric,
        DataType::Boolean,
        DataType::Text,
        DataType::Varchar,
        DataType::Bpchar,
        DataType::Date,
        DataType::Timestamp,
    ]
}

/// A `WHERE` expression, empty when nothing was pushed down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFilter {
    pub expr: Option<SqlFilterExpr>,
}

impl SqlFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expr(expr: SqlFilterExpr) -> Self {
        Self { expr: Some(expr) }
    }

    pub fn expr(&self) -> Option<&SqlFilterExpr> {
        self.expr.as_ref()
    }

    pub fn to_sql(&self) -> String {
        self.expr.as_ref().map(SqlFilterExpr::to_sql).unwrap_or_default()
    }

    /// `" WHERE <expr>"`, ready to append to a `SELECT`.
    pub fn where_clause(&self) -> String {
        match &self.expr {
            Some(expr) => format!(" WHERE {expr}"),
            None => String::new(),
        }
    }
}

pub struct SqlFilterCompiler {
    dialect: SqlDialect,
    quote: String,
    columns: Vec<ColumnDescriptor>,
}

impl SqlFilterCompiler {
    pub fn new(dialect: SqlDialect, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            dialect,
            quote: String::new(),
            columns,
        }
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }
}

impl FilterCompiler for SqlFilterCompiler {
    type Filter = SqlFilter;

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities::new(supported_operators()).with_types(supported_types())
    }

    fn columns(&self) -> &dyn ColumnResolver {
        &self.columns
    }

    fn build(&self, root: &Node) -> Result<SqlFilter, BuildError> {
        let mut builder =
            SqlPredicateBuilder::new(self.dialect, &self.columns).with_quote(self.quote.as_str());
        traverse(root.clone(), &mut builder);
        builder.build()
    }
}
