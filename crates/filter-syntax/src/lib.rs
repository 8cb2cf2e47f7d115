//! Filter strings pushed down by the query engine: parsing, traversal and
//! capability pruning.

pub mod ast;
pub mod column;
pub mod error;
pub mod parser;
pub mod prune;
pub mod render;
pub mod traverse;
pub mod types;

pub use ast::{Node, Operand, Operator, OperatorNode, OperatorSet};
pub use column::{ColumnDescriptor, ColumnResolver};
pub use error::{BuildError, FilterError, FilterSyntaxError};
pub use parser::{
    FilterParser,
    builder::{FilterBuilder, Term, TreeBuilder},
    parse,
};
pub use prune::{CapabilityPruner, prune};
pub use render::ToStringTreeVisitor;
pub use traverse::{Chain, TreeVisitor, TreeVisitorExt, traverse};
pub use types::DataType;
