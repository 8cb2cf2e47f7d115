pub mod node;
pub mod operand;
pub mod operator;

pub use node::{Node, OperatorNode};
pub use operand::{CollectionOperand, ColumnIndexOperand, Operand, ScalarOperand};
pub use operator::{Operator, OperatorSet};
