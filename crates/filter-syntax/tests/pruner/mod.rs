//! Capability pruner tests
//!
//! Operator and column-type pruning over realistic filter strings, plus the
//! algebraic properties the pruned tree must keep.

mod data_types;
mod operators;
mod properties;
