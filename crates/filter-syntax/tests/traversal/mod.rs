//! Traversal engine tests
//!
//! Hook order, deletion and substitution semantics of `traverse`, and
//! composition of several visitors over one walk.

mod order;
mod rewriting;
