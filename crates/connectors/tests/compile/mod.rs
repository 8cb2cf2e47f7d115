//! End-to-end compile tests
//!
//! Filter strings go through parsing, rewriting, pruning and one of the
//! backend builders.

mod sql;
mod wide_column;
