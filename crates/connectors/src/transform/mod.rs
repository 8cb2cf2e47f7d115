//! Rewriting visitors run before pruning.

pub mod bpchar;

pub use bpchar::BpcharTransformer;
