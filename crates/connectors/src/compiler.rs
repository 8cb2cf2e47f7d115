use crate::{capabilities::BackendCapabilities, error::CompileError};
use filter_syntax::{BuildError, ColumnResolver, Node, TreeVisitor, parse, traverse};
use tracing::{debug, info};

/// A trait for compiling filter strings into a backend-specific filter.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Filter;

    fn capabilities(&self) -> BackendCapabilities;

    /// Column metadata used for type pruning and literal decoding.
    fn columns(&self) -> &dyn ColumnResolver;

    /// Rewriting visitors applied, in order, before pruning.
    fn transformers(&self) -> Vec<Box<dyn TreeVisitor + '_>> {
        Vec::new()
    }

    /// Fold an already-pruned tree into the backend filter.
    fn build(&self, root: &Node) -> Result<Self::Filter, BuildError>;

    /// Parse, transform, prune and build. `Ok(None)` means nothing could be
    /// pushed down and the backend has to scan without a filter.
    fn compile(&self, filter: &str) -> Result<Option<Self::Filter>, CompileError> {
        let mut root = Some(parse(filter)?);

        for mut transformer in self.transformers() {
            root = root.and_then(|node| traverse(node, transformer.as_mut()));
        }

        let Some(pruned) = root.and_then(|node| self.capabilities().prune(node, self.columns()))
        else {
            info!(filter, "Filter pruned entirely, no pushdown");
            return Ok(None);
        };

        debug!(filter, pruned = %pruned, "Building backend filter");
        let built = self.build(&pruned)?;
        Ok(Some(built))
    }
}
