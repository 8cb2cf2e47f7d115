use crate::{commands::Backend, error::CliError};
use connectors::{
    BackendCapabilities, BackendKind, FilterCompiler,
    config::load_columns,
    sql::{SqlFilterCompiler, dialect::SqlDialect},
};
use filter_syntax::{ColumnDescriptor, parse};
use tracing::{info, warn};

/// Printed when nothing of the filter survives pruning.
pub const NO_PUSHDOWN: &str = "<no pushdown>";

pub fn parse_filter(filter: &str, json: bool) -> Result<String, CliError> {
    let root = parse(filter)?;
    if json {
        Ok(serde_json::to_string_pretty(&root)?)
    } else {
        Ok(root.to_string())
    }
}

pub fn prune_filter(
    filter: &str,
    backend: Backend,
    capabilities: Option<&str>,
    columns: Option<&str>,
) -> Result<String, CliError> {
    let mut profile = match capabilities {
        Some(path) => BackendCapabilities::from_json_file(path)?,
        None => BackendKind::from(backend).capabilities(),
    };
    let columns: Vec<ColumnDescriptor> = match columns {
        Some(path) => load_columns(path)?,
        None => {
            if profile.types.take().is_some() {
                warn!("No column descriptors given, column types will not be checked");
            }
            Vec::new()
        }
    };

    let root = parse(filter)?;
    Ok(match profile.prune(root, &columns) {
        Some(pruned) => pruned.to_string(),
        None => NO_PUSHDOWN.to_string(),
    })
}

pub fn sql_where(
    filter: &str,
    columns: &str,
    dialect: SqlDialect,
    quote: &str,
) -> Result<String, CliError> {
    let columns = load_columns(columns)?;
    let compiler = SqlFilterCompiler::new(dialect, columns).with_quote(quote);
    match compiler.compile(filter)? {
        Some(sql) => Ok(sql.where_clause()),
        None => {
            info!(filter, "Nothing to push down");
            Ok(String::new())
        }
    }
}
