use clap::{Subcommand, ValueEnum};
use connectors::{BackendKind, sql::dialect::SqlDialect};

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a filter string and print its tree
    Parse {
        #[arg(long, help = "Serialized filter string")]
        filter: String,

        #[arg(long, help = "Print the tree as JSON instead of the debug form")]
        json: bool,
    },
    /// Prune a filter to what a backend can evaluate
    Prune {
        #[arg(long, help = "Serialized filter string")]
        filter: String,

        #[arg(long, value_enum, default_value_t = Backend::Sql, help = "Built-in backend profile")]
        backend: Backend,

        #[arg(
            long,
            help = "JSON capabilities file, overrides the built-in profile of --backend"
        )]
        capabilities: Option<String>,

        #[arg(
            long,
            help = "JSON array of column descriptors; without it column types are not checked"
        )]
        columns: Option<String>,
    },
    /// Compile a filter into a SQL WHERE fragment
    Sql {
        #[arg(long, help = "Serialized filter string")]
        filter: String,

        #[arg(long, help = "JSON array of column descriptors")]
        columns: String,

        #[arg(long, value_enum, default_value_t = Dialect::Postgres, help = "Target database")]
        dialect: Dialect,

        #[arg(long, default_value = "", help = "Identifier quote, e.g. '\"' or '`'")]
        quote: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    Sql,
    Columnar,
    WideColumn,
}

impl From<Backend> for BackendKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Sql => BackendKind::Sql,
            Backend::Columnar => BackendKind::Columnar,
            Backend::WideColumn => BackendKind::WideColumn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    Postgres,
    #[value(name = "mysql")]
    MySql,
    Oracle,
    #[value(name = "sqlserver")]
    SqlServer,
}

impl From<Dialect> for SqlDialect {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Postgres => SqlDialect::Postgres,
            Dialect::MySql => SqlDialect::MySql,
            Dialect::Oracle => SqlDialect::Oracle,
            Dialect::SqlServer => SqlDialect::SqlServer,
        }
    }
}
