use serde::{Deserialize, Serialize};

/// Target database family. Only date and timestamp literals differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    Postgres,
    MySql,
    Oracle,
    SqlServer,
}

impl SqlDialect {
    /// Maps a JDBC-style product name. Unknown products are treated as Postgres.
    pub fn from_product_name(name: &str) -> Self {
        let name = name.to_ascii_uppercase();
        if name.contains("MICROSOFT") {
            SqlDialect::SqlServer
        } else if name.contains("MYSQL") {
            SqlDialect::MySql
        } else if name.contains("ORACLE") {
            SqlDialect::Oracle
        } else {
            SqlDialect::Postgres
        }
    }

    pub fn wrap_date(&self, value: &str) -> String {
        match self {
            SqlDialect::Postgres => format!("date'{value}'"),
            SqlDialect::MySql => format!("DATE('{value}')"),
            SqlDialect::Oracle => format!("to_date('{value}', 'YYYY-MM-DD')"),
            SqlDialect::SqlServer => format!("'{value}'"),
        }
    }

    pub fn wrap_timestamp(&self, value: &str) -> String {
        match self {
            SqlDialect::Postgres | SqlDialect::SqlServer => format!("'{value}'"),
            SqlDialect::MySql => format!("TIMESTAMP('{value}')"),
            SqlDialect::Oracle => format!("to_timestamp('{value}', 'YYYY-MM-DD HH:MI:SS.FF')"),
        }
    }
}
