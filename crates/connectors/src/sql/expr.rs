use super::condition::Condition;
use std::fmt;

/// Boolean expression rendered into a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlFilterExpr {
    Leaf(Condition),

    /// `(a AND b AND ...)`
    And(Vec<SqlFilterExpr>),

    /// `(a OR b OR ...)`
    Or(Vec<SqlFilterExpr>),

    /// `NOT (a)`
    Not(Box<SqlFilterExpr>),
}

impl SqlFilterExpr {
    pub fn leaf(cond: Condition) -> Self {
        SqlFilterExpr::Leaf(cond)
    }

    pub fn and(exprs: Vec<SqlFilterExpr>) -> Self {
        SqlFilterExpr::And(exprs)
    }

    pub fn or(exprs: Vec<SqlFilterExpr>) -> Self {
        SqlFilterExpr::Or(exprs)
    }

    pub fn not(expr: SqlFilterExpr) -> Self {
        SqlFilterExpr::Not(Box::new(expr))
    }

    pub fn to_sql(&self) -> String {
        match self {
            SqlFilterExpr::Leaf(cond) => cond.to_sql_fragment(),
            SqlFilterExpr::And(exprs) => {
                let exprs = exprs.iter().map(SqlFilterExpr::to_sql).collect::<Vec<_>>();
                format!("({})", exprs.join(" AND "))
            }
            SqlFilterExpr::Or(exprs) => {
                let exprs = exprs.iter().map(SqlFilterExpr::to_sql).collect::<Vec<_>>();
                format!("({})", exprs.join(" OR "))
            }
            SqlFilterExpr::Not(expr) => format!("NOT ({})", expr.to_sql()),
        }
    }

    /// Deduplicated list of the columns this expression references.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = match self {
            SqlFilterExpr::Leaf(cond) => vec![cond.column.clone()],
            SqlFilterExpr::And(exprs) | SqlFilterExpr::Or(exprs) => {
                exprs.iter().flat_map(|e| e.columns()).collect()
            }
            SqlFilterExpr::Not(expr) => expr.columns(),
        };
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}

impl fmt::Display for SqlFilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}
