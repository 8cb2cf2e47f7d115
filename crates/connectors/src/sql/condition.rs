use std::fmt;

/// A single column filter condition
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column name, already quoted for the target database.
    pub column: String,
    pub comparator: String,
    /// Serialized right-hand side; `None` for null checks.
    pub value: Option<String>,
}

impl Condition {
    pub fn new(column: impl Into<String>, comparator: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            comparator: comparator.into(),
            value: Some(value.into()),
        }
    }

    pub fn unary(column: impl Into<String>, comparator: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            comparator: comparator.into(),
            value: None,
        }
    }

    /// Render just this one condition as SQL
    pub fn to_sql_fragment(&self) -> String {
        match &self.value {
            Some(value) => format!("{} {} {}", self.column, self.comparator, value),
            None => format!("{} {}", self.column, self.comparator),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql_fragment())
    }
}
