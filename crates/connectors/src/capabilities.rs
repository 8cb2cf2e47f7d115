use crate::{columnar, config::read_json_file, error::ConfigError, sql, wide_column};
use filter_syntax::{ColumnResolver, DataType, Node, Operator, OperatorSet, prune};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, path::Path};

/// What a backend can evaluate natively.
///
/// `types: None` disables column type checking; only operators are pruned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCapabilities {
    pub operators: OperatorSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<HashSet<DataType>>,
}

impl BackendCapabilities {
    pub fn new(operators: OperatorSet) -> Self {
        Self {
            operators,
            types: None,
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = DataType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let capabilities: Self = serde_json::from_str(json)?;
        capabilities.validate()?;
        Ok(capabilities)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let capabilities: Self = read_json_file(path)?;
        capabilities.validate()?;
        Ok(capabilities)
    }

    pub fn supports(&self, operator: Operator) -> bool {
        self.operators.contains_operator(operator)
    }

    /// Prunes `root` to what this backend can evaluate.
    pub fn prune(&self, root: Node, columns: &dyn ColumnResolver) -> Option<Node> {
        prune(
            root,
            self.operators,
            self.types.as_ref().map(|types| (columns, types)),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self
            .types
            .as_ref()
            .is_some_and(|types| types.contains(&DataType::Unsupported))
        {
            return Err(ConfigError::InvalidCapabilities(
                "UNSUPPORTED cannot be listed as a supported type".to_string(),
            ));
        }
        Ok(())
    }
}

/// Built-in backend profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    Sql,
    Columnar,
    WideColumn,
}

impl BackendKind {
    pub fn capabilities(&self) -> BackendCapabilities {
        match self {
            BackendKind::Sql => BackendCapabilities::new(sql::supported_operators())
                .with_types(sql::supported_types()),
            BackendKind::Columnar => BackendCapabilities::new(columnar::supported_operators())
                .with_types(columnar::supported_types()),
            BackendKind::WideColumn => {
                BackendCapabilities::new(wide_column::supported_operators())
                    .with_types(wide_column::supported_types())
            }
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Sql => write!(f, "sql"),
            BackendKind::Columnar => write!(f, "columnar"),
            BackendKind::WideColumn => write!(f, "wide-column"),
        }
    }
}
