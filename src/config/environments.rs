use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{FillerError, Result};

/// Host and database name of one deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbTarget {
    pub host: String,
    pub database: String,
}

/// Environment name → database target map.
///
/// Carried as an explicit value through the wiring; the built-in defaults can
/// be replaced wholesale from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentMap {
    pub environments: HashMap<String, DbTarget>,
}

impl Default for EnvironmentMap {
    fn default() -> Self {
        let mut environments = HashMap::new();
        environments.insert(
            "local".to_string(),
            DbTarget {
                host: "localhost".to_string(),
                database: "localdevdb".to_string(),
            },
        );
        environments.insert(
            "dev".to_string(),
            DbTarget {
                host: "devdb.cluster.eu-west-1.rds.amazonaws.com".to_string(),
                database: "devdb".to_string(),
            },
        );
        environments.insert(
            "stage".to_string(),
            DbTarget {
                host: "stagedb.cluster.us-east-1.rds.amazonaws.com".to_string(),
                database: "stagedb".to_string(),
            },
        );
        environments.insert(
            "prod".to_string(),
            DbTarget {
                host: "proddb.cluster.us-east-1.rds.amazonaws.com".to_string(),
                database: "proddb".to_string(),
            },
        );
        Self { environments }
    }
}

impl EnvironmentMap {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn target(&self, environment: &str) -> Result<&DbTarget> {
        self.environments
            .get(environment)
            .ok_or_else(|| FillerError::InvalidConfigValue {
                field: "env".to_string(),
                value: environment.to_string(),
                reason: format!(
                    "unknown environment, expected one of: {}",
                    self.known_environments().join(", ")
                ),
            })
    }

    fn known_environments(&self) -> Vec<String> {
        let mut names: Vec<String> = self.environments.keys().cloned().collect();
        names.sort();
        names
    }
}
