use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillerError {
    #[error("range {narrower} is not contained in {wider}")]
    InvalidRange { wider: String, narrower: String },

    #[error("nothing to load: {message}")]
    EmptyInput { message: String },

    #[error("region {region} not found in the region table")]
    UnknownRegion { region: String },

    #[error("credential lookup failed for {secret_id}: {message}")]
    Credential { secret_id: String, message: String },

    #[error("batch {batch} aborted after {inserted} inserted / {skipped} skipped: {source}")]
    Load {
        batch: usize,
        inserted: u64,
        skipped: u64,
        #[source]
        source: Box<FillerError>,
    },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing configuration value: {field}")]
    MissingConfig { field: String },

    #[error("config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),
}

/// Coarse severity ladder used to pick process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FillerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Rerun-safe partial failure: the idempotent inserts make a retry
            // from scratch pick up exactly the addresses still missing.
            FillerError::Load { .. } => ErrorSeverity::Medium,

            FillerError::InvalidRange { .. }
            | FillerError::EmptyInput { .. }
            | FillerError::UnknownRegion { .. }
            | FillerError::InvalidConfigValue { .. }
            | FillerError::MissingConfig { .. }
            | FillerError::ConfigFile(_)
            | FillerError::Serialization(_)
            | FillerError::Io(_) => ErrorSeverity::High,

            FillerError::Credential { .. } | FillerError::Database(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FillerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_keeps_partial_counts() {
        let err = FillerError::Load {
            batch: 2,
            inserted: 300,
            skipped: 12,
            source: Box::new(FillerError::EmptyInput {
                message: "backend gone".to_string(),
            }),
        };

        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        let message = err.to_string();
        assert!(message.contains("batch 2"));
        assert!(message.contains("300 inserted"));
    }

    #[test]
    fn test_fatal_errors_map_to_distinct_exit_codes() {
        let unknown = FillerError::UnknownRegion {
            region: "mars-east-1".to_string(),
        };
        assert_eq!(unknown.exit_code(), 1);

        let credential = FillerError::Credential {
            secret_id: "dev/api/rds".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(credential.exit_code(), 3);
    }
}
