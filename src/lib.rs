pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalCredentials, SeaOrmInventory, SecretsManagerCredentials, TracingProgress};
pub use config::{DbTarget, EnvironmentMap};
pub use crate::core::{FillEngine, FillParams};
pub use domain::model::{
    AddressRecord, ChunkProgress, Credentials, InsertOutcome, LoadSummary,
};
pub use domain::ports::{CredentialSource, InventoryStore, ProgressSink};
pub use utils::error::{FillerError, Result};
