use crate::domain::model::{AddressRecord, ChunkProgress, Credentials};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Whether `region` exists in the region reference table.
    async fn region_exists(&self, region: &str) -> Result<bool>;

    /// Insert every record whose (region, address) key is absent and return
    /// the number of rows actually created. Existing rows are left untouched.
    async fn insert_missing(&self, records: &[AddressRecord]) -> Result<u64>;
}

#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Username/password pair for the given environment. `region` locates the
    /// secret store and may be absent for environments that do not need one.
    async fn db_credentials(&self, environment: &str, region: Option<&str>)
        -> Result<Credentials>;
}

/// Observer for per-chunk load progress.
pub trait ProgressSink: Send + Sync {
    fn on_chunk(&self, progress: &ChunkProgress);
}
