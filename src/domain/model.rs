use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp stamped onto every inserted row. Rows carry the Unix epoch until
/// an allocator hands the address out and refreshes it.
pub fn placeholder_timestamp() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// One host address bound for the inventory table. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub region: String,
    /// Numeric form of the IPv4 address.
    pub address: u32,
    pub timestamp: DateTime<Utc>,
    pub inuse: bool,
}

impl AddressRecord {
    pub fn new(region: &str, address: u32) -> Self {
        Self {
            region: region.to_string(),
            address,
            timestamp: placeholder_timestamp(),
            inuse: false,
        }
    }
}

/// Per-batch insert/skip counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    pub inserted: u64,
    pub skipped: u64,
}

/// Aggregated result of one fill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Candidate addresses produced by the range diff.
    pub total: u64,
    pub inserted: u64,
    pub skipped: u64,
    pub failed_batches: usize,
}

/// Incremental progress reported after each chunk write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkProgress {
    pub batch: usize,
    /// Addresses attempted so far in this batch.
    pub written: u64,
    pub batch_total: u64,
    pub inserted: u64,
    pub skipped: u64,
}

/// Database login pair returned by a credential source.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
