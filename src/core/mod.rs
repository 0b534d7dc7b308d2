pub mod engine;
pub mod loader;
pub mod plan;
pub mod range;

pub use crate::domain::model::{AddressRecord, ChunkProgress, InsertOutcome, LoadSummary};
pub use crate::domain::ports::{CredentialSource, InventoryStore, ProgressSink};
pub use crate::utils::error::Result;
pub use engine::{FillEngine, FillParams};
