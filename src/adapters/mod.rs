// Adapters layer: concrete implementations for the external systems the core
// only knows through ports (database, secret store, progress reporting).

pub mod entities;
pub mod inventory;
pub mod progress;
pub mod secrets;

pub use inventory::SeaOrmInventory;
pub use progress::TracingProgress;
pub use secrets::{LocalCredentials, SecretsManagerCredentials};
