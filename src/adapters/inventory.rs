use std::time::Duration;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::debug;

use crate::adapters::entities::{inventory, region};
use crate::config::DbTarget;
use crate::domain::model::{AddressRecord, Credentials};
use crate::domain::ports::InventoryStore;
use crate::utils::error::Result;

/// Inventory table access over a SeaORM connection pool.
///
/// Concurrent batch workers all write through this pool; the uniqueness
/// constraint on (region, address) plus insert-if-absent writes keep the
/// final row set independent of write ordering.
pub struct SeaOrmInventory {
    db: DatabaseConnection,
}

impl SeaOrmInventory {
    pub async fn connect(target: &DbTarget, credentials: &Credentials) -> Result<Self> {
        let url = format!(
            "mysql://{}:{}@{}/{}",
            credentials.username, credentials.password, target.host, target.database
        );

        let mut options = ConnectOptions::new(url);
        options
            .max_connections(8)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        debug!("database connection established to {}", target.host);
        Ok(Self { db })
    }
}

#[async_trait]
impl InventoryStore for SeaOrmInventory {
    async fn region_exists(&self, region_name: &str) -> Result<bool> {
        let found = region::Entity::find()
            .filter(region::Column::RegionName.eq(region_name))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    async fn insert_missing(&self, records: &[AddressRecord]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let rows = records.iter().map(|record| inventory::ActiveModel {
            region: Set(record.region.clone()),
            address: Set(record.address),
            timestamp: Set(record.timestamp),
            inuse: Set(record.inuse),
        });

        // Renders as INSERT IGNORE on MySQL; the affected-row count is the
        // number of rows actually created.
        let inserted = inventory::Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([inventory::Column::Region, inventory::Column::Address])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        debug!("chunk write: {} of {} rows inserted", inserted, records.len());
        Ok(inserted)
    }
}
