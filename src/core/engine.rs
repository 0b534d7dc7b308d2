use std::sync::Arc;

use ipnet::Ipv4Net;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::core::{loader, plan, range};
use crate::domain::model::{AddressRecord, LoadSummary};
use crate::domain::ports::{InventoryStore, ProgressSink};
use crate::utils::error::{FillerError, Result};

/// Knobs for one fill run, passed in explicitly rather than read from
/// process-wide state.
#[derive(Debug, Clone)]
pub struct FillParams {
    /// Target region whose inventory receives the addresses.
    pub region: String,
    /// Number of concurrent batch workers.
    pub batch_count: usize,
    /// Records per storage write.
    pub chunk_size: usize,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            region: String::new(),
            batch_count: 3,
            chunk_size: 100,
        }
    }
}

/// Drives the diff → plan → load pipeline and aggregates the outcome.
///
/// Failure policy is complete-and-report: a failing batch never cancels its
/// siblings. Every batch runs to completion, partial counts from failed
/// batches fold into the totals, and `LoadSummary::failed_batches` tells the
/// caller whether a rerun is needed.
pub struct FillEngine<S, P> {
    store: Arc<S>,
    progress: Arc<P>,
    params: FillParams,
}

impl<S, P> FillEngine<S, P>
where
    S: InventoryStore + 'static,
    P: ProgressSink + 'static,
{
    pub fn new(store: Arc<S>, progress: Arc<P>, params: FillParams) -> Self {
        Self {
            store,
            progress,
            params,
        }
    }

    pub async fn run(&self, wider: Ipv4Net, narrower: Ipv4Net) -> Result<LoadSummary> {
        if self.params.chunk_size == 0 {
            return Err(FillerError::InvalidConfigValue {
                field: "chunk_size".to_string(),
                value: "0".to_string(),
                reason: "chunk size must be positive".to_string(),
            });
        }

        if !self.store.region_exists(&self.params.region).await? {
            return Err(FillerError::UnknownRegion {
                region: self.params.region.clone(),
            });
        }

        info!("Computing addresses freed by expanding {} to {}", narrower, wider);
        let addresses = range::diff_hosts(wider, narrower)?;
        let total = addresses.len() as u64;

        if addresses.is_empty() {
            info!("Range already fully covered, nothing to load");
            return Ok(LoadSummary::default());
        }

        let records: Vec<AddressRecord> = addresses
            .into_iter()
            .map(|address| AddressRecord::new(&self.params.region, address))
            .collect();
        let batches = plan::plan_batches(records, self.params.batch_count)?;

        info!(
            "Loading {} addresses into {} across {} batches",
            total,
            self.params.region,
            batches.len()
        );

        let mut workers = JoinSet::new();
        for (index, batch) in batches.into_iter().enumerate() {
            let store = Arc::clone(&self.store);
            let progress = Arc::clone(&self.progress);
            let chunk_size = self.params.chunk_size;
            workers.spawn(async move {
                loader::load_batch(store.as_ref(), progress.as_ref(), index, &batch, chunk_size)
                    .await
            });
        }

        let mut summary = LoadSummary {
            total,
            ..LoadSummary::default()
        };
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(outcome)) => {
                    summary.inserted += outcome.inserted;
                    summary.skipped += outcome.skipped;
                }
                Ok(Err(failure)) => {
                    if let FillerError::Load {
                        inserted, skipped, ..
                    } = &failure
                    {
                        summary.inserted += inserted;
                        summary.skipped += skipped;
                    }
                    summary.failed_batches += 1;
                    error!("{}", failure);
                }
                Err(join_error) => {
                    summary.failed_batches += 1;
                    error!("batch worker panicked: {}", join_error);
                }
            }
        }

        if summary.failed_batches == 0 {
            info!(
                "Processed {} candidate addresses: {} inserted, {} skipped",
                summary.total, summary.inserted, summary.skipped
            );
        } else {
            error!(
                "Processed {} candidate addresses: {} inserted, {} skipped, {} batches failed",
                summary.total, summary.inserted, summary.skipped, summary.failed_batches
            );
        }

        Ok(summary)
    }
}
