use tracing::info;

use crate::domain::model::ChunkProgress;
use crate::domain::ports::ProgressSink;

/// Reports per-chunk load progress through the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_chunk(&self, progress: &ChunkProgress) {
        info!(
            "batch {}: {}/{} written ({} inserted, {} skipped)",
            progress.batch,
            progress.written,
            progress.batch_total,
            progress.inserted,
            progress.skipped
        );
    }
}
