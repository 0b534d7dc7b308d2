use crate::domain::model::AddressRecord;
use crate::utils::error::{FillerError, Result};

/// Split `records` into `batch_count` contiguous slices of near-equal size.
///
/// The last batch absorbs the division remainder, so the planned batches
/// always concatenate back to the input. When `batch_count` exceeds the
/// record count the leading batches come out empty.
pub fn plan_batches(
    records: Vec<AddressRecord>,
    batch_count: usize,
) -> Result<Vec<Vec<AddressRecord>>> {
    if records.is_empty() {
        return Err(FillerError::EmptyInput {
            message: "address list is empty".to_string(),
        });
    }
    if batch_count == 0 {
        return Err(FillerError::EmptyInput {
            message: "batch count must be positive".to_string(),
        });
    }

    let base = records.len() / batch_count;
    let mut batches = Vec::with_capacity(batch_count);
    let mut rest = records;
    for _ in 1..batch_count {
        let tail = rest.split_off(base);
        batches.push(rest);
        rest = tail;
    }
    batches.push(rest);

    Ok(batches)
}
