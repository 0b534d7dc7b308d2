use crate::utils::error::{FillerError, Result};
use ipnet::Ipv4Net;

/// Usable host addresses present in `wider` but not covered by `narrower`,
/// in ascending numeric order.
///
/// Host enumeration follows the usual rules: the network and broadcast
/// addresses of `wider` are excluded. Addresses inside `narrower` are dropped
/// whether or not they are usable hosts of `narrower` itself, so the first
/// emitted address can be the base address of the uncovered remainder.
pub fn diff_hosts(wider: Ipv4Net, narrower: Ipv4Net) -> Result<Vec<u32>> {
    if !wider.contains(&narrower) {
        return Err(FillerError::InvalidRange {
            wider: wider.to_string(),
            narrower: narrower.to_string(),
        });
    }

    Ok(wider
        .hosts()
        .filter(|ip| !narrower.contains(ip))
        .map(u32::from)
        .collect())
}
