//! Export command - write a secret as a portable manifest.

use tracing::debug;

use crate::cli::present::{self, Destination};
use crate::core::codec;
use crate::core::kubectl::Cluster;
use crate::error::Result;

/// Fetch one secret, strip cluster metadata and write it to `destination`.
pub fn execute(cluster: &dyn Cluster, name: &str, destination: Destination) -> Result<()> {
    let Some(full) = cluster.fetch_full(name)? else {
        return Ok(());
    };

    let manifest = codec::sanitize(&full, name);
    debug!(keys = manifest.data.len(), ?destination, "exporting secret");
    present::write_manifest(&manifest, &destination)
}
