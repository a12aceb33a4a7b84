//! View command - show a secret's decoded values as a table.

use crate::cli::output;
use crate::cli::present;
use crate::core::kubectl::Cluster;
use crate::error::Result;

/// Fetch, decode and print one secret.
pub fn execute(cluster: &dyn Cluster, name: &str) -> Result<()> {
    let Some(view) = cluster.fetch_decoded(name)? else {
        return Ok(());
    };

    output::raw(&present::render_table(&view, name))?;
    if view.is_empty() {
        output::dimmed("no keys");
    }
    Ok(())
}
