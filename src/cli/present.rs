//! Rendering of decoded secrets and exported manifests.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use crate::cli::output;
use crate::core::domain::{DecodedSecret, SanitizedManifest};
use crate::error::Result;

#[derive(Tabled)]
struct EntryRow<'a> {
    #[tabled(rename = "Key")]
    key: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

/// Render a decoded secret as a titled two-column table.
pub fn render_table(view: &DecodedSecret, name: &str) -> String {
    let title = output::header(&format!("🔓 {}", name));
    let mut table = Table::new(view.iter().map(|(key, value)| EntryRow { key, value }));
    table.with(Style::sharp());
    format!("{}\n{}\n", title, table)
}

/// Where an exported manifest goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    /// `None` and `-` both mean standard output.
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdout,
        }
    }
}

/// Serialize a manifest to YAML.
pub fn to_yaml(manifest: &SanitizedManifest) -> Result<String> {
    Ok(serde_yaml::to_string(manifest)?)
}

/// Serialize a manifest and write it in full to `destination`.
///
/// The document is rendered before the destination is opened, so a failure
/// never leaves a truncated file behind.
pub fn write_manifest(manifest: &SanitizedManifest, destination: &Destination) -> Result<()> {
    let yaml = to_yaml(manifest)?;

    match destination {
        Destination::Stdout => output::raw(&yaml)?,
        Destination::File(path) => {
            write_document(&mut fs::File::create(path)?, &yaml)?;
            debug!(path = %path.display(), bytes = yaml.len(), "wrote manifest");
            output::success(&format!(
                "exported '{}' to {}",
                output::name(&manifest.metadata.name),
                output::path(path.display())
            ));
        }
    }
    Ok(())
}

fn write_document<W: Write>(out: &mut W, yaml: &str) -> Result<()> {
    Ok(output::write_raw(out, yaml)?)
}
