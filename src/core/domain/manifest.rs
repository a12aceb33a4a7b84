//! Secret manifest types.
//!
//! `SecretManifest` is what `kubectl get secret -o json` returns, reduced to
//! the fields we read. `SanitizedManifest` is the portable projection we
//! export: cluster-assigned metadata never makes it through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::{DataKey, EncodedValue, SecretName};

/// Full secret object as returned by the cluster.
///
/// Unknown fields (`metadata.uid`, `resourceVersion`, ...) are ignored on
/// parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretManifest {
    /// Secret type, e.g. `Opaque` or `kubernetes.io/tls`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    /// Base64-encoded values, still encoded
    #[serde(default)]
    pub data: BTreeMap<DataKey, EncodedValue>,
}

/// Exportable secret definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedManifest {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    #[serde(rename = "type")]
    pub secret_type: String,
    pub data: BTreeMap<DataKey, EncodedValue>,
}

/// The only metadata an exported secret carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: SecretName,
}

impl From<SanitizedManifest> for SecretManifest {
    fn from(m: SanitizedManifest) -> Self {
        Self {
            secret_type: Some(m.secret_type),
            data: m.data,
        }
    }
}
