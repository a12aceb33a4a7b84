//! Type aliases for domain concepts.

/// Name of a secret within the active namespace.
pub type SecretName = String;

/// A key inside a secret's data map (e.g., PASSWORD).
pub type DataKey = String;

/// A base64-encoded value as stored by the cluster.
pub type EncodedValue = String;
