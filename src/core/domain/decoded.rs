//! DecodedSecret type.
//!
//! The plaintext key/value view of a secret's data map.

use zeroize::Zeroizing;

use crate::core::types::DataKey;

/// Decoded secret values in retrieval order.
///
/// Values are wiped from memory when the view is dropped.
#[derive(Debug, Default)]
pub struct DecodedSecret {
    entries: Vec<(DataKey, Zeroizing<String>)>,
}

impl DecodedSecret {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded entry
    pub fn push(&mut self, key: impl Into<DataKey>, value: String) {
        self.entries.push((key.into(), Zeroizing::new(value)));
    }

    /// Look up a decoded value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in retrieval order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the secret holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
