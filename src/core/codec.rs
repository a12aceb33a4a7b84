//! Secret value decoding and manifest sanitizing.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::trace;

use crate::core::constants::{API_VERSION, DEFAULT_SECRET_TYPE, KIND};
use crate::core::domain::{DecodedSecret, Metadata, SanitizedManifest, SecretManifest};
use crate::core::types::{DataKey, EncodedValue};
use crate::error::{DecodeError, Result};

/// Decode every base64 value of a data map into UTF-8 text.
///
/// # Errors
///
/// Fails on the first value that is not valid base64 or not valid UTF-8.
/// No key is ever dropped silently.
pub fn decode<'a, I>(data: I) -> Result<DecodedSecret>
where
    I: IntoIterator<Item = (&'a DataKey, &'a EncodedValue)>,
{
    let mut view = DecodedSecret::new();
    for (key, encoded) in data {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|source| DecodeError::Base64 {
                key: key.clone(),
                source,
            })?;
        let text = String::from_utf8(bytes).map_err(|source| DecodeError::Utf8 {
            key: key.clone(),
            source,
        })?;
        view.push(key.as_str(), text);
    }
    trace!(keys = view.len(), "decoded secret data");
    Ok(view)
}

/// Project a full secret onto a portable manifest named `name`.
///
/// Values stay base64-encoded so the result can be re-applied as is.
pub fn sanitize(full: &SecretManifest, name: &str) -> SanitizedManifest {
    SanitizedManifest {
        api_version: API_VERSION.to_string(),
        kind: KIND.to_string(),
        metadata: Metadata {
            name: name.to_string(),
        },
        secret_type: full
            .secret_type
            .clone()
            .unwrap_or_else(|| DEFAULT_SECRET_TYPE.to_string()),
        data: full.data.clone(),
    }
}
