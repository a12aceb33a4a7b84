//! Domain types.

mod decoded;
mod manifest;

pub use decoded::DecodedSecret;
pub use manifest::{Metadata, SanitizedManifest, SecretManifest};
