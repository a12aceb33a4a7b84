//! Core library components.
//!
//! The secret retrieval pipeline: kubectl queries, output parsing, value
//! decoding, manifest sanitizing and secret selection.

pub mod codec;
pub mod constants;
pub mod domain;
pub mod kubectl;
pub mod parse;
pub mod select;
pub mod types;
