//! Kubesecret - view and export Kubernetes secrets from the command line.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Styled status messages
//! │   ├── present       # Key/value table and manifest writer
//! │   ├── view          # Decoded table view
//! │   ├── export        # Sanitized manifest export
//! │   └── interrupt     # Ctrl-C during selection
//! └── core/             # Core library components
//!     ├── kubectl       # Cluster trait and kubectl-backed queries
//!     ├── parse         # kubectl output parsers
//!     ├── codec         # base64 decoding and manifest sanitizing
//!     ├── select        # Interactive secret selection
//!     └── domain/       # Decoded views and manifests
//! ```
//!
//! # Features
//!
//! - Decoded key/value view of any secret in the namespace
//! - Export as a portable manifest, stripped of cluster-assigned metadata
//! - Arrow-key selection when no secret is named, with a numbered fallback

pub mod cli;
pub mod core;
pub mod error;
