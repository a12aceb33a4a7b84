//! Constants used throughout kubesecret.
//!
//! Centralizes kubectl query shapes and manifest envelope values.

/// Default kubectl binary, resolved through `PATH`.
pub const KUBECTL_BIN: &str = "kubectl";

/// Output flag for the data-only query.
pub const DATA_TEMPLATE: &str = "jsonpath={.data}";

/// Output flag for the full-object query.
pub const FULL_OUTPUT: &str = "json";

/// Output flag for the name listing query.
pub const NAMES_TEMPLATE: &str = "jsonpath={.items[*].metadata.name}";

/// `apiVersion` written into exported manifests.
pub const API_VERSION: &str = "v1";

/// `kind` written into exported manifests.
pub const KIND: &str = "Secret";

/// Secret type assumed when the cluster omits one.
pub const DEFAULT_SECRET_TYPE: &str = "Opaque";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "KUBESECRET_LOG";
