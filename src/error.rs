//! Error types.
//!
//! `SecretNotFound` is the one error kind callers branch on. A kubectl
//! error-stream report is not an error at all: queries return `Ok(None)`
//! after showing it to the operator.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The secret does not exist, or kubectl's answer had no usable shape.
    #[error("secret '{name}' not found, original message: {output}")]
    SecretNotFound {
        /// Requested secret name
        name: String,
        /// Raw kubectl output, kept for diagnostics
        output: String,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Kubectl(#[from] KubectlError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml serialize error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Failures turning a secret value back into text.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("value of '{key}' is not valid base64: {source}")]
    Base64 {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("value of '{key}' is not valid UTF-8: {source}")]
    Utf8 {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Failures running the kubectl binary itself.
#[derive(Error, Debug)]
pub enum KubectlError {
    #[error("kubectl binary not found: {0}")]
    NotInstalled(String),

    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("kubectl produced non-UTF-8 output: {0}")]
    InvalidOutput(String),
}

impl Error {
    /// Build a not-found error from a name and whatever kubectl printed.
    pub fn not_found(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self::SecretNotFound {
            name: name.into(),
            output: output.into(),
        }
    }

    /// Short name of the error kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SecretNotFound { .. } => "SecretNotFound",
            Self::Decode(_) => "DecodeFailure",
            Self::Kubectl(_) => "KubectlFailure",
            Self::Prompt(_) => "PromptFailure",
            Self::Io(_) => "IoFailure",
            Self::Yaml(_) => "SerializeFailure",
            Self::Signal(_) => "SignalFailure",
        }
    }

    /// Whether the operator interrupted a prompt (Ctrl-C read as a key).
    pub fn is_interrupted(&self) -> bool {
        let io = match self {
            Self::Prompt(dialoguer::Error::IO(e)) | Self::Io(e) => e,
            _ => return false,
        };
        io.kind() == std::io::ErrorKind::Interrupted
    }
}

pub type Result<T> = std::result::Result<T, Error>;
