//! Kubesecret - view and export Kubernetes secrets from the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kubesecret::cli::output;
use kubesecret::cli::{execute, Cli};
use kubesecret::core::constants::LOG_ENV;
use kubesecret::error::{DecodeError, Error, KubectlError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kubesecret=debug")
        } else {
            EnvFilter::new("kubesecret=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let namespace = cli.namespace.clone();
    let context = cli.context.clone();

    if let Err(e) = execute(cli) {
        match &e {
            Error::SecretNotFound { name, output: raw } => {
                output::error(&e.to_string());
                output::kv("kind:", e.kind());
                output::kv("secret:", name);
                if let Some(ns) = &namespace {
                    output::kv("namespace:", ns);
                }
                if let Some(ctx) = &context {
                    output::kv("context:", ctx);
                }
                output::kv("output:", format!("{} bytes", raw.len()));
                output::block(raw);
            }
            _ => {
                let suggestion = match &e {
                    Error::Kubectl(KubectlError::NotInstalled(_)) => {
                        Some("install kubectl or pass --kubectl <path>")
                    }
                    Error::Decode(DecodeError::Utf8 { .. }) => {
                        Some("the secret holds binary data; use --export instead")
                    }
                    _ => None,
                };

                output::error(&e.to_string());
                if let Some(hint) = suggestion {
                    output::hint(hint);
                }
            }
        }
        std::process::exit(1);
    }
}
