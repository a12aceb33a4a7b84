//! Cluster queries through the kubectl CLI.
//!
//! Every query spawns one kubectl process and waits for it. There are two
//! distinct failure outcomes and callers branch on them:
//!
//! - kubectl wrote to stderr: the text is shown and the query yields `Ok(None)`
//! - kubectl answered but the secret's shape is missing: `Error::SecretNotFound`

use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::cli::output;
use crate::core::codec;
use crate::core::constants::{DATA_TEMPLATE, FULL_OUTPUT, NAMES_TEMPLATE};
use crate::core::domain::{DecodedSecret, SecretManifest};
use crate::core::parse::{self, DataSpan};
use crate::core::types::SecretName;
use crate::error::{Error, KubectlError, Result};

/// Captured output of one kubectl run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs kubectl with the given arguments to completion.
pub trait Runner {
    fn run(&self, args: &[String]) -> Result<QueryOutput>;
}

/// Read access to the secrets of the active namespace.
pub trait Cluster {
    /// Fetch one secret's data map and decode its values.
    fn fetch_decoded(&self, name: &str) -> Result<Option<DecodedSecret>>;

    /// Fetch one secret as a full object, values left encoded.
    fn fetch_full(&self, name: &str) -> Result<Option<SecretManifest>>;

    /// Enumerate secret names in the namespace.
    fn list_names(&self) -> Result<Option<Vec<SecretName>>>;
}

/// A kubectl binary resolved on disk.
#[derive(Debug, Clone)]
pub struct Process {
    bin: PathBuf,
}

impl Process {
    /// Resolve `bin` through `PATH` (or as a path if it contains one).
    ///
    /// # Errors
    ///
    /// Returns `KubectlError::NotInstalled` if nothing executable is found.
    pub fn resolve(bin: &str) -> Result<Self> {
        let bin = which::which(bin).map_err(|_| KubectlError::NotInstalled(bin.to_string()))?;
        debug!(bin = %bin.display(), "resolved kubectl");
        Ok(Self { bin })
    }
}

impl Runner for Process {
    fn run(&self, args: &[String]) -> Result<QueryOutput> {
        debug!(?args, "running kubectl");

        let output = Command::new(&self.bin)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| KubectlError::Spawn {
                bin: self.bin.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| KubectlError::InvalidOutput(e.to_string()))?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        trace!(
            status = ?output.status.code(),
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "kubectl finished"
        );
        Ok(QueryOutput { stdout, stderr })
    }
}

/// kubectl-backed `Cluster`.
#[derive(Debug, Clone)]
pub struct Kubectl<R = Process> {
    runner: R,
    namespace: Option<String>,
    context: Option<String>,
}

impl<R: Runner> Kubectl<R> {
    /// Query through `runner` using kubectl's configured namespace and context.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            namespace: None,
            context: None,
        }
    }

    /// Target a specific namespace.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Target a specific kubeconfig context.
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    fn args(&self, query: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = query.iter().map(|s| s.to_string()).collect();
        if let Some(ns) = &self.namespace {
            args.extend(["--namespace".to_string(), ns.clone()]);
        }
        if let Some(ctx) = &self.context {
            args.extend(["--context".to_string(), ctx.clone()]);
        }
        args
    }

    /// Run a query; `None` when kubectl reported an error.
    fn query(&self, query: &[&str]) -> Result<Option<String>> {
        let answer = self.runner.run(&self.args(query))?;
        if !answer.stderr.trim().is_empty() {
            debug!("kubectl wrote to stderr, treating as query failure");
            output::error(answer.stderr.trim_end());
            return Ok(None);
        }
        Ok(Some(answer.stdout))
    }
}

impl<R: Runner> Cluster for Kubectl<R> {
    fn fetch_decoded(&self, name: &str) -> Result<Option<DecodedSecret>> {
        let Some(raw) = self.query(&["get", "secret", name, "-o", DATA_TEMPLATE])? else {
            return Ok(None);
        };

        match parse::parse_data(&raw) {
            DataSpan::Empty => Ok(Some(DecodedSecret::new())),
            DataSpan::Entries(entries) => {
                codec::decode(entries.iter().map(|(k, v)| (k, v))).map(Some)
            }
            DataSpan::Malformed => Err(Error::not_found(name, raw)),
        }
    }

    fn fetch_full(&self, name: &str) -> Result<Option<SecretManifest>> {
        let Some(raw) = self.query(&["get", "secret", name, "-o", FULL_OUTPUT])? else {
            return Ok(None);
        };

        parse::parse_manifest(&raw)
            .map(Some)
            .ok_or_else(|| Error::not_found(name, raw))
    }

    fn list_names(&self) -> Result<Option<Vec<SecretName>>> {
        let names = self
            .query(&["get", "secrets", "-o", NAMES_TEMPLATE])?
            .map(|raw| parse::parse_names(&raw));
        if let Some(names) = &names {
            debug!(count = names.len(), "listed secrets");
        }
        Ok(names)
    }
}
