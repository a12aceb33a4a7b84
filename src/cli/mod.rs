//! Command-line interface.

pub mod export;
pub mod interrupt;
pub mod output;
pub mod present;
pub mod view;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::constants::KUBECTL_BIN;
use crate::core::kubectl::{Kubectl, Process};
use crate::core::select::{Selection, SelectionFlow};
use crate::error::Result;

/// Kubesecret - view and export Kubernetes secrets.
#[derive(Parser, Debug)]
#[command(
    name = "kubesecret",
    about = "View and export Kubernetes secrets in a user-friendly format",
    version,
    after_help = "Without SECRET, pick one from the current namespace."
)]
pub struct Cli {
    /// Secret to show (prompts for one when omitted)
    pub secret: Option<String>,

    /// Export secret as a YAML manifest
    #[arg(short, long)]
    pub export: bool,

    /// Output file for the export (default: stdout)
    #[arg(short, long, value_name = "PATH", requires = "export")]
    pub output: Option<PathBuf>,

    /// Namespace to query (default: kubectl's current namespace)
    #[arg(short, long, env = "KUBESECRET_NAMESPACE")]
    pub namespace: Option<String>,

    /// Kubeconfig context to use (default: kubectl's current context)
    #[arg(long, env = "KUBESECRET_CONTEXT")]
    pub context: Option<String>,

    /// kubectl binary to run
    #[arg(long, env = "KUBESECRET_KUBECTL", default_value = KUBECTL_BIN)]
    pub kubectl: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Execute an invocation.
///
/// # Errors
///
/// Returns `Error::SecretNotFound` when a named secret cannot be fetched,
/// or any kubectl, decode, prompt or I/O failure along the way.
pub fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "kubesecret", &mut io::stdout());
        return Ok(());
    }

    let kubectl = Kubectl::new(Process::resolve(&cli.kubectl)?)
        .with_namespace(cli.namespace)
        .with_context(cli.context);

    let name = match cli.secret {
        Some(name) => name,
        None => {
            interrupt::install()?;
            let _prompt = interrupt::prompting();
            match SelectionFlow::for_terminal().run(&kubectl)? {
                Selection::Chosen(name) => name,
                Selection::Cancelled => {
                    debug!("no secret selected");
                    return Ok(());
                }
            }
        }
    };
    info!(secret = %name, export = cli.export, "secret selected");

    if cli.export {
        export::execute(&kubectl, &name, cli.output.into())
    } else {
        view::execute(&kubectl, &name)
    }
}
