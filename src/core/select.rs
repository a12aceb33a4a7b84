//! Interactive secret selection.
//!
//! When no secret is named on the command line the operator picks one from
//! the namespace. Two pickers serve the prompts:
//!
//! - [`InteractivePicker`]: arrow-key menu, used when a terminal is available
//! - [`NumberedPicker`]: indexed table and a line prompt, works anywhere
//!
//! The flow classifies the listed names and asks accordingly:
//!
//! ```text
//! Listing ─┬─ none ──────────────────────────────► Cancelled
//!          ├─ one ───── confirm? ── yes ─────────► Chosen
//!          │                      └ no ──────────► Cancelled
//!          └─ several ─ menu ─┬─ pick ───────────► Chosen
//!                             └ quit / failure ─► numbered prompt ─► Chosen | Cancelled
//! ```
//!
//! Both pickers default a single-candidate confirm to "no". Ctrl-C at any
//! prompt ends the flow with no selection.

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::{Confirm, Select};
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use crate::core::kubectl::Cluster;
use crate::core::types::SecretName;
use crate::error::Result;

/// Answer assumed when the operator just presses enter at a confirm.
pub const CONFIRM_DEFAULT: bool = false;

/// Terminal outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(SecretName),
    Cancelled,
}

/// An operator-facing prompt surface.
pub trait Picker {
    /// Ask whether to use the only available secret.
    ///
    /// `None` means the operator cancelled.
    fn confirm(&mut self, name: &str) -> Result<Option<bool>>;

    /// Let the operator pick one of `names`, returning its index.
    ///
    /// `None` means the operator aborted.
    fn pick_one(&mut self, names: &[SecretName]) -> Result<Option<usize>>;

    /// Show a one-line notice.
    fn notify(&mut self, msg: &str) -> Result<()>;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn confirm(&mut self, name: &str) -> Result<Option<bool>> {
        (**self).confirm(name)
    }

    fn pick_one(&mut self, names: &[SecretName]) -> Result<Option<usize>> {
        (**self).pick_one(names)
    }

    fn notify(&mut self, msg: &str) -> Result<()> {
        (**self).notify(msg)
    }
}

/// Arrow-key menu on the controlling terminal.
pub struct InteractivePicker {
    term: Term,
}

impl InteractivePicker {
    /// Return a picker if an interactive surface can be established.
    ///
    /// Requires stdin and stderr to be terminals and a usable `TERM`.
    pub fn probe() -> Option<Self> {
        let term = Term::stderr();
        let dumb = std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false);

        if io::stdin().is_terminal() && term.is_term() && !dumb {
            Some(Self { term })
        } else {
            debug!("no interactive terminal, using numbered prompt");
            None
        }
    }

    /// Bring the cursor back if a prompt ended in an error.
    fn settle<T>(&self, result: dialoguer::Result<T>) -> Result<T> {
        result.map_err(|e| {
            let _ = self.term.show_cursor();
            e.into()
        })
    }
}

impl Picker for InteractivePicker {
    fn confirm(&mut self, name: &str) -> Result<Option<bool>> {
        let answer = Confirm::new()
            .with_prompt(format!("Show secret '{}'?", name))
            .default(CONFIRM_DEFAULT)
            .interact_on_opt(&self.term);
        self.settle(answer)
    }

    fn pick_one(&mut self, names: &[SecretName]) -> Result<Option<usize>> {
        let choice = Select::new()
            .with_prompt("Select a secret (↑/↓ to move, enter to pick, q to quit)")
            .items(names)
            .default(0)
            .interact_on_opt(&self.term);
        self.settle(choice)
    }

    fn notify(&mut self, msg: &str) -> Result<()> {
        self.term.write_line(msg)?;
        Ok(())
    }
}

#[derive(Tabled)]
struct NameRow<'a> {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Secret")]
    name: &'a str,
}

/// Indexed table plus a line prompt, read from `input` and written to `output`.
pub struct NumberedPicker<R, W> {
    input: R,
    output: W,
}

impl NumberedPicker<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stdin, render on stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> NumberedPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Consume the picker, returning what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Picker for NumberedPicker<R, W> {
    fn confirm(&mut self, name: &str) -> Result<Option<bool>> {
        write!(self.output, "Show secret '{}'? [y/N]: ", name)?;
        self.output.flush()?;

        Ok(self
            .read_line()?
            .map(|answer| match answer.to_ascii_lowercase().as_str() {
                "" => CONFIRM_DEFAULT,
                "y" | "yes" => true,
                _ => false,
            }))
    }

    fn pick_one(&mut self, names: &[SecretName]) -> Result<Option<usize>> {
        let rows = names.iter().enumerate().map(|(i, name)| NameRow {
            index: i + 1,
            name,
        });
        let mut table = Table::new(rows);
        table.with(Style::sharp());
        writeln!(self.output, "{}", table)?;

        loop {
            write!(self.output, "Select a secret [1-{}]: ", names.len())?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            match parse_choice(&answer, names.len()) {
                Ok(index) => return Ok(Some(index)),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn notify(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }
}

/// Parse a 1-based choice into a 0-based index.
///
/// The error is the diagnostic to show before prompting again.
pub fn parse_choice(input: &str, count: usize) -> std::result::Result<usize, String> {
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;

    if (1..=count).contains(&n) {
        Ok(n - 1)
    } else {
        Err(format!("choose a number between 1 and {}", count))
    }
}

/// Names listed from the namespace, classified by how to ask about them.
enum Candidates {
    Empty,
    Single(SecretName),
    Multiple(Vec<SecretName>),
}

impl From<Vec<SecretName>> for Candidates {
    fn from(mut names: Vec<SecretName>) -> Self {
        match names.len() {
            0 => Self::Empty,
            1 => Self::Single(names.remove(0)),
            _ => Self::Multiple(names),
        }
    }
}

/// Lists secrets and lets the operator choose exactly one.
pub struct SelectionFlow<'a> {
    interactive: Option<Box<dyn Picker + 'a>>,
    fallback: Box<dyn Picker + 'a>,
}

impl SelectionFlow<'static> {
    /// Flow for the current process: menu if the terminal allows it.
    pub fn for_terminal() -> Self {
        SelectionFlow::new(NumberedPicker::stdio()).with_interactive(InteractivePicker::probe())
    }
}

impl<'a> SelectionFlow<'a> {
    /// Flow that only uses `fallback`.
    pub fn new(fallback: impl Picker + 'a) -> Self {
        Self {
            interactive: None,
            fallback: Box::new(fallback),
        }
    }

    /// Prefer `interactive` when present, falling back on abort or failure.
    pub fn with_interactive(mut self, interactive: Option<impl Picker + 'a>) -> Self {
        self.interactive = interactive.map(|p| Box::new(p) as Box<dyn Picker + 'a>);
        self
    }

    /// Run the flow against `cluster`.
    pub fn run(&mut self, cluster: &dyn Cluster) -> Result<Selection> {
        let Some(names) = cluster.list_names()? else {
            return Ok(Selection::Cancelled);
        };

        match Candidates::from(names) {
            Candidates::Empty => {
                self.active().notify("no secrets found")?;
                Ok(Selection::Cancelled)
            }
            Candidates::Single(name) => self.confirm(name),
            Candidates::Multiple(names) => self.pick(names),
        }
    }

    fn active(&mut self) -> &mut (dyn Picker + 'a) {
        match self.interactive.as_mut() {
            Some(p) => p.as_mut(),
            None => self.fallback.as_mut(),
        }
    }

    fn confirm(&mut self, name: SecretName) -> Result<Selection> {
        let answer = match self.interactive.as_mut().map(|p| p.confirm(&name)) {
            Some(Ok(answer)) => answer,
            Some(Err(e)) if e.is_interrupted() => {
                debug!("confirm interrupted");
                return Ok(Selection::Cancelled);
            }
            Some(Err(e)) => {
                debug!(error = %e, "interactive confirm failed, using numbered prompt");
                self.fallback.confirm(&name)?
            }
            None => self.fallback.confirm(&name)?,
        };

        Ok(match answer {
            Some(true) => Selection::Chosen(name),
            _ => Selection::Cancelled,
        })
    }

    fn pick(&mut self, mut names: Vec<SecretName>) -> Result<Selection> {
        if let Some(picker) = self.interactive.as_mut() {
            match picker.pick_one(&names) {
                Ok(Some(i)) if i < names.len() => {
                    return Ok(Selection::Chosen(names.swap_remove(i)))
                }
                Ok(_) => debug!("interactive picker aborted, using numbered prompt"),
                Err(e) if e.is_interrupted() => {
                    debug!("interactive picker interrupted");
                    return Ok(Selection::Cancelled);
                }
                Err(e) => debug!(error = %e, "interactive picker failed, using numbered prompt"),
            }
        }

        Ok(match self.fallback.pick_one(&names)? {
            Some(i) if i < names.len() => Selection::Chosen(names.swap_remove(i)),
            _ => Selection::Cancelled,
        })
    }
}
