//! Ctrl-C handling.
//!
//! An interrupt while the operator is choosing a secret means "no selection":
//! the terminal is restored and the process exits 0. Anywhere else it exits
//! with the shell's 130.

use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;

use crate::error::Result;

static PROMPTING: AtomicBool = AtomicBool::new(false);

/// Exit status for an interrupt, depending on whether a prompt was open.
pub fn exit_code(prompting: bool) -> i32 {
    if prompting {
        0
    } else {
        130
    }
}

/// Install the process-wide handler. Call at most once.
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        let term = Term::stderr();
        let _ = term.show_cursor();
        let _ = term.write_line("");
        std::process::exit(exit_code(is_prompting()));
    })?;
    Ok(())
}

/// Marks a prompt as open until dropped.
#[must_use]
pub struct PromptGuard(());

impl Drop for PromptGuard {
    fn drop(&mut self) {
        PROMPTING.store(false, Ordering::SeqCst);
    }
}

pub fn prompting() -> PromptGuard {
    PROMPTING.store(true, Ordering::SeqCst);
    PromptGuard(())
}

pub fn is_prompting() -> bool {
    PROMPTING.load(Ordering::SeqCst)
}
