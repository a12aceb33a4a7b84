//! Terminal output for kubesecret.
//!
//! Stdout carries only the payload (a decoded table or a YAML manifest).
//! Status lines, prompts and diagnostics go to stderr, except the export
//! confirmation. Styling is dropped when `NO_COLOR` is set.

use console::{style, StyledObject};
use std::fmt::Display;
use std::io::{self, Write};

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Apply `f` unless colors are off.
fn paint<D: Display>(value: D, f: impl FnOnce(StyledObject<D>) -> StyledObject<D>) -> String {
    if colors_enabled() {
        f(style(value)).to_string()
    } else {
        value.to_string()
    }
}

/// `✓ <msg>` on stdout.
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", |s| s.green()), msg);
}

/// `✗ <msg>` on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", |s| s.red()), msg);
}

/// `→ <msg>` on stderr.
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint("→", |s| s.cyan()), paint(msg, |s| s.cyan()));
}

/// A bold title.
pub fn header(title: &str) -> String {
    paint(title, |s| s.bold())
}

/// One indented `label  value` diagnostic line on stderr.
pub fn kv(label: &str, value: impl Display) {
    eprintln!("  {}  {}", paint(label, |s| s.dim()), paint(value, |s| s.bold()));
}

pub fn name(n: &str) -> String {
    paint(n, |s| s.cyan())
}

pub fn path(p: impl Display) -> String {
    paint(p, |s| s.cyan())
}

/// Secondary note on stdout, e.g. `no keys`.
pub fn dimmed(msg: &str) {
    println!("{}", paint(msg, |s| s.dim()));
}

/// Write `text` to stdout verbatim.
///
/// A closed pipe or full device comes back as an error instead of a panic.
pub fn raw(text: &str) -> io::Result<()> {
    write_raw(&mut io::stdout().lock(), text)
}

pub(crate) fn write_raw<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Kubectl's own output, indented, on stderr.
pub fn block(text: &str) {
    for line in text.lines() {
        eprintln!("    {}", line);
    }
}
