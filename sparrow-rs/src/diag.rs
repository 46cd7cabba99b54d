//! Diagnostic messages on stderr.
//!
//! Every line is prefixed with the program name.  Debug lines are only
//! emitted when `-d` was given.

use std::fmt;
use std::io::{self, Write};

pub const PROGRAM: &str = "sparrow-bench";

/// Where diagnostics go, and whether debug lines are wanted.
pub struct Diagnostics {
    debug: bool,
    sink: Box<dyn Write>,
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").field("debug", &self.debug).finish()
    }
}

impl Diagnostics {
    /// Diagnostics on the process's stderr.
    pub fn stderr(debug: bool) -> Self {
        Self::with_sink(debug, Box::new(io::stderr()))
    }

    pub fn with_sink(debug: bool, sink: Box<dyn Write>) -> Self {
        Diagnostics { debug, sink }
    }

    /// `sparrow-bench: <msg>`
    pub fn error(&mut self, msg: impl fmt::Display) {
        self.line(format_args!("{msg}"));
    }

    /// `sparrow-bench: warning: <msg>`
    pub fn warn(&mut self, msg: impl fmt::Display) {
        self.line(format_args!("warning: {msg}"));
    }

    /// `sparrow-bench: debug: <msg>`, only under `-d`.
    pub fn debug(&mut self, msg: impl fmt::Display) {
        if self.debug {
            self.line(format_args!("debug: {msg}"));
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        // Nowhere left to report a failing stderr.
        let _ = writeln!(self.sink, "{PROGRAM}: {args}");
        let _ = self.sink.flush();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
