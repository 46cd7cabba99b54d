//! Built-in functions the sample script leans on.
//!
//! - [`print`] / [`error`] — concatenate values to stdout / stderr, no
//!   implicit newline
//! - [`msec`] — monotonic microsecond timestamp
//! - [`range`] — eager, end-exclusive list builder (the list-producing
//!   sibling of [`Loop`](crate::range::Loop))

use std::fmt;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

use crate::value::Value;

// ── Output ────────────────────────────────────────────────────────────────────

/// Write every argument to `out` back to back.  Nothing is written for an
/// empty argument list.
pub fn print_to<W: Write + ?Sized>(out: &mut W, args: &[Value]) -> io::Result<()> {
    if args.is_empty() {
        return Ok(());
    }
    let mut buf = String::with_capacity(128);
    for arg in args {
        use std::fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = write!(buf, "{arg}");
    }
    out.write_all(buf.as_bytes())
}

/// `print(args…)` on standard output.
pub fn print(args: &[Value]) -> io::Result<()> {
    print_to(&mut io::stdout().lock(), args)
}

/// `error(args…)` on standard error, flushed immediately.
pub fn error(args: &[Value]) -> io::Result<()> {
    let mut err = io::stderr().lock();
    print_to(&mut err, args)?;
    err.flush()
}

// ── Clock ─────────────────────────────────────────────────────────────────────

fn epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

/// Microseconds elapsed since the first call in this process.
///
/// Backed by [`Instant`], so successive readings never decrease.
pub fn msec() -> u64 {
    let us = epoch().elapsed().as_micros();
    u64::try_from(us).unwrap_or(u64::MAX)
}

// ── range() ───────────────────────────────────────────────────────────────────

/// Why [`range`] refused its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// `step` was zero.
    ZeroStep,
    /// `step` does not move `start` toward `end` (or `start == end`).
    InvalidStep { start: i64, end: i64, step: i64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::ZeroStep => write!(f, "function range's argument step is out of range"),
            RangeError::InvalidStep { start, end, step } => write!(
                f,
                "function range's step argument is invalid (start {start}, end {end}, step {step})"
            ),
        }
    }
}

impl std::error::Error for RangeError {}

/// Build the list `start, start+step, … < end`.
///
/// `end - start` and `step` must have the same sign.  Counting downward
/// passes validation but produces an empty list, since the fill condition
/// is always `value < end`.
pub fn range(start: i64, end: i64, step: i64) -> Result<Vec<i64>, RangeError> {
    if step == 0 {
        return Err(RangeError::ZeroStep);
    }
    let span = end as i128 - start as i128;
    if span * (step as i128) <= 0 {
        return Err(RangeError::InvalidStep { start, end, step });
    }

    let hint = if step > 0 { span / step as i128 } else { 0 };
    let mut out = Vec::with_capacity(hint.min(1 << 16) as usize);
    let mut cur = start;
    while cur < end {
        out.push(cur);
        match cur.checked_add(step) {
            Some(n) => cur = n,
            None => break,
        }
    }
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
