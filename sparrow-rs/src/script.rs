//! The sample script: `foo`, `fib`, `sum`, and the timed top-level body.
//!
//! ```rust
//! use sparrow_bench::script::{fib, sum};
//! use sparrow_bench::range::Loop;
//!
//! assert_eq!(fib(10), 89);
//! assert_eq!(sum(&Loop::new(1, 100, 1)), 5050);
//! ```

use std::io::{self, Write};

use crate::builtins::{msec, print_to};
use crate::range::{KeyValues, Loop};
use crate::value::Value;

/// Print `This is foo:<s>` followed by a newline.
pub fn foo<W: Write + ?Sized>(out: &mut W, s: &str) -> io::Result<()> {
    print_to(out, &[Value::from("This is foo:")])?;
    print_to(out, &[Value::from(s)])?;
    print_to(out, &[Value::from("\n")])
}

/// Fibonacci with the script's literal base case: `fib(x) = x` for `x <= 2`.
pub fn fib(x: i64) -> i64 {
    if x <= 2 {
        x
    } else {
        fib(x - 1) + fib(x - 2)
    }
}

/// Sum the values of a key/value container; keys are ignored.
pub fn sum<C>(list: &C) -> i64
where
    C: KeyValues<Value = i64> + ?Sized,
{
    let mut ret = 0;
    for (_k, v) in list.key_values() {
        ret += v;
    }
    ret
}

// ── Top-level body ────────────────────────────────────────────────────────────

/// Knobs for [`run`].  The defaults reproduce the original sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptParams {
    /// Upper bound (inclusive) of the timed sum.
    pub sum_end: i64,
    /// How many times `foo` is called.
    pub greet_count: i64,
    /// Argument passed to `foo`.
    pub greeting: String,
    /// Skip the `foo` calls entirely.
    pub quiet: bool,
}

impl Default for ScriptParams {
    fn default() -> Self {
        ScriptParams {
            sum_end: 10_000_000,
            greet_count: 10,
            greeting: "Hello World".to_owned(),
            quiet: false,
        }
    }
}

/// What the body measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub sum: i64,
    /// Microseconds spent summing and printing the sum.
    pub elapsed_us: u64,
    /// Number of `foo` calls actually made.
    pub greetings: u64,
}

/// Run the sample script body against `out`.
pub fn run<W: Write + ?Sized>(out: &mut W, params: &ScriptParams) -> io::Result<Report> {
    let start = msec();
    let mut sum_all: i64 = 0;
    for i in Loop::new(1, params.sum_end, 1) {
        sum_all += i;
    }
    print_to(out, &[Value::from("SUM : "), Value::Int(sum_all), Value::from("\n")])?;
    let end = msec();

    let elapsed_us = end - start;
    print_to(
        out,
        &[
            Value::from("Use time :"),
            Value::from(elapsed_us),
            Value::from(" micro seconds \n"),
        ],
    )?;

    let mut greetings = 0;
    if !params.quiet {
        for _ in Loop::new(1, params.greet_count, 1) {
            foo(out, &params.greeting)?;
            greetings += 1;
        }
    }
    out.flush()?;

    Ok(Report { sum: sum_all, elapsed_us, greetings })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
