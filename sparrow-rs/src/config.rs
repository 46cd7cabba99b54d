//! rc-file parser for benchmark settings.
//!
//! | Directive | Action |
//! |-----------|--------|
//! | `/set <name>=<value>` or `/set <name> <value>` | set a script parameter |
//! | Lines starting with `;` | comment, ignored |
//! | Any other `/command` | silently skipped |
//!
//! Recognised names: `sum_end`, `greet_count`, `greeting`, `quiet`.

use std::path::Path;

use crate::cli::CliArgs;
use crate::script::ScriptParams;

// ── Public API ────────────────────────────────────────────────────────────────

/// A non-fatal error encountered while loading an rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Settings gathered from the rc file and the command line.
#[derive(Debug, Default)]
pub struct Config {
    pub params: ScriptParams,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an rc string.
    ///
    /// A bad line does not stop loading: its error is collected and the
    /// remaining lines are still applied.
    pub fn load_str(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Config::new();
        let mut errors = Vec::new();

        for (i, raw) in s.lines().enumerate() {
            let lineno = i + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let Some(rest) = line.strip_prefix('/') else { continue };

            let (cmd, args_str) = rest
                .split_once(|c: char| c.is_ascii_whitespace())
                .unwrap_or((rest, ""));

            if cmd == "set" {
                let tokens = split_args(args_str.trim());
                if let Err(msg) = parse_set(&tokens, &mut config.params) {
                    errors.push(ConfigError { line: lineno, message: msg });
                }
            }
        }

        (config, errors)
    }

    /// Read and parse an rc file from disk.
    pub fn load_file(path: &Path) -> std::io::Result<(Self, Vec<ConfigError>)> {
        let s = std::fs::read_to_string(path)?;
        Ok(Self::load_str(&s))
    }

    /// Command-line overrides win over the rc file.
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(n) = args.sum_end {
            self.params.sum_end = n;
        }
        if let Some(n) = args.greet_count {
            self.params.greet_count = n;
        }
        if let Some(g) = &args.greeting {
            self.params.greeting = g.clone();
        }
        if args.quiet {
            self.params.quiet = true;
        }
    }
}

// ── Argument tokenizer ────────────────────────────────────────────────────────

/// Split `s` into whitespace-delimited tokens, honouring double-quoted strings
/// and `\"` escapes within them.
fn split_args(s: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    cur.push(escaped);
                }
            }
            c if c.is_ascii_whitespace() && !in_quotes => {
                if !cur.is_empty() {
                    args.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if !cur.is_empty() {
        args.push(cur);
    }
    args
}

// ── /set ──────────────────────────────────────────────────────────────────────

fn parse_set(tokens: &[String], params: &mut ScriptParams) -> Result<(), String> {
    let Some(first) = tokens.first() else {
        return Err("/set: requires an argument".into());
    };

    let (name, value) = if let Some((n, v)) = first.split_once('=') {
        let mut value = v.to_owned();
        for t in &tokens[1..] {
            value.push(' ');
            value.push_str(t);
        }
        (n.to_owned(), value)
    } else if tokens.len() >= 2 {
        (first.clone(), tokens[1..].join(" "))
    } else {
        return Err(format!("/set: missing value for '{first}'"));
    };

    match name.as_str() {
        "" => Err("/set: variable name cannot be empty".into()),
        "sum_end" => {
            params.sum_end = parse_int(&name, &value)?;
            Ok(())
        }
        "greet_count" => {
            params.greet_count = parse_int(&name, &value)?;
            Ok(())
        }
        "greeting" => {
            params.greeting = value;
            Ok(())
        }
        "quiet" => {
            params.quiet = parse_flag(&name, &value)?;
            Ok(())
        }
        other => Err(format!("/set: unknown variable '{other}'")),
    }
}

fn parse_int(name: &str, value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("/set: {name} expects an integer, got '{value}'"))
}

fn parse_flag(name: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "yes" | "true" => Ok(true),
        "0" | "off" | "no" | "false" => Ok(false),
        _ => Err(format!("/set: {name} expects on/off, got '{value}'")),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
