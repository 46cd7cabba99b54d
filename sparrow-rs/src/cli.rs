//! Command-line argument parsing.
//!
//! Usage:
//!   sparrow-bench [-f[<file>]] [-e<end>] [-r<count>] [-dq] [<greeting>]
//!
//! `-f <word>` always takes `<word>` as the rc file; use `-f -- <greeting>`
//! to skip the rc file and still pass a greeting.

use std::path::PathBuf;

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Which rc file to load.
    pub config: ConfigFile,
    /// Sum bound override (`-e<end>`).
    pub sum_end: Option<i64>,
    /// Greeting repeat override (`-r<count>`).
    pub greet_count: Option<i64>,
    /// Greeting text override (positional).
    pub greeting: Option<String>,
    /// Suppress the `foo` greetings (`-q`).
    pub quiet: bool,
    /// Debug diagnostics (`-d`).
    pub debug: bool,
}

/// How to choose the rc file.
#[derive(Debug, Default)]
pub enum ConfigFile {
    /// Search the standard locations (default).
    #[default]
    Search,
    /// `-f` with no file argument: skip the rc file.
    Skip,
    /// `-f<file>`: load this specific file.
    Explicit(PathBuf),
}

pub const USAGE: &str = "\
Usage: sparrow-bench [-f[<file>]] [-e<end>] [-r<count>] [-dq] [<greeting>]
       sparrow-bench -f -- <greeting>   (skip the rc file, keep the greeting)";

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut positional: Vec<String> = Vec::new();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        // `--` ends flag processing.
        if arg == "--" {
            positional.extend(argv[i + 1..].iter().cloned());
            break;
        }

        if !arg.starts_with('-') || arg == "-" {
            positional.push(arg.to_owned());
            i += 1;
            continue;
        }

        let chars: Vec<char> = arg[1..].chars().collect();
        let mut j = 0;
        while j < chars.len() {
            match chars[j] {
                'd' => args.debug = true,
                'q' => args.quiet = true,

                // -f[<file>]
                'f' => {
                    if j + 1 < chars.len() {
                        let file: String = chars[j + 1..].iter().collect();
                        args.config = ConfigFile::Explicit(PathBuf::from(file));
                        j = chars.len();
                    } else if i + 1 < argv.len() && !argv[i + 1].starts_with('-') {
                        i += 1;
                        args.config = ConfigFile::Explicit(PathBuf::from(&argv[i]));
                    } else {
                        args.config = ConfigFile::Skip;
                    }
                }

                // -e<end> / -r<count>
                flag @ ('e' | 'r') => {
                    let raw = if j + 1 < chars.len() {
                        let s: String = chars[j + 1..].iter().collect();
                        j = chars.len();
                        s
                    } else if i + 1 < argv.len() {
                        i += 1;
                        argv[i].clone()
                    } else {
                        return Err(format!("-{flag} requires a number"));
                    };
                    let n: i64 = raw
                        .trim()
                        .parse()
                        .map_err(|_| format!("invalid number for -{flag}: {raw}"))?;
                    if flag == 'e' {
                        args.sum_end = Some(n);
                    } else {
                        args.greet_count = Some(n);
                    }
                }

                c => return Err(format!("unknown option: -{c}")),
            }
            j += 1;
        }
        i += 1;
    }

    match positional.len() {
        0 => {}
        1 => args.greeting = positional.pop(),
        n => return Err(format!("too many arguments ({n})")),
    }

    Ok(args)
}

// ── Path helpers ──────────────────────────────────────────────────────────────

/// Candidate rc-file locations, in search order.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(home) = std::env::var("HOME") {
        let home = PathBuf::from(home);
        paths.push(home.join(".sparrowrc"));
        paths.push(home.join("sparrowrc"));
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", "sparrow-bench") {
        paths.push(dirs.config_dir().join("benchrc"));
    }
    paths.push(PathBuf::from("./.sparrowrc"));
    paths.push(PathBuf::from("./sparrowrc"));
    paths
}

/// Search for the user rc file in the standard locations.
/// Returns the first path that exists, or `None`.
pub fn find_user_config() -> Option<PathBuf> {
    config_candidates().into_iter().find(|p| p.exists())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn empty_args() {
        let a = parse_argv(&argv(&[])).unwrap();
        assert!(!a.debug && !a.quiet);
        assert!(matches!(a.config, ConfigFile::Search));
        assert_eq!(a.sum_end, None);
        assert_eq!(a.greet_count, None);
        assert_eq!(a.greeting, None);
    }

    #[test]
    fn bool_flags() {
        let a = parse_argv(&argv(&["-d", "-q"])).unwrap();
        assert!(a.debug);
        assert!(a.quiet);
    }

    #[test]
    fn combined_bool_flags() {
        let a = parse_argv(&argv(&["-dq"])).unwrap();
        assert!(a.debug && a.quiet);
    }

    #[test]
    fn sum_end_embedded() {
        let a = parse_argv(&argv(&["-e100"])).unwrap();
        assert_eq!(a.sum_end, Some(100));
    }

    #[test]
    fn sum_end_separate() {
        let a = parse_argv(&argv(&["-e", "100"])).unwrap();
        assert_eq!(a.sum_end, Some(100));
    }

    #[test]
    fn repeat_after_bool_flag() {
        let a = parse_argv(&argv(&["-dr3"])).unwrap();
        assert!(a.debug);
        assert_eq!(a.greet_count, Some(3));
    }

    #[test]
    fn negative_count_is_accepted() {
        let a = parse_argv(&argv(&["-r", "-1"])).unwrap();
        assert_eq!(a.greet_count, Some(-1));
    }

    #[test]
    fn bad_number() {
        assert!(parse_argv(&argv(&["-eten"])).is_err());
    }

    #[test]
    fn missing_number() {
        assert!(parse_argv(&argv(&["-r"])).is_err());
    }

    #[test]
    fn config_skip() {
        let a = parse_argv(&argv(&["-f"])).unwrap();
        assert!(matches!(a.config, ConfigFile::Skip));
    }

    #[test]
    fn config_explicit_embedded() {
        let a = parse_argv(&argv(&["-fbench.rc"])).unwrap();
        assert!(matches!(&a.config, ConfigFile::Explicit(p) if p == &PathBuf::from("bench.rc")));
    }

    #[test]
    fn config_explicit_separate() {
        let a = parse_argv(&argv(&["-f", "bench.rc"])).unwrap();
        assert!(matches!(&a.config, ConfigFile::Explicit(p) if p == &PathBuf::from("bench.rc")));
    }

    #[test]
    fn word_after_f_is_rc_path() {
        let a = parse_argv(&argv(&["-f", "Hi"])).unwrap();
        assert!(matches!(&a.config, ConfigFile::Explicit(p) if p == &PathBuf::from("Hi")));
        assert_eq!(a.greeting, None);
    }

    #[test]
    fn skip_rc_then_greeting_via_double_dash() {
        let a = parse_argv(&argv(&["-f", "--", "Hi"])).unwrap();
        assert!(matches!(a.config, ConfigFile::Skip));
        assert_eq!(a.greeting.as_deref(), Some("Hi"));
    }

    #[test]
    fn usage_mentions_double_dash() {
        assert!(USAGE.contains("-f -- <greeting>"));
    }

    #[test]
    fn greeting_positional() {
        let a = parse_argv(&argv(&["Hi there"])).unwrap();
        assert_eq!(a.greeting.as_deref(), Some("Hi there"));
    }

    #[test]
    fn double_dash_allows_dash_greeting() {
        let a = parse_argv(&argv(&["--", "-x-"])).unwrap();
        assert_eq!(a.greeting.as_deref(), Some("-x-"));
    }

    #[test]
    fn too_many_positional() {
        assert!(parse_argv(&argv(&["a", "b"])).is_err());
    }

    #[test]
    fn unknown_flag() {
        assert!(parse_argv(&argv(&["-z"])).is_err());
    }

    #[test]
    fn candidates_end_with_cwd() {
        let c = config_candidates();
        assert_eq!(c.last(), Some(&PathBuf::from("./sparrowrc")));
    }
}
