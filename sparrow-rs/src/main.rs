use std::io;
use std::process::ExitCode;

use sparrow_bench::cli::{self, ConfigFile};
use sparrow_bench::config::Config;
use sparrow_bench::diag::Diagnostics;
use sparrow_bench::script;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            let mut diag = Diagnostics::stderr(false);
            diag.error(e);
            eprintln!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    let mut diag = Diagnostics::stderr(args.debug);

    // ── Load rc file ──────────────────────────────────────────────────────────
    let rc_path = match &args.config {
        ConfigFile::Skip => None,
        ConfigFile::Explicit(path) => Some(path.clone()),
        ConfigFile::Search => cli::find_user_config(),
    };

    let mut config = match &rc_path {
        None => {
            diag.debug("no rc file loaded");
            Config::new()
        }
        Some(path) => match Config::load_file(path) {
            Ok((config, errors)) => {
                diag.debug(format_args!("loaded {}", path.display()));
                for e in &errors {
                    diag.warn(format_args!("{}: {e}", path.display()));
                }
                config
            }
            Err(e) => {
                // An explicit file must load; a searched one is only a warning.
                if matches!(args.config, ConfigFile::Explicit(_)) {
                    diag.error(format_args!("can't read {}: {e}", path.display()));
                    return ExitCode::FAILURE;
                }
                diag.warn(format_args!("can't read {}: {e}", path.display()));
                Config::new()
            }
        },
    };
    config.apply_cli(&args);

    let params = &config.params;
    diag.debug(format_args!(
        "sum_end={} greet_count={} greeting={:?} quiet={}",
        params.sum_end, params.greet_count, params.greeting, params.quiet
    ));

    // ── Run the script body ───────────────────────────────────────────────────
    let mut out = io::stdout().lock();
    match script::run(&mut out, params) {
        Ok(report) => {
            diag.debug(format_args!(
                "sum={} elapsed={}us greetings={}",
                report.sum, report.elapsed_us, report.greetings
            ));
            ExitCode::SUCCESS
        }
        Err(e) => {
            diag.error(format_args!("write failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
