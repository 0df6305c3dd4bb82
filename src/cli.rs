// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::RunOptions;
use crate::core::net::HttpFetcher;
use crate::log::{FileLog, NullLog, RunLog};
use crate::notify::{DesktopNotifier, Notify, NullNotifier};
use crate::runner;

const HELP: &str = "\
Usage: hlstats_watch [--url <main stats url>] [--log <path>] [--no-notify]

One pass: discover the active players, read their stats, flag the
suspicious ones. Run it from a scheduler for continuous watching.

  --url <url>   Main stats page to discover players from
  --log <path>  Append the run log here (default: log.txt)
  --no-notify   Skip desktop notifications
  -h, --help    Show this help";

/// Parse arguments and run one pass. Never exits nonzero: every error path
/// is printed and/or logged and swallowed.
pub fn run() {
    let options = match parse_cli() {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{HELP}");
            return;
        }
    };

    // A log file we cannot open degrades to no logging; the pass still runs.
    let log: Box<dyn RunLog> = match FileLog::open(&options.log_path) {
        Ok(file_log) => Box::new(file_log),
        Err(e) => {
            eprintln!("Could not open {}: {e}", options.log_path.display());
            Box::new(NullLog)
        }
    };
    let notify: Box<dyn Notify> = if options.notify {
        Box::new(DesktopNotifier)
    } else {
        Box::new(NullNotifier)
    };

    runner::run(&options, &HttpFetcher::new(), log.as_ref(), notify.as_ref());
}

fn parse_cli() -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                options.main_url = args.next().ok_or("Missing value for --url")?;
            }
            "--log" => {
                options.log_path = PathBuf::from(args.next().ok_or("Missing value for --log")?);
            }
            "--no-notify" => options.notify = false,
            "-h" | "--help" => {
                println!("{HELP}");
                std::process::exit(0);
            }
            other => return Err(format!("Unknown arg: {other}")),
        }
    }
    Ok(options)
}
