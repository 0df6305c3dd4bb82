// src/runner.rs
// One complete watcher pass: discover the active players, pull both pages
// for each, classify, report the suspicious ones. The process is meant to
// be invoked repeatedly by an external scheduler; no state is retained
// between passes.

use std::thread;
use std::time::Duration;

use crate::classify;
use crate::config::consts::REQUEST_PAUSE_MS;
use crate::config::options::RunOptions;
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::log::RunLog;
use crate::notify::Notify;
use crate::report;
use crate::specs::{profile, roster, weapons};

/// What one pass did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub players_seen: usize,
    pub players_evaluated: usize,
    pub suspicious: usize,
}

/// Run one pass. A failure on one player never stops the batch; a failure
/// on the main page yields an empty pass. Nothing here returns an error:
/// every failure is logged and swallowed.
pub fn run(
    options: &RunOptions,
    fetch: &dyn Fetch,
    log: &dyn RunLog,
    notify: &dyn Notify,
) -> RunSummary {
    log.info("Starting player discovery");

    let players = match roster::discover(fetch, &options.main_url) {
        Ok(players) => players,
        Err(e) => {
            if matches!(e, ScrapeError::Fetch(_)) {
                eprintln!("Error, page wasn't loaded.");
            }
            log.warning(&format!("Main page could not be read: {e}"));
            Vec::new()
        }
    };

    let mut summary = RunSummary {
        players_seen: players.len(),
        ..RunSummary::default()
    };

    for (i, player) in players.iter().enumerate() {
        if i > 0 {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
        }

        let weapon_records = match weapons::extract(fetch, &player.weapon_stats_url) {
            Ok(records) => records,
            Err(e) => {
                skip(log, &player.weapon_stats_url, &e);
                continue;
            }
        };
        let stats = match profile::extract(fetch, &player.profile_url) {
            Ok(stats) => stats,
            Err(e) => {
                skip(log, &player.profile_url, &e);
                continue;
            }
        };
        log.info(&format!("Player {} has been processed", player.profile_url));
        summary.players_evaluated += 1;

        if classify::evaluate(&weapon_records, &stats).is_suspicious() {
            summary.suspicious += 1;
            report::announce(&report::render(&stats, &weapon_records), log, notify);
        }
    }

    log.info(&format!(
        "Run finished: {} of {} players evaluated, {} suspicious",
        summary.players_evaluated, summary.players_seen, summary.suspicious
    ));
    summary
}

fn skip(log: &dyn RunLog, url: &str, error: &ScrapeError) {
    if matches!(error, ScrapeError::Fetch(_)) {
        eprintln!("Page couldn't be loaded.");
    }
    log.warning(&format!("Skipping {url}: {error}"));
}
