// src/specs/roster.rs
// Who is on the server right now? The main stats page shows the live
// player list in the third `livestats-table`.

use regex::Regex;

use crate::config::consts::{SITE_ORIGIN, weapon_stats_url};
use crate::core::doc::Document;
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::model::PlayerRef;

/// Index of the live-players table among the page's `livestats-table`s.
const LIVE_PLAYERS_TABLE: usize = 2;

/// Fetch the main stats page and list the currently active players, in
/// page order.
///
/// Every anchor in the live-players table is one player: its href gives the
/// profile URL, and the numeric player id inside the href parameterizes the
/// weapon-stats URL. Anchors without a parsable id are skipped; a single
/// odd anchor must not take the whole roster down.
pub fn discover(fetch: &dyn Fetch, main_url: &str) -> Result<Vec<PlayerRef>, ScrapeError> {
    let html = fetch.fetch(main_url)?;
    parse(&html)
}

pub fn parse(html: &str) -> Result<Vec<PlayerRef>, ScrapeError> {
    let doc = Document::parse(html);
    let table = doc
        .nth_table_of_class("livestats-table", LIVE_PLAYERS_TABLE)
        .ok_or(ScrapeError::PageLayout {
            context: "live players table (third livestats-table)",
        })?;

    let id_pattern = Regex::new("[0-9]{1,10}").expect("valid player id pattern");

    let mut players = Vec::new();
    for href in table.anchor_hrefs() {
        let Some(id) = id_pattern.find(&href) else {
            continue;
        };
        players.push(PlayerRef {
            profile_url: format!("{SITE_ORIGIN}{href}"),
            weapon_stats_url: weapon_stats_url(id.as_str()),
        });
    }
    Ok(players)
}
