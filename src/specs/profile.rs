// src/specs/profile.rs
// A player's profile page: name from the page title, numbers from the
// second `data-table`. The row offsets below mirror the live site layout
// exactly; a mismatch fails the extraction for this player only.

use crate::core::doc::Document;
use crate::core::fields::{Cleanup, FieldSpec, OnNonNumeric};
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::model::{MainStats, headshot_ratio};

/// Index of the stats table among the page's `data-table`s.
const PROFILE_TABLE: usize = 1;
/// The stat rows sit at absolute row indices 2..=10.
const STAT_ROWS_START: usize = 2;
const STAT_ROWS_LEN: usize = 9;
/// Values sit in the second cell of each stat row.
const VALUE_CELL: usize = 1;

// Offsets within the stat-row window.
const ROW_POINTS: usize = 0;
const ROW_KILL_DEATH: usize = 3;
const ROW_ACCURACY: usize = 6;
const ROW_HEADSHOTS: usize = 7;
const ROW_KILLS: usize = 8;

/// The title reads `... - ... - ... - ... - <name> - ...`; the display
/// name is this " - " segment.
const TITLE_NAME_SEGMENT: usize = 4;

const POINTS: FieldSpec = FieldSpec {
    name: "points",
    cleanups: &[Cleanup::StripSeparators],
    on_non_numeric: OnNonNumeric::Fail,
};

// The site shows "-" when a player has zero deaths.
const KILL_DEATH: FieldSpec = FieldSpec {
    name: "kill/death ratio",
    cleanups: &[Cleanup::BeforeSpace],
    on_non_numeric: OnNonNumeric::Zero,
};

const ACCURACY: FieldSpec = FieldSpec {
    name: "accuracy",
    cleanups: &[Cleanup::BeforeSpace, Cleanup::StripPercent],
    on_non_numeric: OnNonNumeric::Fail,
};

const HEADSHOTS: FieldSpec = FieldSpec {
    name: "headshots",
    cleanups: &[Cleanup::BeforeSpace, Cleanup::StripSeparators],
    on_non_numeric: OnNonNumeric::Fail,
};

const KILLS: FieldSpec = FieldSpec {
    name: "kills",
    cleanups: &[Cleanup::BeforeSpace, Cleanup::StripSeparators],
    on_non_numeric: OnNonNumeric::Fail,
};

/// Fetch a player's profile page and extract the summary record.
pub fn extract(fetch: &dyn Fetch, profile_url: &str) -> Result<MainStats, ScrapeError> {
    let html = fetch.fetch(profile_url)?;
    parse(&html)
}

pub fn parse(html: &str) -> Result<MainStats, ScrapeError> {
    let doc = Document::parse(html);
    let name = player_name(&doc)?;

    let table = doc
        .nth_table_of_class("data-table", PROFILE_TABLE)
        .ok_or(ScrapeError::PageLayout {
            context: "profile table (second data-table)",
        })?;
    let rows = table.rows();
    let stat_rows = rows
        .get(STAT_ROWS_START..STAT_ROWS_START + STAT_ROWS_LEN)
        .ok_or(ScrapeError::PageLayout {
            context: "profile table has too few rows",
        })?;

    let value = |offset: usize, context: &'static str| {
        stat_rows[offset]
            .cell_text(VALUE_CELL)
            .ok_or(ScrapeError::PageLayout { context })
    };

    let points = POINTS.parse_int(&value(ROW_POINTS, "points cell")?)?;
    let kill_death_ratio = KILL_DEATH.parse_float(&value(ROW_KILL_DEATH, "kill/death cell")?)?;
    let accuracy_pct = ACCURACY.parse_float(&value(ROW_ACCURACY, "accuracy cell")?)?;
    let headshots = HEADSHOTS.parse_u32(&value(ROW_HEADSHOTS, "headshots cell")?)?;
    let kills = KILLS.parse_u32(&value(ROW_KILLS, "kills cell")?)?;

    Ok(MainStats {
        name,
        points,
        kills,
        headshots,
        headshot_ratio_pct: headshot_ratio(headshots, kills),
        accuracy_pct,
        kill_death_ratio,
    })
}

fn player_name(doc: &Document) -> Result<String, ScrapeError> {
    let title = doc.title_text().ok_or(ScrapeError::PageLayout {
        context: "page title",
    })?;
    let name = title
        .split(" - ")
        .nth(TITLE_NAME_SEGMENT)
        .ok_or(ScrapeError::PageLayout {
            context: "player name segment in title",
        })?;
    Ok(name.trim().to_string())
}
