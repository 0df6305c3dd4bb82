// src/specs/weapons.rs
// A player's weapon-stats page: the second `data-table` lists weapons
// sorted most-hit first, one row per weapon.

use crate::core::doc::{Document, Row};
use crate::core::fields::{Cleanup, FieldSpec, OnNonNumeric};
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::model::{WEAPON_SLOTS, WeaponRecord};

/// Index of the weapon table among the page's `data-table`s.
const WEAPON_TABLE: usize = 1;
/// Leading cells per row (rank and weapon name) before the numbers start.
const LABEL_CELLS: usize = 2;

const HITS: FieldSpec = FieldSpec {
    name: "weapon hits",
    cleanups: &[Cleanup::StripSeparators],
    on_non_numeric: OnNonNumeric::Fail,
};

const ZONE_PCT: FieldSpec = FieldSpec {
    name: "hit zone percentage",
    cleanups: &[Cleanup::StripPercent],
    on_non_numeric: OnNonNumeric::Fail,
};

/// Fetch a player's weapon-stats page and extract the hit-zone records of
/// the up-to-3 most-hit weapons, zero-padded to exactly [`WEAPON_SLOTS`].
pub fn extract(
    fetch: &dyn Fetch,
    weapon_stats_url: &str,
) -> Result<[WeaponRecord; WEAPON_SLOTS], ScrapeError> {
    let html = fetch.fetch(weapon_stats_url)?;
    parse(&html)
}

pub fn parse(html: &str) -> Result<[WeaponRecord; WEAPON_SLOTS], ScrapeError> {
    let doc = Document::parse(html);
    let table = doc
        .nth_table_of_class("data-table", WEAPON_TABLE)
        .ok_or(ScrapeError::PageLayout {
            context: "weapon table (second data-table)",
        })?;

    let rows = table.rows_excluding_header();
    if rows.is_empty() {
        // The stats backend generates this page lazily; a player fresh on
        // the server has no rows yet.
        return Err(ScrapeError::PageLayout {
            context: "weapon table has no data rows",
        });
    }

    let mut records = Vec::with_capacity(WEAPON_SLOTS);
    for row in rows.iter().take(WEAPON_SLOTS) {
        records.push(parse_row(row)?);
    }
    Ok(normalize(records))
}

/// One weapon row: after the rank and name cells come hits, left%,
/// middle%, right%. Anything after those four is ignored.
fn parse_row(row: &Row<'_>) -> Result<WeaponRecord, ScrapeError> {
    let cells = row.cell_texts();
    let values = cells.get(LABEL_CELLS..LABEL_CELLS + 4).ok_or(
        ScrapeError::PageLayout {
            context: "weapon row has too few cells",
        },
    )?;
    Ok(WeaponRecord {
        hits: HITS.parse_u32(&values[0])?,
        left_pct: ZONE_PCT.parse_float(&values[1])?,
        middle_pct: ZONE_PCT.parse_float(&values[2])?,
        right_pct: ZONE_PCT.parse_float(&values[3])?,
    })
}

/// Truncate to the [`WEAPON_SLOTS`] most-hit weapons and zero-pad missing
/// slots, so the classifier can always rely on exactly 3 records in
/// most-hit-first order.
pub fn normalize(mut records: Vec<WeaponRecord>) -> [WeaponRecord; WEAPON_SLOTS] {
    records.truncate(WEAPON_SLOTS);
    let mut out = [WeaponRecord::ZERO; WEAPON_SLOTS];
    for (slot, record) in out.iter_mut().zip(records) {
        *slot = record;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon_page(rows: &[(&str, &str, &str, &str)]) -> String {
        let body: String = rows
            .iter()
            .map(|(hits, left, middle, right)| {
                format!(
                    "<tr><td>1</td><td>ak47</td><td>{hits}</td>\
                     <td>{left}</td><td>{middle}</td><td>{right}</td></tr>"
                )
            })
            .collect();
        format!(
            r#"<html><body>
            <table class="data-table"><tr><td>summary</td></tr></table>
            <table class="data-table">
            <tr><th>#</th><th>Weapon</th><th>Hits</th><th>L</th><th>M</th><th>R</th></tr>
            {body}
            </table></body></html>"#
        )
    }

    #[test]
    fn three_rows_parse_in_order() {
        let html = weapon_page(&[
            ("1,024", "30.0%", "50.5%", "19.5%"),
            ("200", "25%", "60%", "15%"),
            ("31", "10%", "80%", "10%"),
        ]);
        let records = parse(&html).unwrap();
        assert_eq!(records[0].hits, 1024);
        assert_eq!(records[0].middle_pct, 50.5);
        assert_eq!(records[1].hits, 200);
        assert_eq!(records[2].right_pct, 10.0);
    }

    #[test]
    fn short_list_is_zero_padded() {
        let html = weapon_page(&[("40", "33%", "34%", "33%")]);
        let records = parse(&html).unwrap();
        assert_eq!(records[0].hits, 40);
        assert_eq!(records[1], WeaponRecord::ZERO);
        assert_eq!(records[2], WeaponRecord::ZERO);
    }

    #[test]
    fn only_first_three_rows_are_read() {
        let html = weapon_page(&[
            ("100", "1%", "1%", "1%"),
            ("90", "1%", "1%", "1%"),
            ("80", "1%", "1%", "1%"),
            ("70", "1%", "1%", "1%"),
        ]);
        let records = parse(&html).unwrap();
        assert_eq!(records[2].hits, 80);
    }

    #[test]
    fn empty_weapon_table_is_a_layout_error() {
        let html = weapon_page(&[]);
        assert!(matches!(parse(&html), Err(ScrapeError::PageLayout { .. })));
    }

    #[test]
    fn short_row_is_a_layout_error() {
        let html = r#"<html><body>
            <table class="data-table"></table>
            <table class="data-table">
            <tr><th>h</th></tr>
            <tr><td>1</td><td>deagle</td><td>55</td></tr>
            </table></body></html>"#;
        assert!(matches!(parse(html), Err(ScrapeError::PageLayout { .. })));
    }

    #[test]
    fn normalize_truncates_and_pads() {
        let one = WeaponRecord {
            hits: 9,
            left_pct: 1.0,
            middle_pct: 2.0,
            right_pct: 3.0,
        };
        let out = normalize(vec![one; 5]);
        assert_eq!(out, [one; 3]);
        let out = normalize(Vec::new());
        assert_eq!(out, [WeaponRecord::ZERO; 3]);
    }
}
