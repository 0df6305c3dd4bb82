// src/report.rs
// Fixed-layout report for a flagged player. Values are printed with
// `Display`, so the report is lossless for the fields it shows.

use crate::log::RunLog;
use crate::model::{MainStats, WEAPON_SLOTS, WeaponRecord};
use crate::notify::Notify;

const DIVIDER: &str = "_________________________________________________________________________________________________________________";

const WEAPON_LABELS: [&str; WEAPON_SLOTS] = ["First", "Second", "Third"];

pub fn render(stats: &MainStats, weapons: &[WeaponRecord; WEAPON_SLOTS]) -> String {
    let mut text = String::from("Suspicious player found!\n\nUser information:\n");
    section(&mut text, format!("Name: {}", stats.name));
    section(&mut text, format!("Points: {}", stats.points));
    section(&mut text, format!("KD ratio: {}", stats.kill_death_ratio));
    section(&mut text, format!("Accuracy: {}%", stats.accuracy_pct));
    section(&mut text, format!("Kills: {}", stats.kills));
    section(&mut text, format!("Headshots: {}", stats.headshots));
    section(&mut text, format!("HS ratio: {}%", stats.headshot_ratio_pct));
    text.push_str(DIVIDER);
    text.push_str("\n\nWeapon information:\n");
    for (label, weapon) in WEAPON_LABELS.iter().zip(weapons) {
        section(
            &mut text,
            format!(
                "{label}: Hits - {}; left - {}%; middle - {}%; right - {}%",
                weapon.hits, weapon.left_pct, weapon.middle_pct, weapon.right_pct
            ),
        );
    }
    text.push_str(DIVIDER);
    text.push('\n');
    text
}

fn section(text: &mut String, line: String) {
    text.push_str(DIVIDER);
    text.push('\n');
    text.push_str(&line);
    text.push('\n');
}

/// Deliver a rendered report: stdout, the run log at warning level, and one
/// desktop notification. Called only on a positive verdict; a clean player
/// has no side effects at all.
pub fn announce(report: &str, log: &dyn RunLog, notify: &dyn Notify) {
    println!("{report}");
    log.warning(report);
    notify.suspicious_player();
}
