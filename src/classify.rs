// src/classify.rs
// The suspicion heuristic. Pure: records in, verdict out, nothing else.
//
// Thresholds are calibrated against observed top-tier legitimate players on
// the tracked server, not derived from any formula.

use crate::model::{MainStats, Verdict, WEAPON_SLOTS, WeaponRecord};

/// Fewer kills than this is too little data to judge at all.
pub const MIN_KILLS: u32 = 8;
/// A weapon with fewer hits than this is too small a sample to judge.
pub const MIN_WEAPON_HITS: u32 = 20;
/// Legit players land roughly 40-55% of their hits dead-center.
pub const MIDDLE_PCT_CEILING: f64 = 62.0;
/// The best observed legit accuracy sits around 26%.
pub const ACCURACY_FLOOR: f64 = 27.0;
/// The best observed legit headshot ratios top out around 60-63%.
pub const HEADSHOT_RATIO_FLOOR: f64 = 65.0;
/// The best observed legit kill/death ratios top out around 4.1-4.2.
pub const KILL_DEATH_FLOOR: f64 = 4.3;

/// Decide whether a player's numbers look like cheating.
///
/// `weapons` is most-hit-first. A small sample on the first weapon clears
/// the player outright, so the center-hit rule only ever applies to the
/// first weapon when its sample is already large enough; a small sample on
/// a later weapon just ends the weapon checks (the remaining weapons have
/// even less data) while the profile rules still apply. A raised mark is
/// never unset.
pub fn evaluate(weapons: &[WeaponRecord; WEAPON_SLOTS], stats: &MainStats) -> Verdict {
    if stats.kills < MIN_KILLS {
        return Verdict::Clean;
    }

    let mut suspicious = false;

    for (i, weapon) in weapons.iter().enumerate() {
        if i == 0 && weapon.hits < MIN_WEAPON_HITS {
            return Verdict::Clean;
        } else if weapon.hits < MIN_WEAPON_HITS {
            break;
        } else if weapon.middle_pct > MIDDLE_PCT_CEILING {
            suspicious = true;
        }
    }

    if stats.accuracy_pct >= ACCURACY_FLOOR && stats.headshot_ratio_pct >= HEADSHOT_RATIO_FLOOR
        || stats.kill_death_ratio >= KILL_DEATH_FLOOR
    {
        suspicious = true;
    }

    if suspicious {
        Verdict::Suspicious
    } else {
        Verdict::Clean
    }
}
