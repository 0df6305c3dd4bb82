// src/model.rs
// Plain data carried through one watcher pass. Nothing here outlives a run;
// there is no persistent store.

/// One currently active player, as discovered on the main stats page.
///
/// Both URLs are built from the same anchor, so they can never fall out of
/// step with each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRef {
    pub profile_url: String,
    pub weapon_stats_url: String,
}

/// How many weapon records a player always has after normalization.
pub const WEAPON_SLOTS: usize = 3;

/// One weapon's hit-zone distribution. Percentages are 0..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponRecord {
    pub hits: u32,
    pub left_pct: f64,
    pub middle_pct: f64,
    pub right_pct: f64,
}

impl WeaponRecord {
    /// Placeholder for a weapon slot the player has no data for.
    pub const ZERO: WeaponRecord = WeaponRecord {
        hits: 0,
        left_pct: 0.0,
        middle_pct: 0.0,
        right_pct: 0.0,
    };
}

/// A player's profile summary. `headshot_ratio_pct` is derived from
/// headshots and kills, never read off the page.
#[derive(Clone, Debug, PartialEq)]
pub struct MainStats {
    pub name: String,
    pub points: i64,
    pub kills: u32,
    pub headshots: u32,
    pub headshot_ratio_pct: f64,
    pub accuracy_pct: f64,
    pub kill_death_ratio: f64,
}

/// Outcome of one evaluation. Recomputed per pass, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Suspicious,
}

impl Verdict {
    pub fn is_suspicious(self) -> bool {
        matches!(self, Verdict::Suspicious)
    }
}

/// Headshots per kill as a percentage, rounded to one decimal.
/// Zero kills would divide by zero; that case is defined as 0.
pub fn headshot_ratio(headshots: u32, kills: u32) -> f64 {
    if kills == 0 {
        return 0.0;
    }
    (headshots as f64 / kills as f64 * 100.0 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headshot_ratio_zero_kills_is_zero() {
        assert_eq!(headshot_ratio(0, 0), 0.0);
        assert_eq!(headshot_ratio(5, 0), 0.0);
    }

    #[test]
    fn headshot_ratio_half() {
        assert_eq!(headshot_ratio(10, 20), 50.0);
    }

    #[test]
    fn headshot_ratio_rounds_to_one_decimal() {
        // 1/3 = 33.333..% -> 33.3
        assert_eq!(headshot_ratio(1, 3), 33.3);
        // 2/3 = 66.666..% -> 66.7
        assert_eq!(headshot_ratio(2, 3), 66.7);
    }
}
