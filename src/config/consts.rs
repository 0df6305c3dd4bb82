// src/config/consts.rs

// Site
pub const SITE_ORIGIN: &str = "https://ugc-gaming.net";
pub const MAIN_STATS_URL: &str = "https://ugc-gaming.net/stats/cs/hlstats.php?game=d2only";

/// Weapon-stats page for one player. Everything except the player id is
/// fixed: ajax player info, the d2only game filter, the weapons tab,
/// kill limit 5, sorted most-hit weapon first.
pub fn weapon_stats_url(player_id: &str) -> String {
    format!(
        "{SITE_ORIGIN}/stats/cs/hlstats.php?mode=playerinfo&type=ajax&game=d2only&tab=weapons\
         &player={player_id}&killLimit=5&weap_sort=smhits&weap_sortorder=desc#tabweapons"
    )
}

// Logging
pub const DEFAULT_LOG_PATH: &str = "log.txt";

// Notification
pub const NOTIFY_TITLE: &str = "Cheater detector";
pub const NOTIFY_BODY: &str = "A suspicious player has been found, check the log!";
pub const NOTIFY_TIMEOUT_SECS: u32 = 10;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
