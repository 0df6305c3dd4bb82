// tests/classifier.rs
// The suspicion heuristic, exercised through the public API.

use hlstats_watch::classify::evaluate;
use hlstats_watch::model::{MainStats, Verdict, WeaponRecord, headshot_ratio};

fn stats(kills: u32, accuracy_pct: f64, headshot_ratio_pct: f64, kill_death: f64) -> MainStats {
    MainStats {
        name: "player".to_string(),
        points: 1000,
        kills,
        headshots: 0,
        headshot_ratio_pct,
        accuracy_pct,
        kill_death_ratio: kill_death,
    }
}

fn weapon(hits: u32, middle_pct: f64) -> WeaponRecord {
    WeaponRecord {
        hits,
        left_pct: (100.0 - middle_pct) / 2.0,
        middle_pct,
        right_pct: (100.0 - middle_pct) / 2.0,
    }
}

fn benign_weapons() -> [WeaponRecord; 3] {
    [weapon(100, 50.0), weapon(60, 45.0), weapon(25, 40.0)]
}

#[test]
fn seven_kills_is_never_suspicious() {
    // Every other number screams cheater; the kill floor wins.
    let extreme = [weapon(500, 99.0); 3];
    let verdict = evaluate(&extreme, &stats(7, 99.0, 99.0, 99.0));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn eight_kills_crosses_the_floor() {
    let verdict = evaluate(&benign_weapons(), &stats(8, 99.0, 99.0, 99.0));
    assert_eq!(verdict, Verdict::Suspicious);
}

#[test]
fn small_first_weapon_sample_clears_outright() {
    // 19 hits on the primary weapon ends the evaluation, even though the
    // later weapons and the profile numbers would all trigger.
    let weapons = [weapon(19, 99.0), weapon(500, 99.0), weapon(500, 99.0)];
    let verdict = evaluate(&weapons, &stats(8, 99.0, 99.0, 99.0));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn center_hit_ceiling_flags() {
    let weapons = [weapon(25, 70.0), weapon(0, 0.0), weapon(0, 0.0)];
    let verdict = evaluate(&weapons, &stats(8, 10.0, 10.0, 1.0));
    assert_eq!(verdict, Verdict::Suspicious);
}

#[test]
fn center_hits_at_the_ceiling_pass() {
    let weapons = [weapon(25, 62.0), weapon(0, 0.0), weapon(0, 0.0)];
    let verdict = evaluate(&weapons, &stats(8, 10.0, 10.0, 1.0));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn low_hits_on_a_later_weapon_stops_weapon_checks() {
    // Weapon 2 would trigger the center rule, but weapon 1's small sample
    // ends the loop before it is looked at.
    let weapons = [weapon(100, 50.0), weapon(5, 0.0), weapon(100, 99.0)];
    let verdict = evaluate(&weapons, &stats(8, 10.0, 10.0, 1.0));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn combined_accuracy_and_headshot_rule() {
    let verdict = evaluate(&benign_weapons(), &stats(8, 27.0, 65.0, 1.0));
    assert_eq!(verdict, Verdict::Suspicious);
}

#[test]
fn accuracy_alone_is_not_enough() {
    let verdict = evaluate(&benign_weapons(), &stats(8, 27.0, 64.9, 1.0));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn headshot_ratio_alone_is_not_enough() {
    let verdict = evaluate(&benign_weapons(), &stats(8, 26.9, 65.0, 1.0));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn kill_death_rule_alone_suffices() {
    let verdict = evaluate(&benign_weapons(), &stats(8, 10.0, 10.0, 4.3));
    assert_eq!(verdict, Verdict::Suspicious);
    let verdict = evaluate(&benign_weapons(), &stats(8, 10.0, 10.0, 4.2));
    assert_eq!(verdict, Verdict::Clean);
}

#[test]
fn padded_zero_weapons_do_not_block_profile_rules() {
    // One real weapon plus two zero pads: the pads end the weapon loop,
    // the kill/death rule still applies.
    let weapons = [weapon(100, 50.0), WeaponRecord::ZERO, WeaponRecord::ZERO];
    let verdict = evaluate(&weapons, &stats(8, 10.0, 10.0, 4.3));
    assert_eq!(verdict, Verdict::Suspicious);
}

#[test]
fn evaluation_is_idempotent() {
    let weapons = [weapon(25, 70.0), weapon(21, 50.0), weapon(20, 40.0)];
    let s = stats(42, 20.0, headshot_ratio(20, 42), 2.0);
    assert_eq!(evaluate(&weapons, &s), evaluate(&weapons, &s));
}
