//! Integration test: end-to-end inspections on the bundled engine
//!
//! Each test runs the full resolve → sample → aggregate → render flow and
//! checks the report line the binary would print.

use monster_stats::engine::{Arena, EngineCounters, SimulationEngine};
use monster_stats::simulator::{inspect, run_inspection, OutputFormat, StatsConfig};

fn plain(seed: u64) -> StatsConfig {
    StatsConfig::seeded(seed)
}

fn report_for(name: &str) -> String {
    run_inspection(name, &plain(42)).unwrap()
}

#[test]
fn test_goblin_report() {
    assert_eq!(
        report_for("goblin"),
        "goblin (g) | Speed: 10 | HD: 1 | Health: 2-6 | AC/EV: 0/10 | Damage: 6 | XP: 2."
    );
}

#[test]
fn test_orc_priest_report() {
    assert_eq!(
        report_for("orc priest"),
        "orc priest (o) | Speed: 10 | HD: 3 | Health: 9-24 | AC/EV: 1/10 | Damage: 7 \
         | Flags: evil | Res: magic(16) | Chunks: contaminated | XP: 55 \
         | Sp: pain (d8), smiting (7-17), haste."
    );
}

#[test]
fn test_cang_is_canned() {
    assert_eq!(
        report_for("cang"),
        "cang (Ω) | Speed: c | HD: i | Health: 666 | AC/EV: e/π | Damage: 999 | Res: sanity | XP: ∞"
    );
}

#[test]
fn test_cang_never_touches_engine() {
    let mut arena = Arena::seeded(9);
    inspect(&mut arena, "cang", &plain(9)).unwrap();
    assert_eq!(arena.counters(), EngineCounters::default());
    assert_eq!(arena.live_monsters(), 0);
}

#[test]
fn test_article_fallback() {
    let line = report_for("royal jelly");
    assert!(line.starts_with("the royal jelly (J) | Speed: 10 | HD: 21 | Health: 230 |"));
    assert!(line.contains("| Res: magic(immune), poison+++, acid+++, drown"));
    assert!(line.contains("| Damage: 50(acid:7d3), 30(acid:7d3)"));
}

#[test]
fn test_ghost_is_rejected() {
    let err = run_inspection("ghost", &plain(1)).unwrap_err();
    assert_eq!(err.to_string(), "unknown monster: \"ghost\"");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_vault_creature_is_flagged() {
    let line = report_for("ancient champion");
    assert!(line.starts_with("ancient champion (z) | Speed: 8 (move: 150%) | HD: 12 |"));
    assert!(line.contains("| Damage: 18 |"));
    assert!(line.contains("| Flags: undead, evil, cold-blooded, vault |"));
    assert!(line.contains(
        "| Res: magic(16), cold++, poison+++, drown, rot, neg+++, torm | Vul: holy++ |"
    ));
    assert!(!line.contains("| Sp:"));
}

#[test]
fn test_vault_name_case_is_ignored() {
    let line = report_for("Blorkula the Orcbreaker");
    assert!(line.starts_with("Blorkula the Orcbreaker (o) |"));
    assert!(line.contains("HD: 8"));
    assert!(line.contains("vault"));
}

#[test]
fn test_shapeshifter_spells_are_random() {
    let line = report_for("shapeshifter");
    assert!(line.starts_with("shapeshifter ("));
    assert!(line.contains("!sil"));
    assert!(line.ends_with(" | Sp: (random)."));
}

#[test]
fn test_hydra_reports_per_head_damage() {
    let line = report_for("hydra");
    assert!(line.starts_with("hydra (D) | Speed: 10 (swim: 60%) |"));
    assert!(line.contains("| Damage: 18 per head |"));
    assert!(line.contains("| Flags: amphibious |"));
    assert!(line.contains("| Chunks: poisonous |"));
}

#[test]
fn test_klown_flavour_survives_randomization() {
    let line = report_for("killer klown");
    assert!(line.contains("| Damage: 30(klown), 30(klown), 30(klown) |"));
    assert!(line.contains("| Flags: see invisible, regen |"));
}

#[test]
fn test_constriction_is_annotated() {
    let line = report_for("redback");
    assert!(line.contains("| Damage: 18(strong poison), 4(constrict) |"));
    assert!(line.contains("web sense"));
}

#[test]
fn test_yellow_draconian_spits_acid() {
    let line = report_for("yellow draconian");
    assert!(line.contains("| Sp: acid splash (3d5+7d5)."));
    assert!(line.contains("!sil"));
}

#[test]
fn test_coloured_draconian_breath_is_a_spell() {
    let line = report_for("white draconian");
    assert!(line.ends_with("| Sp: cold breath (3d9)."));
    assert!(line.contains("| Res: magic(56), cold++ | Vul: fire |"));
}

#[test]
fn test_job_draconian_lists_breath_first() {
    let line = report_for("red draconian scorcher");
    assert!(line.starts_with("red draconian scorcher (d) |"));
    assert!(line.contains(
        "| Sp: fire breath (3d10), fire b. (3d25), hellfire (3d20), throw flame (3d9)."
    ));
    // Hellfire resistance hides plain fire.
    assert!(line.contains("hellfire"));
    assert!(!line.contains("fire+"));
}

#[test]
fn test_conjurer_shows_both_loadouts() {
    let line = report_for("deep elf conjurer");
    assert!(line.contains(
        "| Sp: cold b. (3d14), destruction orb (8d8), magic dart (3d4), blink \
         / fire b. (3d14), stone arrow (3d12), blink, invisibility."
    ));
    assert!(line.contains("spellcaster"));
    assert!(!line.contains("!sil"));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let first = run_inspection("hydra", &plain(5)).unwrap();
    let second = run_inspection("hydra", &plain(5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fixed_loadouts_yield_one_spell_set() {
    for name in ["orc wizard", "necromancer", "spriggan air mage", "Sigmund"] {
        let mut arena = Arena::seeded(3);
        let inspection = inspect(&mut arena, name, &plain(3).with_trials(200)).unwrap();
        let fields = inspection.fields().unwrap();
        assert_eq!(fields.spell_sets.len(), 1, "{}", name);
    }
}

#[test]
fn test_json_output() {
    let config = StatsConfig {
        format: OutputFormat::Json,
        ..plain(42)
    };
    let json = run_inspection("goblin", &config).unwrap();
    assert!(!json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "goblin");
    assert_eq!(value["xp"], 2);
    assert_eq!(value["mean_speed"], 10);
    assert_eq!(value["health"]["min"], 2);
    assert_eq!(value["health"]["max"], 6);
    assert_eq!(value["symbol"]["text"], "g");
}

#[test]
fn test_unknown_creature() {
    let err = run_inspection("flumph", &plain(1)).unwrap_err();
    assert_eq!(err.to_string(), "unknown monster: \"flumph\"");
}

#[test]
fn test_engine_left_with_one_representative() {
    let mut arena = Arena::seeded(2);
    inspect(&mut arena, "orc", &plain(2).with_trials(40)).unwrap();
    assert_eq!(arena.live_monsters(), 1);
    assert_eq!(arena.observer().hp_max, 500);
}
