//! Integration test: command line to painted report
//!
//! Runs argument parsing and inspection together and checks how colour
//! annotations come out in each output mode.

use monster_stats::cli::{parse_args, Command};
use monster_stats::colour::ColourMode;
use monster_stats::simulator::{run_inspection, StatsConfig};

fn config(mode: ColourMode) -> StatsConfig {
    StatsConfig {
        colour: mode,
        ..StatsConfig::seeded(11).with_trials(100)
    }
}

fn inspect_args(args: &[&str], mode: ColourMode) -> String {
    match parse_args(args) {
        Command::Inspect(target) => run_inspection(&target, &config(mode)).unwrap(),
        other => panic!("expected an inspection, got {:?}", other),
    }
}

#[test]
fn test_arguments_are_joined_into_one_name() {
    let line = inspect_args(&["monster-stats", "orc", "priest"], ColourMode::Plain);
    assert!(line.starts_with("orc priest (o) |"));
}

#[test]
fn test_vault_flag_markup() {
    let line = inspect_args(
        &["monster-stats", "ancient", "champion"],
        ColourMode::Markup,
    );
    assert!(line.contains("\u{3}07undead\u{f}"));
    assert!(line.contains("\u{3}07vault\u{f}"));
    // Uncoloured flags carry no escapes.
    assert!(line.contains(", evil, cold-blooded, "));
}

#[test]
fn test_vault_flag_ansi() {
    let line = inspect_args(
        &["monster-stats", "Blorkula", "the", "Orcbreaker"],
        ColourMode::Ansi,
    );
    assert!(line.contains("\x1b[0;33;0mvault\x1b[0m"));
    assert!(line.ends_with('.'));
}

#[test]
fn test_plain_mode_has_no_escapes() {
    let line = inspect_args(&["monster-stats", "killer", "klown"], ColourMode::Plain);
    assert!(!line.contains('\u{1b}'));
    assert!(!line.contains('\u{3}'));
}

#[test]
fn test_canned_report_is_painted() {
    let line = inspect_args(&["monster-stats", "cang"], ColourMode::Markup);
    assert!(line.starts_with("cang (\u{3}"));
    assert!(line.contains("Ω\u{f}) | Speed: c"));
    assert!(!line.ends_with('.'));
}

#[test]
fn test_usage_and_version_skip_inspection() {
    assert_eq!(parse_args(&["monster-stats"]), Command::Usage);
    assert_eq!(
        parse_args(&["monster-stats", "--version", "goblin"]),
        Command::Version
    );
}
