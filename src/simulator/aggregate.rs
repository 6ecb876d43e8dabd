//! Running statistics over all trials.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::sampling::SpellSet;

/// Inclusive range of observed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub min: i32,
    pub max: i32,
}

impl Span {
    pub fn single(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn include(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min < self.max {
            write!(f, "{}-{}", self.min, self.max)
        } else {
            write!(f, "{}", self.min)
        }
    }
}

/// What one trial observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    pub name: String,
    pub xp: i64,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,
    pub hp: i32,
    pub ability: Option<String>,
    pub spells: Option<SpellSet>,
}

#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    trials: u32,
    hp: Option<Span>,
    speed: Option<Span>,
    xp_sum: i64,
    ac_sum: i64,
    ev_sum: i64,
    speed_sum: i64,
    abilities: BTreeSet<String>,
    spell_sets: BTreeSet<SpellSet>,
}

fn widen(span: &mut Option<Span>, value: i32) {
    match span {
        Some(span) => span.include(value),
        None => *span = Some(Span::single(value)),
    }
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: TrialOutcome) {
        self.trials += 1;
        widen(&mut self.hp, outcome.hp);
        widen(&mut self.speed, outcome.speed);
        self.xp_sum += outcome.xp;
        self.ac_sum += i64::from(outcome.ac);
        self.ev_sum += i64::from(outcome.ev);
        self.speed_sum += i64::from(outcome.speed);
        if let Some(ability) = outcome.ability {
            self.abilities.insert(ability);
        }
        if let Some(spells) = outcome.spells.filter(|s| !s.is_empty()) {
            self.spell_sets.insert(spells);
        }
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn hp(&self) -> Option<Span> {
        self.hp
    }

    pub fn speed(&self) -> Option<Span> {
        self.speed
    }

    fn mean(&self, sum: i64) -> i64 {
        if self.trials == 0 {
            0
        } else {
            sum / i64::from(self.trials)
        }
    }

    pub fn mean_xp(&self) -> i64 {
        self.mean(self.xp_sum)
    }

    pub fn mean_ac(&self) -> i32 {
        self.mean(self.ac_sum) as i32
    }

    pub fn mean_ev(&self) -> i32 {
        self.mean(self.ev_sum) as i32
    }

    pub fn mean_speed(&self) -> i32 {
        self.mean(self.speed_sum) as i32
    }

    pub fn abilities(&self) -> &BTreeSet<String> {
        &self.abilities
    }

    pub fn spell_sets(&self) -> &BTreeSet<SpellSet> {
        &self.spell_sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(hp: i32, speed: i32, xp: i64, ac: i32, ev: i32) -> TrialOutcome {
        TrialOutcome {
            name: "goblin".to_string(),
            xp,
            ac,
            ev,
            speed,
            hp,
            ability: None,
            spells: None,
        }
    }

    #[test]
    fn test_min_max_follow_samples() {
        let samples = [(7, 10), (0, 12), (15, 9), (3, 10)];
        let mut agg = Aggregate::new();
        for (hp, speed) in samples {
            agg.record(outcome(hp, speed, 0, 0, 0));
        }
        assert_eq!(agg.hp(), Some(Span { min: 0, max: 15 }));
        assert_eq!(agg.speed(), Some(Span { min: 9, max: 12 }));
        assert_eq!(agg.trials(), 4);
    }

    #[test]
    fn test_means_truncate() {
        let mut agg = Aggregate::new();
        agg.record(outcome(1, 10, 5, 1, 3));
        agg.record(outcome(1, 11, 6, 2, 4));
        assert_eq!(agg.mean_xp(), 5);
        assert_eq!(agg.mean_ac(), 1);
        assert_eq!(agg.mean_ev(), 3);
        assert_eq!(agg.mean_speed(), 10);
    }

    #[test]
    fn test_empty_aggregate() {
        let agg = Aggregate::new();
        assert_eq!(agg.hp(), None);
        assert_eq!(agg.mean_xp(), 0);
    }

    #[test]
    fn test_distinct_abilities_and_spell_sets() {
        let mut agg = Aggregate::new();
        let mut spells = SpellSet::default();
        spells.push("blink", None);
        for ability in ["blink", "blink", "acid splash"] {
            let mut o = outcome(1, 10, 1, 0, 0);
            o.ability = Some(ability.to_string());
            o.spells = Some(spells.clone());
            agg.record(o);
        }
        agg.record(TrialOutcome {
            spells: Some(SpellSet::default()),
            ..outcome(1, 10, 1, 0, 0)
        });
        assert_eq!(
            agg.abilities().iter().collect::<Vec<_>>(),
            vec!["acid splash", "blink"]
        );
        assert_eq!(agg.spell_sets().len(), 1);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::single(10).to_string(), "10");
        assert_eq!(Span { min: 2, max: 6 }.to_string(), "2-6");
    }
}
