//! Per-trial sampling of special abilities and spell loadouts.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::names::shorten_spell_name;
use crate::constants::{ARMOUR_SLOTS_NO_SHIELD, MONSTER_PLACE, PLAYER_MAXHP, POWER_PER_HD};
use crate::engine::{Beam, Coord, DiceDef, MonsterIndex, MonsterType, SimulationEngine, SpellType};

/// Diminishing returns above `first_step`: every `stepping` past it, the
/// excess is halved. A `ceiling_value` of -1 means no cap.
pub fn stepdown_value(
    base_value: i32,
    stepping: i32,
    first_step: i32,
    last_step: i32,
    ceiling_value: i32,
) -> i32 {
    let mut value = base_value;
    if value <= first_step {
        return value;
    }

    let stepping = stepping.max(1);
    let mut step = first_step;
    while step <= last_step && value > step {
        value = (value - step) / 2 + step;
        step += stepping;
    }

    if ceiling_value != -1 && value > ceiling_value {
        ceiling_value
    } else {
        value
    }
}

/// Damage annotation for one spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SpellDamage {
    Dice(DiceDef),
    /// Literal inclusive range.
    Range(i32, i32),
}

impl fmt::Display for SpellDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellDamage::Dice(dice) => dice.fmt(f),
            SpellDamage::Range(low, high) => write!(f, "{}-{}", low, high),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SpellEntry {
    pub name: String,
    pub damage: Option<SpellDamage>,
}

/// Ordered spell loadout as observed in one trial.
///
/// Two sets are the same variant when every entry matches in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SpellSet {
    entries: Vec<SpellEntry>,
}

impl SpellSet {
    pub fn push(&mut self, name: impl Into<String>, damage: Option<SpellDamage>) {
        self.entries.push(SpellEntry {
            name: name.into(),
            damage,
        });
    }

    pub fn entries(&self) -> &[SpellEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SpellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&entry.name)?;
            if let Some(damage) = entry.damage {
                write!(f, " ({})", damage)?;
            }
        }
        Ok(())
    }
}

fn monster_place() -> Coord {
    Coord::new(MONSTER_PLACE.0, MONSTER_PLACE.1)
}

/// Draconians other than yellow ones breathe through their spell list, so
/// their ability path is not sampled.
pub fn samples_abilities<E: SimulationEngine>(engine: &E, index: MonsterIndex) -> bool {
    let Some(mon) = engine.monster(index) else {
        return false;
    };
    if mon.kind.genus() != MonsterType::Draconian {
        return true;
    }
    engine.draconian_subspecies(index) == Some(MonsterType::YellowDraconian)
}

/// Forces one special-ability attempt and describes what happened.
///
/// Runs with messages suppressed. A creature that ends up elsewhere blinked;
/// an observer left at exactly half health plus one was tormented.
pub fn record_ability<E: SimulationEngine>(engine: &mut E, index: MonsterIndex) -> Option<String> {
    let mut quiet = engine.quiet();
    let place = monster_place();

    let observer = quiet.observer_mut();
    observer.hp = PLAYER_MAXHP;
    observer.hp_max = PLAYER_MAXHP;
    quiet.monster_mut(index)?.pos = place;

    let mut beam = Beam::new();
    quiet.invoke_special_ability(index, &mut beam);

    if quiet.monster(index).is_some_and(|mon| mon.pos != place) {
        beam.name = "blink".to_string();
    }
    if quiet.observer().hp == PLAYER_MAXHP / 2 + 1 {
        beam.name = "symbol of torment".to_string();
    }
    if beam.name.is_empty() {
        return None;
    }

    let mut ability = shorten_spell_name(&beam.name);
    if !beam.damage.is_zero() {
        // Acid corrodes each armour slot bar the shield, plus two more rolls.
        let extra = if ability == "acid splash" {
            format!("+{}", DiceDef::new(ARMOUR_SLOTS_NO_SHIELD + 2, 5))
        } else {
            String::new()
        };
        ability = format!("{} ({}{})", ability, beam.damage, extra);
    }
    Some(ability)
}

fn draconian_breath_spell<E: SimulationEngine>(
    engine: &E,
    index: MonsterIndex,
) -> Option<SpellType> {
    let mon = engine.monster(index)?;
    if mon.kind.genus() != MonsterType::Draconian {
        return None;
    }
    match engine.draconian_subspecies(index) {
        None | Some(MonsterType::Draconian) | Some(MonsterType::YellowDraconian) => None,
        Some(_) => Some(SpellType::DraconianBreath),
    }
}

fn orb_damage(hit_dice: i32) -> DiceDef {
    let power = stepdown_value(6 * hit_dice, 30, 30, 200, -1);
    DiceDef::new(8, power / 4)
}

fn spell_damage<E: SimulationEngine>(
    engine: &mut E,
    index: MonsterIndex,
    spell: SpellType,
    hit_dice: i32,
) -> Option<SpellDamage> {
    let beam = engine.spell_beam(index, spell, POWER_PER_HD * hit_dice);
    let dice = match spell {
        SpellType::Smiting => return Some(SpellDamage::Range(7, 17)),
        SpellType::Airstrike => return Some(SpellDamage::Range(0, 10 + 2 * hit_dice)),
        SpellType::OrbOfDestruction => orb_damage(hit_dice),
        _ => beam.damage,
    };
    (!dice.is_zero()).then_some(SpellDamage::Dice(dice))
}

/// The creature's spells with damage annotations, in slot order.
///
/// Beams are simulated inside an RNG excursion so sampling spells does not
/// perturb the creature rolls of later trials.
pub fn spell_set<E: SimulationEngine>(engine: &mut E, index: MonsterIndex) -> SpellSet {
    let mut excursion = engine.rng_excursion();
    let mut set = SpellSet::default();

    let Some(mon) = excursion.monster(index) else {
        return set;
    };
    let (hit_dice, slots) = (mon.hit_dice, mon.spells);
    let breath = draconian_breath_spell(&*excursion, index);

    let mut seen = BTreeSet::new();
    for spell in std::iter::once(breath).chain(slots).flatten() {
        if !seen.insert(spell) {
            continue;
        }
        let title = if spell == SpellType::DraconianBreath {
            let beam = excursion.spell_beam(index, spell, POWER_PER_HD * hit_dice);
            beam.origin_spell.unwrap_or(spell).title()
        } else {
            spell.title()
        };
        let damage = spell_damage(&mut *excursion, index, spell, hit_dice);
        set.push(shorten_spell_name(title), damage);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Arena, CreatureSpec, Disposition, Enchantment};
    use crate::simulator::scratch::init_scratch_world;

    fn spawn(arena: &mut Arena, spec: CreatureSpec) -> MonsterIndex {
        let index = arena
            .instantiate(&spec, monster_place(), Disposition::HOSTILE_AWARE)
            .unwrap();
        arena.monster_mut(index).unwrap().del_ench(Enchantment::Submerged);
        index
    }

    fn world(seed: u64) -> Arena {
        let mut arena = Arena::seeded(seed);
        init_scratch_world(&mut arena);
        arena
    }

    #[test]
    fn test_stepdown_below_first_step_is_unchanged() {
        assert_eq!(stepdown_value(30, 30, 30, 200, -1), 30);
        assert_eq!(stepdown_value(6, 30, 30, 200, -1), 6);
    }

    #[test]
    fn test_stepdown_halves_excess() {
        assert_eq!(stepdown_value(60, 30, 30, 200, -1), 45);
        assert_eq!(stepdown_value(150, 30, 30, 200, -1), 75);
        assert_eq!(stepdown_value(150, 30, 30, 200, 50), 50);
    }

    #[test]
    fn test_orb_damage_uses_stepdown() {
        assert_eq!(orb_damage(6), DiceDef::new(8, 8));
        assert_eq!(orb_damage(10), DiceDef::new(8, 11));
    }

    #[test]
    fn test_spell_set_display() {
        let mut set = SpellSet::default();
        set.push("fire b.", Some(SpellDamage::Dice(DiceDef::new(3, 14))));
        set.push("smiting", Some(SpellDamage::Range(7, 17)));
        set.push("blink", None);
        assert_eq!(set.to_string(), "fire b. (3d14), smiting (7-17), blink");
    }

    #[test]
    fn test_priest_spell_set() {
        let mut arena = world(3);
        let index = spawn(&mut arena, CreatureSpec::of(MonsterType::OrcPriest));
        let set = spell_set(&mut arena, index);
        assert_eq!(set.to_string(), "pain (d8), smiting (7-17), haste");
    }

    #[test]
    fn test_airstrike_range_scales_with_hit_dice() {
        let mut arena = world(3);
        let index = spawn(&mut arena, CreatureSpec::of(MonsterType::SpriggenAirMage));
        let set = spell_set(&mut arena, index);
        assert_eq!(set.entries()[0].name, "airstrike");
        assert_eq!(set.entries()[0].damage, Some(SpellDamage::Range(0, 22)));
    }

    #[test]
    fn test_draconian_breath_comes_first() {
        let mut arena = world(5);
        let index = spawn(&mut arena, CreatureSpec::of(MonsterType::RedDraconian));
        let set = spell_set(&mut arena, index);
        assert_eq!(set.entries().len(), 1);
        assert_eq!(set.entries()[0].name, "fire breath");
        assert!(set.entries()[0].damage.is_some());
    }

    #[test]
    fn test_yellow_draconian_samples_abilities_not_breath() {
        let mut arena = world(5);
        let yellow = spawn(&mut arena, CreatureSpec::of(MonsterType::YellowDraconian));
        assert!(samples_abilities(&arena, yellow));
        assert!(spell_set(&mut arena, yellow).is_empty());
        arena.destroy(yellow);

        let red = spawn(&mut arena, CreatureSpec::of(MonsterType::RedDraconian));
        assert!(!samples_abilities(&arena, red));
    }

    #[test]
    fn test_spell_sampling_leaves_rng_untouched() {
        let mut arena = world(8);
        let index = spawn(&mut arena, CreatureSpec::of(MonsterType::DeepElfConjurer));
        let mut reference = arena.clone();
        spell_set(&mut arena, index);
        assert_eq!(arena.roll(1_000_000), reference.roll(1_000_000));
    }

    #[test]
    fn test_goblin_has_no_ability_or_spells() {
        let mut arena = world(1);
        let index = spawn(&mut arena, CreatureSpec::of(MonsterType::Goblin));
        for _ in 0..20 {
            assert_eq!(record_ability(&mut arena, index), None);
        }
        assert!(spell_set(&mut arena, index).is_empty());
    }

    #[test]
    fn test_ability_heuristics() {
        let mut arena = world(21);
        let frog = spawn(&mut arena, CreatureSpec::of(MonsterType::BlinkFrog));
        let seen: BTreeSet<_> = (0..100)
            .filter_map(|_| record_ability(&mut arena, frog))
            .collect();
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec!["blink".to_string()]);
        arena.destroy(frog);

        let tormentor = spawn(&mut arena, CreatureSpec::of(MonsterType::Tormentor));
        let seen: BTreeSet<_> = (0..100)
            .filter_map(|_| record_ability(&mut arena, tormentor))
            .collect();
        assert_eq!(
            seen.into_iter().collect::<Vec<_>>(),
            vec!["torment symbol".to_string()]
        );
    }

    #[test]
    fn test_acid_splash_carries_armour_dice() {
        let mut arena = world(4);
        let oklob = spawn(&mut arena, CreatureSpec::of(MonsterType::OklobPlant));
        let seen: BTreeSet<_> = (0..100)
            .filter_map(|_| record_ability(&mut arena, oklob))
            .collect();
        assert_eq!(
            seen.into_iter().collect::<Vec<_>>(),
            vec!["acid splash (3d5+7d5)".to_string()]
        );
        assert!(arena.messages().iter().all(|m| !m.contains("spits")));
    }
}
