//! Live creature instances.

use super::bestiary::{MonsterEntry, MonsterType};
use super::spells::{SpellType, Spellbook};
use super::types::*;
use crate::colour::Colour;

/// Index of a live creature in the engine's creature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonsterIndex(pub usize);

/// A creature materialized in the arena.
#[derive(Debug, Clone)]
pub struct Monster {
    pub kind: MonsterType,
    /// Zombie base class, or draconian colour for job draconians.
    pub base: Option<MonsterType>,
    pub hit_dice: i32,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,
    pub pos: Coord,
    pub colour: Colour,
    pub spells: Spellbook,
    pub enchantments: Vec<Enchantment>,
    pub behaviour: Behaviour,
    pub foe: Foe,
    pub hostile: bool,
    pub custom_name: Option<String>,
    /// Head count for multi-headed classes, zero otherwise.
    pub heads: i32,
    /// Wielded weapon name and damage for animated weapons.
    pub weapon: Option<(&'static str, i32)>,
}

impl Monster {
    pub fn entry(&self) -> &'static MonsterEntry {
        self.kind.entry()
    }

    pub fn has_ench(&self, ench: Enchantment) -> bool {
        self.enchantments.contains(&ench)
    }

    pub fn del_ench(&mut self, ench: Enchantment) -> bool {
        let before = self.enchantments.len();
        self.enchantments.retain(|e| *e != ench);
        before != self.enchantments.len()
    }

    pub fn is_shapeshifter(&self) -> bool {
        self.has_ench(Enchantment::Shapeshifter)
    }

    pub fn has_hydra_multi_attack(&self) -> bool {
        self.kind.has_hydra_multi_attack()
    }

    pub fn is_priest(&self) -> bool {
        self.entry().has_flag(MonsterFlags::PRIEST)
    }

    pub fn is_actual_spellcaster(&self) -> bool {
        let entry = self.entry();
        entry.has_flag(MonsterFlags::SPELLCASTER) && entry.has_flag(MonsterFlags::ACTUAL_SPELLS)
    }

    pub fn is_evil(&self) -> bool {
        matches!(
            self.entry().holiness,
            Holiness::Undead | Holiness::Demonic
        ) || self.entry().has_flag(MonsterFlags::EVIL)
    }

    /// Distinct spells in the loadout.
    pub fn spell_count(&self) -> usize {
        let mut seen: Vec<SpellType> = Vec::new();
        for spell in self.spells.iter().flatten() {
            if !seen.contains(spell) {
                seen.push(*spell);
            }
        }
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::spells::EMPTY_BOOK;

    fn goblin() -> Monster {
        Monster {
            kind: MonsterType::Goblin,
            base: None,
            hit_dice: 1,
            hit_points: 4,
            max_hit_points: 4,
            ac: 0,
            ev: 10,
            speed: 10,
            pos: Coord::new(20, 20),
            colour: Colour::LightGrey,
            spells: EMPTY_BOOK,
            enchantments: vec![Enchantment::Submerged],
            behaviour: Behaviour::Sleep,
            foe: Foe::Nobody,
            hostile: true,
            custom_name: None,
            heads: 0,
            weapon: None,
        }
    }

    #[test]
    fn test_enchantment_removal() {
        let mut mon = goblin();
        assert!(mon.has_ench(Enchantment::Submerged));
        assert!(mon.del_ench(Enchantment::Submerged));
        assert!(!mon.del_ench(Enchantment::Submerged));
        assert!(mon.enchantments.is_empty());
        assert!(!mon.is_shapeshifter());
    }

    #[test]
    fn test_spell_count_ignores_duplicates() {
        let mut mon = goblin();
        mon.spells[0] = Some(SpellType::Blink);
        mon.spells[3] = Some(SpellType::Blink);
        mon.spells[4] = Some(SpellType::MagicDart);
        assert_eq!(mon.spell_count(), 2);
    }

    #[test]
    fn test_goblin_is_not_evil_or_caster() {
        let mon = goblin();
        assert!(!mon.is_evil());
        assert!(!mon.is_priest());
        assert!(!mon.is_actual_spellcaster());
    }
}
