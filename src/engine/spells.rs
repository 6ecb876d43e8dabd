//! Spell table.

use serde::Serialize;

use super::types::DiceDef;

/// Number of loadout slots a creature carries.
pub const NUM_MONSTER_SPELL_SLOTS: usize = 6;

/// A creature's spell loadout, one entry per slot.
pub type Spellbook = [Option<SpellType>; NUM_MONSTER_SPELL_SLOTS];

pub const EMPTY_BOOK: Spellbook = [None; NUM_MONSTER_SPELL_SLOTS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SpellType {
    MagicDart,
    ThrowFlame,
    BoltOfFire,
    BoltOfCold,
    StoneArrow,
    CrystalSpear,
    Pain,
    Hellfire,
    OrbOfDestruction,
    Smiting,
    Airstrike,
    Blink,
    Haste,
    Invisibility,
    SummonUndead,
    SummonIceBeast,
    DraconianBreath,
    FireBreath,
    ColdBreath,
    PoisonBreath,
}

impl SpellType {
    pub fn title(self) -> &'static str {
        match self {
            SpellType::MagicDart => "Magic Dart",
            SpellType::ThrowFlame => "Throw Flame",
            SpellType::BoltOfFire => "Bolt of Fire",
            SpellType::BoltOfCold => "Bolt of Cold",
            SpellType::StoneArrow => "Stone Arrow",
            SpellType::CrystalSpear => "Lehudib's Crystal Spear",
            SpellType::Pain => "Pain",
            SpellType::Hellfire => "Hellfire",
            SpellType::OrbOfDestruction => "Orb of Destruction",
            SpellType::Smiting => "Smiting",
            SpellType::Airstrike => "Airstrike",
            SpellType::Blink => "Blink",
            SpellType::Haste => "Haste",
            SpellType::Invisibility => "Invisibility",
            SpellType::SummonUndead => "Summon Undead",
            SpellType::SummonIceBeast => "Summon Ice Beast",
            SpellType::DraconianBreath => "Draconian Breath",
            SpellType::FireBreath => "Fire Breath",
            SpellType::ColdBreath => "Cold Breath",
            SpellType::PoisonBreath => "Poison Breath",
        }
    }

    /// Damage of the spell's beam at `power`. Zero dice for spells whose
    /// damage is not carried by a beam.
    pub fn beam_damage(self, power: i32) -> DiceDef {
        match self {
            SpellType::MagicDart => DiceDef::new(3, 4 + power / 100),
            SpellType::ThrowFlame => DiceDef::new(3, 5 + power / 40),
            SpellType::BoltOfFire | SpellType::BoltOfCold => DiceDef::new(3, 8 + power / 11),
            SpellType::StoneArrow => DiceDef::new(3, 5 + power / 10),
            SpellType::CrystalSpear => DiceDef::new(3, 16 + power / 10),
            SpellType::Pain => DiceDef::new(1, 7 + power / 20),
            SpellType::Hellfire => DiceDef::new(3, 20),
            SpellType::FireBreath | SpellType::ColdBreath | SpellType::PoisonBreath => {
                DiceDef::new(3, 4 + power / 30)
            }
            SpellType::OrbOfDestruction
            | SpellType::Smiting
            | SpellType::Airstrike
            | SpellType::Blink
            | SpellType::Haste
            | SpellType::Invisibility
            | SpellType::SummonUndead
            | SpellType::SummonIceBeast
            | SpellType::DraconianBreath => DiceDef::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bolt_damage_scales_with_power() {
        assert_eq!(SpellType::BoltOfFire.beam_damage(0), DiceDef::new(3, 8));
        assert_eq!(SpellType::BoltOfFire.beam_damage(110), DiceDef::new(3, 18));
    }

    #[test]
    fn test_utility_spells_carry_no_damage() {
        assert!(SpellType::Blink.beam_damage(120).is_zero());
        assert!(SpellType::SummonUndead.beam_damage(120).is_zero());
    }
}
