use serde::Serialize;
use std::fmt;

use super::spells::SpellType;

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// `num` dice of `size` sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct DiceDef {
    pub num: i32,
    pub size: i32,
}

impl DiceDef {
    pub const fn new(num: i32, size: i32) -> Self {
        Self { num, size }
    }

    pub fn is_zero(self) -> bool {
        self.num == 0 || self.size == 0
    }
}

impl fmt::Display for DiceDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num == 1 {
            write!(f, "d{}", self.size)
        } else {
            write!(f, "{}d{}", self.num, self.size)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Floor,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Holiness {
    Holy,
    Natural,
    Undead,
    Demonic,
    Nonliving,
    Plant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Habitat {
    Land,
    Amphibious,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    None,
    Levitate,
    Fly,
}

/// What eating a corpse does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CorpseEffect {
    NoCorpse,
    Clean,
    Contaminated,
    Poisonous,
    PoisonContam,
    Rot,
    MutagenRandom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackType {
    None,
    Hit,
    Bite,
    Claw,
    Sting,
    Touch,
    Constrict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttackFlavour {
    Plain,
    Reach,
    Acid,
    Blink,
    Cold,
    Confuse,
    Disease,
    DrainDex,
    DrainStr,
    DrainXp,
    Chaos,
    Elec,
    Fire,
    Napalm,
    Hunger,
    Mutate,
    Paralyse,
    Poison,
    PoisonNasty,
    PoisonMedium,
    PoisonStrong,
    PoisonStr,
    PoisonInt,
    PoisonDex,
    PoisonStat,
    Rot,
    Vampiric,
    Klown,
    Distort,
    Rage,
    Holy,
    Pain,
    Antimagic,
    DrainInt,
    DrainStat,
    Steal,
    StealFood,
    Crush,
    Ensnare,
}

impl AttackFlavour {
    /// Flavours a klown attack picks from.
    pub const KLOWN_CHOICES: [AttackFlavour; 5] = [
        AttackFlavour::Plain,
        AttackFlavour::Confuse,
        AttackFlavour::Rot,
        AttackFlavour::Poison,
        AttackFlavour::Blink,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackDef {
    pub kind: AttackType,
    pub flavour: AttackFlavour,
    pub damage: i32,
}

impl AttackDef {
    pub const NONE: AttackDef = AttackDef::new(AttackType::None, AttackFlavour::Plain, 0);

    pub const fn new(kind: AttackType, flavour: AttackFlavour, damage: i32) -> Self {
        Self {
            kind,
            flavour,
            damage,
        }
    }

    pub const fn plain(kind: AttackType, damage: i32) -> Self {
        Self::new(kind, AttackFlavour::Plain, damage)
    }

    pub fn is_present(&self) -> bool {
        self.kind != AttackType::None
    }
}

/// Energy cost per action type, in tenths of a normal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyUsage {
    pub moving: i32,
    pub swim: i32,
    pub attack: i32,
    pub missile: i32,
    pub spell: i32,
    pub special: i32,
    pub item: i32,
}

impl EnergyUsage {
    pub const BASELINE: i32 = 10;

    pub const DEFAULT: EnergyUsage = EnergyUsage {
        moving: 10,
        swim: 10,
        attack: 10,
        missile: 10,
        spell: 10,
        special: 10,
        item: 10,
    };
}

/// Innate elemental resistances; negative values are vulnerabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResistLevels {
    pub hellfire: i32,
    pub fire: i32,
    pub cold: i32,
    pub elec: i32,
    pub poison: i32,
    pub acid: i32,
    pub steam: i32,
    pub asphyx: i32,
}

impl ResistLevels {
    pub const NONE: ResistLevels = ResistLevels {
        hellfire: 0,
        fire: 0,
        cold: 0,
        elec: 0,
        poison: 0,
        acid: 0,
        steam: 0,
        asphyx: 0,
    };
}

/// Full resistance profile of a live creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResistReport {
    pub levels: ResistLevels,
    pub drown: i32,
    pub rot: i32,
    pub neg: i32,
    pub holy: i32,
    pub torm: i32,
    pub wind: i32,
}

/// Static creature-class flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonsterFlags(u32);

impl MonsterFlags {
    pub const NONE: MonsterFlags = MonsterFlags(0);
    pub const SPELLCASTER: MonsterFlags = MonsterFlags(1 << 0);
    pub const ACTUAL_SPELLS: MonsterFlags = MonsterFlags(1 << 1);
    pub const PRIEST: MonsterFlags = MonsterFlags(1 << 2);
    pub const COLD_BLOOD: MonsterFlags = MonsterFlags(1 << 3);
    pub const SENSE_INVIS: MonsterFlags = MonsterFlags(1 << 4);
    pub const SEE_INVIS: MonsterFlags = MonsterFlags(1 << 5);
    pub const REGEN: MonsterFlags = MonsterFlags(1 << 6);
    pub const DEFLECT_MISSILES: MonsterFlags = MonsterFlags(1 << 7);
    pub const WEB_SENSE: MonsterFlags = MonsterFlags(1 << 8);
    pub const UNIQUE: MonsterFlags = MonsterFlags(1 << 9);
    pub const UNFINISHED: MonsterFlags = MonsterFlags(1 << 10);
    pub const SPELL_NO_SILENT: MonsterFlags = MonsterFlags(1 << 11);
    pub const EVIL: MonsterFlags = MonsterFlags(1 << 12);

    pub const fn union(self, other: MonsterFlags) -> MonsterFlags {
        MonsterFlags(self.0 | other.0)
    }

    pub const fn contains(self, other: MonsterFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Sleep,
    Seek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foe {
    Nobody,
    Observer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enchantment {
    Submerged,
    Shapeshifter,
}

/// How a creature is approached at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disposition {
    pub hostile: bool,
    pub aware: bool,
}

impl Disposition {
    pub const HOSTILE_AWARE: Disposition = Disposition {
        hostile: true,
        aware: true,
    };
}

/// Name formatting for [`SimulationEngine::display_name`](super::SimulationEngine::display_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescMode {
    /// "orc wizard", "Sigmund".
    Plain,
    /// "the orc wizard", "Sigmund".
    The,
}

/// Projectile/effect descriptor filled in by ability and spell resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Beam {
    pub name: String,
    pub damage: DiceDef,
    pub origin_spell: Option<SpellType>,
}

impl Beam {
    pub fn new() -> Self {
        Self::default()
    }
}
