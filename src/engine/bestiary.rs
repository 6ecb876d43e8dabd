//! Creature class definitions.
//!
//! `MONSTERS` is indexed by `MonsterType as usize`; keep the two in the same
//! order when adding entries.

use super::spells::{SpellType, Spellbook};
use super::types::*;
use crate::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonsterType {
    Goblin,
    Orc,
    OrcPriest,
    OrcWizard,
    RoyalJelly,
    Hydra,
    DancingWeapon,
    Zombie,
    Shapeshifter,
    PlayerGhost,
    Draconian,
    RedDraconian,
    WhiteDraconian,
    GreenDraconian,
    YellowDraconian,
    DraconianScorcher,
    DeepElfConjurer,
    OklobPlant,
    BlinkFrog,
    Tormentor,
    KillerKlown,
    IceBeast,
    HellHound,
    Sigmund,
    SpriggenAirMage,
    Necromancer,
    LostSoul,
    ElectricEel,
    Redback,
}

/// Instinctive actions resolved by the forced special-ability path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAbility {
    AcidSplash,
    Blink,
    Torment,
    FireBreath,
    ElectricBolt,
}

/// Hit points rolled as `hd * per_hd_min + random(0..=hd * per_hd_rand) + fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpDice {
    pub per_hd_min: i32,
    pub per_hd_rand: i32,
    pub fixed: i32,
}

impl HpDice {
    pub const fn new(per_hd_min: i32, per_hd_rand: i32, fixed: i32) -> Self {
        Self {
            per_hd_min,
            per_hd_rand,
            fixed,
        }
    }

    pub fn average(&self, hit_dice: i32) -> i32 {
        hit_dice * self.per_hd_min + hit_dice * self.per_hd_rand / 2 + self.fixed
    }
}

/// Static data for one creature class.
#[derive(Debug, Clone)]
pub struct MonsterEntry {
    pub kind: MonsterType,
    pub name: &'static str,
    pub glyph: char,
    pub colour: Colour,
    pub flags: MonsterFlags,
    pub resists: ResistLevels,
    /// 5000 means immune; negative values scale with hit dice.
    pub resist_magic: i32,
    pub weight: i32,
    pub corpse: CorpseEffect,
    pub holiness: Holiness,
    pub habitat: Habitat,
    pub fly: Flight,
    pub hit_dice: i32,
    pub hp: HpDice,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,
    /// Extra speed rolled at creation, `0..=speed_spread`.
    pub speed_spread: i32,
    pub energy: EnergyUsage,
    pub attacks: [AttackDef; 4],
    pub spellbooks: &'static [Spellbook],
    pub ability: Option<SpecialAbility>,
}

impl MonsterEntry {
    pub fn has_flag(&self, flag: MonsterFlags) -> bool {
        self.flags.contains(flag)
    }
}

pub const MAGIC_IMMUNE: i32 = 5000;

const NO_ATTACKS: [AttackDef; 4] = [AttackDef::NONE; 4];

const BASE: MonsterEntry = MonsterEntry {
    kind: MonsterType::Goblin,
    name: "",
    glyph: '?',
    colour: Colour::LightGrey,
    flags: MonsterFlags::NONE,
    resists: ResistLevels::NONE,
    resist_magic: 0,
    weight: 0,
    corpse: CorpseEffect::NoCorpse,
    holiness: Holiness::Natural,
    habitat: Habitat::Land,
    fly: Flight::None,
    hit_dice: 1,
    hp: HpDice::new(3, 3, 0),
    ac: 0,
    ev: 10,
    speed: 10,
    speed_spread: 0,
    energy: EnergyUsage::DEFAULT,
    attacks: NO_ATTACKS,
    spellbooks: &[],
    ability: None,
};

const fn attacks1(a: AttackDef) -> [AttackDef; 4] {
    [a, AttackDef::NONE, AttackDef::NONE, AttackDef::NONE]
}

const fn attacks2(a: AttackDef, b: AttackDef) -> [AttackDef; 4] {
    [a, b, AttackDef::NONE, AttackDef::NONE]
}

const fn book(spells: [Option<SpellType>; 4]) -> Spellbook {
    [spells[0], spells[1], spells[2], spells[3], None, None]
}

const CASTER: MonsterFlags = MonsterFlags::SPELLCASTER.union(MonsterFlags::ACTUAL_SPELLS);

const DRACONIAN: MonsterEntry = MonsterEntry {
    kind: MonsterType::Draconian,
    name: "draconian",
    glyph: 'd',
    colour: Colour::Brown,
    flags: MonsterFlags::COLD_BLOOD,
    resist_magic: -3,
    weight: 900,
    corpse: CorpseEffect::Clean,
    hit_dice: 14,
    hp: HpDice::new(5, 4, 0),
    ac: 9,
    ev: 10,
    attacks: attacks1(AttackDef::plain(AttackType::Hit, 20)),
    ..BASE
};

pub static MONSTERS: [MonsterEntry; 29] = [
    MonsterEntry {
        kind: MonsterType::Goblin,
        name: "goblin",
        glyph: 'g',
        colour: Colour::LightGrey,
        weight: 400,
        corpse: CorpseEffect::Clean,
        hit_dice: 1,
        hp: HpDice::new(2, 4, 0),
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 6)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Orc,
        name: "orc",
        glyph: 'o',
        colour: Colour::Red,
        resist_magic: -3,
        weight: 600,
        corpse: CorpseEffect::Contaminated,
        hit_dice: 1,
        hp: HpDice::new(4, 6, 0),
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 6)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::OrcPriest,
        name: "orc priest",
        glyph: 'o',
        colour: Colour::Green,
        flags: MonsterFlags::SPELLCASTER
            .union(MonsterFlags::PRIEST)
            .union(MonsterFlags::EVIL),
        resist_magic: -4,
        weight: 600,
        corpse: CorpseEffect::Contaminated,
        hit_dice: 3,
        hp: HpDice::new(3, 5, 0),
        ac: 1,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 7)),
        spellbooks: &[book([
            Some(SpellType::Pain),
            Some(SpellType::Smiting),
            Some(SpellType::Haste),
            None,
        ])],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::OrcWizard,
        name: "orc wizard",
        glyph: 'o',
        colour: Colour::Magenta,
        flags: CASTER,
        resist_magic: -5,
        weight: 600,
        corpse: CorpseEffect::Contaminated,
        hit_dice: 3,
        hp: HpDice::new(3, 4, 0),
        ac: 1,
        ev: 12,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 5)),
        spellbooks: &[[
            Some(SpellType::MagicDart),
            Some(SpellType::ThrowFlame),
            None,
            Some(SpellType::Haste),
            Some(SpellType::Blink),
            Some(SpellType::Invisibility),
        ]],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::RoyalJelly,
        name: "royal jelly",
        glyph: 'J',
        colour: Colour::Yellow,
        flags: MonsterFlags::UNIQUE.union(MonsterFlags::SEE_INVIS),
        resists: ResistLevels {
            poison: 3,
            acid: 3,
            ..ResistLevels::NONE
        },
        resist_magic: MAGIC_IMMUNE,
        holiness: Holiness::Natural,
        habitat: Habitat::Amphibious,
        hit_dice: 21,
        hp: HpDice::new(0, 0, 230),
        ac: 8,
        ev: 4,
        attacks: attacks2(
            AttackDef::new(AttackType::Hit, AttackFlavour::Acid, 50),
            AttackDef::new(AttackType::Hit, AttackFlavour::Acid, 30),
        ),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Hydra,
        name: "hydra",
        glyph: 'D',
        colour: Colour::LightGreen,
        weight: 1800,
        corpse: CorpseEffect::Poisonous,
        habitat: Habitat::Amphibious,
        hit_dice: 6,
        hp: HpDice::new(6, 5, 0),
        ac: 0,
        ev: 5,
        energy: EnergyUsage {
            swim: 6,
            ..EnergyUsage::DEFAULT
        },
        attacks: attacks1(AttackDef::plain(AttackType::Bite, 18)),
        resists: ResistLevels {
            poison: 1,
            ..ResistLevels::NONE
        },
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::DancingWeapon,
        name: "dancing weapon",
        glyph: '(',
        colour: Colour::LightGrey,
        resists: ResistLevels {
            poison: 3,
            elec: 2,
            fire: 1,
            cold: 1,
            ..ResistLevels::NONE
        },
        resist_magic: MAGIC_IMMUNE,
        holiness: Holiness::Nonliving,
        fly: Flight::Fly,
        hit_dice: 3,
        hp: HpDice::new(0, 0, 15),
        speed: 15,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 1)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Zombie,
        name: "zombie",
        glyph: 'z',
        colour: Colour::Brown,
        flags: MonsterFlags::COLD_BLOOD,
        resists: ResistLevels {
            poison: 3,
            cold: 2,
            ..ResistLevels::NONE
        },
        resist_magic: -1,
        holiness: Holiness::Undead,
        hit_dice: 1,
        hp: HpDice::new(5, 5, 0),
        ev: 4,
        speed: 8,
        energy: EnergyUsage {
            moving: 15,
            ..EnergyUsage::DEFAULT
        },
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 10)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Shapeshifter,
        name: "shapeshifter",
        glyph: '%',
        colour: Colour::Red,
        resist_magic: -6,
        weight: 600,
        corpse: CorpseEffect::MutagenRandom,
        hit_dice: 7,
        hp: HpDice::new(3, 5, 0),
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 5)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::PlayerGhost,
        name: "player ghost",
        glyph: 'W',
        colour: Colour::White,
        holiness: Holiness::Undead,
        fly: Flight::Fly,
        hit_dice: 10,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 5)),
        ..BASE
    },
    DRACONIAN,
    MonsterEntry {
        kind: MonsterType::RedDraconian,
        name: "red draconian",
        colour: Colour::Red,
        resists: ResistLevels {
            fire: 2,
            cold: -1,
            ..ResistLevels::NONE
        },
        ..DRACONIAN
    },
    MonsterEntry {
        kind: MonsterType::WhiteDraconian,
        name: "white draconian",
        colour: Colour::White,
        resists: ResistLevels {
            cold: 2,
            fire: -1,
            ..ResistLevels::NONE
        },
        ..DRACONIAN
    },
    MonsterEntry {
        kind: MonsterType::GreenDraconian,
        name: "green draconian",
        colour: Colour::Green,
        resists: ResistLevels {
            poison: 1,
            ..ResistLevels::NONE
        },
        ..DRACONIAN
    },
    MonsterEntry {
        kind: MonsterType::YellowDraconian,
        name: "yellow draconian",
        colour: Colour::Yellow,
        resists: ResistLevels {
            acid: 1,
            ..ResistLevels::NONE
        },
        ability: Some(SpecialAbility::AcidSplash),
        ..DRACONIAN
    },
    MonsterEntry {
        kind: MonsterType::DraconianScorcher,
        name: "draconian scorcher",
        colour: Colour::LightRed,
        flags: MonsterFlags::COLD_BLOOD.union(CASTER),
        resists: ResistLevels {
            hellfire: 1,
            fire: 2,
            ..ResistLevels::NONE
        },
        resist_magic: -5,
        hit_dice: 16,
        ev: 12,
        spellbooks: &[book([
            Some(SpellType::BoltOfFire),
            Some(SpellType::Hellfire),
            Some(SpellType::ThrowFlame),
            None,
        ])],
        ..DRACONIAN
    },
    MonsterEntry {
        kind: MonsterType::DeepElfConjurer,
        name: "deep elf conjurer",
        glyph: 'e',
        colour: Colour::Red,
        flags: CASTER.union(MonsterFlags::SEE_INVIS),
        resist_magic: -6,
        weight: 450,
        corpse: CorpseEffect::Contaminated,
        hit_dice: 6,
        hp: HpDice::new(3, 3, 0),
        ev: 13,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 5)),
        spellbooks: &[
            book([
                Some(SpellType::BoltOfFire),
                Some(SpellType::StoneArrow),
                Some(SpellType::Blink),
                Some(SpellType::Invisibility),
            ]),
            book([
                Some(SpellType::BoltOfCold),
                Some(SpellType::OrbOfDestruction),
                Some(SpellType::MagicDart),
                Some(SpellType::Blink),
            ]),
        ],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::OklobPlant,
        name: "oklob plant",
        glyph: 'P',
        colour: Colour::LightGreen,
        resists: ResistLevels {
            poison: 3,
            acid: 2,
            ..ResistLevels::NONE
        },
        resist_magic: -3,
        holiness: Holiness::Plant,
        hit_dice: 10,
        hp: HpDice::new(3, 5, 0),
        ac: 10,
        ev: 0,
        speed: 0,
        ability: Some(SpecialAbility::AcidSplash),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::BlinkFrog,
        name: "blink frog",
        glyph: 'F',
        colour: Colour::LightGreen,
        resist_magic: -5,
        weight: 100,
        corpse: CorpseEffect::Clean,
        habitat: Habitat::Amphibious,
        hit_dice: 6,
        hp: HpDice::new(2, 4, 0),
        ev: 16,
        speed: 15,
        attacks: attacks1(AttackDef::new(AttackType::Bite, AttackFlavour::Blink, 20)),
        ability: Some(SpecialAbility::Blink),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Tormentor,
        name: "tormentor",
        glyph: '4',
        colour: Colour::Yellow,
        flags: MonsterFlags::SEE_INVIS,
        resists: ResistLevels {
            fire: 1,
            poison: 3,
            ..ResistLevels::NONE
        },
        resist_magic: 70,
        holiness: Holiness::Demonic,
        fly: Flight::Fly,
        hit_dice: 7,
        hp: HpDice::new(3, 5, 0),
        ac: 12,
        ev: 12,
        speed: 13,
        attacks: attacks2(
            AttackDef::new(AttackType::Hit, AttackFlavour::Pain, 8),
            AttackDef::new(AttackType::Hit, AttackFlavour::Pain, 8),
        ),
        ability: Some(SpecialAbility::Torment),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::KillerKlown,
        name: "killer klown",
        glyph: '@',
        colour: Colour::LightMagenta,
        flags: MonsterFlags::SEE_INVIS.union(MonsterFlags::REGEN),
        resists: ResistLevels {
            fire: 1,
            cold: 1,
            elec: 1,
            poison: 1,
            ..ResistLevels::NONE
        },
        resist_magic: MAGIC_IMMUNE,
        weight: 550,
        corpse: CorpseEffect::Rot,
        hit_dice: 20,
        hp: HpDice::new(5, 5, 0),
        ac: 10,
        ev: 15,
        speed: 13,
        attacks: [
            AttackDef::new(AttackType::Hit, AttackFlavour::Klown, 30),
            AttackDef::new(AttackType::Hit, AttackFlavour::Klown, 30),
            AttackDef::new(AttackType::Hit, AttackFlavour::Klown, 30),
            AttackDef::NONE,
        ],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::IceBeast,
        name: "ice beast",
        glyph: 'Y',
        colour: Colour::White,
        flags: MonsterFlags::COLD_BLOOD,
        resists: ResistLevels {
            cold: 3,
            fire: -1,
            ..ResistLevels::NONE
        },
        resist_magic: -3,
        weight: 150,
        corpse: CorpseEffect::Clean,
        habitat: Habitat::Amphibious,
        hit_dice: 5,
        hp: HpDice::new(3, 5, 0),
        ac: 5,
        ev: 10,
        attacks: attacks1(AttackDef::new(AttackType::Bite, AttackFlavour::Cold, 12)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::HellHound,
        name: "hell hound",
        glyph: 'h',
        colour: Colour::DarkGrey,
        flags: MonsterFlags::SENSE_INVIS,
        resists: ResistLevels {
            fire: 3,
            cold: -1,
            poison: 1,
            ..ResistLevels::NONE
        },
        resist_magic: -3,
        holiness: Holiness::Demonic,
        hit_dice: 5,
        hp: HpDice::new(3, 5, 0),
        ac: 6,
        ev: 13,
        speed: 13,
        attacks: attacks1(AttackDef::plain(AttackType::Bite, 13)),
        ability: Some(SpecialAbility::FireBreath),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Sigmund,
        name: "Sigmund",
        glyph: '@',
        colour: Colour::Yellow,
        flags: CASTER
            .union(MonsterFlags::UNIQUE)
            .union(MonsterFlags::EVIL),
        resist_magic: -3,
        weight: 550,
        corpse: CorpseEffect::Contaminated,
        hit_dice: 3,
        hp: HpDice::new(0, 0, 25),
        ev: 11,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 5)),
        spellbooks: &[book([
            Some(SpellType::ThrowFlame),
            Some(SpellType::Pain),
            Some(SpellType::Haste),
            Some(SpellType::Blink),
        ])],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::SpriggenAirMage,
        name: "spriggan air mage",
        glyph: 'i',
        colour: Colour::LightBlue,
        flags: CASTER.union(MonsterFlags::DEFLECT_MISSILES),
        resists: ResistLevels {
            elec: 1,
            ..ResistLevels::NONE
        },
        resist_magic: -6,
        weight: 300,
        corpse: CorpseEffect::Clean,
        hit_dice: 6,
        hp: HpDice::new(3, 3, 0),
        ev: 18,
        speed: 14,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 6)),
        spellbooks: &[book([
            Some(SpellType::Airstrike),
            Some(SpellType::Blink),
            Some(SpellType::Haste),
            None,
        ])],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Necromancer,
        name: "necromancer",
        glyph: '@',
        colour: Colour::Magenta,
        flags: CASTER.union(MonsterFlags::EVIL),
        resist_magic: -5,
        weight: 550,
        corpse: CorpseEffect::Contaminated,
        hit_dice: 10,
        hp: HpDice::new(3, 5, 0),
        ev: 13,
        attacks: attacks1(AttackDef::plain(AttackType::Hit, 6)),
        spellbooks: &[book([
            Some(SpellType::Pain),
            Some(SpellType::CrystalSpear),
            Some(SpellType::SummonUndead),
            Some(SpellType::Invisibility),
        ])],
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::LostSoul,
        name: "lost soul",
        glyph: 'z',
        colour: Colour::LightGrey,
        flags: MonsterFlags::UNFINISHED,
        resists: ResistLevels {
            poison: 3,
            cold: 1,
            ..ResistLevels::NONE
        },
        resist_magic: -2,
        holiness: Holiness::Undead,
        fly: Flight::Levitate,
        hit_dice: 1,
        hp: HpDice::new(2, 3, 0),
        ev: 10,
        speed: 13,
        attacks: attacks1(AttackDef::new(AttackType::Touch, AttackFlavour::DrainXp, 2)),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::ElectricEel,
        name: "electric eel",
        glyph: ';',
        colour: Colour::LightBlue,
        flags: MonsterFlags::COLD_BLOOD,
        resists: ResistLevels {
            elec: 3,
            ..ResistLevels::NONE
        },
        resist_magic: -3,
        weight: 200,
        corpse: CorpseEffect::Clean,
        habitat: Habitat::Water,
        hit_dice: 3,
        hp: HpDice::new(5, 3, 0),
        ac: 1,
        ev: 15,
        energy: EnergyUsage {
            swim: 8,
            ..EnergyUsage::DEFAULT
        },
        attacks: attacks1(AttackDef::new(AttackType::Bite, AttackFlavour::Elec, 8)),
        ability: Some(SpecialAbility::ElectricBolt),
        ..BASE
    },
    MonsterEntry {
        kind: MonsterType::Redback,
        name: "redback",
        glyph: 's',
        colour: Colour::Red,
        flags: MonsterFlags::WEB_SENSE,
        resists: ResistLevels {
            poison: 1,
            ..ResistLevels::NONE
        },
        resist_magic: -3,
        weight: 100,
        corpse: CorpseEffect::Poisonous,
        hit_dice: 6,
        hp: HpDice::new(3, 5, 0),
        ac: 2,
        ev: 12,
        speed: 15,
        attacks: [
            AttackDef::new(AttackType::Bite, AttackFlavour::PoisonStrong, 18),
            AttackDef::new(AttackType::Constrict, AttackFlavour::Plain, 4),
            AttackDef::NONE,
            AttackDef::NONE,
        ],
        ..BASE
    },
];

impl MonsterType {
    pub const ALL: [MonsterType; 29] = [
        MonsterType::Goblin,
        MonsterType::Orc,
        MonsterType::OrcPriest,
        MonsterType::OrcWizard,
        MonsterType::RoyalJelly,
        MonsterType::Hydra,
        MonsterType::DancingWeapon,
        MonsterType::Zombie,
        MonsterType::Shapeshifter,
        MonsterType::PlayerGhost,
        MonsterType::Draconian,
        MonsterType::RedDraconian,
        MonsterType::WhiteDraconian,
        MonsterType::GreenDraconian,
        MonsterType::YellowDraconian,
        MonsterType::DraconianScorcher,
        MonsterType::DeepElfConjurer,
        MonsterType::OklobPlant,
        MonsterType::BlinkFrog,
        MonsterType::Tormentor,
        MonsterType::KillerKlown,
        MonsterType::IceBeast,
        MonsterType::HellHound,
        MonsterType::Sigmund,
        MonsterType::SpriggenAirMage,
        MonsterType::Necromancer,
        MonsterType::LostSoul,
        MonsterType::ElectricEel,
        MonsterType::Redback,
    ];

    /// Draconian colours a plain draconian request resolves to.
    pub const DRACONIAN_COLOURS: [MonsterType; 4] = [
        MonsterType::RedDraconian,
        MonsterType::WhiteDraconian,
        MonsterType::GreenDraconian,
        MonsterType::YellowDraconian,
    ];

    /// Classes a shapeshifter can take on.
    pub const SHAPESHIFTER_FORMS: [MonsterType; 5] = [
        MonsterType::Goblin,
        MonsterType::Orc,
        MonsterType::IceBeast,
        MonsterType::HellHound,
        MonsterType::BlinkFrog,
    ];

    /// Classes a bare "zombie" request is raised from.
    pub const ZOMBIE_BASES: [MonsterType; 3] =
        [MonsterType::Goblin, MonsterType::Orc, MonsterType::IceBeast];

    /// Dancing weapon loadouts: (name, damage, AC, EV, speed).
    pub const DANCING_WEAPONS: [(&'static str, i32, i32, i32, i32); 3] = [
        ("dagger", 4, 10, 20, 20),
        ("long sword", 10, 8, 18, 15),
        ("great mace", 17, 6, 12, 10),
    ];

    pub fn entry(self) -> &'static MonsterEntry {
        &MONSTERS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// The name the catalog parser accepts for this class.
    pub fn catalog_name(self) -> String {
        match self {
            MonsterType::RoyalJelly => "the royal jelly".to_string(),
            other => other.name().to_ascii_lowercase(),
        }
    }

    pub fn genus(self) -> MonsterType {
        match self {
            MonsterType::RedDraconian
            | MonsterType::WhiteDraconian
            | MonsterType::GreenDraconian
            | MonsterType::YellowDraconian
            | MonsterType::DraconianScorcher => MonsterType::Draconian,
            other => other,
        }
    }

    pub fn is_draconian_colour(self) -> bool {
        Self::DRACONIAN_COLOURS.contains(&self)
    }

    /// Draconians with a job on top of their colour.
    pub fn is_draconian_job(self) -> bool {
        self == MonsterType::DraconianScorcher
    }

    pub fn is_zombified(self) -> bool {
        self == MonsterType::Zombie
    }

    pub fn has_hydra_multi_attack(self) -> bool {
        self == MonsterType::Hydra
    }

    /// Classes whose AC/EV is rolled at creation rather than fixed.
    pub fn is_generated(self) -> bool {
        matches!(self, MonsterType::Zombie | MonsterType::DancingWeapon)
    }

    pub fn is_unique(self) -> bool {
        self.entry().has_flag(MonsterFlags::UNIQUE)
    }

    /// Whether the class can be instantiated for inspection.
    pub fn is_simulatable(self) -> bool {
        self != MonsterType::PlayerGhost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (index, kind) in MonsterType::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, index);
            assert_eq!(MONSTERS[index].kind, *kind, "entry {} out of order", index);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = MONSTERS.iter().map(|m| m.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), MONSTERS.len());
    }

    #[test]
    fn test_draconian_genus() {
        assert_eq!(MonsterType::RedDraconian.genus(), MonsterType::Draconian);
        assert_eq!(MonsterType::DraconianScorcher.genus(), MonsterType::Draconian);
        assert_eq!(MonsterType::Goblin.genus(), MonsterType::Goblin);
    }

    #[test]
    fn test_ghost_is_not_simulatable() {
        assert!(!MonsterType::PlayerGhost.is_simulatable());
        assert!(MonsterType::Goblin.is_simulatable());
    }

    #[test]
    fn test_hp_average() {
        let hp = HpDice::new(2, 4, 0);
        assert_eq!(hp.average(1), 4);
        assert_eq!(HpDice::new(0, 0, 25).average(3), 25);
    }
}
