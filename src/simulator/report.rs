//! Report line generation.
//!
//! [`ReportFields`] holds the structured content of one report line with
//! colours kept as data; [`ReportFields::to_text`] paints it for a terminal
//! or chat client and [`ReportFields::to_json`] serializes it unpainted.

use serde::Serialize;

use super::aggregate::{Aggregate, Span};
use super::sampling::SpellSet;
use crate::colour::{Colour, Painter};
use crate::constants::MAX_ATTACKS;
use crate::engine::{
    AttackFlavour, AttackType, CorpseEffect, DescMode, EnergyUsage, Flight, Habitat, Holiness,
    MonsterFlags, MonsterIndex, MonsterType, SimulationEngine, MAGIC_IMMUNE,
};
use crate::error::{StatsError, StatsResult};

/// A piece of text and the colour it is shown in. `Colour::Black` means
/// uncoloured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub colour: Colour,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::coloured(Colour::Black, text)
    }

    pub fn coloured(colour: Colour, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colour,
        }
    }

    pub fn paint(&self, painter: &Painter) -> String {
        painter.paint(self.colour, &self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackSummary {
    pub damage: i32,
    pub constrict: bool,
    pub flavour: Option<Token>,
    /// Damage is per head of a multi-headed creature.
    pub per_head: bool,
}

/// Structured content of one report line.
#[derive(Debug, Clone, Serialize)]
pub struct ReportFields {
    pub name: String,
    pub symbol: Token,
    pub unfinished: bool,
    pub speed: Span,
    pub speed_qualifiers: Vec<String>,
    /// Truncating mean over all trials; the text line shows the range.
    pub mean_speed: i32,
    pub hit_dice: i32,
    pub health: Span,
    pub ac: i32,
    pub ev: i32,
    pub attacks: Vec<AttackSummary>,
    pub flags: Vec<Token>,
    pub resistances: Vec<Token>,
    pub vulnerabilities: Vec<Token>,
    /// Joined with "+" when rendered.
    pub chunks: Vec<Token>,
    pub xp: i64,
    pub abilities: Vec<String>,
    pub spell_sets: Vec<SpellSet>,
    /// Rendered ability and spell summary; empty when there is nothing to show.
    pub spells: String,
}

fn action_cost(qualifiers: &mut Vec<String>, cost: i32, desc: &str) {
    if cost != EnergyUsage::BASELINE {
        qualifiers.push(format!("{}: {}%", desc, cost * 10));
    }
}

/// Action-cost qualifiers shown after the speed.
pub fn speed_qualifiers(cost: &EnergyUsage) -> Vec<String> {
    let mut qualifiers = Vec::new();

    let uniform = cost.attack != EnergyUsage::BASELINE
        && [cost.missile, cost.spell, cost.special, cost.item]
            .iter()
            .all(|c| *c == cost.attack);
    if uniform {
        action_cost(&mut qualifiers, cost.attack, "act");
    }

    action_cost(&mut qualifiers, cost.moving, "move");
    if cost.swim != cost.moving {
        action_cost(&mut qualifiers, cost.swim, "swim");
    }
    if !uniform {
        action_cost(&mut qualifiers, cost.attack, "atk");
        action_cost(&mut qualifiers, cost.missile, "msl");
        action_cost(&mut qualifiers, cost.spell, "spell");
        action_cost(&mut qualifiers, cost.special, "special");
        action_cost(&mut qualifiers, cost.item, "item");
    }
    qualifiers
}

fn damage_range(name: &str, low: i32, high: i32) -> String {
    format!("({}:{}-{})", name, low, high)
}

/// Annotation shown after an attack's damage.
pub fn flavour_annotation(flavour: AttackFlavour, hit_dice: i32) -> Option<Token> {
    use AttackFlavour as F;
    let (colour, text) = match flavour {
        F::Plain => return None,
        F::Reach => (Colour::Black, "(reach)".to_string()),
        F::Acid => (Colour::Yellow, "(acid:7d3)".to_string()),
        F::Blink => (Colour::Magenta, "(blink)".to_string()),
        F::Cold => (
            Colour::LightBlue,
            damage_range("cold", hit_dice, 3 * hit_dice - 1),
        ),
        F::Confuse => (Colour::LightMagenta, "(confuse)".to_string()),
        F::Disease => (Colour::Brown, "(disease)".to_string()),
        F::DrainDex => (Colour::Red, "(drain dexterity)".to_string()),
        F::DrainStr => (Colour::Red, "(drain strength)".to_string()),
        F::DrainXp => (Colour::LightMagenta, "(drain)".to_string()),
        F::Chaos => (Colour::LightGreen, "(chaos)".to_string()),
        F::Elec => (
            Colour::LightCyan,
            damage_range("elec", hit_dice, hit_dice + (hit_dice / 2 - 1).max(0)),
        ),
        F::Fire => (
            Colour::LightRed,
            damage_range("fire", hit_dice, hit_dice * 2 - 1),
        ),
        F::Napalm => (Colour::LightRed, "(napalm)".to_string()),
        F::Hunger => (Colour::Blue, "(hunger)".to_string()),
        F::Mutate => (Colour::LightGreen, "(mutation)".to_string()),
        F::Paralyse => (Colour::LightRed, "(paralyse)".to_string()),
        F::Poison => (Colour::Yellow, "(poison)".to_string()),
        F::PoisonNasty => (Colour::Yellow, "(nasty poison)".to_string()),
        F::PoisonMedium => (Colour::LightRed, "(medium poison)".to_string()),
        F::PoisonStrong => (Colour::LightRed, "(strong poison)".to_string()),
        F::PoisonStr => (Colour::LightRed, "(poison, drain str)".to_string()),
        F::PoisonInt => (Colour::LightRed, "(poison, drain int)".to_string()),
        F::PoisonDex => (Colour::LightRed, "(poison, drain dex)".to_string()),
        F::PoisonStat => (Colour::LightRed, "(poison, drain stat)".to_string()),
        F::Rot => (Colour::LightRed, "(rot)".to_string()),
        F::Vampiric => (Colour::Red, "(vampiric)".to_string()),
        F::Klown => (Colour::LightBlue, "(klown)".to_string()),
        F::Distort => (Colour::LightBlue, "(distort)".to_string()),
        F::Rage => (Colour::Red, "(rage)".to_string()),
        F::Holy => (Colour::Yellow, "(holy)".to_string()),
        F::Pain => (Colour::Red, "(pain)".to_string()),
        F::Antimagic => (Colour::LightBlue, "(antimagic)".to_string()),
        F::DrainInt => (Colour::Blue, "(drain int)".to_string()),
        F::DrainStat => (Colour::Blue, "(drain stat)".to_string()),
        F::Steal => (Colour::Cyan, "(steal)".to_string()),
        F::StealFood => (Colour::Cyan, "(steal food)".to_string()),
        F::Crush => (Colour::Black, "(crush)".to_string()),
        F::Ensnare => (Colour::White, "(ensnare)".to_string()),
    };
    Some(Token::coloured(colour, text))
}

/// Resistance or vulnerability token. Levels 2 and 3 print that many "+";
/// the colour brightens at level 3, for brown at level 1, and for every
/// vulnerability.
pub fn resist_token(colour: Colour, name: &str, level: i32, vulnerable: bool) -> Token {
    let brighten = level == 3 || (level == 1 && colour == Colour::Brown) || vulnerable;
    let colour = if brighten { colour.brighten() } else { colour };
    let mut text = name.to_string();
    if (2..=3).contains(&level) {
        text.push_str(&"+".repeat(level as usize));
    }
    Token::coloured(colour, text)
}

fn record_resist(
    resistances: &mut Vec<Token>,
    vulnerabilities: &mut Vec<Token>,
    colour: Colour,
    name: &str,
    level: i32,
) {
    if level > 0 {
        resistances.push(resist_token(colour, name, level, false));
    } else if level < 0 {
        vulnerabilities.push(resist_token(colour, name, -level, true));
    }
}

/// Magic resistance token, if the class has any.
pub fn magic_resistance(resist_magic: i32, hit_dice: i32) -> Option<Token> {
    if resist_magic == MAGIC_IMMUNE {
        Some(Token::coloured(Colour::LightMagenta, "magic(immune)"))
    } else if resist_magic < 0 {
        let value = hit_dice * resist_magic * 4 / 3 * -1;
        Some(Token::coloured(Colour::Magenta, format!("magic({})", value)))
    } else if resist_magic > 0 {
        Some(Token::coloured(
            Colour::Magenta,
            format!("magic({})", resist_magic),
        ))
    } else {
        None
    }
}

fn chunk_tokens(corpse: CorpseEffect) -> Vec<Token> {
    match corpse {
        CorpseEffect::NoCorpse | CorpseEffect::Clean => Vec::new(),
        CorpseEffect::Contaminated => vec![Token::coloured(Colour::Brown, "contaminated")],
        CorpseEffect::Poisonous => vec![Token::coloured(Colour::LightGreen, "poisonous")],
        CorpseEffect::PoisonContam => vec![
            Token::coloured(Colour::LightGreen, "poison"),
            Token::coloured(Colour::Brown, "contam"),
        ],
        CorpseEffect::Rot => vec![Token::coloured(Colour::LightRed, "rot")],
        CorpseEffect::MutagenRandom => vec![Token::coloured(Colour::Magenta, "mutagenic")],
    }
}

fn holiness_flag(holiness: Holiness) -> Option<Token> {
    match holiness {
        Holiness::Holy => Some(Token::coloured(Colour::Yellow, "holy")),
        Holiness::Undead => Some(Token::coloured(Colour::Brown, "undead")),
        Holiness::Demonic => Some(Token::coloured(Colour::Red, "demonic")),
        Holiness::Nonliving => Some(Token::coloured(Colour::LightCyan, "non-living")),
        Holiness::Plant => Some(Token::coloured(Colour::Green, "plant")),
        Holiness::Natural => None,
    }
}

/// Ability set, then spell-set variants.
fn spell_summary(shapeshifter: bool, aggregate: &Aggregate) -> String {
    if shapeshifter {
        return "(random)".to_string();
    }
    let mut summary = aggregate
        .abilities()
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    for (i, set) in aggregate.spell_sets().iter().enumerate() {
        if i > 0 {
            summary.push_str(" / ");
        } else if !summary.is_empty() {
            summary.push_str("; ");
        }
        summary.push_str(&set.to_string());
    }
    summary
}

/// Inputs that describe the request rather than the representative.
#[derive(Debug, Clone, Copy)]
pub struct RequestInfo<'a> {
    pub target: &'a str,
    /// Class named by the original request.
    pub requested: Option<MonsterType>,
    pub vault: bool,
}

impl ReportFields {
    /// Assembles the report for the representative at `index`.
    pub fn build<E: SimulationEngine>(
        engine: &mut E,
        index: MonsterIndex,
        request: RequestInfo<'_>,
        aggregate: &Aggregate,
    ) -> StatsResult<Self> {
        let mon = engine.monster(index).cloned().ok_or_else(|| {
            StatsError::Render(format!("No monster left to describe for {}", request.target))
        })?;

        let shapeshifter =
            mon.is_shapeshifter() || request.requested == Some(MonsterType::Shapeshifter);
        let entry = if shapeshifter {
            MonsterType::Shapeshifter.entry()
        } else {
            mon.entry()
        };
        let class = mon.entry();

        let changing_name =
            mon.has_hydra_multi_attack() || shapeshifter || mon.kind == MonsterType::DancingWeapon;
        let name = if changing_name {
            entry.name.to_string()
        } else {
            engine.display_name(index, DescMode::Plain)
        };

        let generated = mon.kind.is_generated();
        let (ac, ev) = if generated {
            (aggregate.mean_ac(), aggregate.mean_ev())
        } else {
            (entry.ac, entry.ev)
        };

        let mut attacks = Vec::new();
        for slot in 0..MAX_ATTACKS {
            if let Some(attack) = engine.attack_for_slot(index, slot) {
                let flavour = if entry.attacks[slot].flavour == AttackFlavour::Klown {
                    AttackFlavour::Klown
                } else {
                    attack.flavour
                };
                attacks.push(AttackSummary {
                    damage: attack.damage,
                    constrict: attack.kind == AttackType::Constrict,
                    flavour: flavour_annotation(flavour, mon.hit_dice),
                    per_head: mon.has_hydra_multi_attack(),
                });
            }
            if mon.has_hydra_multi_attack() {
                break;
            }
        }

        let spells = spell_summary(shapeshifter, aggregate);

        let mut flags = Vec::new();
        flags.extend(holiness_flag(entry.holiness));
        let mut flag = |set: bool, text: &str| {
            if set {
                flags.push(Token::plain(text));
            }
        };
        flag(entry.habitat == Habitat::Amphibious, "amphibious");
        flag(mon.is_evil(), "evil");
        flag(
            entry.has_flag(MonsterFlags::SPELLCASTER)
                && entry.has_flag(MonsterFlags::ACTUAL_SPELLS),
            "spellcaster",
        );
        flag(entry.has_flag(MonsterFlags::COLD_BLOOD), "cold-blooded");
        flag(entry.has_flag(MonsterFlags::SENSE_INVIS), "sense invisible");
        flag(entry.has_flag(MonsterFlags::SEE_INVIS), "see invisible");
        flag(entry.fly == Flight::Levitate, "lev");
        flag(entry.fly == Flight::Fly, "fly");
        flag(class.has_flag(MonsterFlags::REGEN), "regen");
        flag(entry.has_flag(MonsterFlags::DEFLECT_MISSILES), "DMsl");
        flag(entry.has_flag(MonsterFlags::WEB_SENSE), "web sense");
        flag(
            !spells.is_empty()
                && !mon.is_priest()
                && !mon.is_actual_spellcaster()
                && !class.has_flag(MonsterFlags::SPELL_NO_SILENT),
            "!sil",
        );
        if request.vault {
            flags.push(Token::coloured(Colour::Brown, "vault"));
        }

        let mut resistances = Vec::new();
        let mut vulnerabilities = Vec::new();
        resistances.extend(magic_resistance(entry.resist_magic, mon.hit_dice));

        let mut res = engine.resists(index);
        if shapeshifter {
            res.levels = entry.resists;
        }
        let levels = res.levels;
        let mut record = |colour: Colour, name: &str, level: i32| {
            record_resist(&mut resistances, &mut vulnerabilities, colour, name, level)
        };
        record(Colour::Red, "hellfire", levels.hellfire);
        if entry.resists.hellfire <= 0 {
            record(Colour::Red, "fire", levels.fire);
        }
        record(Colour::Blue, "cold", levels.cold);
        record(Colour::Cyan, "elec", levels.elec);
        record(Colour::Green, "poison", levels.poison);
        record(Colour::Brown, "acid", levels.acid);
        record(Colour::Black, "steam", levels.steam);
        record(Colour::Black, "asphyx", levels.asphyx);
        record(Colour::LightBlue, "drown", res.drown);
        record(Colour::LightRed, "rot", res.rot);
        record(Colour::LightMagenta, "neg", res.neg);
        record(Colour::Yellow, "holy", res.holy);
        record(Colour::LightMagenta, "torm", res.torm);
        record(Colour::LightBlue, "wind", res.wind);

        let chunks = if entry.weight != 0 {
            chunk_tokens(entry.corpse)
        } else {
            Vec::new()
        };

        Ok(Self {
            name,
            symbol: Token::coloured(mon.colour, class.glyph.to_string()),
            unfinished: class.has_flag(MonsterFlags::UNFINISHED),
            speed: aggregate.speed().unwrap_or(Span::single(mon.speed)),
            speed_qualifiers: speed_qualifiers(&entry.energy),
            mean_speed: if aggregate.trials() > 0 {
                aggregate.mean_speed()
            } else {
                mon.speed
            },
            hit_dice: mon.hit_dice,
            health: aggregate.hp().unwrap_or(Span::single(mon.hit_points)),
            ac,
            ev,
            attacks,
            flags,
            resistances,
            vulnerabilities,
            chunks,
            xp: aggregate.mean_xp(),
            abilities: aggregate.abilities().iter().cloned().collect(),
            spell_sets: aggregate.spell_sets().iter().cloned().collect(),
            spells,
        })
    }

    /// Renders the report line, ending in ".".
    pub fn to_text(&self, painter: &Painter) -> String {
        let join = |tokens: &[Token], sep: &str| {
            tokens
                .iter()
                .map(|t| t.paint(painter))
                .collect::<Vec<_>>()
                .join(sep)
        };

        let mut line = format!("{} ({})", self.name, self.symbol.paint(painter));

        if self.unfinished {
            line.push_str(&format!(" | {}", painter.paint(Colour::LightRed, "UNFINISHED")));
        }

        line.push_str(&format!(" | Speed: {}", self.speed));
        if !self.speed_qualifiers.is_empty() {
            line.push_str(&format!(" ({})", self.speed_qualifiers.join("; ")));
        }

        line.push_str(&format!(" | HD: {}", self.hit_dice));
        line.push_str(&format!(" | Health: {}", self.health));
        line.push_str(&format!(" | AC/EV: {}/{}", self.ac, self.ev));

        if !self.attacks.is_empty() {
            let attacks: Vec<String> = self
                .attacks
                .iter()
                .map(|attack| {
                    let mut text = attack.damage.to_string();
                    if attack.constrict {
                        text.push_str(&painter.paint(Colour::Green, "(constrict)"));
                    }
                    if let Some(flavour) = &attack.flavour {
                        text.push_str(&flavour.paint(painter));
                    }
                    if attack.per_head {
                        text.push_str(" per head");
                    }
                    text
                })
                .collect();
            line.push_str(&format!(" | Damage: {}", attacks.join(", ")));
        }

        if !self.flags.is_empty() {
            line.push_str(&format!(" | Flags: {}", join(&self.flags, ", ")));
        }
        if !self.resistances.is_empty() {
            line.push_str(&format!(" | Res: {}", join(&self.resistances, ", ")));
        }
        if !self.vulnerabilities.is_empty() {
            line.push_str(&format!(" | Vul: {}", join(&self.vulnerabilities, ", ")));
        }
        if !self.chunks.is_empty() {
            line.push_str(&format!(" | Chunks: {}", join(&self.chunks, "+")));
        }

        line.push_str(&format!(" | XP: {}", self.xp));

        if !self.spells.is_empty() {
            line.push_str(&format!(" | Sp: {}", self.spells));
        }

        line.push('.');
        line
    }

    /// Serializes the fields as a single JSON line.
    pub fn to_json(&self) -> StatsResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
