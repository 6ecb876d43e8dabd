//! Bundled simulation engine: a flat level, one observer, and creatures
//! built from the static bestiary.

use std::cell::Cell;
use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use super::bestiary::{MonsterType, SpecialAbility};
use super::catalog::{self, CreatureSpec};
use super::monster::{Monster, MonsterIndex};
use super::spells::{SpellType, EMPTY_BOOK};
use super::types::*;
use super::{Observer, SimulationEngine};

pub const GXM: i32 = 80;
pub const GYM: i32 = 70;
pub const MAX_MONSTERS: usize = 700;
pub const LOS_RADIUS: i32 = 8;

/// How far a blink may carry a creature.
const BLINK_RANGE: i32 = 4;

fn capitalised(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Work the engine has done, for instrumentation and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineCounters {
    pub catalog_lookups: u64,
    pub instantiated: u64,
    pub destroyed: u64,
    pub abilities_invoked: u64,
    pub spell_beams: u64,
}

#[derive(Debug, Clone)]
pub struct Arena {
    grid: Vec<Terrain>,
    visible: Vec<bool>,
    observer: Observer,
    monsters: Vec<Option<Monster>>,
    unique_spawned: HashSet<MonsterType>,
    rng: ChaCha8Rng,
    messages: Vec<String>,
    suppressed: bool,
    counters: EngineCounters,
    lookups: Cell<u64>,
}

impl Arena {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            grid: vec![Terrain::Wall; (GXM * GYM) as usize],
            visible: vec![false; (GXM * GYM) as usize],
            observer: Observer {
                pos: Coord::new(0, 0),
                hp: 1,
                hp_max: 1,
            },
            monsters: vec![None; MAX_MONSTERS],
            unique_spawned: HashSet::new(),
            rng,
            messages: Vec::new(),
            suppressed: false,
            counters: EngineCounters::default(),
            lookups: Cell::new(0),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Uniform roll in `0..n`; zero when `n <= 0`.
    pub fn roll(&mut self, n: i32) -> i32 {
        if n <= 0 {
            0
        } else {
            self.rng.gen_range(0..n)
        }
    }

    fn one_chance_in(&mut self, n: i32) -> bool {
        self.roll(n) == 0
    }

    fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    /// Records a player-facing message unless messages are suppressed.
    pub fn say(&mut self, message: impl Into<String>) {
        if self.suppressed {
            return;
        }
        let message = message.into();
        trace!(target: "engine.messages", %message);
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn messages_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn counters(&self) -> EngineCounters {
        EngineCounters {
            catalog_lookups: self.lookups.get(),
            ..self.counters
        }
    }

    pub fn live_monsters(&self) -> usize {
        self.monsters.iter().filter(|m| m.is_some()).count()
    }

    pub fn is_visible(&self, pos: Coord) -> bool {
        self.cell(pos).map(|i| self.visible[i]).unwrap_or(false)
    }

    fn cell(&self, pos: Coord) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= GXM || pos.y >= GYM {
            None
        } else {
            Some((pos.y * GXM + pos.x) as usize)
        }
    }

    fn occupied(&self, pos: Coord) -> bool {
        self.observer.pos == pos || self.monsters.iter().flatten().any(|m| m.pos == pos)
    }

    fn is_open(&self, pos: Coord) -> bool {
        self.terrain(pos) == Some(Terrain::Floor) && !self.occupied(pos)
    }

    fn blink_destination(&mut self, from: Coord) -> Option<Coord> {
        let mut candidates = Vec::new();
        for dy in -BLINK_RANGE..=BLINK_RANGE {
            for dx in -BLINK_RANGE..=BLINK_RANGE {
                let pos = Coord::new(from.x + dx, from.y + dy);
                if pos != from && self.is_open(pos) {
                    candidates.push(pos);
                }
            }
        }
        if candidates.is_empty() {
            None
        } else {
            Some(self.choose(&candidates))
        }
    }

    fn roll_hit_points(&mut self, kind: MonsterType, hit_dice: i32) -> i32 {
        let hp = kind.entry().hp;
        let rolled =
            hit_dice * hp.per_hd_min + self.roll(hit_dice * hp.per_hd_rand + 1) + hp.fixed;
        rolled.max(1)
    }

    fn resolve_kind(
        &mut self,
        spec: &CreatureSpec,
        kind: MonsterType,
    ) -> (MonsterType, Option<MonsterType>) {
        match kind {
            MonsterType::Draconian => (self.choose(&MonsterType::DRACONIAN_COLOURS), None),
            MonsterType::DraconianScorcher => {
                let colour = match spec.base {
                    Some(colour) => colour,
                    None => self.choose(&MonsterType::DRACONIAN_COLOURS),
                };
                (kind, Some(colour))
            }
            MonsterType::Zombie => {
                let base = match spec.base {
                    Some(base) => base,
                    None => self.choose(&MonsterType::ZOMBIE_BASES),
                };
                (kind, Some(base))
            }
            MonsterType::Shapeshifter => (self.choose(&MonsterType::SHAPESHIFTER_FORMS), None),
            other => (other, spec.base),
        }
    }

    fn build_monster(
        &mut self,
        spec: &CreatureSpec,
        requested: MonsterType,
        pos: Coord,
        disposition: Disposition,
    ) -> Monster {
        let (kind, base) = self.resolve_kind(spec, requested);
        let entry = kind.entry();

        let mut hit_dice = match (kind, base) {
            (MonsterType::Zombie, Some(base)) => base.entry().hit_dice,
            _ => entry.hit_dice,
        };
        let mut heads = 0;
        if kind.has_hydra_multi_attack() {
            heads = 4 + self.roll(5);
            hit_dice = heads;
        }
        if let Some(hd) = spec.hit_dice {
            hit_dice = hd;
        }

        let hit_points = self.roll_hit_points(kind, hit_dice);
        let mut ac = entry.ac;
        let mut ev = entry.ev;
        let mut speed = entry.speed + self.roll(entry.speed_spread + 1);
        let mut weapon = None;

        match (kind, base) {
            (MonsterType::Zombie, Some(base)) => {
                ac = base.entry().ac + self.roll(3);
                ev = base.entry().ev / 2 + self.roll(2);
            }
            (MonsterType::DancingWeapon, _) => {
                let (name, damage, weapon_ac, weapon_ev, weapon_speed) =
                    self.choose(&MonsterType::DANCING_WEAPONS);
                weapon = Some((name, damage));
                ac = weapon_ac;
                ev = weapon_ev;
                speed = weapon_speed;
            }
            _ => {}
        }

        let colour = match (kind.is_draconian_job(), base) {
            (true, Some(colour)) => colour.entry().colour,
            _ => entry.colour,
        };

        let spells = if entry.spellbooks.is_empty() {
            EMPTY_BOOK
        } else {
            self.choose(entry.spellbooks)
        };

        let mut enchantments = Vec::new();
        if requested == MonsterType::Shapeshifter {
            enchantments.push(Enchantment::Shapeshifter);
        }
        if entry.habitat == Habitat::Water {
            enchantments.push(Enchantment::Submerged);
        }

        Monster {
            kind,
            base,
            hit_dice,
            hit_points,
            max_hit_points: hit_points,
            ac,
            ev,
            speed,
            pos,
            colour,
            spells,
            enchantments,
            behaviour: if disposition.aware {
                Behaviour::Seek
            } else {
                Behaviour::Sleep
            },
            foe: if disposition.hostile {
                Foe::Observer
            } else {
                Foe::Nobody
            },
            hostile: disposition.hostile,
            custom_name: spec.name.clone(),
            heads,
            weapon,
        }
    }

    fn plain_name(mon: &Monster) -> String {
        if let Some(name) = &mon.custom_name {
            return name.clone();
        }
        match (mon.kind, mon.base) {
            (MonsterType::Hydra, _) => format!("{}-headed hydra", mon.heads),
            (MonsterType::Zombie, Some(base)) => format!("{} zombie", base.name()),
            (MonsterType::DancingWeapon, _) => match mon.weapon {
                Some((weapon, _)) => format!("dancing {}", weapon),
                None => mon.entry().name.to_string(),
            },
            (kind, Some(colour)) if kind.is_draconian_job() => {
                kind.name().replacen("draconian", colour.name(), 1)
            }
            (MonsterType::RoyalJelly, _) => MonsterType::RoyalJelly.catalog_name(),
            (kind, _) => kind.name().to_string(),
        }
    }

    fn described(mon: &Monster, mode: DescMode) -> String {
        let name = Self::plain_name(mon);
        let proper = name.starts_with("the ")
            || name.chars().next().is_some_and(|c| c.is_uppercase());
        match mode {
            DescMode::The if !proper => format!("the {}", name),
            _ => name,
        }
    }

    fn ability_damage(hit_dice: i32, ability: SpecialAbility) -> DiceDef {
        match ability {
            SpecialAbility::AcidSplash => DiceDef::new(3, 3 + hit_dice / 5),
            SpecialAbility::FireBreath => DiceDef::new(3, 3 + hit_dice),
            SpecialAbility::ElectricBolt => DiceDef::new(3, 3 + hit_dice),
            SpecialAbility::Blink | SpecialAbility::Torment => DiceDef::default(),
        }
    }
}

impl SimulationEngine for Arena {
    type RngState = ChaCha8Rng;

    fn reset_level(&mut self) {
        self.grid.fill(Terrain::Wall);
        self.visible.fill(false);
        self.monsters.iter_mut().for_each(|slot| *slot = None);
    }

    fn grid_size(&self) -> (i32, i32) {
        (GXM, GYM)
    }

    fn terrain(&self, pos: Coord) -> Option<Terrain> {
        self.cell(pos).map(|i| self.grid[i])
    }

    fn set_terrain(&mut self, pos: Coord, terrain: Terrain) {
        if let Some(i) = self.cell(pos) {
            self.grid[i] = terrain;
        }
    }

    fn recompute_visibility(&mut self) {
        let centre = self.observer.pos;
        for y in 0..GYM {
            for x in 0..GXM {
                let pos = Coord::new(x, y);
                let i = (y * GXM + x) as usize;
                self.visible[i] =
                    self.grid[i] == Terrain::Floor && pos.distance(centre) <= LOS_RADIUS;
            }
        }
    }

    fn observer(&self) -> &Observer {
        &self.observer
    }

    fn observer_mut(&mut self) -> &mut Observer {
        &mut self.observer
    }

    fn parse_spec(&self, text: &str) -> Result<CreatureSpec, String> {
        self.lookups.set(self.lookups.get() + 1);
        catalog::parse_spec(text)
    }

    fn vault_spec(&self, text: &str) -> Option<CreatureSpec> {
        self.lookups.set(self.lookups.get() + 1);
        catalog::vault_spec(text)
    }

    fn instantiate(
        &mut self,
        spec: &CreatureSpec,
        pos: Coord,
        disposition: Disposition,
    ) -> Option<MonsterIndex> {
        let requested = spec.monster_type().filter(|kind| kind.is_simulatable())?;
        if requested.is_unique() && self.unique_spawned.contains(&requested) {
            return None;
        }
        if !self.is_open(pos) {
            return None;
        }
        let slot = self.monsters.iter().position(|m| m.is_none())?;

        let monster = self.build_monster(spec, requested, pos, disposition);
        if monster.kind.is_unique() {
            self.unique_spawned.insert(monster.kind);
        }
        let name = Self::plain_name(&monster);
        self.monsters[slot] = Some(monster);
        self.counters.instantiated += 1;
        if self.is_visible(pos) {
            self.say(format!("A {} comes into view.", name));
        }
        Some(MonsterIndex(slot))
    }

    fn monster(&self, index: MonsterIndex) -> Option<&Monster> {
        self.monsters.get(index.0).and_then(|m| m.as_ref())
    }

    fn monster_mut(&mut self, index: MonsterIndex) -> Option<&mut Monster> {
        self.monsters.get_mut(index.0).and_then(|m| m.as_mut())
    }

    fn destroy(&mut self, index: MonsterIndex) {
        if let Some(slot) = self.monsters.get_mut(index.0) {
            if slot.take().is_some() {
                self.counters.destroyed += 1;
            }
        }
    }

    fn clear_unique_marker(&mut self, kind: MonsterType) {
        self.unique_spawned.remove(&kind);
    }

    fn invoke_special_ability(&mut self, index: MonsterIndex, beam: &mut Beam) {
        self.counters.abilities_invoked += 1;
        let Some(mon) = self.monster(index) else {
            return;
        };
        if mon.has_ench(Enchantment::Submerged) {
            return;
        }
        let Some(ability) = mon.entry().ability else {
            return;
        };
        let (pos, hit_dice) = (mon.pos, mon.hit_dice);
        let name = capitalised(&Self::described(mon, DescMode::The));

        match ability {
            SpecialAbility::AcidSplash if self.one_chance_in(3) => {
                beam.name = "acid splash".to_string();
                beam.damage = Self::ability_damage(hit_dice, ability);
                self.say(format!("{} spits acid.", name));
            }
            SpecialAbility::FireBreath if self.one_chance_in(3) => {
                beam.name = "searing breath".to_string();
                beam.damage = Self::ability_damage(hit_dice, ability);
                self.say(format!("{} breathes fire.", name));
            }
            SpecialAbility::ElectricBolt if self.one_chance_in(3) => {
                beam.name = "bolt of electricity".to_string();
                beam.damage = Self::ability_damage(hit_dice, ability);
                self.say(format!("{} shoots out a bolt of electricity!", name));
            }
            SpecialAbility::Blink if self.one_chance_in(4) => {
                if let Some(dest) = self.blink_destination(pos) {
                    if let Some(mon) = self.monster_mut(index) {
                        mon.pos = dest;
                    }
                    self.say(format!("{} blinks.", name));
                }
            }
            SpecialAbility::Torment if self.one_chance_in(3) => {
                let observer = &mut self.observer;
                observer.hp -= (observer.hp - 1) / 2;
                self.say(format!("{} calls on the powers of Hell!", name));
            }
            _ => {}
        }
    }

    fn spell_beam(&mut self, index: MonsterIndex, spell: SpellType, power: i32) -> Beam {
        self.counters.spell_beams += 1;
        let origin = if spell == SpellType::DraconianBreath {
            match self.draconian_subspecies(index) {
                Some(MonsterType::RedDraconian) => Some(SpellType::FireBreath),
                Some(MonsterType::WhiteDraconian) => Some(SpellType::ColdBreath),
                Some(MonsterType::GreenDraconian) => Some(SpellType::PoisonBreath),
                _ => None,
            }
        } else {
            Some(spell)
        };
        match origin {
            Some(origin) => Beam {
                name: origin.title().to_ascii_lowercase(),
                damage: origin.beam_damage(power),
                origin_spell: Some(origin),
            },
            None => Beam {
                origin_spell: Some(spell),
                ..Beam::new()
            },
        }
    }

    fn attack_for_slot(&mut self, index: MonsterIndex, slot: usize) -> Option<AttackDef> {
        let mon = self.monster(index)?;
        let mut attack = match (mon.kind, mon.base) {
            (MonsterType::Zombie, Some(base)) => {
                let base_attack = *base.entry().attacks.get(slot)?;
                AttackDef::plain(base_attack.kind, base_attack.damage + mon.hit_dice)
            }
            _ => *mon.entry().attacks.get(slot)?,
        };
        if !attack.is_present() {
            return None;
        }
        if let Some((_, damage)) = mon.weapon {
            attack.damage = damage;
        }
        if attack.flavour == AttackFlavour::Klown {
            attack.flavour = self.choose(&AttackFlavour::KLOWN_CHOICES);
        }
        Some(attack)
    }

    fn resists(&self, index: MonsterIndex) -> ResistReport {
        let Some(mon) = self.monster(index) else {
            return ResistReport::default();
        };
        let entry = mon.entry();
        let mut levels = entry.resists;
        if let (true, Some(colour)) = (mon.kind.is_draconian_job(), mon.base) {
            let extra = colour.entry().resists;
            let add = |a: i32, b: i32| (a + b).clamp(-3, 3);
            levels.fire = add(levels.fire, extra.fire);
            levels.cold = add(levels.cold, extra.cold);
            levels.poison = add(levels.poison, extra.poison);
            levels.acid = add(levels.acid, extra.acid);
        }

        let mut report = ResistReport {
            levels,
            ..ResistReport::default()
        };
        match entry.holiness {
            Holiness::Undead => {
                report.drown = 1;
                report.rot = 1;
                report.neg = 3;
                report.holy = -2;
                report.torm = 1;
            }
            Holiness::Demonic => {
                report.neg = 3;
                report.holy = -2;
                report.torm = 1;
            }
            Holiness::Nonliving => {
                report.drown = 1;
                report.rot = 1;
                report.neg = 3;
                report.torm = 1;
            }
            Holiness::Plant => {
                report.rot = 1;
                report.neg = 1;
                report.torm = 1;
            }
            Holiness::Holy => {
                report.holy = 3;
            }
            Holiness::Natural => {}
        }
        if entry.habitat != Habitat::Land {
            report.drown = 1;
        }
        if entry.fly == Flight::Fly {
            report.wind = 1;
        }
        report
    }

    fn xp_value(&self, index: MonsterIndex) -> i64 {
        let Some(mon) = self.monster(index) else {
            return 0;
        };
        let entry = mon.entry();
        let hd = i64::from(mon.hit_dice);
        let avg_hp = i64::from(entry.hp.average(mon.hit_dice));

        let mut xp = (16 + avg_hp) * hd * hd / 10;
        if entry.speed > EnergyUsage::BASELINE {
            xp += xp * i64::from(entry.speed - EnergyUsage::BASELINE) / 10;
        }
        xp += mon.spell_count() as i64 * hd * 3;
        if entry.ability.is_some() {
            xp += xp / 5;
        }
        if entry.has_flag(MonsterFlags::REGEN) {
            xp += xp / 4;
        }
        xp.clamp(1, 15_000)
    }

    fn draconian_subspecies(&self, index: MonsterIndex) -> Option<MonsterType> {
        let mon = self.monster(index)?;
        if mon.kind.genus() != MonsterType::Draconian {
            return None;
        }
        if mon.kind.is_draconian_job() {
            mon.base
        } else {
            Some(mon.kind)
        }
    }

    fn display_name(&self, index: MonsterIndex, mode: DescMode) -> String {
        let Some(mon) = self.monster(index) else {
            return String::new();
        };
        Self::described(mon, mode)
    }

    fn set_messages_suppressed(&mut self, suppressed: bool) -> bool {
        std::mem::replace(&mut self.suppressed, suppressed)
    }

    fn save_rng(&self) -> ChaCha8Rng {
        self.rng.clone()
    }

    fn restore_rng(&mut self, state: ChaCha8Rng) {
        self.rng = state;
    }
}
