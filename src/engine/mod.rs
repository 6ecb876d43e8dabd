//! Creature simulation engine.
//!
//! [`SimulationEngine`] is everything the inspection core needs from a
//! simulation: a level to stand in, an observer, a catalog to resolve names,
//! and the creature lifecycle and resolution paths. [`Arena`] is the bundled
//! implementation backed by the static bestiary.

pub mod arena;
pub mod bestiary;
pub mod catalog;
pub mod monster;
pub mod scope;
pub mod spells;
pub mod types;

pub use arena::{Arena, EngineCounters};
pub use bestiary::{MonsterEntry, MonsterType, SpecialAbility, MAGIC_IMMUNE};
pub use catalog::{CreatureSpec, SpecKind};
pub use monster::{Monster, MonsterIndex};
pub use scope::{MessageGuard, RngExcursion};
pub use spells::{SpellType, NUM_MONSTER_SPELL_SLOTS};
pub use types::*;

/// The synthetic actor creatures are pitted against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observer {
    pub pos: Coord,
    pub hp: i32,
    pub hp_max: i32,
}

pub trait SimulationEngine {
    /// Snapshot of the random number generator.
    type RngState;

    // Level and observer.
    fn reset_level(&mut self);
    fn grid_size(&self) -> (i32, i32);
    fn terrain(&self, pos: Coord) -> Option<Terrain>;
    fn set_terrain(&mut self, pos: Coord, terrain: Terrain);
    fn recompute_visibility(&mut self);
    fn observer(&self) -> &Observer;
    fn observer_mut(&mut self) -> &mut Observer;

    // Catalogs.
    fn parse_spec(&self, text: &str) -> Result<CreatureSpec, String>;
    fn vault_spec(&self, text: &str) -> Option<CreatureSpec>;

    // Creature lifecycle.
    fn instantiate(
        &mut self,
        spec: &CreatureSpec,
        pos: Coord,
        disposition: Disposition,
    ) -> Option<MonsterIndex>;
    fn monster(&self, index: MonsterIndex) -> Option<&Monster>;
    fn monster_mut(&mut self, index: MonsterIndex) -> Option<&mut Monster>;
    fn destroy(&mut self, index: MonsterIndex);
    fn clear_unique_marker(&mut self, kind: MonsterType);

    // Resolution paths.
    fn invoke_special_ability(&mut self, index: MonsterIndex, beam: &mut Beam);
    fn spell_beam(&mut self, index: MonsterIndex, spell: SpellType, power: i32) -> Beam;
    fn attack_for_slot(&mut self, index: MonsterIndex, slot: usize) -> Option<AttackDef>;
    fn resists(&self, index: MonsterIndex) -> ResistReport;
    fn xp_value(&self, index: MonsterIndex) -> i64;
    /// Colour class of a draconian, `None` for other genera.
    fn draconian_subspecies(&self, index: MonsterIndex) -> Option<MonsterType>;
    fn display_name(&self, index: MonsterIndex, mode: DescMode) -> String;

    // Scoping.
    /// Sets message suppression and returns the previous setting.
    fn set_messages_suppressed(&mut self, suppressed: bool) -> bool;
    fn save_rng(&self) -> Self::RngState;
    fn restore_rng(&mut self, state: Self::RngState);

    /// Suppresses messages until the guard drops.
    fn quiet(&mut self) -> MessageGuard<'_, Self>
    where
        Self: Sized,
    {
        MessageGuard::new(self)
    }

    /// Restores the RNG to its current state when the guard drops.
    fn rng_excursion(&mut self) -> RngExcursion<'_, Self>
    where
        Self: Sized,
    {
        RngExcursion::new(self)
    }
}
