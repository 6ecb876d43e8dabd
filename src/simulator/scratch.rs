//! The isolated level every trial runs in.

use tracing::debug;

use crate::constants::{PLAYER_MAXHP, PLAYER_PLACE};
use crate::engine::{Coord, SimulationEngine, Terrain};

/// Resets the level to open floor with the observer at its post.
///
/// Calling this again yields the same state.
pub fn init_scratch_world<E: SimulationEngine>(engine: &mut E) {
    engine.reset_level();

    let (width, height) = engine.grid_size();
    for y in 0..height {
        for x in 0..width {
            engine.set_terrain(Coord::new(x, y), Terrain::Floor);
        }
    }

    let observer = engine.observer_mut();
    observer.pos = Coord::new(PLAYER_PLACE.0, PLAYER_PLACE.1);
    observer.hp = PLAYER_MAXHP;
    observer.hp_max = PLAYER_MAXHP;

    engine.recompute_visibility();
    debug!(width, height, "scratch world ready");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Arena;

    #[test]
    fn test_scratch_world_is_all_floor() {
        let mut arena = Arena::seeded(1);
        init_scratch_world(&mut arena);
        let (width, height) = arena.grid_size();
        assert_eq!((width, height), (80, 70));
        for (x, y) in [(0, 0), (79, 69), (20, 20), (40, 35)] {
            assert_eq!(arena.terrain(Coord::new(x, y)), Some(Terrain::Floor));
        }
        assert_eq!(arena.observer().pos, Coord::new(21, 20));
        assert_eq!(arena.observer().hp, 500);
        assert_eq!(arena.observer().hp_max, 500);
        assert!(arena.is_visible(Coord::new(20, 20)));
    }

    #[test]
    fn test_scratch_world_is_idempotent() {
        let mut arena = Arena::seeded(1);
        init_scratch_world(&mut arena);
        arena.observer_mut().hp = 3;
        arena.set_terrain(Coord::new(5, 5), Terrain::Wall);
        init_scratch_world(&mut arena);
        assert_eq!(arena.terrain(Coord::new(5, 5)), Some(Terrain::Floor));
        assert_eq!(arena.observer().hp, 500);
    }
}
