//! Scoped engine state: message suppression and RNG excursions.
//!
//! Both guards borrow the engine mutably and deref to it, so work inside
//! the scope goes through the guard. Prior state comes back on drop,
//! whichever way the scope is left.

use std::ops::{Deref, DerefMut};

use super::SimulationEngine;

pub struct MessageGuard<'a, E: SimulationEngine> {
    engine: &'a mut E,
    previous: bool,
}

impl<'a, E: SimulationEngine> MessageGuard<'a, E> {
    pub fn new(engine: &'a mut E) -> Self {
        let previous = engine.set_messages_suppressed(true);
        Self { engine, previous }
    }
}

impl<E: SimulationEngine> Deref for MessageGuard<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.engine
    }
}

impl<E: SimulationEngine> DerefMut for MessageGuard<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        self.engine
    }
}

impl<E: SimulationEngine> Drop for MessageGuard<'_, E> {
    fn drop(&mut self) {
        self.engine.set_messages_suppressed(self.previous);
    }
}

pub struct RngExcursion<'a, E: SimulationEngine> {
    engine: &'a mut E,
    saved: Option<E::RngState>,
}

impl<'a, E: SimulationEngine> RngExcursion<'a, E> {
    pub fn new(engine: &'a mut E) -> Self {
        let saved = Some(engine.save_rng());
        Self { engine, saved }
    }
}

impl<E: SimulationEngine> Deref for RngExcursion<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.engine
    }
}

impl<E: SimulationEngine> DerefMut for RngExcursion<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        self.engine
    }
}

impl<E: SimulationEngine> Drop for RngExcursion<'_, E> {
    fn drop(&mut self) {
        if let Some(state) = self.saved.take() {
            self.engine.restore_rng(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Arena, SimulationEngine};

    #[test]
    fn test_message_guard_restores_previous_setting() {
        let mut arena = Arena::seeded(1);
        assert!(!arena.messages_suppressed());
        {
            let mut quiet = arena.quiet();
            assert!(quiet.messages_suppressed());
            quiet.say("swallowed");
        }
        assert!(!arena.messages_suppressed());
        assert!(arena.messages().is_empty());
    }

    #[test]
    fn test_nested_quiet_scopes_unwind_in_order() {
        let mut arena = Arena::seeded(1);
        {
            let mut outer = arena.quiet();
            {
                let inner = outer.quiet();
                assert!(inner.messages_suppressed());
            }
            assert!(outer.messages_suppressed());
        }
        assert!(!arena.messages_suppressed());
    }

    #[test]
    fn test_rng_excursion_replays_sequence() {
        let mut arena = Arena::seeded(7);
        let first = {
            let mut excursion = arena.rng_excursion();
            excursion.roll(1000)
        };
        let second = arena.roll(1000);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rng_excursion_restores_on_early_return() {
        fn consume(arena: &mut Arena) -> Result<(), ()> {
            let mut excursion = arena.rng_excursion();
            excursion.roll(10);
            Err(())
        }

        let mut reference = Arena::seeded(99);
        let expected = reference.roll(1_000_000);

        let mut arena = Arena::seeded(99);
        assert!(consume(&mut arena).is_err());
        assert_eq!(arena.roll(1_000_000), expected);
    }
}
