//! Statistical creature inspection.
//!
//! Resolves a creature name, instantiates it many times in an isolated
//! scratch level, samples what each instance can do, and renders the
//! aggregate as a single report line:
//! - HP and speed ranges, mean XP, AC and EV
//! - the distinct special abilities and spell loadouts seen across trials
//! - static class data: attacks, flags, resistances, corpse effects
//!
//! Everything here talks to the simulation only through
//! [`SimulationEngine`](crate::engine::SimulationEngine).

mod aggregate;
mod config;
mod names;
mod report;
mod resolver;
mod runner;
mod sampling;
mod scratch;

pub use aggregate::{Aggregate, Span, TrialOutcome};
pub use config::{OutputFormat, StatsConfig};
pub use names::shorten_spell_name;
pub use report::{AttackSummary, ReportFields, RequestInfo, Token};
pub use resolver::{canned_report, resolve, CannedReport, SpecState};
pub use runner::{inspect, resolve_only, run_inspection, Inspection};
pub use sampling::{stepdown_value, SpellDamage, SpellEntry, SpellSet};
pub use scratch::init_scratch_world;
