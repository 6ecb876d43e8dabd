//! Main inspection runner.
//!
//! One run resolves the request, creates a first instance, then for each
//! trial samples the live instance, destroys it and creates the next. The
//! instance alive after the last trial is the representative the report
//! describes.

use tracing::{debug, info};

use super::aggregate::{Aggregate, TrialOutcome};
use super::config::{OutputFormat, StatsConfig};
use super::report::{ReportFields, RequestInfo};
use super::resolver::{self, CannedReport, SpecState};
use super::sampling::{record_ability, samples_abilities, spell_set};
use super::scratch::init_scratch_world;
use crate::colour::Painter;
use crate::constants::{MONSTER_PLACE, PROGRESS_INTERVAL};
use crate::engine::{
    Arena, Behaviour, Coord, CreatureSpec, DescMode, Disposition, Enchantment, Foe, MonsterIndex,
    SimulationEngine,
};
use crate::error::{StatsError, StatsResult};

/// Result of inspecting one request.
#[derive(Debug, Clone)]
pub enum Inspection {
    /// Fixed line from the canned table; the engine was never touched.
    Canned(&'static CannedReport),
    Report(Box<ReportFields>),
}

impl Inspection {
    /// Renders the output line, without the trailing newline.
    pub fn render(&self, painter: &Painter, format: OutputFormat) -> StatsResult<String> {
        match (self, format) {
            (Inspection::Canned(canned), _) => Ok(canned.render(painter)),
            (Inspection::Report(fields), OutputFormat::Text) => Ok(fields.to_text(painter)),
            (Inspection::Report(fields), OutputFormat::Json) => fields.to_json(),
        }
    }

    pub fn fields(&self) -> Option<&ReportFields> {
        match self {
            Inspection::Report(fields) => Some(&**fields),
            Inspection::Canned(_) => None,
        }
    }
}

fn monster_place() -> Coord {
    Coord::new(MONSTER_PLACE.0, MONSTER_PLACE.1)
}

/// Places a hostile, aware instance at the monster post and surfaces it.
/// Creation messages are suppressed along with the rest.
fn create_monster<E: SimulationEngine>(
    engine: &mut E,
    spec: &CreatureSpec,
) -> Option<MonsterIndex> {
    let mut quiet = engine.quiet();
    let index = quiet.instantiate(spec, monster_place(), Disposition::HOSTILE_AWARE)?;
    let mon = quiet.monster_mut(index)?;
    mon.behaviour = Behaviour::Seek;
    mon.foe = Foe::Observer;
    mon.del_ench(Enchantment::Submerged);
    Some(index)
}

fn sample_trial<E: SimulationEngine>(
    engine: &mut E,
    index: MonsterIndex,
    target: &str,
) -> StatsResult<TrialOutcome> {
    let unexpected = || {
        StatsError::Instantiation(format!(
            "Unexpected failure generating monster for {}",
            target
        ))
    };

    let ability = if samples_abilities(engine, index) {
        record_ability(engine, index)
    } else {
        None
    };

    let name = engine.display_name(index, DescMode::Plain);
    let xp = engine.xp_value(index);
    let mon = engine.monster(index).ok_or_else(unexpected)?;
    let (ac, ev, speed, hp, zombified) = (
        mon.ac,
        mon.ev,
        mon.speed,
        mon.hit_points,
        mon.kind.is_zombified(),
    );

    let spells = if zombified {
        None
    } else {
        Some(spell_set(engine, index))
    };

    Ok(TrialOutcome {
        name,
        xp,
        ac,
        ev,
        speed,
        hp,
        ability,
        spells,
    })
}

/// Inspects `target` on `engine`, sampling `config.trials` instances.
pub fn inspect<E: SimulationEngine>(
    engine: &mut E,
    target: &str,
    config: &StatsConfig,
) -> StatsResult<Inspection> {
    let target = target.trim();
    if let Some(canned) = resolver::canned_report(target) {
        debug!(%target, "canned report");
        return Ok(Inspection::Canned(canned));
    }

    init_scratch_world(engine);

    let mut state = resolver::resolve(&*engine, target)?;
    let requested = state.spec().and_then(CreatureSpec::monster_type);
    let shown_target = state.target().unwrap_or(target).to_string();

    let first = state.spec().and_then(|spec| create_monster(engine, spec));
    let mut index = first.ok_or_else(|| {
        StatsError::Instantiation(format!("Failed to create test monster for {}", shown_target))
    })?;

    let mut aggregate = Aggregate::new();
    for trial in 0..config.trials {
        let outcome = sample_trial(engine, index, &shown_target)?;
        let generated = outcome.name.clone();
        aggregate.record(outcome);

        if let Some(kind) = engine.monster(index).map(|mon| mon.kind) {
            engine.destroy(index);
            engine.clear_unique_marker(kind);
        }

        state = state.rebind(&*engine, &generated);

        let spec = state.spec().cloned().ok_or_else(|| {
            StatsError::Resolution(format!("unknown monster: \"{}\"", shown_target))
        })?;
        index = create_monster(engine, &spec).ok_or_else(|| {
            StatsError::Instantiation(format!(
                "Unexpected failure generating monster for {}",
                state.target().unwrap_or(&shown_target)
            ))
        })?;

        if (trial + 1) % PROGRESS_INTERVAL == 0 {
            debug!(trial = trial + 1, total = config.trials, "sampling");
        }
    }

    let request = RequestInfo {
        target: &shown_target,
        requested,
        vault: state.is_vault(),
    };
    let fields = ReportFields::build(engine, index, request, &aggregate)?;
    info!(
        name = %fields.name,
        trials = aggregate.trials(),
        xp = fields.xp,
        "inspection complete"
    );
    Ok(Inspection::Report(Box::new(fields)))
}

/// Runs an inspection on a fresh [`Arena`] and renders the output line.
pub fn run_inspection(target: &str, config: &StatsConfig) -> StatsResult<String> {
    let painter = Painter::new(config.colour);
    if let Some(canned) = resolver::canned_report(target.trim()) {
        return Ok(canned.render(&painter));
    }

    let mut arena = match config.seed {
        Some(seed) => Arena::seeded(seed),
        None => Arena::from_entropy(),
    };
    let inspection = inspect(&mut arena, target, config)?;
    inspection.render(&painter, config.format)
}

/// The state machine a run ends in, for callers that want the resolution
/// without sampling.
pub fn resolve_only<E: SimulationEngine>(engine: &mut E, target: &str) -> StatsResult<SpecState> {
    init_scratch_world(engine);
    resolver::resolve(&*engine, target.trim())
}
