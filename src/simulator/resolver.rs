//! Turning a free-text creature name into a specification.
//!
//! Resolution walks an explicit state machine: the primary catalog is tried
//! as given and then with a "the " prefix, and the vault catalog is the
//! fallback. A run may later rebind a resolved draconian request to the
//! colour the engine actually generated.

use tracing::debug;

use crate::colour::{Colour, Painter};
use crate::engine::{CreatureSpec, SimulationEngine};
use crate::error::{StatsError, StatsResult};

/// A fixed report line returned without consulting the engine.
#[derive(Debug, Clone, Copy)]
pub struct CannedReport {
    pub name: &'static str,
    render: fn(&Painter) -> String,
}

impl CannedReport {
    pub fn render(&self, painter: &Painter) -> String {
        (self.render)(painter)
    }
}

fn cang(painter: &Painter) -> String {
    format!(
        "cang ({}) | Speed: c | HD: i | Health: 666 | AC/EV: e/π | Damage: 999 | Res: sanity | XP: ∞",
        painter.paint(Colour::LightRed, "Ω")
    )
}

static CANNED_REPORTS: [CannedReport; 1] = [CannedReport {
    name: "cang",
    render: cang,
}];

/// Exact, case-sensitive lookup in the canned report table.
pub fn canned_report(target: &str) -> Option<&'static CannedReport> {
    CANNED_REPORTS.iter().find(|canned| canned.name == target)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecState {
    Unresolved {
        text: String,
    },
    ResolvedPrimary {
        spec: CreatureSpec,
        target: String,
    },
    /// Found only in the vault catalog.
    ResolvedSecondary {
        spec: CreatureSpec,
        target: String,
    },
    /// Rebound to the name the engine generated for an earlier trial.
    Rebound {
        spec: CreatureSpec,
        target: String,
        vault: bool,
    },
    Failed {
        message: String,
    },
}

impl SpecState {
    pub fn new(text: &str) -> Self {
        SpecState::Unresolved {
            text: text.trim().to_string(),
        }
    }

    /// Advances an unresolved request to a resolved or failed state. Other
    /// states are returned unchanged.
    pub fn resolve<E: SimulationEngine>(self, engine: &E) -> SpecState {
        let SpecState::Unresolved { text } = self else {
            return self;
        };

        let (primary, target, error) = match engine.parse_spec(&text) {
            Ok(spec) => (Some(spec), text.clone(), None),
            Err(error) => {
                let prefixed = format!("the {}", text);
                match engine.parse_spec(&prefixed) {
                    Ok(spec) => {
                        debug!(%prefixed, "resolved with article prefix");
                        (Some(spec), prefixed, None)
                    }
                    Err(_) => (None, prefixed, Some(error)),
                }
            }
        };

        if let Some(spec) = primary.filter(CreatureSpec::is_simulatable) {
            debug!(%target, "resolved through primary catalog");
            return SpecState::ResolvedPrimary { spec, target };
        }

        match engine.vault_spec(&text) {
            Some(spec) if spec.is_simulatable() => {
                debug!(%text, "resolved through vault catalog");
                SpecState::ResolvedSecondary { spec, target }
            }
            _ => SpecState::Failed {
                message: error.unwrap_or_else(|| format!("unknown monster: \"{}\"", target)),
            },
        }
    }

    /// Reuses the generated name for later trials when a bare draconian
    /// request came back as a specific colour.
    pub fn rebind<E: SimulationEngine>(self, engine: &E, generated: &str) -> SpecState {
        let vault = self.is_vault();
        let Some(target) = self.target().map(str::to_string) else {
            return self;
        };
        if target == generated || !target.starts_with("draconian") {
            return self;
        }
        match engine.parse_spec(generated) {
            Ok(spec) => {
                debug!(from = %target, to = %generated, "rebinding request");
                SpecState::Rebound {
                    spec,
                    target: generated.to_string(),
                    vault,
                }
            }
            Err(_) => self,
        }
    }

    pub fn spec(&self) -> Option<&CreatureSpec> {
        match self {
            SpecState::ResolvedPrimary { spec, .. }
            | SpecState::ResolvedSecondary { spec, .. }
            | SpecState::Rebound { spec, .. } => Some(spec),
            SpecState::Unresolved { .. } | SpecState::Failed { .. } => None,
        }
    }

    /// The request text as later messages show it.
    pub fn target(&self) -> Option<&str> {
        match self {
            SpecState::ResolvedPrimary { target, .. }
            | SpecState::ResolvedSecondary { target, .. }
            | SpecState::Rebound { target, .. } => Some(target),
            SpecState::Unresolved { .. } | SpecState::Failed { .. } => None,
        }
    }

    pub fn is_vault(&self) -> bool {
        matches!(
            self,
            SpecState::ResolvedSecondary { .. } | SpecState::Rebound { vault: true, .. }
        )
    }

    /// Fails with the resolution message unless the state holds a spec.
    pub fn check(self) -> StatsResult<SpecState> {
        match self {
            SpecState::Failed { message } => Err(StatsError::Resolution(message)),
            SpecState::Unresolved { text } => {
                Err(StatsError::Resolution(format!("unknown monster: \"{}\"", text)))
            }
            resolved => Ok(resolved),
        }
    }
}

/// Resolves `text` against both catalogs.
pub fn resolve<E: SimulationEngine>(engine: &E, text: &str) -> StatsResult<SpecState> {
    SpecState::new(text).resolve(engine).check()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::ColourMode;
    use crate::engine::{Arena, MonsterType};

    #[test]
    fn test_canned_lookup_is_exact() {
        assert!(canned_report("cang").is_some());
        assert!(canned_report("Cang").is_none());
        assert!(canned_report("cang ").is_none());
    }

    #[test]
    fn test_canned_rendering() {
        let text = canned_report("cang").unwrap().render(&Painter::plain());
        assert_eq!(
            text,
            "cang (Ω) | Speed: c | HD: i | Health: 666 | AC/EV: e/π | Damage: 999 | Res: sanity | XP: ∞"
        );
        let markup = canned_report("cang")
            .unwrap()
            .render(&Painter::new(ColourMode::Markup));
        assert!(markup.starts_with("cang (\u{3}04Ω\u{f})"));
    }

    #[test]
    fn test_primary_resolution() {
        let arena = Arena::seeded(1);
        let state = resolve(&arena, "  orc wizard ").unwrap();
        assert_eq!(
            state,
            SpecState::ResolvedPrimary {
                spec: CreatureSpec::of(MonsterType::OrcWizard),
                target: "orc wizard".to_string(),
            }
        );
        assert!(!state.is_vault());
    }

    #[test]
    fn test_article_prefix_fallback() {
        let arena = Arena::seeded(1);
        let state = resolve(&arena, "royal jelly").unwrap();
        assert_eq!(state.target(), Some("the royal jelly"));
        assert_eq!(
            state.spec().and_then(CreatureSpec::monster_type),
            Some(MonsterType::RoyalJelly)
        );
    }

    #[test]
    fn test_vault_fallback_keeps_prefixed_target() {
        let arena = Arena::seeded(1);
        let state = resolve(&arena, "mad apprentice").unwrap();
        assert!(state.is_vault());
        assert_eq!(state.target(), Some("the mad apprentice"));
        assert_eq!(state.spec().unwrap().hit_dice, Some(5));
    }

    #[test]
    fn test_ghost_is_rejected_everywhere() {
        let arena = Arena::seeded(1);
        let err = resolve(&arena, "ghost").unwrap_err();
        assert_eq!(err.to_string(), "unknown monster: \"ghost\"");

        let err = resolve(&arena, "ghostly apparition").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown monster: \"ghostly apparition\""
        );
    }

    #[test]
    fn test_unknown_name_keeps_first_error() {
        let arena = Arena::seeded(1);
        let err = resolve(&arena, "flumph").unwrap_err();
        assert_eq!(err.to_string(), "unknown monster: \"flumph\"");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_rebind_only_for_draconian_requests() {
        let arena = Arena::seeded(1);
        let state = resolve(&arena, "draconian").unwrap();
        let rebound = state.rebind(&arena, "red draconian");
        assert_eq!(rebound.target(), Some("red draconian"));
        assert_eq!(
            rebound.spec().and_then(CreatureSpec::monster_type),
            Some(MonsterType::RedDraconian)
        );
        assert!(matches!(rebound, SpecState::Rebound { vault: false, .. }));

        let goblin = resolve(&arena, "goblin").unwrap();
        assert_eq!(goblin.clone().rebind(&arena, "orc"), goblin);
    }
}
