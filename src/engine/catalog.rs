//! Creature name catalogs.
//!
//! The primary catalog understands class names plus a couple of modifiers
//! ("red draconian scorcher", "orc zombie"). The vault catalog holds the
//! hand-placed creatures defined by level vaults, keyed by their full name.

use super::bestiary::MonsterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Monster(MonsterType),
    /// "random monster": outside the range of concrete classes.
    Random,
}

/// What to instantiate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureSpec {
    pub kind: SpecKind,
    /// Draconian colour or zombie base class.
    pub base: Option<MonsterType>,
    pub name: Option<String>,
    pub hit_dice: Option<i32>,
}

impl CreatureSpec {
    pub fn of(kind: MonsterType) -> Self {
        Self {
            kind: SpecKind::Monster(kind),
            base: None,
            name: None,
            hit_dice: None,
        }
    }

    pub fn with_base(kind: MonsterType, base: MonsterType) -> Self {
        Self {
            base: Some(base),
            ..Self::of(kind)
        }
    }

    pub fn monster_type(&self) -> Option<MonsterType> {
        match self.kind {
            SpecKind::Monster(kind) => Some(kind),
            SpecKind::Random => None,
        }
    }

    /// In range and not a placeholder class.
    pub fn is_simulatable(&self) -> bool {
        self.monster_type().is_some_and(MonsterType::is_simulatable)
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn lookup_class(name: &str) -> Option<MonsterType> {
    MonsterType::ALL
        .iter()
        .copied()
        .find(|kind| kind.catalog_name() == name)
}

fn draconian_colour(word: &str) -> Option<MonsterType> {
    match word {
        "red" => Some(MonsterType::RedDraconian),
        "white" => Some(MonsterType::WhiteDraconian),
        "green" => Some(MonsterType::GreenDraconian),
        "yellow" => Some(MonsterType::YellowDraconian),
        _ => None,
    }
}

fn can_zombify(kind: MonsterType) -> bool {
    let entry = kind.entry();
    entry.weight > 0 && entry.holiness == super::types::Holiness::Natural && !kind.is_unique()
}

/// Parses a creature name through the primary catalog.
pub fn parse_spec(text: &str) -> Result<CreatureSpec, String> {
    let name = normalize(text);
    if name.is_empty() {
        return Err("no monster specified".to_string());
    }

    match name.as_str() {
        "random" | "random monster" => {
            return Ok(CreatureSpec {
                kind: SpecKind::Random,
                base: None,
                name: None,
                hit_dice: None,
            })
        }
        "ghost" => return Ok(CreatureSpec::of(MonsterType::PlayerGhost)),
        _ => {}
    }

    if let Some(kind) = lookup_class(&name) {
        return Ok(CreatureSpec::of(kind));
    }

    if let Some((first, rest)) = name.split_once(' ') {
        if let Some(colour) = draconian_colour(first) {
            return match lookup_class(rest) {
                Some(MonsterType::Draconian) => Ok(CreatureSpec::of(colour)),
                Some(job) if job.is_draconian_job() => Ok(CreatureSpec::with_base(job, colour)),
                _ => Err(format!("unknown monster: \"{}\"", text.trim())),
            };
        }
    }

    if let Some(base_name) = name.strip_suffix(" zombie") {
        return match lookup_class(base_name) {
            Some(base) if can_zombify(base) => {
                Ok(CreatureSpec::with_base(MonsterType::Zombie, base))
            }
            Some(_) => Err(format!("can't zombify \"{}\"", base_name)),
            None => Err(format!("unknown monster: \"{}\"", text.trim())),
        };
    }

    Err(format!("unknown monster: \"{}\"", text.trim()))
}

/// A creature placed by a level vault under its own name.
#[derive(Debug, Clone, Copy)]
pub struct VaultMonster {
    pub key: &'static str,
    pub kind: MonsterType,
    pub base: Option<MonsterType>,
    pub name: &'static str,
    pub hit_dice: Option<i32>,
}

pub static VAULT_MONSTERS: [VaultMonster; 4] = [
    VaultMonster {
        key: "blorkula the orcbreaker",
        kind: MonsterType::Orc,
        base: None,
        name: "Blorkula the Orcbreaker",
        hit_dice: Some(8),
    },
    VaultMonster {
        key: "ancient champion",
        kind: MonsterType::Zombie,
        base: Some(MonsterType::Orc),
        name: "ancient champion",
        hit_dice: Some(12),
    },
    VaultMonster {
        key: "mad apprentice",
        kind: MonsterType::OrcWizard,
        base: None,
        name: "mad apprentice",
        hit_dice: Some(5),
    },
    VaultMonster {
        key: "ghostly apparition",
        kind: MonsterType::PlayerGhost,
        base: None,
        name: "ghostly apparition",
        hit_dice: None,
    },
];

/// Looks a name up in the vault catalog.
pub fn vault_spec(text: &str) -> Option<CreatureSpec> {
    let key = normalize(text);
    VAULT_MONSTERS
        .iter()
        .find(|vault| vault.key == key)
        .map(|vault| CreatureSpec {
            kind: SpecKind::Monster(vault.kind),
            base: vault.base,
            name: Some(vault.name.to_string()),
            hit_dice: vault.hit_dice,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_class_case_insensitive() {
        assert_eq!(
            parse_spec("  Orc   Wizard "),
            Ok(CreatureSpec::of(MonsterType::OrcWizard))
        );
    }

    #[test]
    fn test_parse_coloured_draconians() {
        assert_eq!(
            parse_spec("red draconian"),
            Ok(CreatureSpec::of(MonsterType::RedDraconian))
        );
        assert_eq!(
            parse_spec("white draconian scorcher"),
            Ok(CreatureSpec::with_base(
                MonsterType::DraconianScorcher,
                MonsterType::WhiteDraconian
            ))
        );
        assert!(parse_spec("red goblin").is_err());
    }

    #[test]
    fn test_parse_zombie() {
        assert_eq!(
            parse_spec("orc zombie"),
            Ok(CreatureSpec::with_base(MonsterType::Zombie, MonsterType::Orc))
        );
        assert_eq!(
            parse_spec("tormentor zombie"),
            Err("can't zombify \"tormentor\"".to_string())
        );
    }

    #[test]
    fn test_article_only_entries_need_the_article() {
        assert!(parse_spec("royal jelly").is_err());
        assert_eq!(
            parse_spec("the royal jelly"),
            Ok(CreatureSpec::of(MonsterType::RoyalJelly))
        );
    }

    #[test]
    fn test_random_and_ghost_parse_but_are_not_simulatable() {
        assert!(!parse_spec("random").unwrap().is_simulatable());
        assert!(!parse_spec("ghost").unwrap().is_simulatable());
        assert!(parse_spec("goblin").unwrap().is_simulatable());
    }

    #[test]
    fn test_unknown_name_error_text() {
        assert_eq!(
            parse_spec("flumph"),
            Err("unknown monster: \"flumph\"".to_string())
        );
    }

    #[test]
    fn test_vault_lookup() {
        let spec = vault_spec("Blorkula the Orcbreaker").unwrap();
        assert_eq!(spec.monster_type(), Some(MonsterType::Orc));
        assert_eq!(spec.name.as_deref(), Some("Blorkula the Orcbreaker"));
        assert_eq!(spec.hit_dice, Some(8));
        assert!(vault_spec("goblin").is_none());
    }
}
