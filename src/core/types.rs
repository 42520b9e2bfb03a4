use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Creature,
    Trait,
    Action,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creature => "creature",
            Self::Trait => "trait",
            Self::Action => "action",
        }
    }

    /// Route name the catalog service uses for this kind.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Creature => "pokemon",
            Self::Trait => "ability",
            Self::Action => "move",
        }
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "creature" | "pokemon" => Ok(Self::Creature),
            "trait" | "ability" => Ok(Self::Trait),
            "action" | "move" => Ok(Self::Action),
            other => Err(AppError::InvalidInput(format!(
                "unknown query kind `{other}`, expected pokemon, ability or move"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatDetail {
    pub name: String,
    pub id: i64,
    pub is_battle_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: i64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<StatDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilityEntry {
    pub name: String,
    pub url: String,
    pub is_hidden: bool,
    pub slot: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<Trait>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveEntry {
    pub name: String,
    pub url: String,
    pub level_learned_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<Action>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub id: i64,
    pub height: i64,
    pub weight: i64,
    pub stats: Vec<StatEntry>,
    pub types: Vec<String>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trait {
    pub name: String,
    pub id: i64,
    pub generation: String,
    pub effect: String,
    pub short_effect: String,
    pub pokemon: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub id: i64,
    pub generation: String,
    pub accuracy: Option<i64>,
    pub power: Option<i64>,
    pub pp: Option<i64>,
    pub damage_class: String,
    pub move_type: String,
    pub short_effect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogRecord {
    Creature(Creature),
    Trait(Trait),
    Action(Action),
}

impl CatalogRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Creature(_) => EntityKind::Creature,
            Self::Trait(_) => EntityKind::Trait,
            Self::Action(_) => EntityKind::Action,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Creature(record) => &record.name,
            Self::Trait(record) => &record.name,
            Self::Action(record) => &record.name,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Creature(record) => record.id,
            Self::Trait(record) => record.id,
            Self::Action(record) => record.id,
        }
    }
}
