use serde_json::Value;

use crate::{
    core::{
        document::{Document, Node},
        errors::{AppError, AppResult},
        types::{
            AbilityEntry, Action, CatalogRecord, Creature, EntityKind, MoveEntry, StatDetail,
            StatEntry, Trait,
        },
    },
    providers::catalog::CatalogClient,
    retriever::{
        locale::english_text,
        resolver::{resolve_abilities, resolve_moves, resolve_stats, ExpandDepth},
    },
};

pub async fn assemble(
    client: &CatalogClient,
    kind: EntityKind,
    document: &Document,
    depth: ExpandDepth,
) -> AppResult<CatalogRecord> {
    match kind {
        EntityKind::Creature => assemble_creature(client, document, depth)
            .await
            .map(CatalogRecord::Creature),
        EntityKind::Trait => assemble_trait(document).map(CatalogRecord::Trait),
        EntityKind::Action => assemble_action(document).map(CatalogRecord::Action),
    }
}

/// Builds a creature record. With expansion allowed, the stat, ability and move
/// references are resolved as three concurrent batches.
pub async fn assemble_creature(
    client: &CatalogClient,
    document: &Document,
    depth: ExpandDepth,
) -> AppResult<Creature> {
    let root = document.root();
    let (name, id) = identity(&root)?;
    let height = root.i64_field("height")?;
    let weight = root.i64_field("weight")?;
    let types = root
        .items("types")?
        .iter()
        .map(|item| item.str_field("type.name").map(str::to_string))
        .collect::<AppResult<Vec<_>>>()?;

    let stats = stat_entries(&root)?;
    let abilities = ability_entries(&root)?;
    let moves = move_entries(&root)?;

    let (stats, abilities, moves) = futures::try_join!(
        resolve_stats(client, stats, depth),
        resolve_abilities(client, abilities, depth),
        resolve_moves(client, moves, depth),
    )?;

    Ok(Creature {
        name,
        id,
        height,
        weight,
        stats,
        types,
        abilities,
        moves,
    })
}

pub fn assemble_trait(document: &Document) -> AppResult<Trait> {
    let root = document.root();
    let (name, id) = identity(&root)?;
    let pokemon = root
        .items("pokemon")?
        .iter()
        .map(|item| item.str_field("pokemon.name").map(str::to_string))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Trait {
        name,
        id,
        generation: root.str_field("generation.name")?.to_string(),
        effect: english_text(&root.items("effect_entries")?, "effect")?,
        short_effect: english_text(&root.items("flavor_text_entries")?, "flavor_text")?,
        pokemon,
    })
}

pub fn assemble_action(document: &Document) -> AppResult<Action> {
    let root = document.root();
    let (name, id) = identity(&root)?;

    Ok(Action {
        name,
        id,
        generation: root.str_field("generation.name")?.to_string(),
        accuracy: root.opt_i64_field("accuracy")?,
        power: root.opt_i64_field("power")?,
        pp: root.opt_i64_field("pp")?,
        damage_class: root.str_field("damage_class.name")?.to_string(),
        move_type: root.str_field("type.name")?.to_string(),
        short_effect: english_text(&root.items("flavor_text_entries")?, "flavor_text")?,
    })
}

pub fn assemble_stat_detail(document: &Document) -> AppResult<StatDetail> {
    let root = document.root();
    let (name, id) = identity(&root)?;
    Ok(StatDetail {
        name,
        id,
        is_battle_only: root.bool_field("is_battle_only")?,
    })
}

fn identity(root: &Node<'_>) -> AppResult<(String, i64)> {
    let name = root.str_field("name")?;
    if name.trim().is_empty() {
        return Err(AppError::MalformedDocument("empty `name`".to_string()));
    }
    Ok((name.to_string(), root.i64_field("id")?))
}

fn stat_entries(root: &Node<'_>) -> AppResult<Vec<StatEntry>> {
    root.items("stats")?
        .iter()
        .map(|item| -> AppResult<StatEntry> {
            Ok(StatEntry {
                name: item.str_field("stat.name")?.to_string(),
                base_stat: item.i64_field("base_stat")?,
                url: item.str_field("stat.url")?.to_string(),
                expanded: None,
            })
        })
        .collect()
}

fn ability_entries(root: &Node<'_>) -> AppResult<Vec<AbilityEntry>> {
    root.items("abilities")?
        .iter()
        .map(|item| -> AppResult<AbilityEntry> {
            Ok(AbilityEntry {
                name: item.str_field("ability.name")?.to_string(),
                url: item.str_field("ability.url")?.to_string(),
                is_hidden: item.get("is_hidden").and_then(Value::as_bool).unwrap_or(false),
                slot: item.get("slot").and_then(Value::as_i64).unwrap_or(0),
                expanded: None,
            })
        })
        .collect()
}

fn move_entries(root: &Node<'_>) -> AppResult<Vec<MoveEntry>> {
    root.items("moves")?
        .iter()
        .map(|item| -> AppResult<MoveEntry> {
            // Only the first version group is reported.
            let details = match item.get("version_group_details") {
                None | Some(Value::Null) => vec![],
                Some(_) => item.items("version_group_details")?,
            };
            let level_learned_at = match details.first() {
                Some(detail) => detail.opt_i64_field("level_learned_at")?.unwrap_or(0),
                None => 0,
            };
            Ok(MoveEntry {
                name: item.str_field("move.name")?.to_string(),
                url: item.str_field("move.url")?.to_string(),
                level_learned_at,
                expanded: None,
            })
        })
        .collect()
}
