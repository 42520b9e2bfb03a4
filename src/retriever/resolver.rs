use std::collections::HashMap;

use tracing::debug;

use crate::{
    core::{
        document::Document,
        errors::AppResult,
        types::{AbilityEntry, MoveEntry, StatEntry},
    },
    providers::catalog::CatalogClient,
    retriever::assembler::{assemble_action, assemble_stat_detail, assemble_trait},
};

/// How many more levels of references may still be followed.
///
/// Top-level records start at [`ExpandDepth::ONE`] when expansion is requested. The
/// records built from followed references are only ever assembled as leaves, so the
/// catalog is never walked past one hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandDepth(u8);

impl ExpandDepth {
    pub const NONE: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub fn from_flag(expand: bool) -> Self {
        if expand {
            Self::ONE
        } else {
            Self::NONE
        }
    }

    pub fn allows_expansion(self) -> bool {
        self.0 > 0
    }
}

pub async fn resolve_stats(
    client: &CatalogClient,
    mut entries: Vec<StatEntry>,
    depth: ExpandDepth,
) -> AppResult<Vec<StatEntry>> {
    if !depth.allows_expansion() {
        return Ok(entries);
    }
    let urls = entries.iter().map(|entry| entry.url.as_str()).collect::<Vec<_>>();
    let details = expand_references(client, &urls, assemble_stat_detail).await?;
    for (entry, detail) in entries.iter_mut().zip(details) {
        entry.expanded = Some(detail);
    }
    Ok(entries)
}

pub async fn resolve_abilities(
    client: &CatalogClient,
    mut entries: Vec<AbilityEntry>,
    depth: ExpandDepth,
) -> AppResult<Vec<AbilityEntry>> {
    if !depth.allows_expansion() {
        return Ok(entries);
    }
    let urls = entries.iter().map(|entry| entry.url.as_str()).collect::<Vec<_>>();
    let traits = expand_references(client, &urls, assemble_trait).await?;
    for (entry, record) in entries.iter_mut().zip(traits) {
        entry.expanded = Some(record);
    }
    Ok(entries)
}

pub async fn resolve_moves(
    client: &CatalogClient,
    mut entries: Vec<MoveEntry>,
    depth: ExpandDepth,
) -> AppResult<Vec<MoveEntry>> {
    if !depth.allows_expansion() {
        return Ok(entries);
    }
    let urls = entries.iter().map(|entry| entry.url.as_str()).collect::<Vec<_>>();
    let actions = expand_references(client, &urls, assemble_action).await?;
    for (entry, record) in entries.iter_mut().zip(actions) {
        entry.expanded = Some(record);
    }
    Ok(entries)
}

/// Fetches every distinct url once, in a single batch, and hands back one assembled
/// value per input position.
pub async fn expand_references<T, F>(
    client: &CatalogClient,
    urls: &[&str],
    assemble: F,
) -> AppResult<Vec<T>>
where
    T: Clone,
    F: Fn(&Document) -> AppResult<T>,
{
    let (distinct, slots) = dedupe_locators(urls);
    debug!(
        references = urls.len(),
        distinct = distinct.len(),
        "expanding references"
    );

    let documents = client.fetch_all(&distinct).await?;
    let assembled = documents
        .iter()
        .map(&assemble)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(slots
        .into_iter()
        .map(|slot| assembled[slot].clone())
        .collect())
}

/// Returns the distinct locators in first-seen order plus, for each input position,
/// the index of its locator in that list.
fn dedupe_locators(urls: &[&str]) -> (Vec<String>, Vec<usize>) {
    let mut seen = HashMap::<&str, usize>::new();
    let mut distinct = Vec::new();
    let slots = urls
        .iter()
        .map(|&url| {
            *seen.entry(url).or_insert_with(|| {
                distinct.push(url.to_string());
                distinct.len() - 1
            })
        })
        .collect();
    (distinct, slots)
}
