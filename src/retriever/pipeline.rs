use std::time::Instant;

use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::{
    core::{
        errors::AppResult,
        types::{CatalogRecord, EntityKind},
    },
    providers::catalog::CatalogClient,
    retriever::{
        assembler::assemble,
        identifiers::normalize_identifiers,
        resolver::ExpandDepth,
    },
};

#[derive(Debug, Clone)]
pub struct Pipeline {
    client: CatalogClient,
}

impl Pipeline {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Fetches and assembles one record per identifier, in input order.
    ///
    /// Any failure aborts the whole run: either every identifier yields a record or the
    /// caller gets the error and nothing else.
    pub async fn run(
        &self,
        kind: EntityKind,
        identifiers: &[String],
        expand: bool,
    ) -> AppResult<Vec<CatalogRecord>> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("catalog_run", %run_id, kind = kind.as_str(), expand);

        async move {
            let started = Instant::now();
            let outcome = self.collect(kind, identifiers, expand).await;
            match &outcome {
                Ok(records) => info!(
                    records = records.len(),
                    latency_ms = started.elapsed().as_millis() as u64,
                    "catalog run completed"
                ),
                Err(err) => error!(code = err.code(), "catalog run aborted: {err}"),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    async fn collect(
        &self,
        kind: EntityKind,
        identifiers: &[String],
        expand: bool,
    ) -> AppResult<Vec<CatalogRecord>> {
        let normalized = normalize_identifiers(identifiers)?;
        let depth = ExpandDepth::from_flag(expand);
        let documents = self.client.fetch_entities(kind, &normalized).await?;

        // Parents are assembled one at a time so nested batches never stack past
        // three per creature.
        let mut records = Vec::with_capacity(documents.len());
        for document in &documents {
            records.push(assemble(&self.client, kind, document, depth).await?);
        }
        Ok(records)
    }
}
