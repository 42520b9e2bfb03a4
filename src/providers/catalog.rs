use futures::{stream, StreamExt, TryStreamExt};
use reqwest::StatusCode;
use tracing::debug;

use crate::core::{
    config::CatalogConfig,
    document::Document,
    errors::{AppError, AppResult},
    types::EntityKind,
};

/// Read-only client for the remote catalog.
///
/// Every call to [`CatalogClient::fetch_all`] is one batch: it builds its own
/// `reqwest::Client` (and with it the connection pool), issues at most
/// `max_in_flight` requests at a time and drops the pool once the batch is done.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn entity_url(&self, kind: EntityKind, identifier: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url,
            kind.path_segment(),
            identifier
        )
    }

    pub async fn fetch_entities(
        &self,
        kind: EntityKind,
        identifiers: &[String],
    ) -> AppResult<Vec<Document>> {
        let locators = identifiers
            .iter()
            .map(|identifier| self.entity_url(kind, identifier))
            .collect::<Vec<_>>();
        self.fetch_all(&locators).await
    }

    /// Fetches every locator concurrently. The output lines up index for index with
    /// `locators`; the first failure ends the batch and cancels what is still in flight.
    pub async fn fetch_all(&self, locators: &[String]) -> AppResult<Vec<Document>> {
        if locators.is_empty() {
            return Ok(vec![]);
        }

        let session = self.session()?;
        debug!(
            requests = locators.len(),
            max_in_flight = self.config.max_in_flight,
            "starting fetch batch"
        );
        let http = &session;
        let mut pending = stream::iter(locators.iter().enumerate())
            .map(|(index, locator)| async move {
                fetch_document(http, locator)
                    .await
                    .map(|document| (index, document))
            })
            .buffer_unordered(self.config.max_in_flight.max(1));

        // Responses land in their request's slot; returning early drops the stream
        // and with it every request still in flight.
        let mut slots: Vec<Option<Document>> = vec![None; locators.len()];
        while let Some((index, document)) = pending.try_next().await? {
            slots[index] = Some(document);
        }

        slots
            .into_iter()
            .zip(locators)
            .map(|(slot, locator)| {
                slot.ok_or_else(|| AppError::Network(format!("no response recorded for {locator}")))
            })
            .collect()
    }

    fn session(&self) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|err| AppError::Network(err.to_string()))
    }
}

async fn fetch_document(http: &reqwest::Client, locator: &str) -> AppResult<Document> {
    debug!(%locator, "GET");
    let response = http.get(locator).send().await?;

    match response.status() {
        StatusCode::NOT_FOUND => {
            return Err(AppError::NoSuchEntity {
                locator: locator.to_string(),
            })
        }
        status if !status.is_success() => {
            return Err(AppError::Network(format!("status {status} from {locator}")));
        }
        _ => {}
    }

    let body = response.bytes().await?;
    Document::from_slice(&body).ok_or_else(|| AppError::NoSuchEntity {
        locator: locator.to_string(),
    })
}
