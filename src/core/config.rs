use std::time::Duration;

use crate::core::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_MAX_IN_FLIGHT: usize = 16;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Upper bound on concurrent requests within one batch.
    pub max_in_flight: usize,
    pub request_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    /// Timeouts below one millisecond are raised to one millisecond.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout.max(MIN_REQUEST_TIMEOUT);
        self
    }

    /// Reads `POKEDEX_BASE_URL`, `POKEDEX_MAX_IN_FLIGHT` and `POKEDEX_TIMEOUT_SECS`,
    /// keeping defaults for anything unset.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup("POKEDEX_BASE_URL").filter(|value| !value.trim().is_empty())
        {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(raw) = lookup("POKEDEX_MAX_IN_FLIGHT") {
            let parsed = raw.trim().parse::<usize>().map_err(|err| {
                AppError::Config(format!("POKEDEX_MAX_IN_FLIGHT `{raw}`: {err}"))
            })?;
            config = config.with_max_in_flight(parsed);
        }
        if let Some(raw) = lookup("POKEDEX_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|err| {
                AppError::Config(format!("POKEDEX_TIMEOUT_SECS `{raw}`: {err}"))
            })?;
            config = config.with_request_timeout(Duration::from_secs(secs.max(1)));
        }
        Ok(config)
    }
}
