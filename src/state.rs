//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::fetch::{FetchError, Fetcher, HttpFetcher};
use crate::proxy::ProxyService;
use crate::text::{TargetSpec, TargetSpecError};

/// Startup failures building [`AppState`]
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Fetcher(#[from] FetchError),

    #[error(transparent)]
    Target(#[from] TargetSpecError),
}

/// Shared application state
///
/// Immutable after startup; requests only read from it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    proxy: ProxyService,
}

impl AppState {
    /// Build state with the reqwest fetcher and the Yale → Fale target
    pub fn new(config: Config) -> Result<Self, StateError> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        let target = TargetSpec::yale_to_fale()?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher), target))
    }

    /// Build state around any fetcher and target pair
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>, target: TargetSpec) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                proxy: ProxyService::new(fetcher, target),
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the proxy pipeline
    pub fn proxy(&self) -> &ProxyService {
        &self.inner.proxy
    }
}
