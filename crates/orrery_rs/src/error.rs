//! Unified error type for the facade.

use orrery_chart::ChartError;
use orrery_config::ConfigError;
use orrery_search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OrreryError {
    /// [`init`](crate::init) was called after the global engine already existed.
    #[error("global engine already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
