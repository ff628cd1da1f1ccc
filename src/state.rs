use std::sync::Arc;

use crate::config::Config;
use crate::db::{DataSourceError, Database};
use crate::envelope::Envelope;
use crate::error::AppError;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    /// Decide what a failed read turns into: fallback data tagged as mock when
    /// the fallback is enabled, the error otherwise.
    pub fn degrade<T>(
        &self,
        resource: &str,
        err: DataSourceError,
        fallback: impl FnOnce() -> T,
    ) -> Result<Envelope<T>, AppError> {
        if !self.config.mock_fallback {
            return Err(AppError::DataSource(err));
        }
        tracing::warn!(resource, error = %err, "Serving fallback data");
        Ok(Envelope::mock(fallback()))
    }

    /// Whether a failed create may be answered with a synthesized record.
    /// Only unreachable databases qualify; rejected statements never do.
    pub fn can_synthesize(&self, err: &DataSourceError) -> bool {
        self.config.mock_fallback && err.is_unavailable()
    }
}
