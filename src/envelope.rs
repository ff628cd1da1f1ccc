use serde::Serialize;

use crate::error::AppError;

/// Where the payload of a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Db,
    Mock,
}

/// Success envelope shared by every JSON endpoint. Errors are rendered by
/// [`AppError`] as `{ "success": false, "message": ... }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub source: DataSource,
}

impl<T> Envelope<T> {
    pub fn new(data: T, source: DataSource) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            source,
        }
    }

    pub fn live(data: T) -> Self {
        Self::new(data, DataSource::Db)
    }

    pub fn mock(data: T) -> Self {
        Self::new(data, DataSource::Mock)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            source: self.source,
        }
    }
}

impl Envelope<()> {
    /// Acknowledgement with no payload.
    pub fn message(message: impl Into<String>, source: DataSource) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            source,
        }
    }
}

impl<T> Envelope<Option<T>> {
    /// Turn a lookup that found nothing into a 404.
    pub fn require(self, not_found: &str) -> Result<Envelope<T>, AppError> {
        match self.data.flatten() {
            Some(data) => Ok(Envelope::new(data, self.source)),
            None => Err(AppError::NotFound(not_found.to_string())),
        }
    }
}
