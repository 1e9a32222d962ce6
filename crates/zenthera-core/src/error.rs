use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown sector: {0}")]
    UnknownSector(String),

    #[error("unknown budget range: {0}")]
    UnknownBudget(String),

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("no route matches path: {0}")]
    UnknownRoute(String),

    #[error("malformed reference id: {0}")]
    BadReference(String),

    #[error("portfolio JSON error: {0}")]
    Portfolio(#[from] serde_json::Error),
}
