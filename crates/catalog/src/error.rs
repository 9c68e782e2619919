use thiserror::Error;

/// Errors raised while loading or validating catalog rows.
///
/// Query-time operations over a loaded snapshot never fail; only the
/// data-access edge does.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid part {part_number:?}: {reason}")]
    InvalidPart { part_number: String, reason: String },
    #[error("catalog source {0} unavailable")]
    Unavailable(String),
}
