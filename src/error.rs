use thiserror::Error;

/// Failures at the store boundary.
///
/// Absence is not an error: lookups return `Ok(None)` for unknown ids.
/// `Unavailable` means the backend itself could not be reached or
/// rejected the operation, and must never be collapsed into an empty
/// result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sea_orm::DbErr),

    #[error("store invariant violated: {0}")]
    Inconsistent(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
