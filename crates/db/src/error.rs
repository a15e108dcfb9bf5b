use roster_core::error::CoreError;

/// Error returned by repository operations that perform integrity checks.
///
/// Plain CRUD methods return `sqlx::Error` directly; methods that can also
/// reject a write on domain grounds (missing reference, duplicate relation)
/// return this instead.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A domain-level rejection (`NotFound` or `Conflict`).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The underlying query failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
