//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable store contract for short links: conditional put and point get.
///
/// The store arbitrates all uniqueness: concurrent `put`s for the same code
/// are resolved by the conditional write (exactly one succeeds, the rest
/// observe [`AppError::Conflict`]). No coordination happens in-process.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - concurrent in-memory store
/// - [`crate::infrastructure::persistence::CachedLinkRepository`] - read-through caching decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link, conditional on the code being free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] iff a record with this code already
    /// exists. Any other failure is [`AppError::BackendUnavailable`];
    /// writes are fail-closed.
    async fn put(&self, code: &str, original_url: &str) -> Result<(), AppError>;

    /// Looks up a short link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] iff no record exists for the code,
    /// [`AppError::BackendUnavailable`] on store failure.
    async fn get(&self, code: &str) -> Result<ShortLink, AppError>;
}
