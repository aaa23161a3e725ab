//! Shortening engine: unique code generation with bounded retry, and
//! code-to-URL resolution.

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, warn};

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
}

/// Orchestrates code generation and the repository to shorten and resolve
/// URLs.
///
/// Uniqueness needs no coordinator: each attempt draws a fresh random code
/// and lets the durable store's conditional write arbitrate. A collision
/// simply retries with a new code, up to a fixed bound.
pub struct ShortenerService<R> {
    repository: Arc<R>,
    base_url: String,
    code_length: usize,
    max_retries: u32,
}

impl<R: LinkRepository> ShortenerService<R> {
    pub fn new(
        repository: Arc<R>,
        base_url: impl Into<String>,
        code_length: usize,
        max_retries: u32,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
            code_length,
            max_retries,
        }
    }

    /// Shortens `original_url`, returning the code and the full short URL.
    ///
    /// The URL is validated and normalized before storage.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is malformed or not http(s)
    /// - [`AppError::RetriesExhausted`] if every attempt collided
    /// - [`AppError::BackendUnavailable`] on durable store failure
    ///   (fail-closed; a collision retries, anything else aborts)
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenedLink, AppError> {
        let normalized =
            normalize_url(original_url).map_err(|e| AppError::validation(e.to_string()))?;

        for attempt in 1..=self.max_retries {
            let code = generate_code(self.code_length);

            match self.repository.put(&code, &normalized).await {
                Ok(()) => {
                    debug!("created short link {} -> {}", code, normalized);
                    return Ok(ShortenedLink {
                        short_url: format!("{}/{}", self.base_url, code),
                        code,
                    });
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(
                        "short code collision on attempt {}/{}",
                        attempt, self.max_retries
                    );
                    counter!("short_code_collisions_total").increment(1);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::RetriesExhausted {
            attempts: self.max_retries,
        })
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link exists for the code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let link = self.repository.get(code).await?;
        Ok(link.original_url)
    }
}
