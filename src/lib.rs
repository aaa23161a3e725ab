//! # Link Shortener Core
//!
//! Core engine for a short-link service: maps arbitrary long URLs to short,
//! collision-free codes and resolves codes back to URLs.
//!
//! ## Architecture
//!
//! The crate follows a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::ShortLink`]
//!   record and the [`domain::repositories::LinkRepository`] trait describing
//!   the durable store's conditional-write / point-lookup contract
//! - **Application Layer** ([`application`]) - The shortening engine
//!   (code generation with bounded collision retry) and the distributed
//!   token-bucket rate limiter
//! - **Infrastructure Layer** ([`infrastructure`]) - The shared fast store
//!   (Redis) and repository implementations, including the cache-aside
//!   decorator
//!
//! HTTP routing, request shaping, and process startup are deliberately left
//! to the embedding service; this crate exposes `shorten`, `resolve`, and
//! `allow` directly.
//!
//! ## Failure policy
//!
//! Fail-open and fail-closed are chosen per path, not globally:
//!
//! - Rate limiter: fast-store failure admits the request (an outage of the
//!   limiter must not become a full outage)
//! - Cache reads: fast-store failure falls through to the durable store
//! - Durable reads and writes: failures surface as
//!   [`AppError::BackendUnavailable`]
//!
//! Every swallowed error is logged via `tracing` and counted via `metrics`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use link_shortener::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let config = link_shortener::config::load_from_env()?;
//!
//! let fast_store = Arc::new(RedisStore::connect(&config.redis_url).await?);
//! let repository = Arc::new(CachedLinkRepository::new(
//!     Arc::new(InMemoryLinkRepository::new()),
//!     Arc::clone(&fast_store),
//!     Duration::from_secs(config.cache_ttl_seconds),
//! ));
//!
//! let shortener = ShortenerService::new(
//!     repository,
//!     &config.base_url,
//!     config.code_length,
//!     config.max_retries,
//! );
//! let limiter = RateLimiter::new(fast_store, config.rate_limit_rps, config.rate_limit_burst);
//!
//! if limiter.allow("198.51.100.7").await.admitted {
//!     let link = shortener.shorten("https://example.com/page").await?;
//!     println!("{}", link.short_url);
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        RateLimitDecision, RateLimiter, ShortenedLink, ShortenerService,
    };
    pub use crate::config::Config;
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::fast_store::{FastStore, FastStoreError, RedisStore};
    pub use crate::infrastructure::persistence::{CachedLinkRepository, InMemoryLinkRepository};
}
