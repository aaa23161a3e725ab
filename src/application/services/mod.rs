//! Application services.

mod rate_limiter;
mod shortener;

pub use rate_limiter::{RateLimitDecision, RateLimiter};
pub use shortener::{ShortenedLink, ShortenerService};
