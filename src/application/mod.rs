//! Application layer: shortening engine and rate limiting.

pub mod services;
