//! Core business entities.

mod link;

pub use link::ShortLink;
