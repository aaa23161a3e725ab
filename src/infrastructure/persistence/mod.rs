//! Repository implementations.

mod cached;
mod memory;

pub use cached::CachedLinkRepository;
pub use memory::InMemoryLinkRepository;
