//! Infrastructure layer: shared fast store and repository implementations.

pub mod fast_store;
pub mod persistence;
