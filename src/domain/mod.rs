//! Domain layer: core entities and repository contracts.

pub mod entities;
pub mod repositories;
