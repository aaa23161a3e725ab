//! In-memory implementation of the link repository.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

#[derive(Debug, Clone)]
struct StoredLink {
    original_url: String,
    created_at: DateTime<Utc>,
}

/// Concurrent in-memory [`LinkRepository`] backed by a sharded map.
///
/// The conditional put uses the map's entry API, so check-and-insert is
/// atomic per key and concurrent writers for the same code observe exactly
/// one winner. Intended for tests and embedded deployments; production
/// setups point the cache-aside decorator at an external durable store.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, StoredLink>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn put(&self, code: &str, original_url: &str) -> Result<(), AppError> {
        match self.links.entry(code.to_owned()) {
            Entry::Occupied(_) => Err(AppError::conflict(code)),
            Entry::Vacant(slot) => {
                slot.insert(StoredLink {
                    original_url: original_url.to_owned(),
                    created_at: Utc::now(),
                });
                Ok(())
            }
        }
    }

    async fn get(&self, code: &str) -> Result<ShortLink, AppError> {
        self.links
            .get(code)
            .map(|entry| ShortLink {
                code: code.to_owned(),
                original_url: entry.original_url.clone(),
                created_at: Some(entry.created_at),
            })
            .ok_or_else(|| AppError::not_found(code))
    }
}
