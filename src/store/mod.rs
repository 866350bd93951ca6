//! Client workspace storage: named lists, per-company notes, saved searches,
//! and cached enrichment results.
//!
//! Modeled as a flat key-value repository per logical collection, with
//! opaque JSON values, string keys, no schema enforcement, and no expiry.
//! Backed by an in-memory map; the trait seam is where a persistent backend
//! would plug in.

pub mod handlers;
pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Logical collections of the workspace. Slugs match the wire names used in
/// workspace routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Lists,
    Notes,
    SavedSearches,
    EnrichmentCache,
}

impl Collection {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "lists" => Some(Self::Lists),
            "notes" => Some(Self::Notes),
            "savedSearches" => Some(Self::SavedSearches),
            "enrichmentCache" => Some(Self::EnrichmentCache),
            _ => None,
        }
    }

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Lists => "lists",
            Self::Notes => "notes",
            Self::SavedSearches => "savedSearches",
            Self::EnrichmentCache => "enrichmentCache",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn get(&self, collection: Collection, key: &str) -> Option<Value>;

    /// Stores the value verbatim. Last write wins; there is no versioning.
    async fn set(&self, collection: Collection, key: &str, value: Value);

    /// Returns whether an entry was actually removed.
    async fn delete(&self, collection: Collection, key: &str) -> bool;

    async fn keys(&self, collection: Collection) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trip() {
        for collection in [
            Collection::Lists,
            Collection::Notes,
            Collection::SavedSearches,
            Collection::EnrichmentCache,
        ] {
            assert_eq!(Collection::from_slug(collection.as_slug()), Some(collection));
        }
    }

    #[test]
    fn unknown_slug_rejected() {
        assert_eq!(Collection::from_slug("bookmarks"), None);
    }
}
