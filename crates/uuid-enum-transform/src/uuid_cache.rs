//! Identifier cache: enum member key → generated UUID string.
//!
//! A cache hands out one random v4 UUID per key and returns that same value
//! for the key for the rest of its lifetime. Entries are never evicted or
//! replaced. A new cache starts empty and draws fresh values.

use dashmap::DashMap;
use rustc_hash::FxHashMap;
use tracing::debug;
use uuid::Uuid;

/// Separator between the enum name and the member name in a cache key.
pub const KEY_SEPARATOR: &str = "_";

/// Cache key for `member_name` declared in the enum `enum_name`.
pub fn cache_key(enum_name: &str, member_name: &str) -> String {
    format!("{enum_name}{KEY_SEPARATOR}{member_name}")
}

fn generate_value() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Source of stable substitute values for const enum members.
pub trait IdentifierCache {
    /// Value for `key`, generating and remembering one on first use.
    fn resolve(&mut self, key: &str) -> String;
}

impl<C: IdentifierCache + ?Sized> IdentifierCache for &mut C {
    fn resolve(&mut self, key: &str) -> String {
        (**self).resolve(key)
    }
}

/// Single-threaded cache owned by one transformer.
#[derive(Clone, Debug, Default)]
pub struct UuidCache {
    entries: FxHashMap<String, String>,
}

impl UuidCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value already generated for `key`, without generating one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl IdentifierCache for UuidCache {
    fn resolve(&mut self, key: &str) -> String {
        if let Some(existing) = self.entries.get(key) {
            debug!(key, uuid = %existing, "using cached UUID");
            return existing.clone();
        }
        let value = generate_value();
        debug!(key, uuid = %value, "generated new UUID");
        self.entries.insert(key.to_string(), value.clone());
        value
    }
}

/// Cache shared by transformers running on several threads.
///
/// Lookup-or-insert happens under the map's shard lock, so two threads
/// resolving the same key always agree on the value.
#[derive(Debug, Default)]
pub struct SharedUuidCache {
    entries: DashMap<String, String>,
}

impl SharedUuidCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn resolve(&self, key: &str) -> String {
        if let Some(existing) = self.entries.get(key) {
            debug!(key, uuid = %existing.value(), "using cached UUID");
            return existing.value().clone();
        }
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| {
                let value = generate_value();
                debug!(key, uuid = %value, "generated new UUID");
                value
            });
        entry.value().clone()
    }

    /// Copy the current mapping into a single-threaded cache.
    pub fn snapshot(&self) -> UuidCache {
        UuidCache {
            entries: self
                .entries
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().clone()))
                .collect(),
        }
    }
}

impl IdentifierCache for &SharedUuidCache {
    fn resolve(&mut self, key: &str) -> String {
        SharedUuidCache::resolve(*self, key)
    }
}

#[cfg(test)]
#[path = "../tests/uuid_cache.rs"]
mod tests;
