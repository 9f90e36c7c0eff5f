//! Cache module for remote association responses
//!
//! Holds the last full upstream response keyed by (feature, phenotype).
//! A new key replaces key, response and length together; nothing expires.

use tracing::debug;

use crate::errors::Result;

/// Cache key: the two parameters sent upstream
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub feature: String,
    pub phenotype: String,
}

impl CacheKey {
    pub fn new(feature: impl Into<String>, phenotype: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            phenotype: phenotype.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub key: CacheKey,
    pub value: T,
    pub len: usize,
}

/// Single-slot cache
#[derive(Debug, Clone)]
pub struct ResponseCache<T> {
    slot: Option<CacheEntry<T>>,
}

impl<T> Default for ResponseCache<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> ResponseCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `key`, if it is the one cached
    pub fn get(&self, key: &CacheKey) -> Option<&CacheEntry<T>> {
        self.slot.as_ref().filter(|entry| &entry.key == key)
    }

    pub fn key(&self) -> Option<&CacheKey> {
        self.slot.as_ref().map(|entry| &entry.key)
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Replace the slot with a new entry
    pub fn replace(&mut self, key: CacheKey, value: T, len: usize) -> &CacheEntry<T> {
        &*self.slot.insert(CacheEntry { key, value, len })
    }

    /// Return the entry for `key`, calling `fetch` for `(value, len)` on a miss
    ///
    /// If `fetch` fails the previous entry is kept.
    pub fn get_or_try_fill<F>(&mut self, key: CacheKey, fetch: F) -> Result<&CacheEntry<T>>
    where
        F: FnOnce() -> Result<(T, usize)>,
    {
        let entry = match self.slot.take() {
            Some(entry) if entry.key == key => {
                debug!(feature = %key.feature, phenotype = %key.phenotype, "response cache hit");
                entry
            }
            previous => match fetch() {
                Ok((value, len)) => CacheEntry { key, value, len },
                Err(e) => {
                    self.slot = previous;
                    return Err(e);
                }
            },
        };
        Ok(&*self.slot.insert(entry))
    }
}
