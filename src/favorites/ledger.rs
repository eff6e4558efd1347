use crate::catalog::{InsectId, InsectRecord};
use crate::storage::{KeyValueStore, StoreError};

use super::codec::{decode_favorites, encode_favorites};

/// Storage key of the favorites set.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// Persisted, insertion-ordered set of favorite insect ids.
///
/// Loading never fails: a missing, unreadable, or malformed stored value
/// yields an empty ledger. Every [`toggle`](FavoritesLedger::toggle) writes
/// the whole set back to the store before returning.
pub struct FavoritesLedger<S> {
    store: S,
    key: String,
    ids: Vec<InsectId>,
}

impl<S: KeyValueStore> FavoritesLedger<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, DEFAULT_FAVORITES_KEY)
    }

    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match store.get(&key) {
            Ok(Some(stored)) => decode_favorites(&stored).unwrap_or_else(|err| {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "stored favorites are malformed, starting empty"
                );
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "favorites store unavailable, starting empty"
                );
                Vec::new()
            }
        };

        FavoritesLedger { store, key, ids }
    }

    pub fn is_favorite(&self, id: InsectId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present, then persist.
    ///
    /// Returns whether `id` is a favorite afterwards. The in-memory set is
    /// updated even when the write fails; the error is returned so the caller
    /// can decide whether to tell anyone.
    pub fn toggle(&mut self, id: InsectId) -> Result<bool, StoreError> {
        let now_favorite = match self.ids.iter().position(|existing| *existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };

        tracing::info!(id = %id, favorite = now_favorite, "toggled favorite");
        let encoded = encode_favorites(&self.ids).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, &encoded)?;
        Ok(now_favorite)
    }

    /// Catalog records that are favorites, in catalog order.
    pub fn list<'a, I>(&self, catalog: I) -> Vec<&'a InsectRecord>
    where
        I: IntoIterator<Item = &'a InsectRecord>,
    {
        catalog
            .into_iter()
            .filter(|record| self.is_favorite(record.id))
            .collect()
    }

    /// Favorite ids in the order they were added.
    pub fn ids(&self) -> &[InsectId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
