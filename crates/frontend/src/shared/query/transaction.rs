use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::cache::{QueryCache, QueryKey};

/// Optimistic patch of one cache entry
///
/// `begin` snapshots the entry and applies the patch; `rollback` puts the
/// snapshot back exactly as it was, `commit` keeps the patched data.
#[derive(Debug, Clone)]
#[must_use = "a transaction must be committed or rolled back"]
pub struct Transaction<T> {
    key: QueryKey,
    snapshot: Option<Value>,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Transaction<T> {
    /// A missing entry is left untouched and rollback becomes a no-op
    pub fn begin(cache: &mut QueryCache, key: QueryKey, patch: impl FnOnce(T) -> T) -> Self {
        let snapshot = cache.raw(&key);
        if snapshot.is_some() {
            if let Some(current) = cache.get_query_data::<T>(&key) {
                cache.set_query_data(&key, &patch(current));
            }
        }
        Self {
            key,
            snapshot,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn snapshot(&self) -> Option<T> {
        self.snapshot
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn commit(self) {}

    pub fn rollback(self, cache: &mut QueryCache) {
        if let Some(previous) = self.snapshot {
            log::debug!("Rolling back optimistic update of {}", self.key);
            cache.set_raw(&self.key, Some(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_restaurant::{ManagedRestaurant, UpdateProfileDto};

    fn restaurant() -> ManagedRestaurant {
        ManagedRestaurant {
            id: "r-1".into(),
            name: "Pizza Shop".into(),
            description: Some("Forno a lenha".into()),
            manager_id: Some("m-1".into()),
            created_at: None,
            updated_at: None,
        }
    }

    fn key() -> QueryKey {
        QueryKey::new("managed-restaurant")
    }

    #[test]
    fn test_begin_applies_patch() {
        let mut cache = QueryCache::new();
        cache.set_query_data(&key(), &restaurant());
        let dto = UpdateProfileDto {
            name: "Pizza Nova".into(),
            description: None,
        };

        let tx = Transaction::<ManagedRestaurant>::begin(&mut cache, key(), |r| r.with_profile(&dto));
        let patched: ManagedRestaurant = cache.get_query_data(&key()).unwrap();
        assert_eq!(patched.name, "Pizza Nova");
        assert_eq!(patched.description, None);
        assert_eq!(patched.id, "r-1");
        assert_eq!(tx.snapshot(), Some(restaurant()));

        tx.commit();
        let kept: ManagedRestaurant = cache.get_query_data(&key()).unwrap();
        assert_eq!(kept.name, "Pizza Nova");
    }

    #[test]
    fn test_rollback_restores_snapshot() {
        let mut cache = QueryCache::new();
        cache.set_query_data(&key(), &restaurant());
        let before = cache.raw(&key());

        let tx = Transaction::<ManagedRestaurant>::begin(&mut cache, key(), |mut r| {
            r.name = "X".into();
            r
        });
        tx.rollback(&mut cache);

        assert_eq!(cache.raw(&key()), before);
    }

    #[test]
    fn test_missing_entry_is_left_alone() {
        let mut cache = QueryCache::new();
        let tx = Transaction::<ManagedRestaurant>::begin(&mut cache, key(), |r| r);
        assert!(tx.snapshot().is_none());
        tx.rollback(&mut cache);
        assert!(cache.is_empty());
    }
}
