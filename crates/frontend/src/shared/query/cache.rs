//! Keyed cache of backend results
//!
//! Payloads are stored as `serde_json::Value` and typed at the edges, so one
//! cache holds every query of the app. The cache knows nothing about Leptos;
//! [`super::QueryClient`] wraps it in a signal.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Operation name plus parameter tuple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(operation: &str) -> Self {
        Self(vec![operation.to_string()])
    }

    pub fn with(mut self, part: impl ToString) -> Self {
        self.0.push(part.to_string());
        self
    }

    /// Absent parameters are encoded as an empty segment
    pub fn with_opt(self, part: Option<&str>) -> Self {
        self.with(part.unwrap_or_default())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn operation(&self) -> &str {
        &self.0[0]
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// How long a successful result counts as fresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaleTime {
    #[default]
    Zero,
    After(Duration),
    /// Never refetched automatically once loaded
    Infinite,
}

/// Why the cache is asked whether to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// A view started observing the key (mount, parameter change, re-enable)
    Mount,
    /// The cache changed while the view kept observing the same key
    Reevaluate,
}

#[derive(Debug, Clone, Default)]
struct CacheEntry {
    data: Option<Value>,
    error: Option<String>,
    is_fetching: bool,
    updated_at: Option<DateTime<Utc>>,
    invalidated: bool,
}

impl CacheEntry {
    fn is_stale(&self, now: DateTime<Utc>, stale_time: StaleTime) -> bool {
        let Some(updated_at) = self.updated_at else {
            return true;
        };
        match stale_time {
            StaleTime::Zero => true,
            StaleTime::After(duration) => now - updated_at >= duration,
            StaleTime::Infinite => false,
        }
    }
}

/// Typed snapshot of one entry for views
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub is_fetching: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            is_fetching: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a fetch should start now. At most one request per key is in flight.
    ///
    /// An entry dropped by [`QueryCache::clear`] is fetched again on the next
    /// mount, not by observers that are already mounted.
    pub fn should_fetch(
        &self,
        key: &QueryKey,
        now: DateTime<Utc>,
        stale_time: StaleTime,
        trigger: FetchTrigger,
    ) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return matches!(trigger, FetchTrigger::Mount);
        };
        if entry.is_fetching {
            return false;
        }
        match trigger {
            FetchTrigger::Mount => {
                entry.invalidated || entry.data.is_none() || entry.is_stale(now, stale_time)
            }
            FetchTrigger::Reevaluate => entry.invalidated,
        }
    }

    pub fn mark_fetching(&mut self, key: &QueryKey) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.is_fetching = true;
        entry.invalidated = false;
    }

    /// `should_fetch` + `mark_fetching` in one step
    pub fn begin_fetch(
        &mut self,
        key: &QueryKey,
        now: DateTime<Utc>,
        stale_time: StaleTime,
        trigger: FetchTrigger,
    ) -> bool {
        if !self.should_fetch(key, now, stale_time, trigger) {
            return false;
        }
        self.mark_fetching(key);
        true
    }

    pub fn resolve<T: Serialize>(&mut self, key: &QueryKey, data: &T, now: DateTime<Utc>) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.is_fetching = false;
        match serde_json::to_value(data) {
            Ok(value) => {
                entry.data = Some(value);
                entry.error = None;
                entry.updated_at = Some(now);
            }
            Err(e) => entry.error = Some(e.to_string()),
        }
    }

    /// Keeps previous data, records the error
    pub fn reject(&mut self, key: &QueryKey, error: impl Into<String>) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.is_fetching = false;
        entry.error = Some(error.into());
    }

    pub fn is_invalidated(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .map(|e| e.invalidated)
            .unwrap_or(false)
    }

    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.entries.get(key)?.data.clone()?;
        match serde_json::from_value(value) {
            Ok(data) => Some(data),
            Err(e) => {
                log::error!("Cached data for {} has an unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Replace the data of `key`, creating the entry when missing
    pub fn set_query_data<T: Serialize>(&mut self, key: &QueryKey, data: &T) -> bool {
        match serde_json::to_value(data) {
            Ok(value) => {
                self.set_raw(key, Some(value));
                true
            }
            Err(e) => {
                log::error!("Failed to cache data for {}: {}", key, e);
                false
            }
        }
    }

    pub(crate) fn raw(&self, key: &QueryKey) -> Option<Value> {
        self.entries.get(key).and_then(|e| e.data.clone())
    }

    pub(crate) fn set_raw(&mut self, key: &QueryKey, value: Option<Value>) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.data = value;
        entry.error = None;
    }

    /// Every entry under `prefix` whose data decodes as `T`
    pub fn get_queries_data<T: DeserializeOwned>(&self, prefix: &QueryKey) -> Vec<(QueryKey, T)> {
        let mut found: Vec<(QueryKey, T)> = self
            .entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .filter_map(|(key, entry)| {
                let value = entry.data.clone()?;
                serde_json::from_value(value).ok().map(|data| (key.clone(), data))
            })
            .collect();
        found.sort_by(|a, b| a.0.parts().cmp(b.0.parts()));
        found
    }

    /// Mark matching entries for refetch; returns how many were hit
    pub fn invalidate_queries(&mut self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        count
    }

    pub fn remove_queries(&mut self, prefix: &QueryKey) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn state<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        let Some(entry) = self.entries.get(key) else {
            return QueryState::default();
        };
        let data = self.get_query_data::<T>(key);
        QueryState {
            is_loading: data.is_none() && entry.is_fetching,
            is_fetching: entry.is_fetching,
            error: entry.error.clone(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn orders(page: u32) -> QueryKey {
        QueryKey::new("orders").with(page).with_opt(None).with_opt(None).with("all")
    }

    #[test]
    fn test_key_prefix_matching() {
        let prefix = QueryKey::new("orders");
        assert!(orders(0).starts_with(&prefix));
        assert!(!QueryKey::new("order").with("abc").starts_with(&prefix));
        assert_eq!(orders(2).to_string(), "[orders, 2, , , all]");
        assert_ne!(orders(0), orders(1));
    }

    #[test]
    fn test_in_flight_requests_are_deduplicated() {
        let mut cache = QueryCache::new();
        let key = orders(0);
        assert!(cache.begin_fetch(&key, now(), StaleTime::Zero, FetchTrigger::Mount));
        assert!(!cache.begin_fetch(&key, now(), StaleTime::Zero, FetchTrigger::Mount));
        assert!(cache.state::<Value>(&key).is_loading);

        cache.resolve(&key, &vec![1, 2, 3], now());
        let state = cache.state::<Vec<i32>>(&key);
        assert_eq!(state.data, Some(vec![1, 2, 3]));
        assert!(!state.is_loading && !state.is_fetching);
    }

    #[test]
    fn test_stale_time_controls_refetch_on_mount() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("managed-restaurant");
        cache.begin_fetch(&key, now(), StaleTime::Infinite, FetchTrigger::Mount);
        cache.resolve(&key, &"Pizza Shop", now());

        let much_later = now() + Duration::days(30);
        assert!(!cache.should_fetch(&key, much_later, StaleTime::Infinite, FetchTrigger::Mount));
        assert!(cache.should_fetch(&key, now(), StaleTime::Zero, FetchTrigger::Mount));

        let five = StaleTime::After(Duration::minutes(5));
        assert!(!cache.should_fetch(&key, now() + Duration::minutes(4), five, FetchTrigger::Mount));
        assert!(cache.should_fetch(&key, now() + Duration::minutes(5), five, FetchTrigger::Mount));
    }

    #[test]
    fn test_reevaluation_only_fetches_invalidated_entries() {
        let mut cache = QueryCache::new();
        let key = orders(0);
        cache.begin_fetch(&key, now(), StaleTime::Zero, FetchTrigger::Mount);
        cache.resolve(&key, &1, now());
        assert!(!cache.should_fetch(&key, now(), StaleTime::Zero, FetchTrigger::Reevaluate));

        assert_eq!(cache.invalidate_queries(&QueryKey::new("orders")), 1);
        assert!(cache.begin_fetch(&key, now(), StaleTime::Zero, FetchTrigger::Reevaluate));
        assert!(!cache.is_invalidated(&key));
    }

    #[test]
    fn test_cleared_entries_wait_for_next_mount() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new("profile");
        cache.begin_fetch(&key, now(), StaleTime::Infinite, FetchTrigger::Mount);
        cache.resolve(&key, &"Ana", now());

        cache.clear();
        assert!(!cache.should_fetch(&key, now(), StaleTime::Infinite, FetchTrigger::Reevaluate));
        assert!(cache.should_fetch(&key, now(), StaleTime::Infinite, FetchTrigger::Mount));
        assert_eq!(cache.state::<String>(&key), QueryState::default());
    }

    #[test]
    fn test_reject_keeps_previous_data() {
        let mut cache = QueryCache::new();
        let key = orders(0);
        cache.resolve(&key, &10, now());
        cache.mark_fetching(&key);
        cache.reject(&key, "boom");
        let state = cache.state::<i32>(&key);
        assert_eq!(state.data, Some(10));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_get_queries_data_by_prefix() {
        let mut cache = QueryCache::new();
        cache.set_query_data(&orders(1), &"b");
        cache.set_query_data(&orders(0), &"a");
        cache.set_query_data(&QueryKey::new("order").with("x"), &"detail");

        let pages = cache.get_queries_data::<String>(&QueryKey::new("orders"));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].1, "a");
        assert_eq!(pages[1].1, "b");

        cache.remove_queries(&QueryKey::new("orders"));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
