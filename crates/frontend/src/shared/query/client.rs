use std::future::Future;

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::cache::{FetchTrigger, QueryCache, QueryKey, QueryState, StaleTime};
use super::mutation::{run_mutation, MutationHooks};
use crate::shared::http::{use_api, ApiClient, HttpError};

/// Reactive handle on the app-wide [`QueryCache`]
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(QueryCache::new()),
        }
    }

    /// Tracked read
    pub fn with<R>(&self, f: impl FnOnce(&QueryCache) -> R) -> R {
        self.cache.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&QueryCache) -> R) -> R {
        self.cache.with_untracked(f)
    }

    /// `None` once the owning scope is gone
    pub fn update<R>(&self, f: impl FnOnce(&mut QueryCache) -> R) -> Option<R> {
        self.cache.try_update(f)
    }

    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.with_untracked(|cache| cache.get_query_data(key))
    }

    pub fn set_query_data<T: Serialize>(&self, key: &QueryKey, data: &T) {
        self.update(|cache| cache.set_query_data(key, data));
    }

    pub fn invalidate_queries(&self, prefix: &QueryKey) {
        let count = self.update(|cache| cache.invalidate_queries(prefix)).unwrap_or(0);
        log::debug!("Invalidated {} queries under {}", count, prefix);
    }

    pub fn clear(&self) {
        self.update(QueryCache::clear);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided in context")
}

#[derive(Clone, Copy)]
pub struct QueryOptions {
    pub enabled: Signal<bool>,
    pub stale_time: StaleTime,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: Signal::derive(|| true),
            stale_time: StaleTime::Zero,
        }
    }
}

impl QueryOptions {
    pub fn stale_time(stale_time: StaleTime) -> Self {
        Self {
            stale_time,
            ..Self::default()
        }
    }

    pub fn enabled(enabled: Signal<bool>) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }
}

/// What a view sees of one query
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub key: Memo<QueryKey>,
    state: Memo<QueryState<T>>,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

impl<T: Clone + PartialEq + Send + Sync + 'static> QueryHandle<T> {
    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data.clone())
    }

    /// Tracked borrow of the data without cloning it
    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.state.with(|s| f(s.data.as_ref()))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn is_fetching(&self) -> bool {
        self.state.with(|s| s.is_fetching)
    }
}

/// Invalidation state of the observed entry only
///
/// Writes to other entries notify this memo but leave its value unchanged,
/// so subscribers downstream do not rerun.
pub(crate) fn invalidation_flag(client: QueryClient, key: Memo<QueryKey>) -> Memo<bool> {
    Memo::new(move |_| key.with(|key| client.with(|cache| cache.is_invalidated(key))))
}

/// Subscribe a view to `key(params)`
///
/// Fetches when the key is first observed (mount, parameter change,
/// re-enable) unless fresh data is cached, and again whenever the entry is
/// invalidated while observed. Concurrent observers share one request.
pub fn use_query<P, T, K, F, Fut>(
    params: impl Fn() -> P + Send + Sync + 'static,
    key: K,
    fetch: F,
    options: QueryOptions,
) -> QueryHandle<T>
where
    P: Clone + PartialEq + Send + Sync + 'static,
    T: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
    K: Fn(&P) -> QueryKey + Send + Sync + 'static,
    F: Fn(ApiClient, P) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, HttpError>> + 'static,
{
    let client = use_query_client();
    let api = use_api();
    let QueryOptions {
        enabled,
        stale_time,
    } = options;

    let params = Memo::new(move |_| params());
    let current_key = Memo::new(move |_| params.with(|p| key(p)));
    let invalidated = invalidation_flag(client, current_key);

    Effect::new(move |prev: Option<(QueryKey, bool)>| {
        let key = current_key.get();
        let is_enabled = enabled.get();
        invalidated.track();

        if is_enabled {
            let trigger = match &prev {
                Some((prev_key, true)) if *prev_key == key => FetchTrigger::Reevaluate,
                _ => FetchTrigger::Mount,
            };
            let should_fetch = client
                .with_untracked(|cache| cache.should_fetch(&key, Utc::now(), stale_time, trigger));
            if should_fetch {
                client.update(|cache| cache.mark_fetching(&key));
                let api = api.clone();
                let fetch = fetch.clone();
                let request_params = params.get_untracked();
                let request_key = key.clone();
                spawn_local(async move {
                    let result = fetch(api, request_params).await;
                    client.update(|cache| match result {
                        Ok(data) => cache.resolve(&request_key, &data, Utc::now()),
                        Err(err) => {
                            log::warn!("Query {} failed: {}", request_key, err);
                            cache.reject(&request_key, err.to_string());
                        }
                    });
                });
            }
        }

        (key, is_enabled)
    });

    let state = Memo::new(move |_| {
        let key = current_key.get();
        client.with(|cache| cache.state::<T>(&key))
    });

    QueryHandle {
        key: current_key,
        state,
    }
}

/// Reactive mutation trigger
pub struct Mutation<V: 'static> {
    pending: RwSignal<bool>,
    trigger: Callback<V>,
}

impl<V: 'static> Clone for Mutation<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for Mutation<V> {}

impl<V: 'static> Mutation<V> {
    /// Ignored while a previous call is still pending
    pub fn mutate(&self, vars: V) {
        self.trigger.run(vars);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub fn pending(&self) -> Signal<bool> {
        self.pending.into()
    }
}

pub fn use_mutation<V, T, H, F, Fut>(hooks: H, mutate: F) -> Mutation<V>
where
    V: Clone + 'static,
    T: 'static,
    H: MutationHooks<V, T> + Clone + Send + Sync + 'static,
    F: Fn(ApiClient, V) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<T, HttpError>> + 'static,
{
    let api = use_api();
    let pending = RwSignal::new(false);

    let trigger = Callback::new(move |vars: V| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        let hooks = hooks.clone();
        let api = api.clone();
        spawn_local(async move {
            let _ = run_mutation(&hooks, vars, move |vars| mutate(api, vars)).await;
            // the row may be gone once the list refetches
            pending.try_set(false);
        });
    });

    Mutation { pending, trigger }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_invalidation_flag_ignores_other_entries() {
        Owner::new().with(|| {
            let client = QueryClient::new();
            let profile = QueryKey::new("profile");
            client.set_query_data(&profile, &"Ana");

            let key = Memo::new(move |_| QueryKey::new("profile"));
            let flag = invalidation_flag(client, key);
            let runs = Arc::new(AtomicUsize::new(0));
            let watcher = {
                let runs = runs.clone();
                Memo::new(move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    flag.get()
                })
            };

            assert!(!watcher.get());
            client.set_query_data(&QueryKey::new("orders").with(0), &vec![1, 2]);
            client.invalidate_queries(&QueryKey::new("orders"));
            assert!(!watcher.get());
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            client.invalidate_queries(&QueryKey::new("profile"));
            assert!(watcher.get());
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
