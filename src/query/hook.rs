//! `use_query` Hook
//!
//! Binds a cached query to the lifetime of the calling component.

use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::{AppError, AppResult};

use super::client::{QueryClient, QueryKey};

/// Per-key refetch counters shared by every `use_query` consumer.
///
/// Bumping a key makes all mounted consumers of that key reload, not just
/// the one that asked.
#[derive(Clone, Copy)]
pub struct QueryEpochs(RwSignal<HashMap<QueryKey, u32>>);

impl QueryEpochs {
    pub fn new() -> Self {
        Self(RwSignal::new(HashMap::new()))
    }

    pub fn bump(&self, key: &QueryKey) {
        self.0.update(|epochs| *epochs.entry(key.clone()).or_insert(0) += 1);
    }

    /// Tracked read of one key's counter
    pub fn epoch(&self, key: &QueryKey) -> u32 {
        self.0.with(|epochs| epochs.get(key).copied().unwrap_or(0))
    }

    pub fn epoch_untracked(&self, key: &QueryKey) -> u32 {
        self.0.with_untracked(|epochs| epochs.get(key).copied().unwrap_or(0))
    }
}

impl Default for QueryEpochs {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive view of one query
pub struct QueryState<T: Send + Sync + 'static> {
    pub data: ReadSignal<Option<Arc<T>>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<AppError>>,
    key: StoredValue<QueryKey>,
    epochs: QueryEpochs,
}

impl<T: Send + Sync + 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryState<T> {}

impl<T: Send + Sync + 'static> QueryState<T> {
    /// Invalidate and fetch again, in every consumer of this key
    pub fn refetch(&self) {
        self.epochs.bump(&self.key.get_value());
    }
}

/// Fetch `key` through the shared [`QueryClient`].
///
/// Mounting subscribes to the key and unmounting unsubscribes, so the cached
/// value lives exactly as long as some component shows it.
pub fn use_query<T, F, Fut>(key: QueryKey, fetcher: F) -> QueryState<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = AppResult<T>> + 'static,
{
    let client = expect_context::<QueryClient>();
    let epochs = expect_context::<QueryEpochs>();
    let (data, set_data) = signal(None::<Arc<T>>);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<AppError>);

    client.subscribe(&key);
    {
        let client = client.clone();
        let key = key.clone();
        on_cleanup(move || client.unsubscribe(&key));
    }

    let epoch = {
        let key = key.clone();
        Memo::new(move |_| epochs.epoch(&key))
    };

    let stored_key = StoredValue::new(key.clone());
    let fetcher = Rc::new(fetcher);
    Effect::new(move |previous: Option<u32>| {
        let current = epoch.get();
        let client = client.clone();
        let key = key.clone();
        let fetcher = fetcher.clone();
        // every consumer invalidates; only the first one finds a value to drop
        if previous.is_some() {
            client.invalidate(&key);
        }
        set_is_loading.set(true);
        spawn_local(async move {
            match client.fetch(&key, move || (*fetcher)()).await {
                Ok(value) => {
                    let _ = set_data.try_set(Some(value));
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("[QUERY] {} unavailable: {}", key, e);
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
        current
    });

    QueryState {
        data,
        is_loading,
        error,
        key: stored_key,
        epochs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_only_moves_its_own_key() {
        let epochs = QueryEpochs::new();
        epochs.bump(&QueryKey::STATISTICS);
        epochs.bump(&QueryKey::STATISTICS);
        epochs.bump(&QueryKey::new("companies"));

        assert_eq!(epochs.epoch_untracked(&QueryKey::STATISTICS), 2);
        // keys compare by name, however they were built
        assert_eq!(epochs.epoch_untracked(&QueryKey::fixed("companies")), 1);
        assert_eq!(epochs.epoch_untracked(&QueryKey::PERCENTS), 0);
    }

    #[test]
    fn test_copies_share_counters() {
        let epochs = QueryEpochs::new();
        let other = epochs;
        other.bump(&QueryKey::USER);
        assert_eq!(epochs.epoch_untracked(&QueryKey::USER), 1);
    }
}
