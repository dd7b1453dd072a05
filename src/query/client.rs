//! Query Cache
//!
//! Caches remote results by key and collapses concurrent requests for the
//! same key into one. The lock is never held across an await.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::channel::oneshot;

use crate::error::{AppError, AppResult};

type Shared = Arc<dyn Any + Send + Sync>;
type Waiter = oneshot::Sender<AppResult<Shared>>;

/// Logical name of a cached request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Cow<'static, str>);

impl QueryKey {
    pub const STATISTICS: QueryKey = QueryKey::fixed("statistics");
    pub const PERCENTS: QueryKey = QueryKey::fixed("percents");
    pub const TIMESERIES: QueryKey = QueryKey::fixed("timeseries");
    pub const USER: QueryKey = QueryKey::fixed("user");

    pub const fn fixed(name: &'static str) -> Self {
        QueryKey(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        QueryKey(Cow::Owned(name.into()))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

enum Entry {
    Ready(Shared),
    InFlight(Vec<Waiter>),
}

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
    subscribers: HashMap<QueryKey, usize>,
    /// In-flight keys whose result must not be cached: every subscriber left,
    /// or the cache was cleared, while the request was running
    discard: HashSet<QueryKey>,
}

/// Shared cache handed to every view through context
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Arc<Mutex<Inner>>,
}

enum Plan {
    Hit(Shared),
    Wait(oneshot::Receiver<AppResult<Shared>>),
    Fetch,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panic while holding the lock leaves the map itself intact
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cached value for `key`, or the result of `fetcher`.
    ///
    /// While a fetch for `key` is running, further callers wait for it instead
    /// of starting their own. Errors are handed to every waiter and not cached.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> AppResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let plan = {
            let mut inner = self.lock();
            match inner.entries.get_mut(key) {
                Some(Entry::Ready(value)) => Plan::Hit(value.clone()),
                Some(Entry::InFlight(waiters)) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    Plan::Wait(rx)
                }
                None => {
                    inner.entries.insert(key.clone(), Entry::InFlight(Vec::new()));
                    Plan::Fetch
                }
            }
        };

        let shared = match plan {
            Plan::Hit(value) => {
                log::debug!("[QUERY] {} served from cache", key);
                value
            }
            Plan::Wait(rx) => {
                log::debug!("[QUERY] {} joined in-flight request", key);
                rx.await.map_err(|_| AppError::Cancelled)??
            }
            Plan::Fetch => {
                log::debug!("[QUERY] {} fetching", key);
                let mut guard = InFlightGuard { client: self, key, armed: true };
                let result = fetcher().await.map(|value| Arc::new(value) as Shared);
                guard.armed = false;
                self.complete(key, result.clone());
                result?
            }
        };

        downcast(key, shared)
    }

    fn complete(&self, key: &QueryKey, result: AppResult<Shared>) {
        let waiters = {
            let mut inner = self.lock();
            let discard = inner.discard.remove(key);
            let previous = match &result {
                Ok(_) if discard => {
                    log::debug!("[QUERY] {} finished with no subscribers, not cached", key);
                    inner.entries.remove(key)
                }
                Ok(value) => inner.entries.insert(key.clone(), Entry::Ready(value.clone())),
                Err(e) => {
                    log::warn!("[QUERY] {} failed: {}", key, e);
                    inner.entries.remove(key)
                }
            };
            match previous {
                Some(Entry::InFlight(waiters)) => waiters,
                _ => Vec::new(),
            }
        };
        for waiter in waiters {
            // receiver gone means that consumer unmounted
            let _ = waiter.send(result.clone());
        }
    }

    /// Drop the cached value so the next fetch hits the network.
    /// An in-flight request is left alone.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut inner = self.lock();
        if matches!(inner.entries.get(key), Some(Entry::Ready(_))) {
            inner.entries.remove(key);
            log::debug!("[QUERY] {} invalidated", key);
        }
    }

    /// Drop every cached value (logout). Requests still running will not be
    /// cached when they finish.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.retain(|_, entry| matches!(entry, Entry::InFlight(_)));
        let running: Vec<QueryKey> = inner.entries.keys().cloned().collect();
        inner.discard.extend(running);
        log::debug!("[QUERY] cache cleared");
    }

    /// Register a mounted consumer of `key`
    pub fn subscribe(&self, key: &QueryKey) {
        let mut inner = self.lock();
        *inner.subscribers.entry(key.clone()).or_insert(0) += 1;
        // a new consumer wants whatever is still running for this key
        inner.discard.remove(key);
    }

    /// Unregister a consumer; the last one out evicts the cached value
    pub fn unsubscribe(&self, key: &QueryKey) {
        let last = {
            let mut inner = self.lock();
            match inner.subscribers.get_mut(key) {
                Some(count) if *count > 1 => {
                    *count -= 1;
                    false
                }
                Some(_) => {
                    inner.subscribers.remove(key);
                    if matches!(inner.entries.get(key), Some(Entry::InFlight(_))) {
                        inner.discard.insert(key.clone());
                    }
                    true
                }
                None => false,
            }
        };
        if last {
            self.invalidate(key);
        }
    }

    pub fn is_cached(&self, key: &QueryKey) -> bool {
        matches!(self.lock().entries.get(key), Some(Entry::Ready(_)))
    }

    #[cfg(test)]
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        matches!(self.lock().entries.get(key), Some(Entry::InFlight(_)))
    }
}

/// Clears the in-flight marker if the fetching future is dropped early
struct InFlightGuard<'a> {
    client: &'a QueryClient,
    key: &'a QueryKey,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::debug!("[QUERY] {} cancelled", self.key);
            // dropping the senders wakes waiters with Cancelled
            let mut inner = self.client.lock();
            inner.entries.remove(self.key);
            inner.discard.remove(self.key);
        }
    }
}

fn downcast<T: Send + Sync + 'static>(key: &QueryKey, shared: Shared) -> AppResult<Arc<T>> {
    shared.downcast::<T>().map_err(|_| {
        AppError::Decode(format!("query '{}' cached a different type", key))
    })
}
