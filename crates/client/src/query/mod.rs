// SPDX-FileCopyrightText: Copyright (C) 2026 the mneme authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Query/cache boundary between UI state and the endpoint bindings.
//!
//! Results are cached per [`QueryKey`]. Concurrent queries for the same
//! key attach to a single in-flight round instead of issuing duplicate
//! network calls, and all attached callers observe the identical outcome.
//! Mutations invalidate keys (exactly or by operation-name prefix); an
//! invalidated value stays visible through [`QueryCache::peek`] until the
//! next query replaces it (stale-while-revalidate).
//!
//! The cache is in-memory, process-lifetime state. The map is only ever
//! locked for synchronous bookkeeping, never across an await point.

use std::{
    any::Any,
    collections::HashMap,
    fmt,
    future::Future,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use tokio::sync::watch;

use crate::error::Error;

mod key;
pub use self::key::QueryKey;

type StoredValue = Arc<dyn Any + Send + Sync>;
type StoredResult = Result<StoredValue, Arc<Error>>;

enum EntryState {
    /// A fetch round is in flight. `last` keeps the previous outcome
    /// visible while revalidating.
    Pending {
        round: u64,
        rx: watch::Receiver<Option<StoredResult>>,
        last: Option<StoredResult>,
    },
    Ready {
        result: StoredResult,
    },
}

struct Entry {
    state: EntryState,
    stale: bool,
}

enum Plan {
    Hit(StoredResult),
    Wait(watch::Receiver<Option<StoredResult>>),
    Fetch {
        round: u64,
        tx: watch::Sender<Option<StoredResult>>,
    },
}

#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    round_counter: AtomicU64,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the value for `key`, deduplicating against concurrent and
    /// cached rounds.
    ///
    /// `fetch` is only invoked on a cache miss: an idle key, a stale key,
    /// or a key whose last round failed. A cached failure is never
    /// replayed to a new query; it is retried. Callers attached to the
    /// same round all receive the identical result.
    pub async fn query<T, F, Fut>(&self, key: &QueryKey, fetch: F) -> Result<Arc<T>, Arc<Error>>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        loop {
            match self.plan_query(key) {
                Plan::Hit(result) => match downcast::<T>(key, result) {
                    Some(result) => return result,
                    // Two operations disagree about the value type behind
                    // one key. Drop the entry and refetch.
                    None => self.remove(key),
                },
                Plan::Wait(mut rx) => match rx.wait_for(Option::is_some).await {
                    Ok(received) => {
                        if let Some(result) = received.clone() {
                            match downcast::<T>(key, result) {
                                Some(result) => return result,
                                None => self.remove(key),
                            }
                        }
                    }
                    // The fetching caller was dropped mid-flight. Loop
                    // and take over the round.
                    Err(_) => {
                        log::debug!("Fetcher for {key} vanished, retrying");
                    }
                },
                Plan::Fetch { round, tx } => {
                    let (stored, typed) = match fetch().await {
                        Ok(value) => {
                            let value = Arc::new(value);
                            (Ok(Arc::clone(&value) as StoredValue), Ok(value))
                        }
                        Err(err) => {
                            let err = Arc::new(err);
                            (Err(Arc::clone(&err)), Err(err))
                        }
                    };
                    self.finish_round(key, round, &stored);
                    // Attached waiters resolve even if the round was
                    // superseded and its result discarded.
                    let _ = tx.send(Some(stored));
                    return typed;
                }
            }
        }
    }

    /// Snapshot of the cached outcome for `key`, if any.
    ///
    /// Includes stale values and the previous outcome of a key that is
    /// currently revalidating; never touches the network.
    #[must_use]
    pub fn peek<T>(&self, key: &QueryKey) -> Option<Result<Arc<T>, Arc<Error>>>
    where
        T: Send + Sync + 'static,
    {
        let entries = self.entries.lock().unwrap();
        let result = match &entries.get(key)?.state {
            EntryState::Ready { result } => result.clone(),
            EntryState::Pending { last, .. } => last.clone()?,
        };
        drop(entries);
        downcast::<T>(key, result)
    }

    /// Mark `key` stale. The next query refetches; `peek` keeps serving
    /// the previous value until then.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(key) {
            entry.stale = true;
        }
    }

    /// Mark every key whose operation name starts with `op_prefix` stale.
    pub fn invalidate_prefix(&self, op_prefix: &str) {
        let mut entries = self.entries.lock().unwrap();
        for (key, entry) in entries.iter_mut() {
            if key.op().starts_with(op_prefix) {
                entry.stale = true;
            }
        }
    }

    /// Re-write a resolved cached value in place.
    ///
    /// Used to reconcile local state to the expected post-condition of a
    /// successful mutation (e.g. dropping a merged-away album from a
    /// cached search result) without waiting for a refetch. Returns
    /// `false` when there is no resolved value of type `T` under `key`.
    pub fn update<T, F>(&self, key: &QueryKey, update: F) -> bool
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get_mut(key) else {
            return false;
        };
        let EntryState::Ready { result: Ok(value) } = &mut entry.state else {
            return false;
        };
        let Some(current) = value.downcast_ref::<T>() else {
            return false;
        };
        let mut updated = current.clone();
        update(&mut updated);
        *value = Arc::new(updated) as StoredValue;
        true
    }

    /// Drop a single cache entry.
    pub fn remove(&self, key: &QueryKey) {
        self.entries.lock().unwrap().remove(key);
    }

    /// Drop every cache entry, e.g. on logout.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn plan_query(&self, key: &QueryKey) -> Plan {
        let mut entries = self.entries.lock().unwrap();
        let last = match entries.get(key) {
            Some(entry) => match &entry.state {
                EntryState::Ready { result } => {
                    if !entry.stale && result.is_ok() {
                        return Plan::Hit(result.clone());
                    }
                    // Stale or failed: refetch, keeping the last outcome
                    // visible while the new round is in flight.
                    Some(result.clone())
                }
                EntryState::Pending { rx, last, .. } => {
                    // A closed channel means the fetching caller was
                    // dropped before publishing; take over the round.
                    if rx.has_changed().is_ok() {
                        return Plan::Wait(rx.clone());
                    }
                    last.clone()
                }
            },
            None => None,
        };
        let round = self.round_counter.fetch_add(1, Ordering::Relaxed) + 1;
        let (tx, rx) = watch::channel(None);
        entries.insert(
            key.clone(),
            Entry {
                state: EntryState::Pending { round, rx, last },
                stale: false,
            },
        );
        Plan::Fetch { round, tx }
    }

    fn finish_round(&self, key: &QueryKey, round: u64, result: &StoredResult) {
        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get_mut(key) else {
            // The entry was removed (e.g. `clear` on logout) while the
            // round was in flight. Do not resurrect it.
            log::debug!("Entry for {key} is gone, discarding result");
            return;
        };
        let EntryState::Pending {
            round: pending_round,
            ..
        } = &entry.state
        else {
            log::debug!("Round for {key} was replaced, discarding result");
            return;
        };
        if *pending_round != round {
            log::debug!("Round for {key} was superseded, discarding result");
            return;
        }
        // An invalidation that raced the fetch left `stale` set, so the
        // next query refetches past this result.
        entry.state = EntryState::Ready {
            result: result.clone(),
        };
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.lock().unwrap();
        f.debug_struct("QueryCache")
            .field("entries", &entries.len())
            .finish_non_exhaustive()
    }
}

fn downcast<T>(key: &QueryKey, result: StoredResult) -> Option<Result<Arc<T>, Arc<Error>>>
where
    T: Send + Sync + 'static,
{
    match result {
        Ok(value) => match value.downcast::<T>() {
            Ok(value) => Some(Ok(value)),
            Err(_) => {
                log::error!("Cached value for {key} has an unexpected type");
                None
            }
        },
        Err(err) => Some(Err(err)),
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
