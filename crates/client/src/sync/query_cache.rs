//! Keyed cache of server reads with in-flight deduplication.
//!
//! Each key owns a slot holding a `watch` channel of [`QueryState`] and a
//! generation. Fetches run as spawned tasks tagged with the generation they
//! started under; invalidation moves the slot to a new generation, so a fetch
//! that was already in flight when a write landed can never settle its result
//! into the slot. Generations come from one cache-wide counter that `clear`
//! does not reset, so a fetch started before `clear` can't match a slot
//! created after it either.

use std::collections::HashMap;
use std::sync::Arc;

use studytrack_core::cache::QueryKey;
use studytrack_core::gateway::{GatewayError, TrackerGateway};
use tokio::sync::{watch, Mutex};

use super::fetch::fetch_query;
use super::{QueryData, QueryState};

struct Slot {
    generation: u64,
    /// Generation of the fetch currently running, if any.
    fetching: Option<u64>,
    tx: watch::Sender<QueryState>,
}

impl Slot {
    fn new(generation: u64) -> Self {
        let (tx, _) = watch::channel(QueryState::default());
        Self {
            generation,
            fetching: None,
            tx,
        }
    }

    fn needs_fetch(&self) -> bool {
        if self.fetching == Some(self.generation) {
            return false;
        }
        let state = self.tx.borrow();
        state.is_stale || state.data.is_none() || state.error.is_some()
    }
}

#[derive(Default)]
struct Slots {
    entries: HashMap<QueryKey, Slot>,
    last_generation: u64,
}

impl Slots {
    fn get_or_create(&mut self, key: QueryKey) -> &mut Slot {
        let Self {
            entries,
            last_generation,
        } = self;
        entries.entry(key).or_insert_with(|| {
            *last_generation += 1;
            Slot::new(*last_generation)
        })
    }
}

struct Inner {
    gateway: Arc<dyn TrackerGateway>,
    slots: Mutex<Slots>,
}

/// Shared cache of query results. Cloning shares the same slots.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    pub fn new(gateway: Arc<dyn TrackerGateway>) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                slots: Mutex::new(Slots::default()),
            }),
        }
    }

    /// Returns the settled state of `key`, fetching when nothing fresh is cached.
    ///
    /// Concurrent reads of the same key share one gateway request. A read that
    /// starts after an invalidation never returns data fetched before it.
    pub async fn read(&self, key: QueryKey) -> QueryState {
        let mut rx = self.subscribe(key).await;
        loop {
            {
                let state = rx.borrow_and_update();
                if state.is_settled() {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                // Slot dropped by `clear`; start over on a fresh one.
                rx = self.subscribe(key).await;
            }
        }
    }

    /// Like [`QueryCache::read`], but converts the state into a result.
    pub async fn fetch(&self, key: QueryKey) -> Result<Arc<QueryData>, GatewayError> {
        self.read(key).await.into_result()
    }

    /// Subscribes to every state change of `key`, starting a fetch if needed.
    ///
    /// While at least one receiver is alive the key counts as watched and is
    /// refetched as soon as it is invalidated.
    pub async fn subscribe(&self, key: QueryKey) -> watch::Receiver<QueryState> {
        let mut slots = self.inner.slots.lock().await;
        let slot = slots.get_or_create(key);
        if slot.needs_fetch() {
            self.start_fetch(key, slot);
        }
        slot.tx.subscribe()
    }

    /// Returns the current state of `key` without fetching.
    pub async fn peek(&self, key: QueryKey) -> Option<QueryState> {
        let slots = self.inner.slots.lock().await;
        slots.entries.get(&key).map(|slot| slot.tx.borrow().clone())
    }

    /// Marks `keys` stale.
    ///
    /// Watched keys are refetched right away; the rest on their next read.
    /// Keys that were never read have nothing cached and are skipped.
    pub async fn invalidate(&self, keys: &[QueryKey]) {
        let mut slots = self.inner.slots.lock().await;
        let Slots {
            entries,
            last_generation,
        } = &mut *slots;
        for key in keys {
            let Some(slot) = entries.get_mut(key) else {
                continue;
            };
            *last_generation += 1;
            slot.generation = *last_generation;
            slot.tx.send_modify(|state| state.is_stale = true);
            tracing::debug!(key = %key, generation = slot.generation, "Invalidated query");

            if slot.tx.receiver_count() > 0 {
                self.start_fetch(*key, slot);
            }
        }
    }

    /// Drops every slot. Used when the session ends.
    ///
    /// Fetches still in flight settle into nothing, even if the key has been
    /// read again in the meantime.
    pub async fn clear(&self) {
        let mut slots = self.inner.slots.lock().await;
        let count = slots.entries.len();
        slots.entries.clear();
        tracing::debug!(count, "Cleared query cache");
    }

    fn start_fetch(&self, key: QueryKey, slot: &mut Slot) {
        let generation = slot.generation;
        slot.fetching = Some(generation);
        slot.tx.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
        tracing::debug!(key = %key, generation, "Fetching query");

        let cache = self.clone();
        tokio::spawn(async move {
            let result = fetch_query(cache.inner.gateway.as_ref(), key).await;
            cache.settle(key, generation, result).await;
        });
    }

    async fn settle(
        &self,
        key: QueryKey,
        generation: u64,
        result: Result<QueryData, GatewayError>,
    ) {
        let mut slots = self.inner.slots.lock().await;
        let Some(slot) = slots.entries.get_mut(&key) else {
            tracing::debug!(key = %key, generation, "Discarding fetch for cleared slot");
            return;
        };

        if slot.fetching == Some(generation) {
            slot.fetching = None;
        }
        if generation != slot.generation {
            tracing::debug!(
                key = %key,
                generation,
                current = slot.generation,
                "Discarding superseded fetch"
            );
            return;
        }

        match result {
            Ok(data) => {
                slot.tx.send_replace(QueryState::ready(data));
            }
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "Query failed");
                slot.tx.send_replace(QueryState::failed(error));
            }
        }
    }
}
