//! Action loop and view publication.
//!
//! Frontends and the data loader both talk to a domain store through one
//! mpsc sender; a single task drains it, reduces in arrival order, and
//! publishes the resulting snapshot via `arc-swap` with a `watch` epoch
//! for change wakeups. Rapid intents (keystroke filter updates, live
//! refreshes) are coalesced into one publish per drained burst.

use std::sync::Arc;

use anyhow::Context;
use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Reducer-style store the feed loop can drive.
pub trait ReducerStore: Send + 'static {
    type Action: Send + 'static;
    type View: Clone + Send + Sync + 'static;

    fn reduce(&mut self, action: Self::Action);
    fn view(&self) -> Self::View;
}

/// Read side: the current snapshot plus an epoch channel.
pub struct ViewHandle<V> {
    snap: Arc<ArcSwap<V>>,
    epoch_rx: watch::Receiver<u64>,
}

impl<V> ViewHandle<V> {
    pub fn current(&self) -> Arc<V> {
        self.snap.load_full()
    }

    pub fn subscribe_epoch(&self) -> watch::Receiver<u64> {
        self.epoch_rx.clone()
    }
}

impl<V> Clone for ViewHandle<V> {
    fn clone(&self) -> Self {
        Self {
            snap: Arc::clone(&self.snap),
            epoch_rx: self.epoch_rx.clone(),
        }
    }
}

/// Spawn the action loop for one domain store. Returns the action sender
/// and a read handle; dropping every sender stops the loop.
pub fn spawn_store<R: ReducerStore>(
    mut store: R,
    cap: usize,
) -> (mpsc::Sender<R::Action>, ViewHandle<R::View>) {
    let (tx, mut rx) = mpsc::channel::<R::Action>(cap);
    let snap = Arc::new(ArcSwap::from_pointee(store.view()));
    let (epoch_tx, epoch_rx) = watch::channel(0u64);
    let snap_clone = Arc::clone(&snap);

    tokio::spawn(async move {
        let mut epoch = 0u64;
        while let Some(action) = rx.recv().await {
            store.reduce(action);
            // drain any burst before publishing once
            while let Ok(next) = rx.try_recv() {
                store.reduce(next);
            }
            epoch += 1;
            snap_clone.store(Arc::new(store.view()));
            let _ = epoch_tx.send(epoch);
        }
        info!(epoch, "action channel closed; store loop stopped");
    });

    (tx, ViewHandle { snap, epoch_rx })
}

/// Map raw backend rows into entities, skipping undecodable rows with a
/// warning. The loader boundary tolerates partially broken data; a page
/// with most of its cards beats no page.
pub fn decode_records<E: DeserializeOwned>(rows: Vec<serde_json::Value>) -> Vec<E> {
    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<E>(row) {
            Ok(e) => out.push(e),
            Err(err) => warn!(row = i, %err, "skipping undecodable record"),
        }
    }
    debug!(decoded = out.len(), "mapped raw records");
    out
}

/// Strict variant for loaders that prefer failing the whole batch.
pub fn decode_records_strict<E: DeserializeOwned>(
    rows: Vec<serde_json::Value>,
) -> anyhow::Result<Vec<E>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value::<E>(row).with_context(|| format!("record {i}"))
        })
        .collect()
}
