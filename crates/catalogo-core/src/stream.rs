// ── State subscriptions ──
//
// Read side of the product and theme stores. A subscription remembers the
// last snapshot it handed out, so consumers can compare against it.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to a store's state.
pub struct StateStream<T: Send + Sync + 'static> {
    current: Arc<T>,
    receiver: watch::Receiver<Arc<T>>,
}

impl<T: Send + Sync + 'static> StateStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Snapshot from subscription time or from the last `changed`/`wait_for`.
    pub fn current(&self) -> &Arc<T> {
        &self.current
    }

    pub fn latest(&self) -> Arc<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Arc<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Wait until the state satisfies `pred`. The latest snapshot is checked
    /// first, so this returns at once if it already matches.
    pub async fn wait_for(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<Arc<T>> {
        let snap = self.receiver.wait_for(|s| pred(s.as_ref())).await.ok()?.clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Every snapshot, starting with the latest one.
    pub fn into_stream(self) -> WatchStream<Arc<T>> {
        WatchStream::new(self.receiver)
    }

    /// Only snapshots published after this call.
    pub fn into_changes(self) -> WatchStream<Arc<T>> {
        WatchStream::from_changes(self.receiver)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio_stream::StreamExt;

    use crate::model::{Product, ProductsList};
    use crate::store::{ProductStore, StoreAction};

    fn one_product(sku: &str) -> ProductsList {
        ProductsList::single(Product {
            sku: sku.into(),
            ..Product::default()
        })
    }

    #[tokio::test]
    async fn stream_starts_with_latest_snapshot() {
        let store = ProductStore::default();
        store.dispatch(StoreAction::FilterActiveProducts { active: true });

        let mut snapshots = store.subscribe().into_stream();
        let first = snapshots.next().await.unwrap();
        assert!(first.filter_active);
    }

    #[tokio::test]
    async fn changes_follow_a_fetch_cycle() {
        let store = ProductStore::default();
        let mut changes = store.subscribe().into_changes();

        store.dispatch(StoreAction::LoadingTrue);
        let loading = changes.next().await.unwrap();
        assert!(loading.is_loading);

        store.dispatch(StoreAction::RecoverProductList {
            list: one_product("A1"),
            page: 0,
        });
        let loaded = changes.next().await.unwrap();
        assert!(!loaded.is_loading);
        assert_eq!(loaded.product_list.list[0].sku, "A1");
    }

    #[tokio::test]
    async fn wait_for_returns_once_predicate_holds() {
        let store = ProductStore::default();
        let mut sub = store.subscribe();
        store.dispatch(StoreAction::LoadingTrue);

        let waiter = tokio::spawn(async move { sub.wait_for(|s| !s.is_loading).await });
        tokio::task::yield_now().await;
        store.dispatch(StoreAction::RecoverProductList {
            list: one_product("B2"),
            page: 3,
        });

        let done = waiter.await.unwrap().unwrap();
        assert_eq!(done.current_page, 3);
    }

    #[tokio::test]
    async fn wait_for_is_none_after_store_dropped() {
        let store = ProductStore::default();
        let mut sub = store.subscribe();
        drop(store);
        assert!(sub.wait_for(|s| s.is_loading).await.is_none());
    }
}
