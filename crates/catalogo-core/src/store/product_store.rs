// Single mutation authority for `ProductState`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use super::reducer::{ProductState, StoreAction, reduce};
use crate::stream::StateStream;

/// Reactive container for the product state.
///
/// Every mutation goes through [`dispatch`](Self::dispatch), which runs the
/// reducer and publishes the new snapshot to all subscribers.
pub struct ProductStore {
    state: watch::Sender<Arc<ProductState>>,
}

impl ProductStore {
    pub fn new(initial: ProductState) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self { state }
    }

    /// Apply `action` through the reducer. Returns the resulting snapshot.
    pub fn dispatch(&self, action: StoreAction) -> Arc<ProductState> {
        let name: &'static str = (&action).into();
        trace!(action = name, "dispatch");

        self.state
            .send_modify(|current| *current = Arc::new(reduce(current, action)));
        self.snapshot()
    }

    pub fn snapshot(&self) -> Arc<ProductState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> StateStream<ProductState> {
        StateStream::new(self.state.subscribe())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(ProductState::default())
    }
}
