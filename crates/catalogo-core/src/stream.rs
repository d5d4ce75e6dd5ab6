// ── Reactive state streams ──
//
// Subscription type for consuming state changes from the Store.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::RootState;

/// A subscription to the catalog state.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed) or by converting to a `Stream`.
pub struct StateStream {
    current: Arc<RootState>,
    receiver: watch::Receiver<Arc<RootState>>,
}

impl StateStream {
    pub(crate) fn new(receiver: watch::Receiver<Arc<RootState>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time (or at the last `changed()`).
    pub fn current(&self) -> &Arc<RootState> {
        &self.current
    }

    /// Get the latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<RootState> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the Store has been dropped.
    ///
    /// Dispatches that land between two calls are coalesced: only the
    /// newest snapshot is observed.
    pub async fn changed(&mut self) -> Option<Arc<RootState>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    ///
    /// The stream yields the current snapshot first.
    pub fn into_stream(self) -> StateWatchStream {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct StateWatchStream {
    inner: WatchStream<Arc<RootState>>,
}

impl Stream for StateWatchStream {
    type Item = Arc<RootState>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures_util::StreamExt;

    use crate::slice::{Lifecycle, SliceAction, Status};
    use crate::store::{Sliced, Store};
    use catalogo_api::Customer;

    #[tokio::test]
    async fn changed_returns_none_after_store_drop() {
        let store = Store::new();
        let mut stream = store.subscribe();
        drop(store);
        assert!(stream.changed().await.is_none());
    }

    #[tokio::test]
    async fn into_stream_yields_current_then_updates() {
        let store = Store::new();
        let mut stream = store.subscribe().into_stream();

        let first = stream.next().await.unwrap();
        assert_eq!(first.cliente.status, Status::Idle);

        store.dispatch(Customer::wrap(SliceAction::FetchAll(Lifecycle::Pending)));
        let second = stream.next().await.unwrap();
        assert_eq!(second.cliente.status, Status::Pending);
        assert_eq!(second.cliente.message, "Fetching customers...");
    }

    #[tokio::test]
    async fn current_tracks_last_observed_snapshot() {
        let store = Store::new();
        let mut stream = store.subscribe();
        store.dispatch(Customer::wrap(SliceAction::Add(Lifecycle::Pending)));

        assert_eq!(stream.current().cliente.status, Status::Idle);
        assert_eq!(stream.latest().cliente.status, Status::Pending);

        stream.changed().await.unwrap();
        assert_eq!(stream.current().cliente.status, Status::Pending);
    }
}
