// ── Central reactive store ──
//
// Holds the root state behind a `watch` channel. Every dispatch runs the
// root reducer inside `send_modify`, so mutations are serialized and each
// one is broadcast to subscribers as a fresh snapshot.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use super::root::{self, RootAction, RootState, Sliced};
use crate::slice::SliceState;
use crate::stream::StateStream;

/// The catalog's state container.
///
/// Owned by the application root and shared by reference. Reads are
/// cheap `Arc` snapshot clones.
pub struct Store {
    state: watch::Sender<Arc<RootState>>,
}

impl Store {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Arc::new(RootState::default()));
        Self { state }
    }

    /// Current root state snapshot.
    pub fn state(&self) -> Arc<RootState> {
        self.state.borrow().clone()
    }

    /// Clone of one resource's slice.
    pub fn slice<R: Sliced>(&self) -> SliceState<R> {
        R::slice(&self.state.borrow()).clone()
    }

    /// Run `action` through the root reducer and notify subscribers.
    pub fn dispatch(&self, action: RootAction) {
        trace!(?action, "dispatch");
        // `send_modify` updates unconditionally, even with zero receivers.
        self.state.send_modify(|state| root::reduce(Arc::make_mut(state), action));
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.state.subscribe())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
