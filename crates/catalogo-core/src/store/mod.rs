// ── Reactive catalog store ──
//
// Root state assembly plus the watch-backed container around it.

mod data_store;
mod root;

pub use data_store::Store;
pub use root::{RootAction, RootState, Sliced, reduce};
