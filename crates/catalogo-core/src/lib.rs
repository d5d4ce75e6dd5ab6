// catalogo-core: Reactive state layer between catalogo-api and consumers (CLI/UI).

pub mod catalog;
pub mod config;
pub mod error;
pub mod slice;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, SliceHandle};
pub use config::{CatalogConfig, DEFAULT_BASE_URL, TlsVerification};
pub use error::CoreError;
pub use slice::{
    FetchPayload, Lifecycle, MutationPayload, Operation, SliceAction, SliceState, Status,
};
pub use store::{RootAction, RootState, Sliced, Store};
pub use stream::StateStream;

// Re-export record types at the crate root for ergonomics.
pub use catalogo_api::{Category, Code, Customer, Product, Resource};
