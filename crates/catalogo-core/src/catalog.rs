// ── Catalog abstraction ──
//
// Application root for the catalog: owns the Store and one HTTP client
// per resource, and runs each operation through its full lifecycle
// (Pending dispatch, one request, settled dispatch).

use std::future::Future;
use std::sync::Arc;

use catalogo_api::{Category, Customer, Product, ResourceClient, TlsMode, TransportConfig};
use tracing::debug;

use crate::config::{CatalogConfig, TlsVerification};
use crate::error::CoreError;
use crate::slice::{FetchPayload, Lifecycle, MutationPayload, SliceAction, SliceState, operations};
use crate::store::{Sliced, Store};
use crate::stream::StateStream;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<CatalogInner>`, so operations can be moved
/// into spawned tasks. Operations never wait on each other; whichever
/// settles last decides the slice's `status` and `message`.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    config: CatalogConfig,
    store: Store,
    customers: ResourceClient<Customer>,
    categories: ResourceClient<Category>,
    products: ResourceClient<Product>,
}

impl Catalog {
    /// Build the HTTP clients and an empty store. Does not touch the network.
    pub fn new(config: CatalogConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let http = transport.build_client()?;

        let customers = ResourceClient::with_client(http.clone(), &config.url)?;
        let categories = ResourceClient::with_client(http.clone(), &config.url)?;
        let products = ResourceClient::with_client(http, &config.url)?;
        debug!(url = %config.url, "catalog ready");

        Ok(Self {
            inner: Arc::new(CatalogInner {
                config,
                store: Store::new(),
                customers,
                categories,
                products,
            }),
        })
    }

    /// Access the catalog configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Access the underlying Store.
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Shorthand for `store().subscribe()`.
    pub fn subscribe(&self) -> StateStream {
        self.inner.store.subscribe()
    }

    // ── Slices ───────────────────────────────────────────────────────

    /// Operations on the `produto` slice.
    pub fn products(&self) -> SliceHandle<'_, Product> {
        SliceHandle {
            store: &self.inner.store,
            client: &self.inner.products,
        }
    }

    /// Operations on the `categoria` slice.
    pub fn categories(&self) -> SliceHandle<'_, Category> {
        SliceHandle {
            store: &self.inner.store,
            client: &self.inner.categories,
        }
    }

    /// Operations on the `cliente` slice.
    pub fn customers(&self) -> SliceHandle<'_, Customer> {
        SliceHandle {
            store: &self.inner.store,
            client: &self.inner.customers,
        }
    }
}

// ── SliceHandle ──────────────────────────────────────────────────

/// The four operations of one slice, bound to the catalog's store.
///
/// Each call dispatches `Pending`, performs one request, dispatches the
/// settled lifecycle and returns the same settled result.
pub struct SliceHandle<'a, R> {
    store: &'a Store,
    client: &'a ResourceClient<R>,
}

impl<R: Sliced> SliceHandle<'_, R> {
    /// Current state of this slice.
    pub fn state(&self) -> SliceState<R> {
        self.store.slice::<R>()
    }

    /// Replace the slice's items with the backend listing.
    pub async fn fetch_all(&self) -> Result<FetchPayload<R>, CoreError> {
        self.run(SliceAction::FetchAll, operations::fetch_all(self.client))
            .await
    }

    /// Create `record`; it is appended to the slice once settled.
    pub async fn add(&self, record: R) -> Result<MutationPayload<R>, CoreError> {
        self.run(SliceAction::Add, operations::create(self.client, record))
            .await
    }

    /// Update the record with `record`'s code.
    pub async fn update(&self, record: R) -> Result<MutationPayload<R>, CoreError> {
        self.run(SliceAction::Update, operations::update(self.client, record))
            .await
    }

    /// Remove the record with `record`'s code.
    pub async fn remove(&self, record: R) -> Result<MutationPayload<R>, CoreError> {
        self.run(SliceAction::Remove, operations::remove(self.client, record))
            .await
    }

    async fn run<T, F>(
        &self,
        action: fn(Lifecycle<T>) -> SliceAction<R>,
        operation: F,
    ) -> Result<T, CoreError>
    where
        T: Clone,
        F: Future<Output = Result<T, CoreError>>,
    {
        self.store.dispatch(R::wrap(action(Lifecycle::Pending)));
        let settled = operation.await;
        self.store
            .dispatch(R::wrap(action(Lifecycle::from(settled.clone()))));
        settled
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn build_transport(config: &CatalogConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };

    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_touch_the_network() {
        let catalog = Catalog::new(CatalogConfig::default()).unwrap();
        assert_eq!(catalog.config().url.as_str(), "http://localhost:4000/");
        assert!(catalog.products().state().items.is_empty());
    }

    #[test]
    fn unreadable_ca_is_a_config_error() {
        let config = CatalogConfig {
            tls: TlsVerification::CustomCa("/nonexistent/ca.pem".into()),
            ..CatalogConfig::default()
        };
        let err = Catalog::new(config).err().unwrap();
        assert!(matches!(err, CoreError::Config { .. }));
    }
}
