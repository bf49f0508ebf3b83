// ── Catalog coordinator ──
//
// Owns the HTTP client, the product store and the notifier. Every
// operation runs as its own tokio task and reports back through the
// store (state) and the notifier (toasts). Concurrent operations are not
// coordinated: whichever response resolves last wins.

use std::future::Future;
use std::sync::Arc;

use catalogo_api::{CreateProductBody, ProductsClient, UpdateProductBody};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::CoreError;
use crate::model::{ProductForm, ProductsList};
use crate::notify::{Notification, Notifier};
use crate::store::{ProductState, ProductStore, StoreAction};
use crate::stream::StateStream;
use crate::task::OperationHandle;
use crate::validation::{ValidationError, validate_barcode, validate_search_id};

// ── User-facing messages ─────────────────────────────────────────────

const MSG_LIST_FAILED: &str = "Error a la hora de recuperar la lista de productos";
const MSG_SEARCH_FAILED: &str = "Ha ocurrido un error al buscar el producto";
const MSG_CREATED: &str = "Producto creado correctamente";
const MSG_CREATE_FAILED: &str = "Ha ocurrido un error al crear el producto";
const MSG_UPDATED: &str = "Producto actualizado correctamente";
const MSG_UPDATE_FAILED: &str = "Ha ocurrido un error al actualizar el producto";
const MSG_DELETED: &str = "Producto borrado correctamente";
const MSG_DELETE_FAILED: &str = "Ha ocurrido un error al borrar el producto";

// ── Catalog ──────────────────────────────────────────────────────────

/// Product catalog service.
///
/// Cheaply cloneable; all clones share the same client, store and
/// notifier. Operations must be called from within a tokio runtime.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    config: CatalogConfig,
    client: ProductsClient,
    store: ProductStore,
    notifier: Notifier,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Result<Self, CoreError> {
        let client = ProductsClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self::with_client(config, client))
    }

    /// Build around an existing client. The client's base URL is rebound
    /// to `config.base_url` before every request.
    pub fn with_client(config: CatalogConfig, client: ProductsClient) -> Self {
        let store = ProductStore::new(ProductState::with_filter(config.active_only));
        Self {
            inner: Arc::new(CatalogInner {
                config,
                client,
                store,
                notifier: Notifier::new(),
            }),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &ProductStore {
        &self.inner.store
    }

    pub fn state(&self) -> Arc<ProductState> {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<ProductState> {
        self.inner.store.subscribe()
    }

    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.inner.notifier.subscribe()
    }

    pub fn items_per_page(&self) -> u32 {
        self.inner.config.items_per_page
    }

    // ── List ─────────────────────────────────────────────────────────

    /// Fetch one page of products.
    pub fn fetch_list(&self, active: bool, page: u32, page_size: u32) -> OperationHandle {
        self.spawn(move |catalog, cancel| async move {
            catalog.load_page(&cancel, active, page, page_size).await
        })
    }

    /// Re-fetch the current page with the current filter.
    pub fn refresh(&self) -> OperationHandle {
        let state = self.state();
        self.fetch_list(state.filter_active, state.current_page, self.items_per_page())
    }

    /// Set the active-only filter, reset to page 0 and fetch.
    pub fn apply_filter(&self, active: bool) -> OperationHandle {
        self.inner
            .store
            .dispatch(StoreAction::FilterActiveProducts { active });
        self.fetch_list(active, 0, self.items_per_page())
    }

    pub fn toggle_filter(&self) -> OperationHandle {
        self.apply_filter(!self.state().filter_active)
    }

    /// Fetch the page after the current one, if the last response
    /// advertised more. `nextPage` is only a flag, never the page number.
    pub fn next_page(&self) -> Option<OperationHandle> {
        let state = self.state();
        state.has_next_page().then(|| {
            self.fetch_list(
                state.filter_active,
                state.current_page + 1,
                self.items_per_page(),
            )
        })
    }

    /// Fetch the previous page, unless already on the first.
    pub fn previous_page(&self) -> Option<OperationHandle> {
        let state = self.state();
        state.has_previous_page().then(|| {
            self.fetch_list(
                state.filter_active,
                state.current_page - 1,
                self.items_per_page(),
            )
        })
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Look up one product by id. A blank id is rejected locally.
    pub fn search(&self, id: &str) -> OperationHandle {
        let id = match validate_search_id(id) {
            Ok(id) => id,
            Err(e) => return self.reject(e),
        };

        self.spawn(move |catalog, cancel| async move {
            catalog.inner.store.dispatch(StoreAction::LoadingTrue);
            let client = catalog.bind_client();

            match guarded(&cancel, client.get_product(&id)).await {
                None => catalog.cancelled(),
                Some(Ok(product)) => {
                    catalog.inner.store.dispatch(StoreAction::RecoverProductList {
                        list: ProductsList::single(product.into()),
                        page: 0,
                    });
                    Ok(())
                }
                Some(Err(e)) => Err(catalog.failed(e.into(), MSG_SEARCH_FAILED)),
            }
        })
    }

    /// Look up the product whose id was decoded from a barcode.
    pub fn search_barcode(&self, code: &str) -> OperationHandle {
        match validate_barcode(code) {
            Ok(code) => self.search(&code),
            Err(e) => self.reject(e),
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    pub fn create(&self, form: &ProductForm) -> OperationHandle {
        let body = match form.validate_new() {
            Ok(product) => CreateProductBody::from(product),
            Err(e) => return self.reject(e),
        };

        self.spawn(move |catalog, cancel| async move {
            catalog.inner.store.dispatch(StoreAction::LoadingTrue);
            let client = catalog.bind_client();
            let result = guarded(&cancel, client.create_product(&body)).await;
            catalog
                .finish_mutation(&cancel, result, MSG_CREATED, MSG_CREATE_FAILED)
                .await
        })
    }

    pub fn update(&self, form: &ProductForm) -> OperationHandle {
        let update = match form.validate_update() {
            Ok(update) => update,
            Err(e) => return self.reject(e),
        };
        let body = UpdateProductBody::from(&update);

        self.spawn(move |catalog, cancel| async move {
            catalog.inner.store.dispatch(StoreAction::LoadingTrue);
            let client = catalog.bind_client();
            let result = guarded(&cancel, client.update_product(&update.id, &body)).await;
            catalog
                .finish_mutation(&cancel, result, MSG_UPDATED, MSG_UPDATE_FAILED)
                .await
        })
    }

    pub fn delete(&self, id: &str) -> OperationHandle {
        let id = match validate_search_id(id) {
            Ok(id) => id,
            Err(e) => return self.reject(e),
        };

        self.spawn(move |catalog, cancel| async move {
            catalog.inner.store.dispatch(StoreAction::LoadingTrue);
            let client = catalog.bind_client();
            let result = guarded(&cancel, client.delete_product(&id)).await;
            catalog
                .finish_mutation(&cancel, result, MSG_DELETED, MSG_DELETE_FAILED)
                .await
        })
    }

    // ── Internals ────────────────────────────────────────────────────

    fn spawn<F, Fut>(&self, op: F) -> OperationHandle
    where
        F: FnOnce(Catalog, CancellationToken) -> Fut,
        Fut: Future<Output = Result<(), CoreError>> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(op(self.clone(), cancel.clone()));
        OperationHandle::new(cancel, task)
    }

    fn reject(&self, err: ValidationError) -> OperationHandle {
        debug!(error = %err, "rejected before request");
        self.inner.notifier.publish(Notification::from(&err));
        OperationHandle::failed(err.into())
    }

    fn bind_client(&self) -> &ProductsClient {
        self.inner
            .client
            .set_base_url(self.inner.config.base_url.clone());
        &self.inner.client
    }

    async fn load_page(
        &self,
        cancel: &CancellationToken,
        active: bool,
        page: u32,
        page_size: u32,
    ) -> Result<(), CoreError> {
        self.inner.store.dispatch(StoreAction::LoadingTrue);
        let client = self.bind_client();

        match guarded(cancel, client.list_products(page, page_size, active)).await {
            None => self.cancelled(),
            Some(Ok(list)) => {
                debug!(page, count = list.list.len(), "product list received");
                self.inner.store.dispatch(StoreAction::RecoverProductList {
                    list: list.into(),
                    page,
                });
                Ok(())
            }
            Some(Err(e)) => Err(self.failed(e.into(), MSG_LIST_FAILED)),
        }
    }

    async fn finish_mutation<T>(
        &self,
        cancel: &CancellationToken,
        result: Option<Result<T, catalogo_api::Error>>,
        success: &'static str,
        failure: &'static str,
    ) -> Result<(), CoreError> {
        match result {
            None => self.cancelled(),
            Some(Err(e)) => Err(self.failed(e.into(), failure)),
            Some(Ok(_)) => {
                info!("{success}");
                self.inner.notifier.publish(Notification::success(success));
                let state = self.state();
                self.load_page(
                    cancel,
                    state.filter_active,
                    state.current_page,
                    self.items_per_page(),
                )
                .await
            }
        }
    }

    fn cancelled(&self) -> Result<(), CoreError> {
        debug!("operation cancelled");
        self.inner.store.dispatch(StoreAction::LoadingFalse);
        Err(CoreError::Cancelled)
    }

    fn failed(&self, err: CoreError, message: &'static str) -> CoreError {
        warn!(error = %err, kind = %err.kind(), "{message}");
        self.inner.store.dispatch(StoreAction::LoadingFalse);
        self.inner.notifier.publish(Notification::error(message));
        err
    }
}

/// Run `fut` unless `cancel` fires first.
async fn guarded<T>(cancel: &CancellationToken, fut: impl Future<Output = T>) -> Option<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => None,
        out = fut => Some(out),
    }
}
