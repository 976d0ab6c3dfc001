//! HTTP API application wiring (Axum router + shared store).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and body decoding
//! - `response.rs`: newline-terminated JSON response bodies
//! - `errors.rs`: consistent error responses

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use stockroom_products::ProductStore;

pub mod dto;
pub mod errors;
pub mod response;
pub mod routes;

/// The product store as shared between request handlers.
///
/// Every handler holds the lock for exactly one store operation.
#[derive(Debug, Clone, Default)]
pub struct SharedStore(Arc<Mutex<ProductStore>>);

impl SharedStore {
    pub fn new(store: ProductStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    /// Lock the store. A poisoned lock is recovered: each store operation
    /// leaves the collection consistent before it can panic.
    pub fn lock(&self) -> MutexGuard<'_, ProductStore> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: ProductStore) -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(routes::system::hello)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(SharedStore::new(store))),
        )
}
