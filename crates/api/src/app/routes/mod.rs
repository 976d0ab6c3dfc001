use axum::{routing::any, Router};

pub mod products;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", any(system::hello))
        .merge(products::router())
}
