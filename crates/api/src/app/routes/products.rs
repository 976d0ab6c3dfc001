use axum::{
    body::Bytes,
    extract::{Extension, Query, rejection::QueryRejection},
    response::IntoResponse,
    routing::get,
    Router,
};

use stockroom_core::DomainError;
use stockroom_products::Product;

use crate::app::response::JsonLine;
use crate::app::{SharedStore, dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route(
            "/product",
            get(get_product)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
}

pub async fn list_products(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    let items = store.lock().list_all().to_vec();
    JsonLine(items).into_response()
}

pub async fn get_product(
    Extension(store): Extension<SharedStore>,
    query: Result<Query<dto::ProductQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => {
            tracing::debug!("rejected product query: {e}");
            return errors::domain_error_to_response(DomainError::validation(
                "missing or invalid 'name' query parameter",
            ));
        }
    };

    let found = store.lock().find_by_name(&query.name).cloned();
    match found {
        Ok(product) => JsonLine(product).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(Extension(store): Extension<SharedStore>, body: Bytes) -> axum::response::Response {
    let product: Product = match dto::decode_json(&body) {
        Ok(p) => p,
        Err(e) => return rejected("create", e),
    };

    let inserted = store.lock().insert(product.clone());
    if let Err(e) = inserted {
        return rejected("create", e);
    }

    tracing::info!(name = %product.name, quantity = product.quantity, "product created");
    JsonLine(product).into_response()
}

pub async fn update_product(Extension(store): Extension<SharedStore>, body: Bytes) -> axum::response::Response {
    let Product { name, quantity } = match dto::decode_json(&body) {
        Ok(p) => p,
        Err(e) => return rejected("update", e),
    };

    let updated = store.lock().replace_quantity(&name, quantity);
    match updated {
        Ok(product) => {
            tracing::info!(name = %product.name, quantity = product.quantity, "product updated");
            JsonLine(product).into_response()
        }
        Err(e) => rejected("update", e),
    }
}

/// Delete takes a full product body; only its name is used for the lookup.
pub async fn delete_product(Extension(store): Extension<SharedStore>, body: Bytes) -> axum::response::Response {
    let Product { name, .. } = match dto::decode_json(&body) {
        Ok(p) => p,
        Err(e) => return rejected("delete", e),
    };

    let removed = store.lock().remove_by_name(&name);
    match removed {
        Ok(product) => {
            tracing::info!(name = %product.name, "product deleted");
            JsonLine(product).into_response()
        }
        Err(e) => rejected("delete", e),
    }
}

fn rejected(op: &'static str, err: DomainError) -> axum::response::Response {
    tracing::warn!(op, "product request rejected: {err}");
    errors::domain_error_to_response(err)
}
