use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

use crate::app::response::JsonLine;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
    };
    json_error(status, err.code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        JsonLine(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let res = domain_error_to_response(DomainError::not_found("product 'kiwi'"));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body = body_of(res).await;
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "not found: product 'kiwi'");
    }

    #[tokio::test]
    async fn validation_and_conflict_statuses() {
        assert_eq!(
            domain_error_to_response(DomainError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_to_response(DomainError::conflict("dup")).status(),
            StatusCode::CONFLICT
        );
    }
}
