//! JSON response bodies terminated by a single newline.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serialize `T` as compact JSON followed by `\n`.
#[derive(Debug, Clone, Copy)]
pub struct JsonLine<T>(pub T);

impl<T: Serialize> IntoResponse for JsonLine<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(mut buf) => {
                buf.push(b'\n');
                ([(header::CONTENT_TYPE, "application/json")], buf).into_response()
            }
            Err(e) => {
                tracing::error!("failed to encode response body: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    format!("failed to encode response body: {e}\n"),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_products::Product;

    async fn text_of(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn object_body_ends_with_single_newline() {
        let res = JsonLine(Product::new("apple", 54)).into_response();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "application/json"
        );
        assert_eq!(text_of(res).await, "{\"Name\":\"apple\",\"quantity\":54}\n");
    }

    #[tokio::test]
    async fn empty_list_is_an_array() {
        let res = JsonLine(Vec::<Product>::new()).into_response();
        assert_eq!(text_of(res).await, "[]\n");
    }
}
