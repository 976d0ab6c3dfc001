use serde::Deserialize;
use serde::de::DeserializeOwned;

use stockroom_core::{DomainError, DomainResult};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /product`.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub name: String,
}

// -------------------------
// Body decoding
// -------------------------

/// Decode a JSON request body.
///
/// The body is decoded whatever the request's content type; a structurally
/// invalid body is a validation error. The body must hold exactly one JSON
/// value: trailing bytes after it are rejected.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> DomainResult<T> {
    serde_json::from_slice(body).map_err(|e| DomainError::validation(format!("invalid JSON body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_products::Product;

    #[test]
    fn decodes_product_body() {
        let p: Product = decode_json(br#"{"Name":"testobject","quantity":3}"#).unwrap();
        assert_eq!(p, Product::new("testobject", 3));
    }

    #[test]
    fn malformed_body_is_a_validation_error() {
        let err = decode_json::<Product>(b"{not json").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn trailing_bytes_after_the_value_are_rejected() {
        let err = decode_json::<Product>(br#"{"Name":"plum","quantity":1} trailing"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Trailing whitespace is still a single value.
        let p: Product = decode_json(b"{\"Name\":\"plum\",\"quantity\":1}\n").unwrap();
        assert_eq!(p, Product::new("plum", 1));
    }

    #[test]
    fn empty_body_is_a_validation_error() {
        assert!(matches!(
            decode_json::<Product>(b""),
            Err(DomainError::Validation(_))
        ));
    }
}
