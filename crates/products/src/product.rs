use serde::{Deserialize, Serialize};

use stockroom_core::Entity;

/// A stocked product, keyed by name.
///
/// Wire shape is `{"Name": <string>, "quantity": <integer>}`; field order on
/// output follows declaration order. Unknown fields are ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Name")]
    pub name: String,
    pub quantity: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}
