//! Ordered, in-memory product collection.
//!
//! Products are kept in insertion order and looked up by a linear scan on the
//! name. Names are unique: `insert` rejects a product whose name is already
//! present.

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::product::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store the service starts with.
    pub fn seeded() -> Self {
        Self {
            products: vec![Product::new("apple", 54), Product::new("pear", 12)],
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product, in insertion order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_name(&self, name: &str) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.is(name))
            .ok_or_else(|| not_found(name))
    }

    /// Append `product` to the end of the collection.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        if self.position(product.id()).is_some() {
            return Err(DomainError::conflict(format!(
                "product '{}' already exists",
                product.name
            )));
        }

        tracing::debug!(name = %product.name, quantity = product.quantity, "product inserted");
        self.products.push(product);
        Ok(())
    }

    /// Set the quantity of the product named `name`, returning the updated record.
    pub fn replace_quantity(&mut self, name: &str, quantity: u64) -> DomainResult<Product> {
        let idx = self.position(name).ok_or_else(|| not_found(name))?;
        let product = &mut self.products[idx];
        product.quantity = quantity;

        tracing::debug!(name, quantity, "product quantity replaced");
        Ok(product.clone())
    }

    /// Remove the product named `name`, returning it as it was before removal.
    ///
    /// The relative order of the remaining products is preserved.
    pub fn remove_by_name(&mut self, name: &str) -> DomainResult<Product> {
        let idx = self.position(name).ok_or_else(|| not_found(name))?;

        tracing::debug!(name, "product removed");
        Ok(self.products.remove(idx))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.is(name))
    }
}

fn not_found(name: &str) -> DomainError {
    DomainError::not_found(format!("product '{name}'"))
}
