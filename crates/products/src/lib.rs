//! Products domain module (in-memory).
//!
//! This crate contains the product record and the ordered store that owns it,
//! implemented purely as deterministic domain logic (no IO, no HTTP).

pub mod product;
pub mod store;

pub use product::Product;
pub use store::ProductStore;
