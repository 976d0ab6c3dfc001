//! HTTP API: routing, handlers, and request/response mapping for the product store.

pub mod app;
pub mod config;
