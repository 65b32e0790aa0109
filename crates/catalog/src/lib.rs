//! Catalog domain module.
//!
//! This crate contains the product data contract — field constraints, price
//! normalization and the derived display price — implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Category, Product, ProductDraft, ValidatedProduct};
