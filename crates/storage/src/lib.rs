//! Storage collaborator for product records.
//!
//! The catalog crate owns the data contract; this crate owns persistence. A
//! [`ProductStore`] runs the catalog's validate-and-normalize step before
//! every write (no partial writes) and stamps the system-managed timestamps.

pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryProductStore;
pub use store::{ProductStore, StoreError};
