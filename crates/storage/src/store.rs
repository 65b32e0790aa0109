use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockroom_catalog::{Product, ProductDraft};
use stockroom_core::{ProductId, ValidationError};

/// Product store operation error.
///
/// `Validation` is the domain contract surfacing through the store; the rest
/// are infrastructure failure modes the catalog core never produces.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The draft failed the catalog validation contract. The commit was
    /// aborted; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("product not found")]
    NotFound,

    /// Backend fault (lock poisoning, connection loss, ...).
    #[error("store failure: {0}")]
    Internal(String),
}

/// Storage collaborator contract for product records.
///
/// ## Commit semantics
///
/// Every write path invokes `ProductDraft::validate_and_normalize` before
/// touching storage:
/// - the persisted price always has at most two decimal places;
/// - a validation failure aborts the commit with no partial write.
///
/// Timestamps are store-managed: `insert` stamps `created_at == updated_at`,
/// `update` keeps `created_at` and advances `updated_at`.
///
/// Commits are async from the caller's point of view; cancellation and
/// timeouts are implementation concerns.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Validate, normalize and persist a new record under a fresh id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Validate, normalize and persist replacement fields for an existing
    /// record.
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Fetch one record by id.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// List all records, oldest first.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).insert(draft).await
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).update(id, draft).await
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).get(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list().await
    }
}
