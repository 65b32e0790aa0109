use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use stockroom_catalog::{Product, ProductDraft};
use stockroom_core::ProductId;

use crate::store::{ProductStore, StoreError};

/// In-memory product store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        // Validate before taking the lock: a rejected draft never touches
        // the map.
        let fields = draft.validate_and_normalize()?;

        let id = ProductId::new();
        let record = Product::create(id, fields, Utc::now());

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        records.insert(id, record.clone());

        tracing::debug!(product_id = %id, "product record created");
        Ok(record)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let fields = draft.validate_and_normalize()?;

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let record = records.get_mut(&id).ok_or(StoreError::NotFound)?;
        record.apply_update(fields, Utc::now());

        tracing::debug!(product_id = %id, "product record updated");
        Ok(record.clone())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        Ok(records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let mut all: Vec<Product> = records.values().cloned().collect();
        all.sort_by_key(|r| (r.created_at, r.id));
        Ok(all)
    }
}
