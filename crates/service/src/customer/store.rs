use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::audit::AuditStamps;

use super::domain::{Customer, CustomerDraft};
use crate::errors::ServiceError;

pub mod seaorm;

/// Keyed storage for customer records. Implementations assign ids starting at
/// 1 and own the audit stamping on insert and update.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All records, in an order that is stable for a given store state.
    async fn list(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError>;
    /// Persist a new record; the store assigns the id and both audit stamps.
    async fn insert(&self, draft: CustomerDraft) -> Result<Customer, ServiceError>;
    /// Persist new field values for an existing id; `created_at` survives,
    /// `updated_at` moves strictly forward.
    async fn update(&self, customer: Customer) -> Result<Customer, ServiceError>;
    /// Remove a record; returns whether it existed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// In-memory store keyed by id, for tests and DB-less runs. The BTreeMap
/// keeps list order stable.
pub struct MemoryCustomerStore {
    records: RwLock<BTreeMap<i64, Customer>>,
    next_id: AtomicI64,
}

impl MemoryCustomerStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { records: RwLock::new(BTreeMap::new()), next_id: AtomicI64::new(1) })
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn insert(&self, draft: CustomerDraft) -> Result<Customer, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let customer = Customer {
            id,
            name: draft.name,
            address: draft.address,
            mobile_number: draft.mobile_number,
            audit: AuditStamps::now(),
        };
        let mut records = self.records.write().await;
        records.insert(id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, ServiceError> {
        let mut records = self.records.write().await;
        let Some(existing) = records.get(&customer.id) else {
            return Err(ServiceError::NotFound(customer.id));
        };
        // created_at survives from the stored record; only updated_at moves.
        let mut audit = existing.audit;
        audit.touch();
        let stored = Customer { audit, ..customer };
        records.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.into(),
            address: Some("Lebanon, Beirut".into()),
            mobile_number: Some("0096170745563".into()),
        }
    }

    #[tokio::test]
    async fn ids_increase_from_one() -> Result<(), ServiceError> {
        let store = MemoryCustomerStore::new();
        let a = store.insert(draft("Hussein Zaraket")).await?;
        let b = store.insert(draft("Hussein Zaraket")).await?;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn insert_stamps_both_audit_fields_equal() -> Result<(), ServiceError> {
        let store = MemoryCustomerStore::new();
        let created = store.insert(draft("John Farhat")).await?;
        assert_eq!(created.audit.created_at, created.audit.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_advances_updated_at() -> Result<(), ServiceError> {
        let store = MemoryCustomerStore::new();
        let created = store.insert(draft("Mohamad Falha")).await?;

        let mut changed = created.clone();
        changed.address = Some("Lebanon, Tripoli".into());
        let updated = store.update(changed).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.audit.created_at, created.audit.created_at);
        assert!(updated.audit.updated_at > created.audit.updated_at);
        assert_eq!(updated.address.as_deref(), Some("Lebanon, Tripoli"));
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryCustomerStore::new();
        let ghost = Customer {
            id: 99,
            name: "Tarek Mrad".into(),
            address: None,
            mobile_number: None,
            audit: AuditStamps::now(),
        };
        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(99)));
    }

    #[tokio::test]
    async fn delete_reports_whether_the_record_existed() -> Result<(), ServiceError> {
        let store = MemoryCustomerStore::new();
        let created = store.insert(draft("Tarek Mrad")).await?;
        assert!(store.delete(created.id).await?);
        assert!(!store.delete(created.id).await?);
        assert!(store.find_by_id(created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_is_empty_on_a_fresh_store() -> Result<(), ServiceError> {
        let store = MemoryCustomerStore::new();
        assert!(store.list().await?.is_empty());
        Ok(())
    }
}
