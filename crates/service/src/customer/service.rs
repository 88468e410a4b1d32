use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Customer, CustomerDraft};
use super::store::CustomerStore;
use crate::errors::ServiceError;
use crate::mobile::MobileValidator;

/// Business service for customer records; the only component allowed to
/// decide whether a write is accepted. Collaborators are injected at
/// construction, no ambient singletons.
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    validator: Arc<dyn MobileValidator>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>, validator: Arc<dyn MobileValidator>) -> Self {
        Self { store, validator }
    }

    /// All customers in store order. An empty result is a valid outcome,
    /// distinct from any failure.
    pub async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Customer, ServiceError> {
        ensure_valid_id(id)?;
        self.store.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: CustomerDraft) -> Result<Customer, ServiceError> {
        draft.validate()?;
        self.ensure_mobile_valid(draft.mobile_number.as_deref()).await?;
        let created = self.store.insert(draft).await?;
        info!(customer_id = created.id, "customer_created");
        Ok(created)
    }

    /// The mobile number is validated before the existence check, so an
    /// invalid number is reported even for an id that does not exist.
    #[instrument(skip(self, draft), fields(customer_id = id))]
    pub async fn update(&self, id: i64, draft: CustomerDraft) -> Result<Customer, ServiceError> {
        ensure_valid_id(id)?;
        draft.validate()?;
        self.ensure_mobile_valid(draft.mobile_number.as_deref()).await?;
        let existing = self.store.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))?;
        let candidate = Customer {
            name: draft.name,
            address: draft.address,
            mobile_number: draft.mobile_number,
            ..existing
        };
        let updated = self.store.update(candidate).await?;
        info!(customer_id = updated.id, "customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(customer_id = id))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        ensure_valid_id(id)?;
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }

    /// One outbound call per invocation, no retries. An absent number goes
    /// out as the empty string; the remote authority gives the verdict.
    async fn ensure_mobile_valid(&self, mobile: Option<&str>) -> Result<(), ServiceError> {
        let number = mobile.unwrap_or_default();
        if self.validator.is_valid(number).await? {
            Ok(())
        } else {
            Err(ServiceError::InvalidMobile(number.to_string()))
        }
    }
}

fn ensure_valid_id(id: i64) -> Result<(), ServiceError> {
    // Message shared with the (unrepresentable here) null-id case.
    if id < 1 {
        return Err(ServiceError::InvalidRequest);
    }
    Ok(())
}
