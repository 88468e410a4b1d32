use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::audit::AuditStamps;
use models::customer::{self, Entity as CustomerEntity};

use super::CustomerStore;
use crate::customer::domain::{Customer, CustomerDraft};
use crate::errors::ServiceError;

/// SeaORM-backed store; ids come from the database sequence.
pub struct SeaOrmCustomerStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomerStore for SeaOrmCustomerStore {
    async fn list(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = CustomerEntity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
        let found = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Customer::from))
    }

    async fn insert(&self, draft: CustomerDraft) -> Result<Customer, ServiceError> {
        let stamps = AuditStamps::now();
        let am = customer::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(draft.name),
            address: Set(draft.address),
            mobile_number: Set(draft.mobile_number),
            created_at: Set(stamps.created_at.into()),
            updated_at: Set(stamps.updated_at.into()),
        };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Customer::from(created))
    }

    async fn update(&self, candidate: Customer) -> Result<Customer, ServiceError> {
        let existing = CustomerEntity::find_by_id(candidate.id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or(ServiceError::NotFound(candidate.id))?;

        let mut stamps = AuditStamps {
            created_at: existing.created_at.with_timezone(&Utc),
            updated_at: existing.updated_at.with_timezone(&Utc),
        };
        stamps.touch();

        let mut am: customer::ActiveModel = existing.into();
        am.name = Set(candidate.name);
        am.address = Set(candidate.address);
        am.mobile_number = Set(candidate.mobile_number);
        am.updated_at = Set(stamps.updated_at.into());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Customer::from(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = CustomerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
