use chrono::Utc;
use serde::{Deserialize, Serialize};

use models::audit::AuditStamps;
use models::customer;

use crate::errors::ServiceError;

/// Customer record as seen by the service and transport layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub mobile_number: Option<String>,
    #[serde(flatten)]
    pub audit: AuditStamps,
}

// Identity is the business fields; audit stamps are excluded on purpose.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.mobile_number == other.mobile_number
    }
}

/// Create/update payload. Ids and audit stamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

impl CustomerDraft {
    /// Bounds checks mirroring the column limits. Whether the number is a
    /// real one is a separate question answered by the remote validator.
    pub fn validate(&self) -> Result<(), ServiceError> {
        customer::validate_name(&self.name)?;
        if let Some(address) = &self.address {
            customer::validate_address(address)?;
        }
        if let Some(mobile) = &self.mobile_number {
            customer::validate_mobile_number(mobile)?;
        }
        Ok(())
    }
}

impl From<customer::Model> for Customer {
    fn from(m: customer::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            address: m.address,
            mobile_number: m.mobile_number,
            audit: AuditStamps {
                created_at: m.created_at.with_timezone(&Utc),
                updated_at: m.updated_at.with_timezone(&Utc),
            },
        }
    }
}
