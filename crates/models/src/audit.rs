use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Audit metadata attached to every persisted entity.
///
/// Stores invoke `now()` when a record is first persisted and `touch()` on
/// every subsequent write. `created_at` never changes after the first persist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuditStamps {
    /// Stamps for a record being persisted for the first time. Both fields
    /// carry the same instant.
    pub fn now() -> Self {
        let now = Utc::now();
        Self { created_at: now, updated_at: now }
    }

    /// Refresh `updated_at` for a mutating write. The clock may not have
    /// advanced since the last write; nudge forward so `updated_at` stays
    /// strictly increasing.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}
