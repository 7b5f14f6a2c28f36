use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Employee {
    pub id: String,
    pub tenant_id: String,
    pub full_name: String,
    pub position_id: Option<String>,
    /// Toggled on hire/fire. Employees are never hard-deleted while
    /// historical payroll references them.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(tenant_id: String, full_name: String, position_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            full_name,
            position_id,
            active: true,
            created_at: Utc::now(),
        }
    }
}
