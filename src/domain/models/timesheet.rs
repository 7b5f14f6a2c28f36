use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "timesheet_status")]
pub enum TimesheetStatus {
    #[serde(rename = "DRAFT")]
    #[sqlx(rename = "DRAFT")]
    Draft,
    #[serde(rename = "APPROVED")]
    #[sqlx(rename = "APPROVED")]
    Approved,
}

/// Minutes worked on one day. At most one entry per (employee, work_date);
/// concurrent writers race on upsert and the last write wins.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TimesheetEntry {
    pub id: String,
    pub tenant_id: String,
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub minutes: i64,
    pub status: TimesheetStatus,
    pub created_at: DateTime<Utc>,
}

impl TimesheetEntry {
    pub fn new(tenant_id: String, employee_id: String, work_date: NaiveDate, minutes: i64, status: TimesheetStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            employee_id,
            work_date,
            minutes,
            status,
            created_at: Utc::now(),
        }
    }
}
