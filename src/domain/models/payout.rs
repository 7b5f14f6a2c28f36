use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Cash actually disbursed to an employee. The settlement period
/// (year, month) is stored separately from the disbursement date:
/// May wages are routinely paid out in June.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Payout {
    pub id: String,
    pub tenant_id: String,
    pub employee_id: String,
    pub paid_on: NaiveDate,
    pub year: i32,
    pub month: i32,
    pub amount_minor: i64,
    pub account_id: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payout {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tenant_id: String,
        employee_id: String,
        paid_on: NaiveDate,
        year: i32,
        month: i32,
        amount_minor: i64,
        account_id: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            employee_id,
            paid_on,
            year,
            month,
            amount_minor,
            account_id,
            note,
            created_at: Utc::now(),
        }
    }
}
