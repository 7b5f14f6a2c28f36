use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "adjustment_kind")]
pub enum AdjustmentKind {
    #[serde(rename = "BONUS")]
    #[sqlx(rename = "BONUS")]
    Bonus,
    #[serde(rename = "FINE")]
    #[sqlx(rename = "FINE")]
    Fine,
    #[serde(rename = "DEDUCTION")]
    #[sqlx(rename = "DEDUCTION")]
    Deduction,
}

/// Ad-hoc pay adjustment. The amount is always stored positive; the sign
/// is applied by kind when the payroll compiler combines components
/// (bonus adds, fine and deduction subtract).
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Adjustment {
    pub id: String,
    pub tenant_id: String,
    pub employee_id: String,
    pub entry_date: NaiveDate,
    pub kind: AdjustmentKind,
    pub amount_minor: i64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Adjustment {
    pub fn new(
        tenant_id: String,
        employee_id: String,
        entry_date: NaiveDate,
        kind: AdjustmentKind,
        amount_minor: i64,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            employee_id,
            entry_date,
            kind,
            amount_minor,
            reason,
            created_at: Utc::now(),
        }
    }
}
