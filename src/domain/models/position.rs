use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Closed set of compensation rules. Adding a kind is a compile-time
/// checked change: the rate resolver and the payroll compiler match
/// exhaustively on this enum.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "position_kind")]
pub enum PositionKind {
    #[serde(rename = "SHIFTS_PLUS_REVENUE")]
    #[sqlx(rename = "SHIFTS_PLUS_REVENUE")]
    ShiftsPlusRevenue,
    #[serde(rename = "SALARY")]
    #[sqlx(rename = "SALARY")]
    Salary,
    #[serde(rename = "SALARY_PLUS_TASKS")]
    #[sqlx(rename = "SALARY_PLUS_TASKS")]
    SalaryPlusTasks,
}

impl PositionKind {
    /// Kinds paid from worked minutes rather than a fixed monthly amount.
    pub fn is_hourly(self) -> bool {
        matches!(self, PositionKind::ShiftsPlusRevenue)
    }
}

/// Numeric compensation parameters. The same shape is carried by a
/// Position (current defaults) and by a PositionRate (one-month override).
/// Money is in integer minor currency units; the revenue share is in
/// basis points (1 bps = 0.01%).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateParams {
    pub hourly_rate_minor: Option<i64>,
    pub revenue_share_bps: Option<i32>,
    pub salary_minor: Option<i64>,
}

impl RateParams {
    /// Exactly one of the {hourly + share, salary} parameter sets is
    /// meaningful per kind; the other side must stay null.
    pub fn validate_for(&self, kind: PositionKind) -> Result<(), String> {
        match kind {
            PositionKind::ShiftsPlusRevenue => {
                if self.salary_minor.is_some() {
                    return Err("SHIFTS_PLUS_REVENUE positions must not carry a salary amount".to_string());
                }
            }
            PositionKind::Salary | PositionKind::SalaryPlusTasks => {
                if self.hourly_rate_minor.is_some() || self.revenue_share_bps.is_some() {
                    return Err("salaried positions must not carry hourly or revenue-share parameters".to_string());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Position {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub kind: PositionKind,
    pub hourly_rate_minor: Option<i64>,
    pub revenue_share_bps: Option<i32>,
    pub salary_minor: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Position {
    pub fn new(tenant_id: String, name: String, kind: PositionKind, params: RateParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            name,
            kind,
            hourly_rate_minor: params.hourly_rate_minor,
            revenue_share_bps: params.revenue_share_bps,
            salary_minor: params.salary_minor,
            created_at: Utc::now(),
        }
    }

    pub fn default_params(&self) -> RateParams {
        RateParams {
            hourly_rate_minor: self.hourly_rate_minor,
            revenue_share_bps: self.revenue_share_bps,
            salary_minor: self.salary_minor,
        }
    }
}
