use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::position::RateParams;

/// One-month override of a Position's compensation parameters, keyed by
/// (position_id, year, month). A stored row replaces the defaults for
/// that month in full, even when every numeric field is null (an
/// explicitly unpaid month).
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PositionRate {
    pub id: String,
    pub tenant_id: String,
    pub position_id: String,
    pub year: i32,
    pub month: i32,
    pub hourly_rate_minor: Option<i64>,
    pub revenue_share_bps: Option<i32>,
    pub salary_minor: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl PositionRate {
    pub fn new(tenant_id: String, position_id: String, year: i32, month: i32, params: RateParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            position_id,
            year,
            month,
            hourly_rate_minor: params.hourly_rate_minor,
            revenue_share_bps: params.revenue_share_bps,
            salary_minor: params.salary_minor,
            created_at: Utc::now(),
        }
    }

    pub fn params(&self) -> RateParams {
        RateParams {
            hourly_rate_minor: self.hourly_rate_minor,
            revenue_share_bps: self.revenue_share_bps,
            salary_minor: self.salary_minor,
        }
    }
}
