use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::models::adjustment::AdjustmentKind;
use crate::domain::models::position::PositionKind;
use crate::domain::models::timesheet::TimesheetStatus;

#[derive(Deserialize)]
pub struct CreateTenantRequest {
    pub name: String,
    pub slug: String,
}

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub full_name: String,
    pub position_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEmployeeRequest {
    pub full_name: Option<String>,
    pub position_id: Option<String>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreatePositionRequest {
    pub name: String,
    pub kind: PositionKind,
    pub hourly_rate_minor: Option<i64>,
    pub revenue_share_bps: Option<i32>,
    pub salary_minor: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdatePositionRequest {
    pub name: Option<String>,
    pub hourly_rate_minor: Option<i64>,
    pub revenue_share_bps: Option<i32>,
    pub salary_minor: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpsertPositionRateRequest {
    pub year: i32,
    pub month: i32,
    pub hourly_rate_minor: Option<i64>,
    pub revenue_share_bps: Option<i32>,
    pub salary_minor: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpsertTimesheetRequest {
    pub employee_id: String,
    pub work_date: NaiveDate,
    pub minutes: i64,
    pub status: Option<TimesheetStatus>,
}

#[derive(Deserialize)]
pub struct CreateAdjustmentRequest {
    pub employee_id: String,
    pub entry_date: NaiveDate,
    pub kind: AdjustmentKind,
    pub amount_minor: i64,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePayoutRequest {
    pub employee_id: String,
    pub paid_on: NaiveDate,
    pub year: i32,
    pub month: i32,
    pub amount_minor: i64,
    pub account_id: Option<String>,
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct PeriodQuery {
    pub year: i32,
    pub month: i32,
}

#[derive(Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
