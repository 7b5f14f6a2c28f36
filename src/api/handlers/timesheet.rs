use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::tenant::TenantId;
use crate::api::dtos::requests::{UpsertTimesheetRequest, DateRangeQuery};
use crate::domain::models::timesheet::{TimesheetEntry, TimesheetStatus};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn upsert_timesheet(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Json(payload): Json<UpsertTimesheetRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.minutes < 0 {
        return Err(AppError::Validation("minutes must not be negative".into()));
    }
    // A day has 1440 minutes; anything above is a data-entry mistake.
    if payload.minutes > 1440 {
        return Err(AppError::Validation("minutes must not exceed 1440".into()));
    }

    state.employee_repo.find_by_id(&tenant_id, &payload.employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let entry = TimesheetEntry::new(
        tenant_id,
        payload.employee_id,
        payload.work_date,
        payload.minutes,
        payload.status.unwrap_or(TimesheetStatus::Draft),
    );
    let saved = state.timesheet_repo.upsert(&entry).await?;
    info!("Timesheet upserted for employee {} on {}", saved.employee_id, saved.work_date);
    Ok(Json(saved))
}

pub async fn list_timesheets(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, employee_id)): Path<(String, String)>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    if range.start > range.end {
        return Err(AppError::Validation("start must not be after end".into()));
    }

    state.employee_repo.find_by_id(&tenant_id, &employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let entries = state.timesheet_repo.list_by_range(&tenant_id, &employee_id, range.start, range.end).await?;
    Ok(Json(entries))
}
