use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::tenant::TenantId;
use crate::api::dtos::requests::{CreateAdjustmentRequest, PeriodQuery};
use crate::domain::models::adjustment::Adjustment;
use crate::domain::models::period::Period;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_adjustment(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Json(payload): Json<CreateAdjustmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Amounts are stored positive; kind decides the sign at aggregation.
    if payload.amount_minor <= 0 {
        return Err(AppError::Validation("amount_minor must be positive".into()));
    }

    state.employee_repo.find_by_id(&tenant_id, &payload.employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let adjustment = Adjustment::new(
        tenant_id,
        payload.employee_id,
        payload.entry_date,
        payload.kind,
        payload.amount_minor,
        payload.reason,
    );
    let created = state.adjustment_repo.create(&adjustment).await?;
    info!("Adjustment created: {} ({:?} {})", created.id, created.kind, created.amount_minor);
    Ok(Json(created))
}

pub async fn list_adjustments(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, employee_id)): Path<(String, String)>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = Period::new(query.year, query.month)?;

    state.employee_repo.find_by_id(&tenant_id, &employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let adjustments = state.adjustment_repo
        .list_by_range(&tenant_id, &employee_id, period.first_day(), period.last_day())
        .await?;
    Ok(Json(adjustments))
}
