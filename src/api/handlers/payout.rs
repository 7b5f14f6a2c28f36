use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::tenant::TenantId;
use crate::api::dtos::requests::{CreatePayoutRequest, PeriodQuery};
use crate::domain::models::payout::Payout;
use crate::domain::models::period::Period;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_payout(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Json(payload): Json<CreatePayoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Money flowing back from an employee is a DEDUCTION adjustment,
    // not a negative payout.
    if payload.amount_minor <= 0 {
        return Err(AppError::Validation("amount_minor must be positive".into()));
    }
    let period = Period::new(payload.year, payload.month)?;

    state.employee_repo.find_by_id(&tenant_id, &payload.employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let payout = Payout::new(
        tenant_id,
        payload.employee_id,
        payload.paid_on,
        period.year,
        period.month,
        payload.amount_minor,
        payload.account_id,
        payload.note,
    );
    let created = state.payout_repo.create(&payout).await?;
    info!("Payout created: {} ({} for {}-{:02})", created.id, created.amount_minor, created.year, created.month);
    Ok(Json(created))
}

pub async fn list_payouts(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, employee_id)): Path<(String, String)>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = Period::new(query.year, query.month)?;

    state.employee_repo.find_by_id(&tenant_id, &employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    let payouts = state.payout_repo
        .list_by_period(&tenant_id, &employee_id, period.year, period.month)
        .await?;
    Ok(Json(payouts))
}
