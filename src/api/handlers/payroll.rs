use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::tenant::TenantId;
use crate::api::dtos::requests::PeriodQuery;
use crate::api::dtos::responses::PayrollRunResponse;
use crate::domain::models::period::Period;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_payroll_line(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, employee_id)): Path<(String, String)>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = Period::new(query.year, query.month)?;
    let line = state.payroll_service.compute_line(&tenant_id, &employee_id, period).await?;
    Ok(Json(line))
}

pub async fn run_payroll(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = Period::new(query.year, query.month)?;
    let items = state.payroll_service.compute_period(&tenant_id, period).await?;

    let failed = items.iter().filter(|i| i.error.is_some()).count();
    info!(
        "Payroll run for tenant {} {}-{:02}: {} employees, {} failed",
        tenant_id, period.year, period.month, items.len(), failed
    );

    Ok(Json(PayrollRunResponse {
        year: period.year,
        month: period.month,
        items,
    }))
}
