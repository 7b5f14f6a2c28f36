use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::tenant::TenantId;
use crate::api::dtos::requests::{CreatePositionRequest, UpdatePositionRequest, UpsertPositionRateRequest};
use crate::domain::models::period::Period;
use crate::domain::models::position::{Position, RateParams};
use crate::domain::models::position_rate::PositionRate;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_position(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Json(payload): Json<CreatePositionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }

    let params = RateParams {
        hourly_rate_minor: payload.hourly_rate_minor,
        revenue_share_bps: payload.revenue_share_bps,
        salary_minor: payload.salary_minor,
    };
    validate_params(&params)?;
    params.validate_for(payload.kind).map_err(AppError::Validation)?;

    let position = Position::new(tenant_id, payload.name, payload.kind, params);
    let created = state.position_repo.create(&position).await?;
    info!("Position created: {} ({:?})", created.id, created.kind);
    Ok(Json(created))
}

pub async fn get_position(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, position_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let position = state.position_repo.find_by_id(&tenant_id, &position_id).await?
        .ok_or(AppError::NotFound("Position not found".into()))?;
    Ok(Json(position))
}

pub async fn list_positions(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
) -> Result<impl IntoResponse, AppError> {
    let positions = state.position_repo.list_by_tenant(&tenant_id).await?;
    Ok(Json(positions))
}

pub async fn update_position(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, position_id)): Path<(String, String)>,
    Json(payload): Json<UpdatePositionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut position = state.position_repo.find_by_id(&tenant_id, &position_id).await?
        .ok_or(AppError::NotFound("Position not found".into()))?;

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        position.name = name;
    }
    if payload.hourly_rate_minor.is_some() {
        position.hourly_rate_minor = payload.hourly_rate_minor;
    }
    if payload.revenue_share_bps.is_some() {
        position.revenue_share_bps = payload.revenue_share_bps;
    }
    if payload.salary_minor.is_some() {
        position.salary_minor = payload.salary_minor;
    }

    let params = position.default_params();
    validate_params(&params)?;
    params.validate_for(position.kind).map_err(AppError::Validation)?;

    let updated = state.position_repo.update(&position).await?;
    info!("Position updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn upsert_rate(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, position_id)): Path<(String, String)>,
    Json(payload): Json<UpsertPositionRateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let position = state.position_repo.find_by_id(&tenant_id, &position_id).await?
        .ok_or(AppError::NotFound("Position not found".into()))?;

    let period = Period::new(payload.year, payload.month)?;
    let params = RateParams {
        hourly_rate_minor: payload.hourly_rate_minor,
        revenue_share_bps: payload.revenue_share_bps,
        salary_minor: payload.salary_minor,
    };
    validate_params(&params)?;
    params.validate_for(position.kind).map_err(AppError::Validation)?;

    let rate = PositionRate::new(tenant_id, position.id.clone(), period.year, period.month, params);
    let saved = state.position_rate_repo.upsert(&rate).await?;
    info!("Rate upserted for position {} {}-{:02}", position.id, period.year, period.month);
    Ok(Json(saved))
}

pub async fn list_rates(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, position_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.position_repo.find_by_id(&tenant_id, &position_id).await?
        .ok_or(AppError::NotFound("Position not found".into()))?;

    let rates = state.position_rate_repo.list_by_position(&tenant_id, &position_id).await?;
    Ok(Json(rates))
}

fn validate_params(params: &RateParams) -> Result<(), AppError> {
    if params.hourly_rate_minor.is_some_and(|v| v < 0) {
        return Err(AppError::Validation("hourly_rate_minor must not be negative".into()));
    }
    if params.revenue_share_bps.is_some_and(|v| !(0..=10_000).contains(&v)) {
        return Err(AppError::Validation("revenue_share_bps must be between 0 and 10000".into()));
    }
    if params.salary_minor.is_some_and(|v| v < 0) {
        return Err(AppError::Validation("salary_minor must not be negative".into()));
    }
    Ok(())
}
