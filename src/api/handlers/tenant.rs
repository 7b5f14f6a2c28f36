use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CreateTenantRequest, responses::TenantCreatedResponse};
use crate::domain::models::tenant::Tenant;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn create_tenant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTenantRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() || payload.slug.trim().is_empty() {
        return Err(AppError::Validation("name and slug are required".into()));
    }

    let tenant = Tenant::new(payload.name, payload.slug);
    let created = state.tenant_repo.create(&tenant).await?;

    info!("Tenant created: {}", created.id);

    Ok(Json(TenantCreatedResponse { tenant_id: created.id }))
}

pub async fn get_tenant_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tenant = state.tenant_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Tenant not found".into()))?;

    Ok(Json(tenant))
}
