use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::tenant::TenantId;
use crate::api::dtos::requests::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::domain::models::employee::Employee;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name is required".into()));
    }

    if let Some(position_id) = &payload.position_id {
        state.position_repo.find_by_id(&tenant_id, position_id).await?
            .ok_or(AppError::NotFound("Position not found".into()))?;
    }

    let employee = Employee::new(tenant_id, payload.full_name, payload.position_id);
    let created = state.employee_repo.create(&employee).await?;
    info!("Employee created: {}", created.id);
    Ok(Json(created))
}

pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, employee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state.employee_repo.find_by_id(&tenant_id, &employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;
    Ok(Json(employee))
}

pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
) -> Result<impl IntoResponse, AppError> {
    let employees = state.employee_repo.list_by_tenant(&tenant_id).await?;
    Ok(Json(employees))
}

pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    TenantId(tenant_id): TenantId,
    Path((_, employee_id)): Path<(String, String)>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut employee = state.employee_repo.find_by_id(&tenant_id, &employee_id).await?
        .ok_or(AppError::NotFound("Employee not found".into()))?;

    if let Some(full_name) = payload.full_name {
        if full_name.trim().is_empty() {
            return Err(AppError::Validation("full_name must not be empty".into()));
        }
        employee.full_name = full_name;
    }
    if let Some(position_id) = payload.position_id {
        state.position_repo.find_by_id(&tenant_id, &position_id).await?
            .ok_or(AppError::NotFound("Position not found".into()))?;
        employee.position_id = Some(position_id);
    }
    if let Some(active) = payload.active {
        employee.active = active;
    }

    let updated = state.employee_repo.update(&employee).await?;
    info!("Employee updated: {} (active: {})", updated.id, updated.active);
    Ok(Json(updated))
}
