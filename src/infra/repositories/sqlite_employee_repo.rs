use crate::domain::{models::employee::Employee, ports::EmployeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEmployeeRepo {
    pool: SqlitePool,
}

impl SqliteEmployeeRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepo {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (id, tenant_id, full_name, position_id, active, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&employee.id).bind(&employee.tenant_id).bind(&employee.full_name)
            .bind(&employee.position_id).bind(employee.active).bind(employee.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE tenant_id = ? ORDER BY full_name ASC")
            .bind(tenant_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET full_name = ?, position_id = ?, active = ?
             WHERE id = ? AND tenant_id = ?
             RETURNING *"
        )
            .bind(&employee.full_name).bind(&employee.position_id).bind(employee.active)
            .bind(&employee.id).bind(&employee.tenant_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
