use crate::domain::{models::employee::Employee, ports::EmployeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresEmployeeRepo {
    pool: PgPool,
}

impl PostgresEmployeeRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepo {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (id, tenant_id, full_name, position_id, active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *"
        )
            .bind(&employee.id).bind(&employee.tenant_id).bind(&employee.full_name)
            .bind(&employee.position_id).bind(employee.active).bind(employee.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE tenant_id = $1 ORDER BY full_name ASC")
            .bind(tenant_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET full_name = $1, position_id = $2, active = $3
             WHERE id = $4 AND tenant_id = $5
             RETURNING *"
        )
            .bind(&employee.full_name).bind(&employee.position_id).bind(employee.active)
            .bind(&employee.id).bind(&employee.tenant_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
