use crate::domain::{models::position::Position, ports::PositionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePositionRepo {
    pool: SqlitePool,
}

impl SqlitePositionRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl PositionRepository for SqlitePositionRepo {
    async fn create(&self, position: &Position) -> Result<Position, AppError> {
        sqlx::query_as::<_, Position>(
            "INSERT INTO positions (id, tenant_id, name, kind, hourly_rate_minor, revenue_share_bps, salary_minor, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&position.id).bind(&position.tenant_id).bind(&position.name).bind(position.kind)
            .bind(position.hourly_rate_minor).bind(position.revenue_share_bps).bind(position.salary_minor)
            .bind(position.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Position>, AppError> {
        sqlx::query_as::<_, Position>("SELECT * FROM positions WHERE tenant_id = ? AND id = ?")
            .bind(tenant_id).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Position>, AppError> {
        sqlx::query_as::<_, Position>("SELECT * FROM positions WHERE tenant_id = ? ORDER BY name ASC")
            .bind(tenant_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, position: &Position) -> Result<Position, AppError> {
        sqlx::query_as::<_, Position>(
            "UPDATE positions SET name = ?, hourly_rate_minor = ?, revenue_share_bps = ?, salary_minor = ?
             WHERE id = ? AND tenant_id = ?
             RETURNING *"
        )
            .bind(&position.name).bind(position.hourly_rate_minor).bind(position.revenue_share_bps)
            .bind(position.salary_minor).bind(&position.id).bind(&position.tenant_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
