use crate::domain::{models::position::Position, ports::PositionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPositionRepo {
    pool: PgPool,
}

impl PostgresPositionRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl PositionRepository for PostgresPositionRepo {
    async fn create(&self, position: &Position) -> Result<Position, AppError> {
        sqlx::query_as::<_, Position>(
            "INSERT INTO positions (id, tenant_id, name, kind, hourly_rate_minor, revenue_share_bps, salary_minor, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&position.id).bind(&position.tenant_id).bind(&position.name).bind(position.kind)
            .bind(position.hourly_rate_minor).bind(position.revenue_share_bps).bind(position.salary_minor)
            .bind(position.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Position>, AppError> {
        sqlx::query_as::<_, Position>("SELECT * FROM positions WHERE tenant_id = $1 AND id = $2")
            .bind(tenant_id).bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Position>, AppError> {
        sqlx::query_as::<_, Position>("SELECT * FROM positions WHERE tenant_id = $1 ORDER BY name ASC")
            .bind(tenant_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, position: &Position) -> Result<Position, AppError> {
        sqlx::query_as::<_, Position>(
            "UPDATE positions SET name = $1, hourly_rate_minor = $2, revenue_share_bps = $3, salary_minor = $4
             WHERE id = $5 AND tenant_id = $6
             RETURNING *"
        )
            .bind(&position.name).bind(position.hourly_rate_minor).bind(position.revenue_share_bps)
            .bind(position.salary_minor).bind(&position.id).bind(&position.tenant_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
