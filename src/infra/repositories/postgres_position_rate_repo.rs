use crate::domain::{models::position_rate::PositionRate, ports::PositionRateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPositionRateRepo {
    pool: PgPool,
}

impl PostgresPositionRateRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl PositionRateRepository for PostgresPositionRateRepo {
    async fn upsert(&self, rate: &PositionRate) -> Result<PositionRate, AppError> {
        sqlx::query_as::<_, PositionRate>(
            r#"INSERT INTO position_rates (id, tenant_id, position_id, year, month, hourly_rate_minor, revenue_share_bps, salary_minor, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               ON CONFLICT(position_id, year, month) DO UPDATE SET
               hourly_rate_minor=excluded.hourly_rate_minor,
               revenue_share_bps=excluded.revenue_share_bps,
               salary_minor=excluded.salary_minor
               RETURNING *"#
        )
            .bind(&rate.id).bind(&rate.tenant_id).bind(&rate.position_id)
            .bind(rate.year).bind(rate.month)
            .bind(rate.hourly_rate_minor).bind(rate.revenue_share_bps).bind(rate.salary_minor)
            .bind(rate.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_for_month(&self, tenant_id: &str, position_id: &str, year: i32, month: i32) -> Result<Option<PositionRate>, AppError> {
        sqlx::query_as::<_, PositionRate>(
            "SELECT * FROM position_rates WHERE tenant_id = $1 AND position_id = $2 AND year = $3 AND month = $4"
        )
            .bind(tenant_id).bind(position_id).bind(year).bind(month)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_position(&self, tenant_id: &str, position_id: &str) -> Result<Vec<PositionRate>, AppError> {
        sqlx::query_as::<_, PositionRate>(
            "SELECT * FROM position_rates WHERE tenant_id = $1 AND position_id = $2 ORDER BY year ASC, month ASC"
        )
            .bind(tenant_id).bind(position_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
