use crate::domain::{models::position_rate::PositionRate, ports::PositionRateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePositionRateRepo {
    pool: SqlitePool,
}

impl SqlitePositionRateRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl PositionRateRepository for SqlitePositionRateRepo {
    async fn upsert(&self, rate: &PositionRate) -> Result<PositionRate, AppError> {
        sqlx::query_as::<_, PositionRate>(
            r#"INSERT INTO position_rates (id, tenant_id, position_id, year, month, hourly_rate_minor, revenue_share_bps, salary_minor, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
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
            "SELECT * FROM position_rates WHERE tenant_id = ? AND position_id = ? AND year = ? AND month = ?"
        )
            .bind(tenant_id).bind(position_id).bind(year).bind(month)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_position(&self, tenant_id: &str, position_id: &str) -> Result<Vec<PositionRate>, AppError> {
        sqlx::query_as::<_, PositionRate>(
            "SELECT * FROM position_rates WHERE tenant_id = ? AND position_id = ? ORDER BY year ASC, month ASC"
        )
            .bind(tenant_id).bind(position_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
