use crate::domain::{models::adjustment::Adjustment, ports::AdjustmentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresAdjustmentRepo {
    pool: PgPool,
}

impl PostgresAdjustmentRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl AdjustmentRepository for PostgresAdjustmentRepo {
    async fn create(&self, adjustment: &Adjustment) -> Result<Adjustment, AppError> {
        sqlx::query_as::<_, Adjustment>(
            "INSERT INTO adjustments (id, tenant_id, employee_id, entry_date, kind, amount_minor, reason, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&adjustment.id).bind(&adjustment.tenant_id).bind(&adjustment.employee_id)
            .bind(adjustment.entry_date).bind(adjustment.kind).bind(adjustment.amount_minor)
            .bind(&adjustment.reason).bind(adjustment.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_range(&self, tenant_id: &str, employee_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<Adjustment>, AppError> {
        sqlx::query_as::<_, Adjustment>(
            "SELECT * FROM adjustments
             WHERE tenant_id = $1 AND employee_id = $2 AND entry_date >= $3 AND entry_date <= $4
             ORDER BY entry_date ASC"
        )
            .bind(tenant_id).bind(employee_id).bind(start).bind(end)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
