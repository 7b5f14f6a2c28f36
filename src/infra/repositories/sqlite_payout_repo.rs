use crate::domain::{models::payout::Payout, ports::PayoutRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePayoutRepo {
    pool: SqlitePool,
}

impl SqlitePayoutRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl PayoutRepository for SqlitePayoutRepo {
    async fn create(&self, payout: &Payout) -> Result<Payout, AppError> {
        sqlx::query_as::<_, Payout>(
            "INSERT INTO payouts (id, tenant_id, employee_id, paid_on, year, month, amount_minor, account_id, note, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&payout.id).bind(&payout.tenant_id).bind(&payout.employee_id)
            .bind(payout.paid_on).bind(payout.year).bind(payout.month)
            .bind(payout.amount_minor).bind(&payout.account_id).bind(&payout.note)
            .bind(payout.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_period(&self, tenant_id: &str, employee_id: &str, year: i32, month: i32) -> Result<Vec<Payout>, AppError> {
        sqlx::query_as::<_, Payout>(
            "SELECT * FROM payouts
             WHERE tenant_id = ? AND employee_id = ? AND year = ? AND month = ?
             ORDER BY paid_on ASC"
        )
            .bind(tenant_id).bind(employee_id).bind(year).bind(month)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
