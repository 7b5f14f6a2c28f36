use crate::domain::{models::timesheet::TimesheetEntry, ports::TimesheetRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteTimesheetRepo {
    pool: SqlitePool,
}

impl SqliteTimesheetRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl TimesheetRepository for SqliteTimesheetRepo {
    async fn upsert(&self, entry: &TimesheetEntry) -> Result<TimesheetEntry, AppError> {
        sqlx::query_as::<_, TimesheetEntry>(
            r#"INSERT INTO timesheet_entries (id, tenant_id, employee_id, work_date, minutes, status, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(employee_id, work_date) DO UPDATE SET
               minutes=excluded.minutes,
               status=excluded.status
               RETURNING *"#
        )
            .bind(&entry.id).bind(&entry.tenant_id).bind(&entry.employee_id)
            .bind(entry.work_date).bind(entry.minutes).bind(entry.status)
            .bind(entry.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_range(&self, tenant_id: &str, employee_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<TimesheetEntry>, AppError> {
        sqlx::query_as::<_, TimesheetEntry>(
            "SELECT * FROM timesheet_entries
             WHERE tenant_id = ? AND employee_id = ? AND work_date >= ? AND work_date <= ?
             ORDER BY work_date ASC"
        )
            .bind(tenant_id).bind(employee_id).bind(start).bind(end)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
