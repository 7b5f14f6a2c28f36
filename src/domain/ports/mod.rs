use crate::domain::models::{
    tenant::Tenant, employee::Employee, position::Position, position_rate::PositionRate,
    timesheet::TimesheetEntry, adjustment::Adjustment, payout::Payout,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, AppError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Employee>, AppError>;
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Employee>, AppError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, AppError>;
}

#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn create(&self, position: &Position) -> Result<Position, AppError>;
    async fn find_by_id(&self, tenant_id: &str, id: &str) -> Result<Option<Position>, AppError>;
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Position>, AppError>;
    async fn update(&self, position: &Position) -> Result<Position, AppError>;
}

#[async_trait]
pub trait PositionRateRepository: Send + Sync {
    /// At most one rate row per (position, year, month); writing a second
    /// one for the same month replaces the first.
    async fn upsert(&self, rate: &PositionRate) -> Result<PositionRate, AppError>;
    async fn find_for_month(&self, tenant_id: &str, position_id: &str, year: i32, month: i32) -> Result<Option<PositionRate>, AppError>;
    async fn list_by_position(&self, tenant_id: &str, position_id: &str) -> Result<Vec<PositionRate>, AppError>;
}

#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    /// At most one entry per (employee, work_date); last write wins.
    async fn upsert(&self, entry: &TimesheetEntry) -> Result<TimesheetEntry, AppError>;
    async fn list_by_range(&self, tenant_id: &str, employee_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<TimesheetEntry>, AppError>;
}

#[async_trait]
pub trait AdjustmentRepository: Send + Sync {
    async fn create(&self, adjustment: &Adjustment) -> Result<Adjustment, AppError>;
    async fn list_by_range(&self, tenant_id: &str, employee_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<Adjustment>, AppError>;
}

#[async_trait]
pub trait PayoutRepository: Send + Sync {
    async fn create(&self, payout: &Payout) -> Result<Payout, AppError>;
    async fn list_by_period(&self, tenant_id: &str, employee_id: &str, year: i32, month: i32) -> Result<Vec<Payout>, AppError>;
}

/// Finance/reporting collaborator. Supplies the eligible revenue figure
/// for a period; the payroll core only applies percentages to it. A
/// failure here must surface as an error, never as a silent zero.
#[async_trait]
pub trait RevenueProvider: Send + Sync {
    async fn period_revenue(&self, tenant_id: &str, year: i32, month: i32) -> Result<i64, AppError>;
}
