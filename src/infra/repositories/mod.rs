pub mod sqlite_tenant_repo;
pub mod sqlite_employee_repo;
pub mod sqlite_position_repo;
pub mod sqlite_position_rate_repo;
pub mod sqlite_timesheet_repo;
pub mod sqlite_adjustment_repo;
pub mod sqlite_payout_repo;

pub mod postgres_tenant_repo;
pub mod postgres_employee_repo;
pub mod postgres_position_repo;
pub mod postgres_position_rate_repo;
pub mod postgres_timesheet_repo;
pub mod postgres_adjustment_repo;
pub mod postgres_payout_repo;
