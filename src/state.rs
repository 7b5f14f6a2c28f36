use std::sync::Arc;
use crate::domain::ports::{
    TenantRepository, EmployeeRepository, PositionRepository, PositionRateRepository,
    TimesheetRepository, AdjustmentRepository, PayoutRepository, RevenueProvider,
};
use crate::domain::services::payroll::PayrollService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub position_repo: Arc<dyn PositionRepository>,
    pub position_rate_repo: Arc<dyn PositionRateRepository>,
    pub timesheet_repo: Arc<dyn TimesheetRepository>,
    pub adjustment_repo: Arc<dyn AdjustmentRepository>,
    pub payout_repo: Arc<dyn PayoutRepository>,
    pub revenue_provider: Arc<dyn RevenueProvider>,
    pub payroll_service: Arc<PayrollService>,
}
