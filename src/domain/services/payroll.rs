use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, warn};
use serde::Serialize;

use crate::domain::models::employee::Employee;
use crate::domain::models::payout::Payout;
use crate::domain::models::payroll::PayrollLine;
use crate::domain::models::period::Period;
use crate::domain::models::position::{Position, PositionKind};
use crate::domain::ports::{
    AdjustmentRepository, EmployeeRepository, PayoutRepository, PositionRateRepository,
    PositionRepository, RevenueProvider, TimesheetRepository,
};
use crate::domain::services::rates::{self, RateSource, ResolvedRate};
use crate::domain::services::{adjustments, attendance, revenue};
use crate::error::AppError;

/// Cash already disbursed for the period, and what is still outstanding.
/// The balance is accrued minus paid, in either direction: positive means
/// the company owes the employee, negative means overpaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub payouts_total: i64,
    pub balance: i64,
}

pub fn settle(accrued_total: i64, payouts: &[Payout]) -> Settlement {
    let payouts_total: i64 = payouts.iter().map(|p| p.amount_minor).sum();
    Settlement {
        payouts_total,
        balance: accrued_total - payouts_total,
    }
}

/// One employee's outcome in a bulk run. A failed employee carries the
/// error message instead of a line; the rest of the run is unaffected.
#[derive(Debug, Serialize)]
pub struct PayrollRunItem {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<PayrollLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Period-revenue snapshot handed to a line computation. Bulk runs fetch
/// the figure once so every line in the run sees the same number; single
/// computations fetch on demand, and only when the kind needs it.
#[derive(Debug, Clone, Copy)]
enum RevenueFigure {
    Fetched(i64),
    Unavailable,
    FetchOnDemand,
}

#[derive(Clone)]
pub struct PayrollService {
    employee_repo: Arc<dyn EmployeeRepository>,
    position_repo: Arc<dyn PositionRepository>,
    rate_repo: Arc<dyn PositionRateRepository>,
    timesheet_repo: Arc<dyn TimesheetRepository>,
    adjustment_repo: Arc<dyn AdjustmentRepository>,
    payout_repo: Arc<dyn PayoutRepository>,
    revenue_provider: Arc<dyn RevenueProvider>,
    concurrency: usize,
}

impl PayrollService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        position_repo: Arc<dyn PositionRepository>,
        rate_repo: Arc<dyn PositionRateRepository>,
        timesheet_repo: Arc<dyn TimesheetRepository>,
        adjustment_repo: Arc<dyn AdjustmentRepository>,
        payout_repo: Arc<dyn PayoutRepository>,
        revenue_provider: Arc<dyn RevenueProvider>,
        concurrency: usize,
    ) -> Self {
        Self {
            employee_repo,
            position_repo,
            rate_repo,
            timesheet_repo,
            adjustment_repo,
            payout_repo,
            revenue_provider,
            concurrency: concurrency.max(1),
        }
    }

    /// Computes one PayrollLine for (employee, period). Pure derivation
    /// over stored facts: calling it twice with unchanged data yields
    /// identical results.
    pub async fn compute_line(
        &self,
        tenant_id: &str,
        employee_id: &str,
        period: Period,
    ) -> Result<PayrollLine, AppError> {
        let employee = self
            .employee_repo
            .find_by_id(tenant_id, employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".into()))?;

        self.compute_for_employee(&employee, period, RevenueFigure::FetchOnDemand)
            .await
    }

    /// Runs the whole tenant through payroll for one period. Failures are
    /// isolated per employee; the period-revenue figure is fetched at most
    /// once and shared by every line in the run.
    pub async fn compute_period(
        &self,
        tenant_id: &str,
        period: Period,
    ) -> Result<Vec<PayrollRunItem>, AppError> {
        let employees = self.employee_repo.list_by_tenant(tenant_id).await?;
        let positions = self.position_repo.list_by_tenant(tenant_id).await?;

        let needs_revenue = positions
            .iter()
            .any(|p| p.kind == PositionKind::ShiftsPlusRevenue);

        let revenue_figure = if needs_revenue {
            match self
                .revenue_provider
                .period_revenue(tenant_id, period.year, period.month)
                .await
            {
                Ok(total) => RevenueFigure::Fetched(total),
                Err(e) => {
                    // Only revenue-sharing employees fail; salaried lines
                    // still compute.
                    error!(
                        "Period revenue unavailable for tenant {} {}-{:02}: {}",
                        tenant_id, period.year, period.month, e
                    );
                    RevenueFigure::Unavailable
                }
            }
        } else {
            RevenueFigure::FetchOnDemand
        };

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut set = JoinSet::new();

        for employee in employees {
            let service = self.clone();
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|_| AppError::Internal)?;

            set.spawn(async move {
                let _permit = permit;
                let result = service
                    .compute_for_employee(&employee, period, revenue_figure)
                    .await;
                (employee, result)
            });
        }

        let mut items = Vec::new();
        while let Some(joined) = set.join_next().await {
            let (employee, result) = joined.map_err(|_| AppError::Internal)?;
            match result {
                Ok(line) => items.push(PayrollRunItem {
                    employee_id: employee.id,
                    employee_name: employee.full_name,
                    line: Some(line),
                    error: None,
                }),
                Err(e) => {
                    warn!("Payroll failed for employee {}: {}", employee.id, e);
                    items.push(PayrollRunItem {
                        employee_id: employee.id,
                        employee_name: employee.full_name,
                        line: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        items.sort_by(|a, b| {
            a.employee_name
                .cmp(&b.employee_name)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });
        Ok(items)
    }

    async fn compute_for_employee(
        &self,
        employee: &Employee,
        period: Period,
        revenue_figure: RevenueFigure,
    ) -> Result<PayrollLine, AppError> {
        let tenant_id = employee.tenant_id.as_str();
        let position_id = employee.position_id.as_deref().ok_or_else(|| {
            AppError::Configuration(format!("Employee {} has no position assigned", employee.id))
        })?;

        let position = self
            .position_repo
            .find_by_id(tenant_id, position_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".into()))?;

        // The four fact fetches have no ordering dependency on each other.
        let (rate_row, entries, adjustment_rows, payouts) = tokio::try_join!(
            self.rate_repo
                .find_for_month(tenant_id, position_id, period.year, period.month),
            self.timesheet_repo.list_by_range(
                tenant_id,
                &employee.id,
                period.first_day(),
                period.last_day()
            ),
            self.adjustment_repo.list_by_range(
                tenant_id,
                &employee.id,
                period.first_day(),
                period.last_day()
            ),
            self.payout_repo
                .list_by_period(tenant_id, &employee.id, period.year, period.month),
        )?;

        let resolved = rates::resolve_rate(&position, rate_row.as_ref());
        let minutes = attendance::total_minutes(&entries, period);

        let (hours_amount, salary_amount) = base_component(&position, &resolved, minutes)?;

        let revenue_amount = match (position.kind, resolved.params.revenue_share_bps) {
            (PositionKind::ShiftsPlusRevenue, Some(bps)) => {
                let period_revenue = match revenue_figure {
                    RevenueFigure::Fetched(total) => total,
                    RevenueFigure::Unavailable => {
                        return Err(AppError::UpstreamUnavailable(
                            "Period revenue unavailable from finance service".into(),
                        ))
                    }
                    RevenueFigure::FetchOnDemand => {
                        self.revenue_provider
                            .period_revenue(tenant_id, period.year, period.month)
                            .await?
                    }
                };
                revenue::revenue_share(position.kind, Some(bps), period_revenue)
            }
            _ => 0,
        };

        let totals = adjustments::aggregate(&adjustment_rows, period);
        let accrued_total =
            hours_amount + salary_amount + revenue_amount + totals.bonus - totals.fine - totals.deduction;
        let settlement = settle(accrued_total, &payouts);

        Ok(PayrollLine {
            employee_id: employee.id.clone(),
            year: period.year,
            month: period.month,
            minutes_worked: minutes,
            hours_worked: minutes as f64 / 60.0,
            hours_amount,
            salary_amount,
            revenue_amount,
            bonus_total: totals.bonus,
            fine_total: totals.fine,
            deduction_total: totals.deduction,
            accrued_total,
            payouts_total: settlement.payouts_total,
            balance: settlement.balance,
        })
    }
}

/// Base pay per kind. A required parameter missing from the position
/// defaults is a configuration error; missing from a month override it
/// means an explicitly zero base for that month.
fn base_component(
    position: &Position,
    resolved: &ResolvedRate,
    minutes: i64,
) -> Result<(i64, i64), AppError> {
    match position.kind {
        PositionKind::ShiftsPlusRevenue => match resolved.params.hourly_rate_minor {
            Some(rate) => Ok((attendance::hours_amount(minutes, rate), 0)),
            None => match resolved.source {
                RateSource::MonthOverride => Ok((0, 0)),
                RateSource::PositionDefaults => Err(AppError::Configuration(format!(
                    "Position {} ({}) has no hourly rate configured",
                    position.name, position.id
                ))),
            },
        },
        PositionKind::Salary | PositionKind::SalaryPlusTasks => match resolved.params.salary_minor {
            Some(salary) => Ok((0, salary)),
            None => match resolved.source {
                RateSource::MonthOverride => Ok((0, 0)),
                RateSource::PositionDefaults => Err(AppError::Configuration(format!(
                    "Position {} ({}) has no salary configured",
                    position.name, position.id
                ))),
            },
        },
    }
}
