use serde::Serialize;

/// Per-kind adjustment sums for one (employee, period). Unsigned: the
/// compiler applies signs when combining.
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjustmentTotals {
    pub bonus: i64,
    pub fine: i64,
    pub deduction: i64,
}

/// The computed payroll result for one (employee, period). Derived fresh
/// on every query, never persisted or independently mutated.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PayrollLine {
    pub employee_id: String,
    pub year: i32,
    pub month: i32,
    pub minutes_worked: i64,
    /// Display only (minutes / 60.0); money math never touches this.
    pub hours_worked: f64,
    pub hours_amount: i64,
    pub salary_amount: i64,
    pub revenue_amount: i64,
    pub bonus_total: i64,
    pub fine_total: i64,
    pub deduction_total: i64,
    /// May be negative: fines can exceed earnings.
    pub accrued_total: i64,
    pub payouts_total: i64,
    /// accrued_total - payouts_total. Negative means overpaid; neither
    /// direction is clamped.
    pub balance: i64,
}
