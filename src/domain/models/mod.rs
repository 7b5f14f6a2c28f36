pub mod adjustment;
pub mod employee;
pub mod payout;
pub mod payroll;
pub mod period;
pub mod position;
pub mod position_rate;
pub mod tenant;
pub mod timesheet;
