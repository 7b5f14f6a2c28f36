pub mod adjustment;
pub mod employee;
pub mod health;
pub mod payout;
pub mod payroll;
pub mod position;
pub mod tenant;
pub mod timesheet;
