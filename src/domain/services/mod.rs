pub mod adjustments;
pub mod attendance;
pub mod money;
pub mod payroll;
pub mod rates;
pub mod revenue;
