use serde::Serialize;

use crate::domain::services::payroll::PayrollRunItem;

#[derive(Serialize)]
pub struct TenantCreatedResponse {
    pub tenant_id: String,
}

#[derive(Serialize)]
pub struct PayrollRunResponse {
    pub year: i32,
    pub month: i32,
    pub items: Vec<PayrollRunItem>,
}
