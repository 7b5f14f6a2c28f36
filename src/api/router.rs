use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, tenant, employee, position, timesheet, adjustment, payout, payroll};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Tenants
        .route("/api/v1/tenants", post(tenant::create_tenant))
        .route("/api/v1/tenants/by-slug/{slug}", get(tenant::get_tenant_by_slug))

        // HR
        .route("/api/v1/{tenant_id}/employees", post(employee::create_employee).get(employee::list_employees))
        .route("/api/v1/{tenant_id}/employees/{employee_id}", get(employee::get_employee).patch(employee::update_employee))

        // Compensation configuration
        .route("/api/v1/{tenant_id}/positions", post(position::create_position).get(position::list_positions))
        .route("/api/v1/{tenant_id}/positions/{position_id}", get(position::get_position).patch(position::update_position))
        .route("/api/v1/{tenant_id}/positions/{position_id}/rates", post(position::upsert_rate).get(position::list_rates))

        // Payroll facts
        .route("/api/v1/{tenant_id}/timesheets", post(timesheet::upsert_timesheet))
        .route("/api/v1/{tenant_id}/employees/{employee_id}/timesheets", get(timesheet::list_timesheets))
        .route("/api/v1/{tenant_id}/adjustments", post(adjustment::create_adjustment))
        .route("/api/v1/{tenant_id}/employees/{employee_id}/adjustments", get(adjustment::list_adjustments))
        .route("/api/v1/{tenant_id}/payouts", post(payout::create_payout))
        .route("/api/v1/{tenant_id}/employees/{employee_id}/payouts", get(payout::list_payouts))

        // Payroll computation (derived on read)
        .route("/api/v1/{tenant_id}/employees/{employee_id}/payroll", get(payroll::get_payroll_line))
        .route("/api/v1/{tenant_id}/payroll", get(payroll::run_payroll))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        tenant_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
