mod common;

use axum::http::StatusCode;
use common::{create_employee, create_position, create_tenant, parse_body, TestApp};
use serde_json::json;

async fn setup_salaried(app: &TestApp) -> (String, String) {
    let tenant_id = create_tenant(app, "bistro").await;
    let position_id = create_position(app, &tenant_id, json!({
        "name": "Manager",
        "kind": "SALARY",
        "salary_minor": 50_000,
    })).await;
    let employee_id = create_employee(app, &tenant_id, "Anna Berg", Some(&position_id)).await;
    (tenant_id, employee_id)
}

#[tokio::test]
async fn test_salaried_employee_with_no_facts_accrues_the_salary() {
    let app = TestApp::new().await;
    let (tenant_id, employee_id) = setup_salaried(&app).await;

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::OK);

    let line = parse_body(res).await;
    assert_eq!(line["minutes_worked"], 0);
    assert_eq!(line["hours_amount"], 0);
    assert_eq!(line["salary_amount"], 50_000);
    assert_eq!(line["revenue_amount"], 0);
    assert_eq!(line["accrued_total"], 50_000);
    assert_eq!(line["payouts_total"], 0);
    assert_eq!(line["balance"], 50_000);
}

#[tokio::test]
async fn test_hourly_employee_combines_hours_revenue_and_adjustments() {
    let app = TestApp::new().await; // period revenue 10,000,000
    let tenant_id = create_tenant(&app, "brasserie").await;
    let position_id = create_position(&app, &tenant_id, json!({
        "name": "Waiter",
        "kind": "SHIFTS_PLUS_REVENUE",
        "hourly_rate_minor": 20_000,
        "revenue_share_bps": 150,
    })).await;
    let employee_id = create_employee(&app, &tenant_id, "Boris Lind", Some(&position_id)).await;

    // 600 minutes across two days in May.
    for (date, minutes) in [("2025-05-03", 360), ("2025-05-10", 240)] {
        let res = app.post(&format!("/api/v1/{}/timesheets", tenant_id), json!({
            "employee_id": employee_id,
            "work_date": date,
            "minutes": minutes,
            "status": "APPROVED",
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app.post(&format!("/api/v1/{}/adjustments", tenant_id), json!({
        "employee_id": employee_id,
        "entry_date": "2025-05-15",
        "kind": "BONUS",
        "amount_minor": 5_000,
        "reason": "upsell contest",
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post(&format!("/api/v1/{}/adjustments", tenant_id), json!({
        "employee_id": employee_id,
        "entry_date": "2025-05-20",
        "kind": "FINE",
        "amount_minor": 2_000,
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::OK);

    let line = parse_body(res).await;
    assert_eq!(line["minutes_worked"], 600);
    assert_eq!(line["hours_worked"], 10.0);
    // 600 min * 20000/hr = 200000; 10,000,000 * 150 bps = 150000.
    assert_eq!(line["hours_amount"], 200_000);
    assert_eq!(line["revenue_amount"], 150_000);
    assert_eq!(line["salary_amount"], 0);
    assert_eq!(line["bonus_total"], 5_000);
    assert_eq!(line["fine_total"], 2_000);
    assert_eq!(line["accrued_total"], 353_000);
    assert_eq!(line["balance"], 353_000);
}

#[tokio::test]
async fn test_recomputing_with_unchanged_facts_yields_identical_lines() {
    let app = TestApp::new().await;
    let (tenant_id, employee_id) = setup_salaried(&app).await;

    let res = app.post(&format!("/api/v1/{}/adjustments", tenant_id), json!({
        "employee_id": employee_id,
        "entry_date": "2025-05-08",
        "kind": "DEDUCTION",
        "amount_minor": 7_500,
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let uri = format!("/api/v1/{}/employees/{}/payroll?year=2025&month=5", tenant_id, employee_id);
    let first = parse_body(app.get(&uri).await).await;
    let second = parse_body(app.get(&uri).await).await;
    assert_eq!(first, second);
    assert_eq!(first["accrued_total"], 42_500);
}

#[tokio::test]
async fn test_fines_can_push_the_accrued_total_negative() {
    let app = TestApp::new().await;
    let (tenant_id, employee_id) = setup_salaried(&app).await;

    let res = app.post(&format!("/api/v1/{}/adjustments", tenant_id), json!({
        "employee_id": employee_id,
        "entry_date": "2025-05-12",
        "kind": "FINE",
        "amount_minor": 80_000,
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let line = parse_body(app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await).await;
    assert_eq!(line["accrued_total"], -30_000);
    assert_eq!(line["balance"], -30_000);
}

#[tokio::test]
async fn test_missing_required_rate_parameter_is_a_configuration_error() {
    let app = TestApp::new().await;
    let tenant_id = create_tenant(&app, "cantina").await;
    // Salaried position with no salary anywhere.
    let position_id = create_position(&app, &tenant_id, json!({
        "name": "Host",
        "kind": "SALARY",
    })).await;
    let employee_id = create_employee(&app, &tenant_id, "Clara Moe", Some(&position_id)).await;

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_employee_without_position_is_a_configuration_error() {
    let app = TestApp::new().await;
    let tenant_id = create_tenant(&app, "osteria").await;
    let employee_id = create_employee(&app, &tenant_id, "Dana Falk", None).await;

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_revenue_provider_outage_fails_only_revenue_dependent_lines() {
    let app = TestApp::with_revenue(None).await;
    let tenant_id = create_tenant(&app, "taverna").await;
    let position_id = create_position(&app, &tenant_id, json!({
        "name": "Waiter",
        "kind": "SHIFTS_PLUS_REVENUE",
        "hourly_rate_minor": 20_000,
        "revenue_share_bps": 150,
    })).await;
    let employee_id = create_employee(&app, &tenant_id, "Erik Sand", Some(&position_id)).await;

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_hourly_position_without_revenue_share_never_calls_the_provider() {
    // Provider down, but the position carries no share: the line computes.
    let app = TestApp::with_revenue(None).await;
    let tenant_id = create_tenant(&app, "grill").await;
    let position_id = create_position(&app, &tenant_id, json!({
        "name": "Dishwasher",
        "kind": "SHIFTS_PLUS_REVENUE",
        "hourly_rate_minor": 15_000,
    })).await;
    let employee_id = create_employee(&app, &tenant_id, "Frida Holm", Some(&position_id)).await;

    let res = app.post(&format!("/api/v1/{}/timesheets", tenant_id), json!({
        "employee_id": employee_id,
        "work_date": "2025-05-06",
        "minutes": 120,
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::OK);

    let line = parse_body(res).await;
    assert_eq!(line["hours_amount"], 30_000);
    assert_eq!(line["revenue_amount"], 0);
}

#[tokio::test]
async fn test_invalid_period_is_rejected() {
    let app = TestApp::new().await;
    let (tenant_id, employee_id) = setup_salaried(&app).await;

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=13",
        tenant_id, employee_id
    )).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payroll_for_unknown_employee_returns_404() {
    let app = TestApp::new().await;
    let (tenant_id, _) = setup_salaried(&app).await;

    let res = app.get(&format!(
        "/api/v1/{}/employees/{}/payroll?year=2025&month=5",
        tenant_id, "does-not-exist"
    )).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
