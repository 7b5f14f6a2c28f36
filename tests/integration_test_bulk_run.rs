mod common;

use axum::http::StatusCode;
use common::{create_employee, create_position, create_tenant, parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_bulk_run_returns_one_item_per_employee_sorted_by_name() {
    let app = TestApp::new().await;
    let tenant_id = create_tenant(&app, "trattoria").await;
    let position_id = create_position(&app, &tenant_id, json!({
        "name": "Manager",
        "kind": "SALARY",
        "salary_minor": 50_000,
    })).await;

    create_employee(&app, &tenant_id, "Zoe Lund", Some(&position_id)).await;
    create_employee(&app, &tenant_id, "Ada Krog", Some(&position_id)).await;
    create_employee(&app, &tenant_id, "Mia Ness", Some(&position_id)).await;

    let res = app.get(&format!("/api/v1/{}/payroll?year=2025&month=5", tenant_id)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["year"], 2025);
    assert_eq!(body["month"], 5);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    let names: Vec<&str> = items.iter().map(|i| i["employee_name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Ada Krog", "Mia Ness", "Zoe Lund"]);
    for item in items {
        assert_eq!(item["line"]["salary_amount"], 50_000);
        assert!(item.get("error").is_none());
    }
}

#[tokio::test]
async fn test_one_misconfigured_employee_does_not_fail_the_run() {
    let app = TestApp::new().await;
    let tenant_id = create_tenant(&app, "pizzeria").await;
    let good_position = create_position(&app, &tenant_id, json!({
        "name": "Manager",
        "kind": "SALARY",
        "salary_minor": 50_000,
    })).await;
    // No salary configured anywhere: this position cannot be paid.
    let broken_position = create_position(&app, &tenant_id, json!({
        "name": "Host",
        "kind": "SALARY",
    })).await;

    create_employee(&app, &tenant_id, "Alva Rein", Some(&good_position)).await;
    let broken_id = create_employee(&app, &tenant_id, "Nils Ovre", Some(&broken_position)).await;

    let res = app.get(&format!("/api/v1/{}/payroll?year=2025&month=5", tenant_id)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    let ok_item = &items[0];
    assert_eq!(ok_item["employee_name"], "Alva Rein");
    assert_eq!(ok_item["line"]["accrued_total"], 50_000);

    let failed_item = &items[1];
    assert_eq!(failed_item["employee_id"], json!(broken_id));
    assert!(failed_item.get("line").is_none());
    assert!(failed_item["error"].as_str().unwrap().contains("no salary"));
}

#[tokio::test]
async fn test_provider_outage_fails_revenue_lines_but_not_salaried_ones() {
    let app = TestApp::with_revenue(None).await;
    let tenant_id = create_tenant(&app, "bodega").await;
    let salaried = create_position(&app, &tenant_id, json!({
        "name": "Manager",
        "kind": "SALARY",
        "salary_minor": 60_000,
    })).await;
    let hourly = create_position(&app, &tenant_id, json!({
        "name": "Waiter",
        "kind": "SHIFTS_PLUS_REVENUE",
        "hourly_rate_minor": 20_000,
        "revenue_share_bps": 150,
    })).await;

    create_employee(&app, &tenant_id, "Ida Bakke", Some(&salaried)).await;
    create_employee(&app, &tenant_id, "Odd Vik", Some(&hourly)).await;

    let res = app.get(&format!("/api/v1/{}/payroll?year=2025&month=5", tenant_id)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let items = body["items"].as_array().unwrap();

    assert_eq!(items[0]["employee_name"], "Ida Bakke");
    assert_eq!(items[0]["line"]["salary_amount"], 60_000);

    assert_eq!(items[1]["employee_name"], "Odd Vik");
    assert!(items[1].get("line").is_none());
    assert!(items[1]["error"].as_str().unwrap().contains("revenue"));
}

#[tokio::test]
async fn test_bulk_run_includes_inactive_employees() {
    let app = TestApp::new().await;
    let tenant_id = create_tenant(&app, "kiosk").await;
    let position_id = create_position(&app, &tenant_id, json!({
        "name": "Manager",
        "kind": "SALARY",
        "salary_minor": 40_000,
    })).await;
    let employee_id = create_employee(&app, &tenant_id, "Siv Holt", Some(&position_id)).await;

    let res = app.patch(&format!("/api/v1/{}/employees/{}", tenant_id, employee_id), json!({
        "active": false,
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    // Terminated mid-period staff still settle for that period.
    let body = parse_body(app.get(&format!("/api/v1/{}/payroll?year=2025&month=5", tenant_id)).await).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["line"]["salary_amount"], 40_000);
}

#[tokio::test]
async fn test_empty_tenant_yields_an_empty_run() {
    let app = TestApp::new().await;
    let tenant_id = create_tenant(&app, "ghost-kitchen").await;

    let res = app.get(&format!("/api/v1/{}/payroll?year=2025&month=5", tenant_id)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}
