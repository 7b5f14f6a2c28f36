use payroll_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::ports::RevenueProvider,
    domain::services::payroll::PayrollService,
    error::AppError,
    infra::repositories::{
        sqlite_tenant_repo::SqliteTenantRepo,
        sqlite_employee_repo::SqliteEmployeeRepo,
        sqlite_position_repo::SqlitePositionRepo,
        sqlite_position_rate_repo::SqlitePositionRateRepo,
        sqlite_timesheet_repo::SqliteTimesheetRepo,
        sqlite_adjustment_repo::SqliteAdjustmentRepo,
        sqlite_payout_repo::SqlitePayoutRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use axum::Router;
use uuid::Uuid;

/// Stand-in for the finance/reporting service. `None` simulates the
/// collaborator being unreachable.
pub struct MockRevenueProvider {
    pub revenue: Option<i64>,
}

#[async_trait]
impl RevenueProvider for MockRevenueProvider {
    async fn period_revenue(&self, _tenant_id: &str, _year: i32, _month: i32) -> Result<i64, AppError> {
        match self.revenue {
            Some(total) => Ok(total),
            None => Err(AppError::UpstreamUnavailable("finance service offline".to_string())),
        }
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    #[allow(dead_code)]
    pub async fn new() -> Self {
        Self::with_revenue(Some(10_000_000)).await
    }

    pub async fn with_revenue(revenue: Option<i64>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            finance_service_url: "http://localhost".to_string(),
            finance_service_token: "token".to_string(),
            payroll_concurrency: 4,
        };

        let employee_repo = Arc::new(SqliteEmployeeRepo::new(pool.clone()));
        let position_repo = Arc::new(SqlitePositionRepo::new(pool.clone()));
        let position_rate_repo = Arc::new(SqlitePositionRateRepo::new(pool.clone()));
        let timesheet_repo = Arc::new(SqliteTimesheetRepo::new(pool.clone()));
        let adjustment_repo = Arc::new(SqliteAdjustmentRepo::new(pool.clone()));
        let payout_repo = Arc::new(SqlitePayoutRepo::new(pool.clone()));
        let revenue_provider = Arc::new(MockRevenueProvider { revenue });

        let payroll_service = Arc::new(PayrollService::new(
            employee_repo.clone(),
            position_repo.clone(),
            position_rate_repo.clone(),
            timesheet_repo.clone(),
            adjustment_repo.clone(),
            payout_repo.clone(),
            revenue_provider.clone(),
            config.payroll_concurrency,
        ));

        let state = Arc::new(AppState {
            config,
            tenant_repo: Arc::new(SqliteTenantRepo::new(pool.clone())),
            employee_repo,
            position_repo,
            position_rate_repo,
            timesheet_repo,
            adjustment_repo,
            payout_repo,
            revenue_provider,
            payroll_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl TestApp {
    #[allow(dead_code)]
    pub async fn post(&self, uri: &str, body: serde_json::Value) -> axum::response::Response {
        use tower::ServiceExt;
        self.router.clone().oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn patch(&self, uri: &str, body: serde_json::Value) -> axum::response::Response {
        use tower::ServiceExt;
        self.router.clone().oneshot(
            axum::http::Request::builder()
                .method("PATCH")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        use tower::ServiceExt;
        self.router.clone().oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap()
        ).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn create_tenant(app: &TestApp, slug: &str) -> String {
    let res = app.post("/api/v1/tenants", serde_json::json!({
        "name": format!("Restaurant {}", slug),
        "slug": slug,
    })).await;
    assert!(res.status().is_success(), "tenant creation failed: {}", res.status());
    parse_body(res).await["tenant_id"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn create_position(app: &TestApp, tenant_id: &str, body: serde_json::Value) -> String {
    let res = app.post(&format!("/api/v1/{}/positions", tenant_id), body).await;
    assert!(res.status().is_success(), "position creation failed: {}", res.status());
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn create_employee(app: &TestApp, tenant_id: &str, name: &str, position_id: Option<&str>) -> String {
    let res = app.post(&format!("/api/v1/{}/employees", tenant_id), serde_json::json!({
        "full_name": name,
        "position_id": position_id,
    })).await;
    assert!(res.status().is_success(), "employee creation failed: {}", res.status());
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
    }
}
