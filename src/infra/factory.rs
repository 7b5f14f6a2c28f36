use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::payroll::PayrollService;
use crate::infra::finance::http_revenue_service::HttpRevenueService;
use crate::infra::repositories::{
    postgres_tenant_repo::PostgresTenantRepo, postgres_employee_repo::PostgresEmployeeRepo,
    postgres_position_repo::PostgresPositionRepo, postgres_position_rate_repo::PostgresPositionRateRepo,
    postgres_timesheet_repo::PostgresTimesheetRepo, postgres_adjustment_repo::PostgresAdjustmentRepo,
    postgres_payout_repo::PostgresPayoutRepo,
    sqlite_tenant_repo::SqliteTenantRepo, sqlite_employee_repo::SqliteEmployeeRepo,
    sqlite_position_repo::SqlitePositionRepo, sqlite_position_rate_repo::SqlitePositionRateRepo,
    sqlite_timesheet_repo::SqliteTimesheetRepo, sqlite_adjustment_repo::SqliteAdjustmentRepo,
    sqlite_payout_repo::SqlitePayoutRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let revenue_provider = Arc::new(HttpRevenueService::new(
        config.finance_service_url.clone(),
        config.finance_service_token.clone(),
    ));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let employee_repo = Arc::new(PostgresEmployeeRepo::new(pool.clone()));
        let position_repo = Arc::new(PostgresPositionRepo::new(pool.clone()));
        let position_rate_repo = Arc::new(PostgresPositionRateRepo::new(pool.clone()));
        let timesheet_repo = Arc::new(PostgresTimesheetRepo::new(pool.clone()));
        let adjustment_repo = Arc::new(PostgresAdjustmentRepo::new(pool.clone()));
        let payout_repo = Arc::new(PostgresPayoutRepo::new(pool.clone()));

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

        AppState {
            config: config.clone(),
            tenant_repo: Arc::new(PostgresTenantRepo::new(pool.clone())),
            employee_repo,
            position_repo,
            position_rate_repo,
            timesheet_repo,
            adjustment_repo,
            payout_repo,
            revenue_provider,
            payroll_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let employee_repo = Arc::new(SqliteEmployeeRepo::new(pool.clone()));
        let position_repo = Arc::new(SqlitePositionRepo::new(pool.clone()));
        let position_rate_repo = Arc::new(SqlitePositionRateRepo::new(pool.clone()));
        let timesheet_repo = Arc::new(SqliteTimesheetRepo::new(pool.clone()));
        let adjustment_repo = Arc::new(SqliteAdjustmentRepo::new(pool.clone()));
        let payout_repo = Arc::new(SqlitePayoutRepo::new(pool.clone()));

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

        AppState {
            config: config.clone(),
            tenant_repo: Arc::new(SqliteTenantRepo::new(pool.clone())),
            employee_repo,
            position_repo,
            position_rate_repo,
            timesheet_repo,
            adjustment_repo,
            payout_repo,
            revenue_provider,
            payroll_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
