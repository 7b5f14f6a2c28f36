use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub finance_service_url: String,
    pub finance_service_token: String,
    pub payroll_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            finance_service_url: env::var("FINANCE_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8100/api/v1/revenue".to_string()),
            finance_service_token: env::var("FINANCE_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            payroll_concurrency: env::var("PAYROLL_CONCURRENCY").unwrap_or_else(|_| "8".to_string()).parse().expect("PAYROLL_CONCURRENCY must be a number"),
        }
    }
}
