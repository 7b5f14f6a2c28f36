use crate::domain::ports::RevenueProvider;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

/// Client for the finance/reporting service's period-revenue endpoint.
/// Any failure is surfaced as UpstreamUnavailable; substituting zero
/// would understate pay without record.
pub struct HttpRevenueService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl HttpRevenueService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct PeriodRevenueResponse {
    total_minor_units: i64,
}

#[async_trait]
impl RevenueProvider for HttpRevenueService {
    async fn period_revenue(&self, tenant_id: &str, year: i32, month: i32) -> Result<i64, AppError> {
        let res = self.client.get(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&[
                ("tenant_id", tenant_id.to_string()),
                ("year", year.to_string()),
                ("month", month.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Finance service connection error: {}", e);
                error!("{}", msg);
                AppError::UpstreamUnavailable(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Finance service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::UpstreamUnavailable(msg));
        }

        let body: PeriodRevenueResponse = res.json().await.map_err(|e| {
            let msg = format!("Finance service returned an unreadable body: {}", e);
            error!("{}", msg);
            AppError::UpstreamUnavailable(msg)
        })?;

        Ok(body.total_minor_units)
    }
}
