//! HTTP client for the payment platform
//!
//! Thin `reqwest` wrapper: bearer authentication, bracket-notation query and
//! form parameters, and error body decoding.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::models::{
    BalanceTransactionQuery, FundingInstructions, FundingInstructionsRequest, ListResponse,
    PlatformBalance,
};
use super::{IssuingPlatform, PlatformError};
use crate::config::Config;
use crate::domain::BalanceTransaction;

const USER_AGENT: &str = concat!("expense_desk/", env!("CARGO_PKG_VERSION"));

/// Production implementation of [`IssuingPlatform`] over HTTPS
#[derive(Clone)]
pub struct HttpPlatformClient {
    http_client: Client,
    base_url: String,
    secret_key: String,
}

impl HttpPlatformClient {
    /// Build a client from application configuration
    pub fn new(config: &Config) -> Result<Self, PlatformError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.platform_api_base.clone(),
            secret_key: config.platform_secret_key.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%method, %url, "Platform request");
        self.http_client
            .request(method, url)
            .bearer_auth(&self.secret_key)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, PlatformError> {
        let response = self.request(Method::GET, path).query(params).send().await?;
        self.parse_response(response).await
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<T, PlatformError> {
        let response = self.request(Method::POST, path).form(form).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, PlatformError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = PlatformError::from_body(status.as_u16(), &body);
            error!(status = status.as_u16(), "Platform request failed: {}", err);
            return Err(err);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl IssuingPlatform for HttpPlatformClient {
    async fn list_balance_transactions(
        &self,
        query: &BalanceTransactionQuery,
    ) -> Result<ListResponse<BalanceTransaction>, PlatformError> {
        let page: ListResponse<BalanceTransaction> =
            self.get("v1/balance_transactions", &query.to_params()).await?;

        debug!(
            count = page.data.len(),
            has_more = page.has_more,
            "Balance transactions fetched"
        );
        Ok(page)
    }

    async fn retrieve_balance(&self) -> Result<PlatformBalance, PlatformError> {
        self.get("v1/balance", &[]).await
    }

    async fn create_funding_instructions(
        &self,
        request: &FundingInstructionsRequest,
    ) -> Result<FundingInstructions, PlatformError> {
        self.post_form("v1/issuing/funding_instructions", &request.to_form())
            .await
    }
}
