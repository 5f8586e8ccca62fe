//! Common test utilities

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use expense_desk::api::{self, AppState};
use expense_desk::domain::{BalanceTransaction, TransactionType};
use expense_desk::platform::{
    BalanceAmount, BalanceTransactionQuery, FundingInstructions, FundingInstructionsRequest,
    IssuingPlatform, ListResponse, PlatformBalance, PlatformError,
};
use expense_desk::Config;

/// In-memory platform serving a fixed set of balance transactions
#[derive(Default)]
pub struct FakePlatform {
    pub transactions: Vec<BalanceTransaction>,
    pub queries: Mutex<Vec<BalanceTransactionQuery>>,
    /// Status and message every call fails with, if set
    pub failure: Option<(u16, String)>,
}

impl FakePlatform {
    pub fn with_transactions(transactions: Vec<BalanceTransaction>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self::failing(503, "service unavailable")
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), PlatformError> {
        match self.failure {
            Some((status, ref message)) => Err(PlatformError::Api {
                status,
                code: None,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IssuingPlatform for FakePlatform {
    async fn list_balance_transactions(
        &self,
        query: &BalanceTransactionQuery,
    ) -> Result<ListResponse<BalanceTransaction>, PlatformError> {
        self.check()?;
        self.queries.lock().unwrap().push(query.clone());
        let data = self
            .transactions
            .iter()
            .filter(|t| t.created >= query.created_gte && t.created <= query.created_lte)
            .take(usize::from(query.limit))
            .cloned()
            .collect();
        Ok(ListResponse { data, has_more: false })
    }

    async fn retrieve_balance(&self) -> Result<PlatformBalance, PlatformError> {
        self.check()?;
        Ok(PlatformBalance {
            available: vec![BalanceAmount { amount: 98765, currency: "usd".to_string() }],
            pending: Vec::new(),
            issuing: None,
            livemode: false,
        })
    }

    async fn create_funding_instructions(
        &self,
        request: &FundingInstructionsRequest,
    ) -> Result<FundingInstructions, PlatformError> {
        self.check()?;
        Ok(FundingInstructions {
            currency: request.currency.code().to_string(),
            funding_type: "bank_transfer".to_string(),
            livemode: false,
            bank_transfer: serde_json::json!({
                "type": request.bank_transfer_type.as_str(),
                "financial_addresses": [{"type": "aba", "aba": {"account_number": "000123456789"}}]
            }),
        })
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "STRIPE_SECRET_KEY" => Some("sk_test_integration".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Build the full application around a platform
pub fn app_with(platform: FakePlatform) -> axum::Router {
    api::build_app(AppState::new(Arc::new(platform), Arc::new(test_config())))
}

pub fn txn(id: &str, day: NaiveDate, amount: i64, kind: &str) -> BalanceTransaction {
    BalanceTransaction {
        id: id.to_string(),
        created: day.and_hms_opt(15, 0, 0).unwrap().and_utc().timestamp(),
        amount,
        currency: "usd".to_string(),
        kind: TransactionType::from(kind),
        description: None,
    }
}
