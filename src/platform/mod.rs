//! Payment platform module
//!
//! Adapter over the platform's balance and issuing APIs. Handlers depend on the
//! [`IssuingPlatform`] trait so the HTTP client can be swapped out.

mod client;
mod error;
pub mod funding;
pub mod models;

use async_trait::async_trait;

use crate::domain::BalanceTransaction;

pub use client::HttpPlatformClient;
pub use error::PlatformError;
pub use funding::{funding_for_country, BankTransferType};
pub use models::{
    BalanceAmount, BalanceTransactionQuery, FundingInstructions, FundingInstructionsRequest,
    IssuingBalance, ListResponse, PlatformBalance,
};

/// Operations the application needs from the payment platform
#[async_trait]
pub trait IssuingPlatform: Send + Sync {
    /// Fetch one page of balance transactions
    async fn list_balance_transactions(
        &self,
        query: &BalanceTransactionQuery,
    ) -> Result<ListResponse<BalanceTransaction>, PlatformError>;

    /// Fetch the account balance
    async fn retrieve_balance(&self) -> Result<PlatformBalance, PlatformError>;

    /// Request bank details for topping up the issuing balance
    async fn create_funding_instructions(
        &self,
        request: &FundingInstructionsRequest,
    ) -> Result<FundingInstructions, PlatformError>;
}
