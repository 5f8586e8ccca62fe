//! Funding Instructions Handler
//!
//! Resolves the transfer rail for the account's country and asks the platform
//! for bank details to fund the issuing balance.

use std::sync::Arc;

use crate::domain::OperationContext;
use crate::error::AppError;
use crate::platform::{
    funding_for_country, FundingInstructions, FundingInstructionsRequest, IssuingPlatform,
};

use super::FundingInstructionsCommand;

/// Handler for funding instructions
pub struct FundingInstructionsHandler {
    platform: Arc<dyn IssuingPlatform>,
}

impl FundingInstructionsHandler {
    pub fn new(platform: Arc<dyn IssuingPlatform>) -> Self {
        Self { platform }
    }

    /// Execute the funding instructions command
    pub async fn execute(
        &self,
        command: FundingInstructionsCommand,
        context: &OperationContext,
    ) -> Result<FundingInstructions, AppError> {
        let (rail, currency) = funding_for_country(&command.country)?;

        tracing::info!(
            correlation_id = %context.correlation_id,
            country = %command.country,
            rail = rail.as_str(),
            currency = %currency,
            "Requesting funding instructions"
        );

        let request = FundingInstructionsRequest::new(currency, rail);
        Ok(self.platform.create_funding_instructions(&request).await?)
    }
}
