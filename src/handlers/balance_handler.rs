//! Balance Handler

use std::sync::Arc;

use crate::domain::{Currency, DomainError, OperationContext};
use crate::error::AppError;
use crate::platform::{BalanceAmount, IssuingPlatform};

use super::{BalanceSummary, MoneyAmount};

/// Handler for the account balance summary
pub struct BalanceHandler {
    platform: Arc<dyn IssuingPlatform>,
}

impl BalanceHandler {
    pub fn new(platform: Arc<dyn IssuingPlatform>) -> Self {
        Self { platform }
    }

    /// Fetch the balance and convert every entry to major units
    pub async fn execute(&self, context: &OperationContext) -> Result<BalanceSummary, AppError> {
        let balance = self.platform.retrieve_balance().await?;

        let summary = BalanceSummary {
            available: to_major(&balance.available)?,
            pending: to_major(&balance.pending)?,
            issuing_available: match balance.issuing {
                Some(ref issuing) => to_major(&issuing.available)?,
                None => Vec::new(),
            },
            livemode: balance.livemode,
        };

        tracing::debug!(
            correlation_id = %context.correlation_id,
            currencies = summary.available.len(),
            "Balance retrieved"
        );

        Ok(summary)
    }
}

fn to_major(amounts: &[BalanceAmount]) -> Result<Vec<MoneyAmount>, DomainError> {
    amounts
        .iter()
        .map(|entry| {
            let currency = Currency::new(&entry.currency)?;
            Ok(MoneyAmount {
                amount: currency.to_major_units(entry.amount),
                currency,
            })
        })
        .collect()
}
