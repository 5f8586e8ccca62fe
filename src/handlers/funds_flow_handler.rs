//! Funds Flow Handler
//!
//! Fetches the window's balance transactions from the platform and aggregates
//! them into the funds flow chart.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{
    aggregate, BalanceTransaction, FundsFlowReport, FundsFlowWindow, OperationContext,
};
use crate::error::AppError;
use crate::platform::{BalanceTransactionQuery, IssuingPlatform};

use super::FundsFlowQuery;

/// Handler for the funds flow chart
pub struct FundsFlowHandler {
    platform: Arc<dyn IssuingPlatform>,
    config: Arc<Config>,
}

impl FundsFlowHandler {
    pub fn new(platform: Arc<dyn IssuingPlatform>, config: Arc<Config>) -> Self {
        Self { platform, config }
    }

    /// Execute the funds flow query
    pub async fn execute(
        &self,
        query: FundsFlowQuery,
        context: &OperationContext,
    ) -> Result<FundsFlowReport, AppError> {
        let window = FundsFlowWindow::new(query.window_end, self.config.funds_flow_window_days)?;

        let transactions = self.fetch_window(&window, context).await?;

        let report = aggregate(
            transactions,
            window,
            &self.config.date_label_format,
            &self.config.display_currency,
        )?;

        tracing::info!(
            correlation_id = %context.correlation_id,
            window_start = %window.start(),
            window_end = %window.end(),
            transactions = report.transactions.len(),
            "Funds flow computed"
        );

        Ok(report)
    }

    /// Fetch transactions created inside the window.
    ///
    /// Follows `has_more` for at most `funds_flow_max_pages` pages; anything
    /// beyond that is dropped.
    async fn fetch_window(
        &self,
        window: &FundsFlowWindow,
        context: &OperationContext,
    ) -> Result<Vec<BalanceTransaction>, AppError> {
        let (gte, lte) = window.created_range();
        let mut query = BalanceTransactionQuery::new(gte, lte, self.config.funds_flow_page_limit);
        let mut transactions = Vec::new();

        for page_number in 1..=self.config.funds_flow_max_pages {
            let page = self.platform.list_balance_transactions(&query).await?;
            let cursor = page.data.last().map(|txn| txn.id.clone());
            transactions.extend(page.data);

            match cursor {
                Some(cursor) if page.has_more => {
                    if page_number == self.config.funds_flow_max_pages {
                        tracing::warn!(
                            correlation_id = %context.correlation_id,
                            pages = page_number,
                            fetched = transactions.len(),
                            "Balance transactions truncated at page limit"
                        );
                    } else {
                        query = query.starting_after(cursor);
                    }
                }
                _ => break,
            }
        }

        Ok(transactions)
    }
}
