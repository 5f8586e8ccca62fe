//! Handler tests against an in-memory platform

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::domain::{BalanceTransaction, OperationContext, TransactionType};
    use crate::error::AppError;
    use crate::handlers::{
        BalanceHandler, FundingInstructionsCommand, FundingInstructionsHandler, FundsFlowHandler,
        FundsFlowQuery,
    };
    use crate::platform::{
        BalanceAmount, BalanceTransactionQuery, BankTransferType, FundingInstructions,
        FundingInstructionsRequest, IssuingBalance, IssuingPlatform, ListResponse,
        PlatformBalance, PlatformError,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    /// Serves canned pages in order and records every query it receives
    #[derive(Default)]
    struct FakePlatform {
        pages: Mutex<Vec<ListResponse<BalanceTransaction>>>,
        queries: Mutex<Vec<BalanceTransactionQuery>>,
        funding_requests: Mutex<Vec<FundingInstructionsRequest>>,
        fail_with_status: Option<u16>,
    }

    impl FakePlatform {
        fn with_pages(pages: Vec<ListResponse<BalanceTransaction>>) -> Self {
            Self {
                pages: Mutex::new(pages.into_iter().rev().collect()),
                ..Default::default()
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_with_status: Some(status),
                ..Default::default()
            }
        }

        fn check_failure(&self) -> Result<(), PlatformError> {
            match self.fail_with_status {
                Some(status) => Err(PlatformError::from_body(status, "upstream unavailable")),
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
            self.check_failure()?;
            self.queries.lock().unwrap().push(query.clone());
            Ok(self.pages.lock().unwrap().pop().unwrap_or(ListResponse {
                data: Vec::new(),
                has_more: false,
            }))
        }

        async fn retrieve_balance(&self) -> Result<PlatformBalance, PlatformError> {
            self.check_failure()?;
            Ok(PlatformBalance {
                available: vec![BalanceAmount { amount: 123456, currency: "usd".to_string() }],
                pending: vec![BalanceAmount { amount: 500, currency: "jpy".to_string() }],
                issuing: Some(IssuingBalance {
                    available: vec![BalanceAmount { amount: 2500, currency: "usd".to_string() }],
                }),
                livemode: false,
            })
        }

        async fn create_funding_instructions(
            &self,
            request: &FundingInstructionsRequest,
        ) -> Result<FundingInstructions, PlatformError> {
            self.check_failure()?;
            self.funding_requests.lock().unwrap().push(request.clone());
            Ok(FundingInstructions {
                currency: request.currency.code().to_string(),
                funding_type: "bank_transfer".to_string(),
                livemode: false,
                bank_transfer: serde_json::json!({ "type": request.bank_transfer_type.as_str() }),
            })
        }
    }

    fn config(max_pages: &str) -> Arc<Config> {
        let max_pages = max_pages.to_string();
        Arc::new(
            Config::from_lookup(move |key| match key {
                "STRIPE_SECRET_KEY" => Some("sk_test_123".to_string()),
                "FUNDS_FLOW_MAX_PAGES" => Some(max_pages.clone()),
                _ => None,
            })
            .unwrap(),
        )
    }

    fn txn(id: &str, day: NaiveDate, amount: i64, kind: &str) -> BalanceTransaction {
        BalanceTransaction {
            id: id.to_string(),
            created: day.and_hms_opt(9, 30, 0).unwrap().and_utc().timestamp(),
            amount,
            currency: "usd".to_string(),
            kind: TransactionType::from(kind),
            description: None,
        }
    }

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    // =========================================================================
    // Funds flow
    // =========================================================================

    #[tokio::test]
    async fn test_funds_flow_single_page() {
        let platform = Arc::new(FakePlatform::with_pages(vec![ListResponse {
            data: vec![
                txn("txn_1", end_date(), 1050, "topup"),
                txn("txn_2", end_date(), -300, "issuing_authorization_hold"),
                txn("txn_3", end_date(), -300, "issuing_transaction"),
            ],
            has_more: true,
        }]));
        let handler = FundsFlowHandler::new(platform.clone(), config("1"));

        let report = handler
            .execute(FundsFlowQuery::new(end_date()), &OperationContext::new())
            .await
            .unwrap();

        assert_eq!(report.series.dates.len(), 10);
        assert_eq!(report.series.dates[9], "Jun 10");
        assert_eq!(report.series.funds_in[9], dec!(10.50));
        assert_eq!(report.series.funds_out[9], dec!(3.00));
        assert_eq!(report.transactions.len(), 2);

        // has_more is ignored once the page budget is spent
        let queries = platform.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].limit, 100);
        assert!(queries[0].starting_after.is_none());
    }

    #[tokio::test]
    async fn test_funds_flow_query_covers_window() {
        let platform = Arc::new(FakePlatform::default());
        let handler = FundsFlowHandler::new(platform.clone(), config("1"));

        handler
            .execute(FundsFlowQuery::new(end_date()), &OperationContext::new())
            .await
            .unwrap();

        let queries = platform.queries.lock().unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            queries[0].created_gte,
            start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp()
        );
        assert_eq!(
            queries[0].created_lte,
            end_date().and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp()
        );
    }

    #[tokio::test]
    async fn test_funds_flow_follows_pages() {
        let platform = Arc::new(FakePlatform::with_pages(vec![
            ListResponse {
                data: vec![txn("txn_a", end_date(), 100, "topup")],
                has_more: true,
            },
            ListResponse {
                data: vec![txn("txn_b", end_date(), 200, "topup")],
                has_more: false,
            },
        ]));
        let handler = FundsFlowHandler::new(platform.clone(), config("5"));

        let report = handler
            .execute(FundsFlowQuery::new(end_date()), &OperationContext::new())
            .await
            .unwrap();

        assert_eq!(report.series.funds_in[9], dec!(3.00));
        let queries = platform.queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1].starting_after.as_deref(), Some("txn_a"));
    }

    #[test]
    fn test_funds_flow_platform_failure_propagates() {
        let handler = FundsFlowHandler::new(Arc::new(FakePlatform::failing(503)), config("1"));

        let result = tokio_test::block_on(
            handler.execute(FundsFlowQuery::new(end_date()), &OperationContext::new()),
        );

        assert!(matches!(
            result,
            Err(AppError::Platform(PlatformError::Api { status: 503, .. }))
        ));
    }

    // =========================================================================
    // Balance
    // =========================================================================

    #[test]
    fn test_balance_converted_to_major_units() {
        let handler = BalanceHandler::new(Arc::new(FakePlatform::default()));

        let summary = tokio_test::block_on(handler.execute(&OperationContext::new())).unwrap();

        assert_eq!(summary.available[0].amount, dec!(1234.56));
        assert_eq!(summary.pending[0].amount, dec!(500));
        assert_eq!(summary.pending[0].currency.code(), "jpy");
        assert_eq!(summary.issuing_available[0].amount, dec!(25.00));
        assert!(!summary.livemode);
    }

    // =========================================================================
    // Funding instructions
    // =========================================================================

    #[tokio::test]
    async fn test_funding_instructions_for_euro_country() {
        let platform = Arc::new(FakePlatform::default());
        let handler = FundingInstructionsHandler::new(platform.clone());

        let instructions = handler
            .execute(FundingInstructionsCommand::new("de"), &OperationContext::new())
            .await
            .unwrap();

        assert_eq!(instructions.currency, "eur");
        let requests = platform.funding_requests.lock().unwrap();
        assert_eq!(requests[0].bank_transfer_type, BankTransferType::EuBankTransfer);
    }

    #[tokio::test]
    async fn test_funding_instructions_unsupported_country() {
        let platform = Arc::new(FakePlatform::default());
        let handler = FundingInstructionsHandler::new(platform.clone());

        let result = handler
            .execute(FundingInstructionsCommand::new("BR"), &OperationContext::new())
            .await;

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert!(platform.funding_requests.lock().unwrap().is_empty());
    }
}
