//! Domain module
//!
//! Core domain types and the funds flow aggregation.

pub mod amount;
pub mod balance_transaction;
pub mod context;
pub mod error;
pub mod funds_flow;

pub use amount::Currency;
pub use balance_transaction::{BalanceTransaction, TransactionType};
pub use context::{OperationContext, CORRELATION_ID_HEADER};
pub use error::DomainError;
pub use funds_flow::{
    aggregate, DateBucket, DateLabelFormat, FundsFlowChartSeries, FundsFlowReport,
    FundsFlowWindow, DEFAULT_LABEL_FORMAT, DEFAULT_WINDOW_SIZE_DAYS,
};
