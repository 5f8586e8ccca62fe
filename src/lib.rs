//! expense_desk Library
//!
//! Re-exports modules for integration testing and for the server binary.

pub mod api;
pub mod config;
pub mod domain;
mod error;
pub mod handlers;
pub mod platform;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorResponse};
pub use domain::{BalanceTransaction, Currency, DomainError, FundsFlowReport, OperationContext};
