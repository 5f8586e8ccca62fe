//! Request Handlers module
//!
//! Each handler fetches what it needs from the payment platform and shapes the
//! result for the API layer.

mod balance_handler;
mod commands;
mod funding_handler;
mod funds_flow_handler;

#[cfg(test)]
mod tests;

pub use balance_handler::BalanceHandler;
pub use commands::*;
pub use funding_handler::FundingInstructionsHandler;
pub use funds_flow_handler::FundsFlowHandler;
