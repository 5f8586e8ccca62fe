//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Extension, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{BalanceTransaction, Currency, OperationContext};
use crate::error::AppError;
use crate::handlers::{
    BalanceHandler, BalanceSummary, FundingInstructionsCommand, FundingInstructionsHandler,
    FundsFlowHandler, FundsFlowQuery,
};
use crate::platform::FundingInstructions;

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Default, Deserialize)]
pub struct FundsFlowParams {
    /// Last day of the window, `YYYY-MM-DD`; defaults to today (UTC)
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FundsFlowResponse {
    pub currency: Currency,
    pub dates: Vec<String>,
    pub funds_in: Vec<Decimal>,
    pub funds_out: Vec<Decimal>,
    pub transactions: Vec<BalanceTransaction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FundingInstructionsRequestBody {
    pub country: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/funds-flow", get(get_funds_flow))
        .route("/balance", get(get_balance))
        .route("/funding-instructions", post(create_funding_instructions))
}

// =========================================================================
// GET /funds-flow
// =========================================================================

/// Funds in / funds out per day over the trailing window
async fn get_funds_flow(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Query(params): Query<FundsFlowParams>,
) -> Result<Json<FundsFlowResponse>, AppError> {
    let query = match params.end.as_deref() {
        Some(raw) => {
            let end = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::InvalidRequest(format!("end must be YYYY-MM-DD, got {raw}"))
            })?;
            FundsFlowQuery::new(end)
        }
        None => FundsFlowQuery::today(),
    };

    let handler = FundsFlowHandler::new(state.platform.clone(), state.config.clone());
    let report = handler.execute(query, &context).await?;

    Ok(Json(FundsFlowResponse {
        currency: report.series.currency,
        dates: report.series.dates,
        funds_in: report.series.funds_in,
        funds_out: report.series.funds_out,
        transactions: report.transactions,
    }))
}

// =========================================================================
// GET /balance
// =========================================================================

/// Available, pending and issuing balances in major units
async fn get_balance(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> Result<Json<BalanceSummary>, AppError> {
    let handler = BalanceHandler::new(state.platform.clone());
    Ok(Json(handler.execute(&context).await?))
}

// =========================================================================
// POST /funding-instructions
// =========================================================================

/// Bank details for topping up the issuing balance
async fn create_funding_instructions(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(request): Json<FundingInstructionsRequestBody>,
) -> Result<Json<FundingInstructions>, AppError> {
    if request.country.trim().len() != 2 {
        return Err(AppError::InvalidRequest(
            "country must be a two-letter code".to_string(),
        ));
    }

    let handler = FundingInstructionsHandler::new(state.platform.clone());
    let instructions = handler
        .execute(FundingInstructionsCommand::new(request.country), &context)
        .await?;

    Ok(Json(instructions))
}
