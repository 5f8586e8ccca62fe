//! Funds flow aggregation
//!
//! Buckets balance transactions by calendar day and direction over a trailing
//! window, producing parallel series for a funds-in / funds-out chart.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write;

use super::{BalanceTransaction, Currency, DomainError};

/// Number of days shown on the funds flow chart
pub const DEFAULT_WINDOW_SIZE_DAYS: u32 = 10;

/// Day-and-month label, e.g. "Mar 07"
pub const DEFAULT_LABEL_FORMAT: &str = "%b %d";

/// A strftime pattern known to format any `NaiveDate` without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabelFormat(String);

impl DateLabelFormat {
    /// Validate a strftime pattern for date labels.
    ///
    /// # Errors
    /// - `DomainError::InvalidLabelFormat` if the pattern is empty, malformed,
    ///   or uses time-of-day fields a plain date cannot supply
    pub fn new(pattern: impl Into<String>) -> Result<Self, DomainError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(DomainError::InvalidLabelFormat(pattern));
        }

        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let mut buf = String::new();
        if write!(buf, "{}", sample.format(&pattern)).is_err() {
            return Err(DomainError::InvalidLabelFormat(pattern));
        }

        Ok(Self(pattern))
    }

    /// Format a date as a label
    pub fn label(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }
}

impl Default for DateLabelFormat {
    fn default() -> Self {
        Self(DEFAULT_LABEL_FORMAT.to_string())
    }
}

/// Consecutive calendar days `[end - (days - 1), end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundsFlowWindow {
    end: NaiveDate,
    days: u32,
}

impl FundsFlowWindow {
    /// # Errors
    /// - `DomainError::InvalidWindow` if `days` is zero or the start date
    ///   would fall before chrono's minimum date
    pub fn new(end: NaiveDate, days: u32) -> Result<Self, DomainError> {
        if days == 0 || end.checked_sub_days(Days::new(u64::from(days) - 1)).is_none() {
            return Err(DomainError::InvalidWindow(days));
        }
        Ok(Self { end, days })
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// First (oldest) day in the window
    pub fn start(&self) -> NaiveDate {
        // Checked in `new`
        self.end - Days::new(u64::from(self.days) - 1)
    }

    /// Position of `date` counted backwards from the end, if inside the window
    fn offset_from_end(&self, date: NaiveDate) -> Option<usize> {
        let offset = (self.end - date).num_days();
        if (0..i64::from(self.days)).contains(&offset) {
            usize::try_from(offset).ok()
        } else {
            None
        }
    }

    /// Dates from the end backwards
    fn dates_newest_first(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days).filter_map(move |i| self.end.checked_sub_days(Days::new(u64::from(i))))
    }

    /// Inclusive `(gte, lte)` Unix-second bounds covering the whole window in UTC
    pub fn created_range(&self) -> (i64, i64) {
        let gte = self
            .start()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default();
        let lte = self
            .end
            .and_hms_opt(23, 59, 59)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(gte);
        (gte, lte)
    }
}

/// Accumulated flows for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBucket {
    pub date: NaiveDate,
    pub label: String,
    pub funds_in: Decimal,
    pub funds_out: Decimal,
}

impl DateBucket {
    fn empty(date: NaiveDate, label: String) -> Self {
        Self {
            date,
            label,
            funds_in: Decimal::ZERO,
            funds_out: Decimal::ZERO,
        }
    }
}

/// Chart input: parallel, chronologically ascending sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundsFlowChartSeries {
    pub currency: Currency,
    pub dates: Vec<String>,
    pub funds_in: Vec<Decimal>,
    pub funds_out: Vec<Decimal>,
}

/// Output of [`aggregate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundsFlowReport {
    pub series: FundsFlowChartSeries,
    /// Buckets in ascending date order
    pub buckets: Vec<DateBucket>,
    /// Input transactions minus authorization holds and releases, in input order
    pub transactions: Vec<BalanceTransaction>,
}

/// Aggregate transactions into per-day funds-in / funds-out totals.
///
/// Authorization holds and releases are dropped entirely. Every other
/// transaction is kept in the returned list; it only contributes to a bucket
/// when it is denominated in `currency` and its UTC creation date lies inside
/// the window. Positive amounts count as funds in, everything else (zero
/// included) as funds out.
pub fn aggregate(
    transactions: impl IntoIterator<Item = BalanceTransaction>,
    window: FundsFlowWindow,
    label_format: &DateLabelFormat,
    currency: &Currency,
) -> Result<FundsFlowReport, DomainError> {
    let mut buckets: Vec<DateBucket> = window
        .dates_newest_first()
        .map(|date| DateBucket::empty(date, label_format.label(date)))
        .collect();

    let mut kept = Vec::new();
    for txn in transactions {
        if txn.kind.is_authorization_hold_or_release() {
            continue;
        }

        let date = txn.created_date()?;
        let txn_currency = Currency::new(&txn.currency).ok();
        if txn_currency.as_ref() != Some(currency) {
            tracing::debug!(
                id = %txn.id,
                currency = %txn.currency,
                chart_currency = %currency,
                "Transaction currency differs from chart currency, not bucketed"
            );
        } else if let Some(bucket) = window
            .offset_from_end(date)
            .and_then(|offset| buckets.get_mut(offset))
        {
            let amount = currency.to_major_units(txn.amount).abs();
            if txn.amount > 0 {
                bucket.funds_in += amount;
            } else {
                bucket.funds_out += amount;
            }
        }

        kept.push(txn);
    }

    buckets.reverse();

    let series = FundsFlowChartSeries {
        currency: currency.clone(),
        dates: buckets.iter().map(|b| b.label.clone()).collect(),
        funds_in: buckets.iter().map(|b| b.funds_in).collect(),
        funds_out: buckets.iter().map(|b| b.funds_out).collect(),
    };

    tracing::debug!(
        window_end = %window.end(),
        days = window.days(),
        transactions = kept.len(),
        "Funds flow aggregated"
    );

    Ok(FundsFlowReport {
        series,
        buckets,
        transactions: kept,
    })
}
