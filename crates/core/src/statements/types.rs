//! Statement report data types.
//!
//! These shapes are the wire contract returned to callers: field names,
//! section nesting, and 2-decimal precision are stable.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::{AccountCategory, AccountNature};

use super::error::StatementError;

/// Inclusive reporting period with `start <= end` enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a period, rejecting `start > end`.
    ///
    /// A single-day period (`start == end`) is valid.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::InvalidDateRange`] if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, StatementError> {
        if start > end {
            return Err(StatementError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A signed as-of balance or period activity resolved for one account.
///
/// Amounts are in ledger convention: debits positive, credits negative.
/// This is the intermediate the pure report builders consume; retrieval
/// plumbing produces it.
#[derive(Debug, Clone)]
pub struct ResolvedBalance {
    /// Account code.
    pub code: String,
    /// Account display name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Nature of the category per the classification map.
    pub nature: AccountNature,
    /// Signed amount in ledger convention.
    pub amount: Decimal,
}

/// A normalized line item as presented on a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Account code.
    pub code: String,
    /// Account display name.
    pub name: String,
    /// Presentation amount after sign normalization.
    pub amount: Decimal,
}

/// A statement section: its line items and their quantized total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSection {
    /// Line items, ordered by account code ascending.
    pub items: Vec<LineItem>,
    /// Section total, quantized to 2 decimal places.
    pub total: Decimal,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Report title.
    pub title: String,
    /// As-of date.
    pub as_of: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Accounts with normal balances, routed to the debit column.
    pub debit_items: Vec<LineItem>,
    /// Accounts with normal balances, routed to the credit column.
    pub credit_items: Vec<LineItem>,
    /// Sum of the debit column, quantized to 2 decimal places.
    pub total_debits: Decimal,
    /// Sum of the credit column, quantized to 2 decimal places.
    pub total_credits: Decimal,
    /// Whether total debits equal total credits exactly.
    pub is_balanced: bool,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// Balance sheet report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Report title.
    pub title: String,
    /// As-of date.
    pub as_of: NaiveDate,
    /// Currency code.
    pub currency: String,
    /// Assets section.
    pub assets: StatementSection,
    /// Liabilities section.
    pub liabilities: StatementSection,
    /// Equity section.
    pub equity: StatementSection,
    /// Liabilities plus equity, quantized to 2 decimal places.
    pub total_liabilities_equity: Decimal,
    /// Whether assets equal liabilities plus equity exactly.
    pub is_balanced: bool,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// Profit & loss report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitAndLossReport {
    /// Report title.
    pub title: String,
    /// Reporting period (inclusive).
    pub period: ReportingPeriod,
    /// Currency code.
    pub currency: String,
    /// Revenue section.
    pub revenue: StatementSection,
    /// Expenses section.
    pub expenses: StatementSection,
    /// Revenue total minus expense total; negative is a net loss.
    pub net_profit: Decimal,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}
