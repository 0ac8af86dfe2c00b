//! Account domain types for statement generation.
//!
//! Categories are a closed enum rather than free-form strings, so an invalid
//! category is a construction-time concern instead of a runtime lookup miss.

use serde::{Deserialize, Serialize};
use statera_shared::types::{AccountId, AccountTypeId};

/// Account category in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Asset accounts (cash, receivables, fixed assets).
    Asset,
    /// Liability accounts (payables, loans).
    Liability,
    /// Equity accounts (capital, retained earnings).
    Equity,
    /// Revenue accounts (sales, service income).
    Revenue,
    /// Expense accounts (rent, salaries, COGS).
    Expense,
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        };
        write!(f, "{name}")
    }
}

/// Nature of an account category under debit/credit convention.
///
/// - Debit-nature: normal balance is positive under debit convention
///   (Asset, Expense).
/// - Credit-nature: normal balance is stored negative in ledger convention
///   (Liability, Equity, Revenue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountNature {
    /// Debit-nature accounts.
    Debit,
    /// Credit-nature accounts.
    Credit,
}

impl AccountNature {
    /// Returns true for debit-nature accounts.
    #[must_use]
    pub fn is_debit(self) -> bool {
        matches!(self, Self::Debit)
    }

    /// Constructs a nature from the classification source's boolean flag.
    #[must_use]
    pub fn from_debit_flag(is_debit_nature: bool) -> Self {
        if is_debit_nature {
            Self::Debit
        } else {
            Self::Credit
        }
    }
}

/// Which statement family a category's accounts feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAffiliation {
    /// Point-in-time statements (balance sheet).
    BalanceSheet,
    /// Flow statements (profit & loss).
    ProfitAndLoss,
}

/// A chart of accounts entry, consumed read-only from the account directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code (e.g., "1000").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Sub-category label (e.g., "current_asset").
    pub subcategory: Option<String>,
    /// Whether the account participates in statements.
    pub is_active: bool,
}

/// An account-type definition row from the classification source.
///
/// Definitions are re-read for every statement request; classification can
/// change between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTypeDef {
    /// Unique identifier.
    pub id: AccountTypeId,
    /// Category this definition classifies.
    pub category: AccountCategory,
    /// True if the category's normal balance is a debit.
    pub is_debit_nature: bool,
    /// Statement family the category feeds.
    pub report_affiliation: ReportAffiliation,
}
