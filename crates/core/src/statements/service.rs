//! Statement generation service.
//!
//! Orchestrates the external collaborators: lists active accounts, rebuilds
//! the classification map, fetches balances concurrently, and hands resolved
//! rows to the pure [`ReportAssembler`]. The service holds no state across
//! requests; every report is a pure function of the then-current accounts,
//! classification, and balances.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use statera_shared::types::AccountId;
use tracing::{debug, warn};

use crate::account::{Account, AccountTypeDef, ReportAffiliation};

use super::assemble::ReportAssembler;
use super::classify::ClassificationMap;
use super::error::StatementError;
use super::types::{
    BalanceSheetReport, ProfitAndLossReport, ReportingPeriod, ResolvedBalance, TrialBalanceReport,
};

/// Account directory collaborator.
///
/// Implemented by the persistence layer (or an in-memory fixture in tests).
pub trait AccountDirectory: Send + Sync {
    /// Lists all active accounts.
    fn list_active_accounts(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Account>, StatementError>> + Send;
}

/// Account-type/category directory collaborator.
pub trait AccountTypeDirectory: Send + Sync {
    /// Lists the current account-type definitions.
    fn list_account_types(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<AccountTypeDef>, StatementError>> + Send;
}

/// Balance source collaborator.
///
/// Both operations return signed amounts in ledger convention (debits
/// positive, credits negative). Retrievals for distinct accounts are
/// independent and side-effect-free, so the service issues them
/// concurrently. Consistency across concurrent retrievals is the ledger
/// service's responsibility.
pub trait BalanceSource: Send + Sync {
    /// Cumulative balance of an account up to and including `as_of`.
    fn balance_as_of(
        &self,
        account_id: AccountId,
        as_of: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Decimal, StatementError>> + Send;

    /// Net movement of an account within the inclusive period.
    fn activity_in_period(
        &self,
        account_id: AccountId,
        period: ReportingPeriod,
    ) -> impl std::future::Future<Output = Result<Decimal, StatementError>> + Send;
}

/// A classified account ready for balance retrieval.
struct ClassifiedAccount {
    account: Account,
    nature: crate::account::AccountNature,
    affiliation: ReportAffiliation,
}

/// Service for generating financial statements.
pub struct StatementService<D, T, B> {
    accounts: Arc<D>,
    account_types: Arc<T>,
    balances: Arc<B>,
    currency: String,
}

impl<D, T, B> StatementService<D, T, B>
where
    D: AccountDirectory,
    T: AccountTypeDirectory,
    B: BalanceSource,
{
    /// Creates a new statement service.
    #[must_use]
    pub fn new(accounts: Arc<D>, account_types: Arc<T>, balances: Arc<B>, currency: String) -> Self {
        Self {
            accounts,
            account_types,
            balances,
            currency,
        }
    }

    /// Generates a trial balance as of the given date.
    ///
    /// All classifiable active accounts participate regardless of statement
    /// affiliation.
    ///
    /// # Errors
    ///
    /// Fails with [`StatementError::NoClassifiableAccounts`] if accounts
    /// exist but none can be classified, or with
    /// [`StatementError::Retrieval`] if any balance fetch fails.
    pub async fn generate_trial_balance(
        &self,
        as_of: NaiveDate,
    ) -> Result<TrialBalanceReport, StatementError> {
        let classified = self.classify_active_accounts().await?;

        // Retrievals are independent and read-only; issue them concurrently
        // and re-associate results by position so completion order cannot
        // affect output.
        let amounts = futures::future::try_join_all(
            classified
                .iter()
                .map(|c| self.balances.balance_as_of(c.account.id, as_of)),
        )
        .await?;
        let rows = into_rows(classified, amounts);

        debug!(accounts = rows.len(), %as_of, "assembling trial balance");
        Ok(ReportAssembler::trial_balance(
            rows,
            as_of,
            self.currency.clone(),
            Utc::now(),
        ))
    }

    /// Generates a balance sheet as of the given date.
    ///
    /// Only accounts whose category is affiliated with the balance sheet
    /// (Asset, Liability, Equity) participate.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::generate_trial_balance`].
    pub async fn generate_balance_sheet(
        &self,
        as_of: NaiveDate,
    ) -> Result<BalanceSheetReport, StatementError> {
        let mut classified = self.classify_active_accounts().await?;
        classified.retain(|c| c.affiliation == ReportAffiliation::BalanceSheet);

        let amounts = futures::future::try_join_all(
            classified
                .iter()
                .map(|c| self.balances.balance_as_of(c.account.id, as_of)),
        )
        .await?;
        let rows = into_rows(classified, amounts);

        debug!(accounts = rows.len(), %as_of, "assembling balance sheet");
        Ok(ReportAssembler::balance_sheet(
            rows,
            as_of,
            self.currency.clone(),
            Utc::now(),
        ))
    }

    /// Generates a profit & loss statement over the inclusive period.
    ///
    /// Only Revenue and Expense accounts participate; their **period
    /// activity** is fetched, not a point-in-time balance.
    ///
    /// # Errors
    ///
    /// Fails with [`StatementError::InvalidDateRange`] before any retrieval
    /// if `start > end`; otherwise the same failure modes as
    /// [`Self::generate_trial_balance`].
    pub async fn generate_profit_and_loss(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ProfitAndLossReport, StatementError> {
        // Validate the range before touching any collaborator.
        let period = ReportingPeriod::new(start, end)?;

        let mut classified = self.classify_active_accounts().await?;
        classified.retain(|c| c.affiliation == ReportAffiliation::ProfitAndLoss);

        let amounts = futures::future::try_join_all(
            classified
                .iter()
                .map(|c| self.balances.activity_in_period(c.account.id, period)),
        )
        .await?;
        let rows = into_rows(classified, amounts);

        debug!(accounts = rows.len(), ?period, "assembling profit & loss");
        Ok(ReportAssembler::profit_and_loss(
            rows,
            period,
            self.currency.clone(),
            Utc::now(),
        ))
    }

    /// Lists active accounts and classifies them against a freshly built
    /// classification map.
    ///
    /// Accounts with unmapped categories are skipped with a warning; if
    /// accounts exist but none are classifiable, the whole report fails.
    async fn classify_active_accounts(&self) -> Result<Vec<ClassifiedAccount>, StatementError> {
        let defs = self.account_types.list_account_types().await?;
        let map = ClassificationMap::build(&defs);
        let accounts = self.accounts.list_active_accounts().await?;

        let total = accounts.len();
        let mut classified = Vec::with_capacity(total);
        for account in accounts {
            match map.classify(&account) {
                Ok(class) => classified.push(ClassifiedAccount {
                    account,
                    nature: class.nature,
                    affiliation: class.affiliation,
                }),
                Err(err) => {
                    warn!(code = %account.code, "skipping account: {err}");
                }
            }
        }

        if classified.is_empty() && total > 0 {
            return Err(StatementError::NoClassifiableAccounts);
        }
        Ok(classified)
    }
}

/// Pairs classified accounts with their fetched amounts, preserving
/// account order.
fn into_rows(classified: Vec<ClassifiedAccount>, amounts: Vec<Decimal>) -> Vec<ResolvedBalance> {
    classified
        .into_iter()
        .zip(amounts)
        .map(|(c, amount)| ResolvedBalance {
            code: c.account.code,
            name: c.account.name,
            category: c.account.category,
            nature: c.nature,
            amount,
        })
        .collect()
}
