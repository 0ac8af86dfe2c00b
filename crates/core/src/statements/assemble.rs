//! Report assembly.
//!
//! Pure constructors that turn resolved account balances into the three
//! statement shapes. Each applies its own normalization policy, buckets items
//! into sections, quantizes totals, and attaches title, dates, and the
//! generation timestamp. No I/O happens here; the service layer feeds in
//! already-retrieved balances.

use chrono::{DateTime, NaiveDate, Utc};

use crate::account::AccountCategory;

use super::aggregate::{build_section, quantize};
use super::normalize::{
    balance_sheet_amount, profit_and_loss_amount, trial_balance_column, TrialBalanceColumn,
};
use super::types::{
    BalanceSheetReport, LineItem, ProfitAndLossReport, ReportingPeriod, ResolvedBalance,
    TrialBalanceReport,
};

/// Assembles statement reports from resolved balances.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Assembles a trial balance report.
    ///
    /// Routes each balance into the debit or credit column by sign, drops
    /// zero balances, and checks that the quantized column totals agree.
    #[must_use]
    pub fn trial_balance(
        rows: Vec<ResolvedBalance>,
        as_of: NaiveDate,
        currency: String,
        generated_at: DateTime<Utc>,
    ) -> TrialBalanceReport {
        let mut debit_items = Vec::new();
        let mut credit_items = Vec::new();

        for row in rows {
            if let Some((column, amount)) = trial_balance_column(row.amount) {
                let item = LineItem {
                    code: row.code,
                    name: row.name,
                    amount,
                };
                match column {
                    TrialBalanceColumn::Debit => debit_items.push(item),
                    TrialBalanceColumn::Credit => credit_items.push(item),
                }
            }
        }

        let debit = build_section(debit_items);
        let credit = build_section(credit_items);
        let (total_debits, total_credits) = (debit.total, credit.total);

        TrialBalanceReport {
            title: "Trial Balance".to_string(),
            as_of,
            currency,
            debit_items: debit.items,
            credit_items: credit.items,
            total_debits,
            total_credits,
            is_balanced: total_debits == total_credits,
            generated_at,
        }
    }

    /// Assembles a balance sheet report.
    ///
    /// Only Asset, Liability, and Equity rows participate; anything else is
    /// ignored. The accounting identity assets = liabilities + equity is
    /// checked exactly after quantization and never silently corrected.
    #[must_use]
    pub fn balance_sheet(
        rows: Vec<ResolvedBalance>,
        as_of: NaiveDate,
        currency: String,
        generated_at: DateTime<Utc>,
    ) -> BalanceSheetReport {
        let mut asset_items = Vec::new();
        let mut liability_items = Vec::new();
        let mut equity_items = Vec::new();

        for row in rows {
            let amount = balance_sheet_amount(row.nature, row.amount);
            let item = LineItem {
                code: row.code,
                name: row.name,
                amount,
            };
            match row.category {
                AccountCategory::Asset => asset_items.push(item),
                AccountCategory::Liability => liability_items.push(item),
                AccountCategory::Equity => equity_items.push(item),
                AccountCategory::Revenue | AccountCategory::Expense => {}
            }
        }

        let assets = build_section(asset_items);
        let liabilities = build_section(liability_items);
        let equity = build_section(equity_items);
        let total_liabilities_equity = quantize(liabilities.total + equity.total);
        let is_balanced = assets.total == total_liabilities_equity;

        BalanceSheetReport {
            title: "Balance Sheet".to_string(),
            as_of,
            currency,
            assets,
            liabilities,
            equity,
            total_liabilities_equity,
            is_balanced,
            generated_at,
        }
    }

    /// Assembles a profit & loss report from period activity.
    ///
    /// Only Revenue and Expense rows participate. Net profit may be negative;
    /// a net loss is a valid outcome, not an error.
    #[must_use]
    pub fn profit_and_loss(
        rows: Vec<ResolvedBalance>,
        period: ReportingPeriod,
        currency: String,
        generated_at: DateTime<Utc>,
    ) -> ProfitAndLossReport {
        let mut revenue_items = Vec::new();
        let mut expense_items = Vec::new();

        for row in rows {
            let amount = profit_and_loss_amount(row.nature, row.amount);
            let item = LineItem {
                code: row.code,
                name: row.name,
                amount,
            };
            match row.category {
                AccountCategory::Revenue => revenue_items.push(item),
                AccountCategory::Expense => expense_items.push(item),
                AccountCategory::Asset | AccountCategory::Liability | AccountCategory::Equity => {}
            }
        }

        let revenue = build_section(revenue_items);
        let expenses = build_section(expense_items);
        let net_profit = quantize(revenue.total - expenses.total);

        ProfitAndLossReport {
            title: "Profit & Loss Statement".to_string(),
            period,
            currency,
            revenue,
            expenses,
            net_profit,
            generated_at,
        }
    }
}
