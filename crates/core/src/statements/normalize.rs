//! Sign normalization policies.
//!
//! Ledger convention stores debits positive and credits negative, so a
//! credit-nature account with a normal balance arrives as a negative number.
//! Each statement normalizes differently, and the three policies are kept
//! separate so each statement's edge cases stay independently testable:
//!
//! - Trial balance routes by sign into a debit or credit column.
//! - Balance sheet negates credit-nature balances.
//! - Profit & loss negates revenue activity.

use rust_decimal::Decimal;

use crate::account::AccountNature;

/// Trial balance column assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialBalanceColumn {
    /// Debit column.
    Debit,
    /// Credit column.
    Credit,
}

/// Routes a signed ledger balance into a trial balance column.
///
/// Positive balances route to the debit column, negative to the credit
/// column, always as the absolute value. Under ledger convention this puts a
/// normal balance in the account's natural column (positive debit-nature in
/// debit, negative credit-nature in credit) and an abnormal balance in the
/// opposite one. Zero balances appear in neither column.
#[must_use]
pub fn trial_balance_column(balance: Decimal) -> Option<(TrialBalanceColumn, Decimal)> {
    if balance.is_zero() {
        return None;
    }
    let column = if balance.is_sign_positive() {
        TrialBalanceColumn::Debit
    } else {
        TrialBalanceColumn::Credit
    };
    Some((column, balance.abs()))
}

/// Balance sheet presentation amount.
///
/// Debit-nature (Asset) balances pass through; credit-nature (Liability,
/// Equity) balances are negated so a normal balance presents positive on
/// both sides of the statement.
#[must_use]
pub fn balance_sheet_amount(nature: AccountNature, balance: Decimal) -> Decimal {
    match nature {
        AccountNature::Debit => balance,
        AccountNature::Credit => -balance,
    }
}

/// Profit & loss presentation amount for period activity.
///
/// Revenue (credit-nature, stored negative) is negated to display positive;
/// Expense (debit-nature) activity passes through.
#[must_use]
pub fn profit_and_loss_amount(nature: AccountNature, activity: Decimal) -> Decimal {
    match nature {
        AccountNature::Debit => activity,
        AccountNature::Credit => -activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    // Normal balances land in their natural column
    #[case(dec!(1000), TrialBalanceColumn::Debit, dec!(1000))]
    #[case(dec!(-1500), TrialBalanceColumn::Credit, dec!(1500))]
    // Abnormal balances route to the opposite column
    #[case(dec!(-250), TrialBalanceColumn::Credit, dec!(250))]
    #[case(dec!(300), TrialBalanceColumn::Debit, dec!(300))]
    fn test_trial_balance_routing(
        #[case] balance: Decimal,
        #[case] expected_column: TrialBalanceColumn,
        #[case] expected_amount: Decimal,
    ) {
        let (column, amount) = trial_balance_column(balance).unwrap();
        assert_eq!(column, expected_column);
        assert_eq!(amount, expected_amount);
    }

    #[test]
    fn test_trial_balance_zero_excluded() {
        assert!(trial_balance_column(Decimal::ZERO).is_none());
    }

    #[test]
    fn test_balance_sheet_normal_balances_present_positive() {
        // Asset with ledger balance 1000 stays 1000
        assert_eq!(
            balance_sheet_amount(AccountNature::Debit, dec!(1000)),
            dec!(1000)
        );
        // Liability with ledger balance -1500 presents as 1500
        assert_eq!(
            balance_sheet_amount(AccountNature::Credit, dec!(-1500)),
            dec!(1500)
        );
    }

    #[test]
    fn test_balance_sheet_abnormal_balance_presents_negative() {
        // Overdrawn asset (credit balance) shows negative
        assert_eq!(
            balance_sheet_amount(AccountNature::Debit, dec!(-200)),
            dec!(-200)
        );
        // Debit-balance liability shows negative
        assert_eq!(
            balance_sheet_amount(AccountNature::Credit, dec!(200)),
            dec!(-200)
        );
    }

    #[test]
    fn test_profit_and_loss_presentation() {
        // Revenue activity -2000 displays as 2000
        assert_eq!(
            profit_and_loss_amount(AccountNature::Credit, dec!(-2000)),
            dec!(2000)
        );
        // Expense activity 1000 displays as 1000
        assert_eq!(
            profit_and_loss_amount(AccountNature::Debit, dec!(1000)),
            dec!(1000)
        );
        // Contra activity displays negative
        assert_eq!(
            profit_and_loss_amount(AccountNature::Credit, dec!(500)),
            dec!(-500)
        );
    }
}
