//! Account classification map.
//!
//! Maps each account category to its debit/credit nature and statement
//! affiliation. The map is rebuilt from the account-type directory for every
//! statement request and never cached across calls, so classification changes
//! between requests are always picked up.

use std::collections::HashMap;

use tracing::warn;

use crate::account::{Account, AccountCategory, AccountNature, AccountTypeDef, ReportAffiliation};

use super::error::StatementError;

/// Classification of one account category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryClass {
    /// Debit or credit nature.
    pub nature: AccountNature,
    /// Statement family the category feeds.
    pub affiliation: ReportAffiliation,
}

/// Lookup from account category to its classification.
///
/// Built fresh per request. If a category appears more than once, the
/// last-seen definition wins.
#[derive(Debug, Clone)]
pub struct ClassificationMap {
    entries: HashMap<AccountCategory, CategoryClass>,
}

impl ClassificationMap {
    /// Builds the map from the current set of account-type definitions.
    #[must_use]
    pub fn build(defs: &[AccountTypeDef]) -> Self {
        let mut entries = HashMap::with_capacity(defs.len());
        for def in defs {
            let class = CategoryClass {
                nature: AccountNature::from_debit_flag(def.is_debit_nature),
                affiliation: def.report_affiliation,
            };
            if let Some(previous) = entries.insert(def.category, class) {
                if previous != class {
                    warn!(
                        category = %def.category,
                        "conflicting account type definitions; last definition wins"
                    );
                }
            }
        }
        Self { entries }
    }

    /// Classifies an account against the map.
    ///
    /// # Errors
    ///
    /// Returns [`StatementError::UnmappedCategory`] if the account's category
    /// has no classification entry.
    pub fn classify(&self, account: &Account) -> Result<CategoryClass, StatementError> {
        self.entries
            .get(&account.category)
            .copied()
            .ok_or(StatementError::UnmappedCategory {
                account_id: account.id,
                category: account.category,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statera_shared::types::{AccountId, AccountTypeId};

    fn def(
        category: AccountCategory,
        is_debit_nature: bool,
        affiliation: ReportAffiliation,
    ) -> AccountTypeDef {
        AccountTypeDef {
            id: AccountTypeId::new(),
            category,
            is_debit_nature,
            report_affiliation: affiliation,
        }
    }

    fn account(category: AccountCategory) -> Account {
        Account {
            id: AccountId::new(),
            code: "1000".to_string(),
            name: "Test Account".to_string(),
            category,
            subcategory: None,
            is_active: true,
        }
    }

    fn standard_defs() -> Vec<AccountTypeDef> {
        vec![
            def(AccountCategory::Asset, true, ReportAffiliation::BalanceSheet),
            def(AccountCategory::Liability, false, ReportAffiliation::BalanceSheet),
            def(AccountCategory::Equity, false, ReportAffiliation::BalanceSheet),
            def(AccountCategory::Revenue, false, ReportAffiliation::ProfitAndLoss),
            def(AccountCategory::Expense, true, ReportAffiliation::ProfitAndLoss),
        ]
    }

    #[test]
    fn test_classify_standard_chart() {
        let map = ClassificationMap::build(&standard_defs());

        let asset = map.classify(&account(AccountCategory::Asset)).unwrap();
        assert_eq!(asset.nature, AccountNature::Debit);
        assert_eq!(asset.affiliation, ReportAffiliation::BalanceSheet);

        let expense = map.classify(&account(AccountCategory::Expense)).unwrap();
        assert_eq!(expense.nature, AccountNature::Debit);
        assert_eq!(expense.affiliation, ReportAffiliation::ProfitAndLoss);

        for category in [
            AccountCategory::Liability,
            AccountCategory::Equity,
            AccountCategory::Revenue,
        ] {
            let class = map.classify(&account(category)).unwrap();
            assert_eq!(class.nature, AccountNature::Credit);
        }
    }

    #[test]
    fn test_classify_unmapped_category_errors() {
        let map = ClassificationMap::build(&[def(
            AccountCategory::Asset,
            true,
            ReportAffiliation::BalanceSheet,
        )]);
        let revenue = account(AccountCategory::Revenue);

        let err = map.classify(&revenue).unwrap_err();
        assert_eq!(err.error_code(), "UNMAPPED_CATEGORY");
        match err {
            StatementError::UnmappedCategory {
                account_id,
                category,
            } => {
                assert_eq!(account_id, revenue.id);
                assert_eq!(category, AccountCategory::Revenue);
            }
            other => panic!("expected unmapped category error, got {other:?}"),
        }
    }

    #[test]
    fn test_conflicting_definitions_last_wins() {
        let map = ClassificationMap::build(&[
            def(AccountCategory::Asset, true, ReportAffiliation::BalanceSheet),
            def(AccountCategory::Asset, false, ReportAffiliation::BalanceSheet),
        ]);

        let class = map.classify(&account(AccountCategory::Asset)).unwrap();
        assert_eq!(class.nature, AccountNature::Credit);
    }

    #[test]
    fn test_empty_definitions_classify_nothing() {
        let map = ClassificationMap::build(&[]);
        assert!(map.classify(&account(AccountCategory::Asset)).is_err());
    }
}
