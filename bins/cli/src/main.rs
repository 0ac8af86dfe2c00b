//! Statera statement CLI.
//!
//! Loads a JSON ledger fixture, generates the three financial statements,
//! and prints them as JSON. Intended for local development and demos; the
//! fixture stands in for the external account directory and ledger service.
//!
//! Usage: statera <FIXTURE> <AS_OF> [START END]
//!
//! `AS_OF` drives the trial balance and balance sheet; the profit & loss
//! period defaults to January 1st of the as-of year through the as-of date.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statera_core::account::{Account, AccountCategory, AccountTypeDef, ReportAffiliation};
use statera_core::statements::{
    AccountDirectory, AccountTypeDirectory, BalanceSource, ReportingPeriod, StatementError,
    StatementService,
};
use statera_shared::types::{AccountId, AccountTypeId};
use statera_shared::AppConfig;

/// Account-type row in the fixture file.
#[derive(Debug, Deserialize)]
struct FixtureAccountType {
    category: AccountCategory,
    is_debit_nature: bool,
    report_affiliation: ReportAffiliation,
}

/// Account row in the fixture file.
#[derive(Debug, Deserialize)]
struct FixtureAccount {
    code: String,
    name: String,
    category: AccountCategory,
    #[serde(default)]
    subcategory: Option<String>,
    #[serde(default = "default_true")]
    is_active: bool,
}

fn default_true() -> bool {
    true
}

/// A posted ledger amount in the fixture file, in ledger convention
/// (debits positive, credits negative).
#[derive(Debug, Deserialize)]
struct FixtureEntry {
    account: String,
    date: NaiveDate,
    amount: Decimal,
}

/// Ledger fixture file shape.
#[derive(Debug, Deserialize)]
struct Fixture {
    account_types: Vec<FixtureAccountType>,
    accounts: Vec<FixtureAccount>,
    entries: Vec<FixtureEntry>,
}

/// In-memory ledger backing all three collaborator traits.
struct FixtureLedger {
    accounts: Vec<Account>,
    account_types: Vec<AccountTypeDef>,
    /// Dated signed amounts per account.
    entries: HashMap<AccountId, Vec<(NaiveDate, Decimal)>>,
}

impl FixtureLedger {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse fixture {}", path.display()))
    }

    fn parse(raw: &str) -> anyhow::Result<Self> {
        let fixture: Fixture = serde_json::from_str(raw)?;

        let accounts: Vec<Account> = fixture
            .accounts
            .into_iter()
            .map(|a| Account {
                id: AccountId::new(),
                code: a.code,
                name: a.name,
                category: a.category,
                subcategory: a.subcategory,
                is_active: a.is_active,
            })
            .collect();

        let by_code: HashMap<&str, AccountId> =
            accounts.iter().map(|a| (a.code.as_str(), a.id)).collect();

        let mut entries: HashMap<AccountId, Vec<(NaiveDate, Decimal)>> = HashMap::new();
        for entry in fixture.entries {
            let Some(&id) = by_code.get(entry.account.as_str()) else {
                bail!("fixture entry references unknown account code '{}'", entry.account);
            };
            entries.entry(id).or_default().push((entry.date, entry.amount));
        }

        let account_types = fixture
            .account_types
            .into_iter()
            .map(|t| AccountTypeDef {
                id: AccountTypeId::new(),
                category: t.category,
                is_debit_nature: t.is_debit_nature,
                report_affiliation: t.report_affiliation,
            })
            .collect();

        Ok(Self {
            accounts,
            account_types,
            entries,
        })
    }

    fn sum_entries<F>(&self, account_id: AccountId, include: F) -> Decimal
    where
        F: Fn(NaiveDate) -> bool,
    {
        self.entries
            .get(&account_id)
            .map(|dated| {
                dated
                    .iter()
                    .filter(|(date, _)| include(*date))
                    .map(|(_, amount)| *amount)
                    .sum()
            })
            .unwrap_or(Decimal::ZERO)
    }
}

impl AccountDirectory for FixtureLedger {
    async fn list_active_accounts(&self) -> Result<Vec<Account>, StatementError> {
        Ok(self.accounts.iter().filter(|a| a.is_active).cloned().collect())
    }
}

impl AccountTypeDirectory for FixtureLedger {
    async fn list_account_types(&self) -> Result<Vec<AccountTypeDef>, StatementError> {
        Ok(self.account_types.clone())
    }
}

impl BalanceSource for FixtureLedger {
    async fn balance_as_of(
        &self,
        account_id: AccountId,
        as_of: NaiveDate,
    ) -> Result<Decimal, StatementError> {
        Ok(self.sum_entries(account_id, |date| date <= as_of))
    }

    async fn activity_in_period(
        &self,
        account_id: AccountId,
        period: ReportingPeriod,
    ) -> Result<Decimal, StatementError> {
        Ok(self.sum_entries(account_id, |date| period.contains(date)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statera=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let args: Vec<String> = std::env::args().collect();
    let (fixture_path, as_of, start, end) = parse_args(&args)?;

    let ledger = Arc::new(FixtureLedger::load(Path::new(&fixture_path))?);
    info!(
        accounts = ledger.accounts.len(),
        currency = %config.reporting.currency,
        "fixture loaded"
    );

    let service = StatementService::new(
        Arc::clone(&ledger),
        Arc::clone(&ledger),
        ledger,
        config.reporting.currency,
    );

    let trial_balance = service.generate_trial_balance(as_of).await?;
    let balance_sheet = service.generate_balance_sheet(as_of).await?;
    let profit_and_loss = service.generate_profit_and_loss(start, end).await?;

    let output = serde_json::json!({
        "trial_balance": trial_balance,
        "balance_sheet": balance_sheet,
        "profit_and_loss": profit_and_loss,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Parses `<FIXTURE> <AS_OF> [START END]` from the command line.
fn parse_args(args: &[String]) -> anyhow::Result<(String, NaiveDate, NaiveDate, NaiveDate)> {
    let (fixture, as_of_raw) = match (args.get(1), args.get(2)) {
        (Some(fixture), Some(as_of)) => (fixture.clone(), as_of),
        _ => bail!("usage: statera <FIXTURE> <AS_OF> [START END]"),
    };
    let as_of: NaiveDate = as_of_raw.parse().context("invalid AS_OF date")?;

    let (start, end) = match (args.get(3), args.get(4)) {
        (Some(start), Some(end)) => (
            start.parse().context("invalid START date")?,
            end.parse().context("invalid END date")?,
        ),
        (None, None) => {
            let year_start = NaiveDate::from_ymd_opt(as_of.year(), 1, 1)
                .context("invalid as-of year")?;
            (year_start, as_of)
        }
        _ => bail!("START and END must be given together"),
    };

    Ok((fixture, as_of, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("statera")
            .chain(parts.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_defaults_period_to_year_start() {
        let (fixture, as_of, start, end) =
            parse_args(&args(&["ledger.json", "2023-12-31"])).unwrap();
        assert_eq!(fixture, "ledger.json");
        assert_eq!(as_of, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(end, as_of);
    }

    #[test]
    fn test_parse_args_explicit_period() {
        let (_, _, start, end) = parse_args(&args(&[
            "ledger.json",
            "2023-12-31",
            "2023-06-01",
            "2023-06-30",
        ]))
        .unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
    }

    #[test]
    fn test_parse_args_rejects_missing_arguments() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["ledger.json"])).is_err());
        assert!(parse_args(&args(&["ledger.json", "2023-12-31", "2023-01-01"])).is_err());
    }

    #[test]
    fn test_fixture_ledger_balance_and_activity() {
        let fixture = r#"{
            "account_types": [
                {"category": "asset", "is_debit_nature": true, "report_affiliation": "balance_sheet"}
            ],
            "accounts": [
                {"code": "1000", "name": "Cash", "category": "asset"}
            ],
            "entries": [
                {"account": "1000", "date": "2023-01-10", "amount": "100"},
                {"account": "1000", "date": "2023-02-10", "amount": "-30"},
                {"account": "1000", "date": "2023-03-10", "amount": "50"}
            ]
        }"#;
        let ledger = FixtureLedger::parse(fixture).unwrap();

        let id = ledger.accounts[0].id;
        let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let feb = ReportingPeriod::new(
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(),
        )
        .unwrap();

        // As-of sums everything up to the date; activity only the window.
        assert_eq!(ledger.sum_entries(id, |d| d <= jan31), Decimal::from(100));
        assert_eq!(ledger.sum_entries(id, |d| feb.contains(d)), Decimal::from(-30));
    }
}
